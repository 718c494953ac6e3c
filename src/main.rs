//! Domain Appraiser - score and value domain names from the command line
//!
//! Prints a readable appraisal per domain, or one JSON report per line with
//! `--json`. Domains come from the arguments and/or `--file` lists.

use domain_appraiser::{
    appraise_with_trend_window, AppraiserError, DomainReport, TrendConfig, TrendEnrichment,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Batches at least this large get a progress bar
const PROGRESS_MIN_DOMAINS: usize = 10;

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    json: bool,
    trends: bool,
    files: Vec<PathBuf>,
    domains: Vec<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Appraise(CliArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the library
    if let Err(e) = domain_appraiser::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Use --help for usage information");
            process::exit(2);
        }
    };

    match command {
        Command::Help => print_help(),
        Command::Version => println!("domain-appraiser {}", domain_appraiser::VERSION),
        Command::Appraise(cli) => {
            if let Err(e) = run(cli).await {
                eprintln!("{}", e.user_message());
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--json" => cli.json = true,
            "--trends" => cli.trends = true,
            "-f" | "--file" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--file needs a path"))?;
                cli.files.push(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => anyhow::bail!("Unknown option: {}", flag),
            domain => cli.domains.push(domain.to_string()),
        }
    }

    if cli.domains.is_empty() && cli.files.is_empty() {
        anyhow::bail!("No domains given");
    }
    Ok(Command::Appraise(cli))
}

/// Read a domain list: one per line, blank lines and `#` comments skipped
fn read_domain_file(path: &PathBuf) -> domain_appraiser::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppraiserError::io(e.to_string(), Some(path.display().to_string())))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

async fn run(cli: CliArgs) -> domain_appraiser::Result<()> {
    let mut domains = cli.domains.clone();
    for path in &cli.files {
        domains.extend(read_domain_file(path)?);
    }
    if domains.is_empty() {
        return Err(AppraiserError::io("no domains found in input files", None));
    }

    let (config, enrichment) = if cli.trends {
        let config = TrendConfig::from_env()?;
        let enrichment = load_trends(&config).await?;
        (config, enrichment)
    } else {
        (TrendConfig::default(), None)
    };

    let start = Instant::now();
    let progress = if domains.len() >= PROGRESS_MIN_DOMAINS {
        let bar = ProgressBar::new(domains.len() as u64);
        let style = ProgressStyle::with_template("🔎 [{bar:30}] {pos}/{len} {msg}")
            .map(|s| s.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut reports = Vec::with_capacity(domains.len());
    for domain in &domains {
        progress.set_message(domain.clone());
        reports.push(appraise_with_trend_window(
            domain,
            enrichment.as_deref(),
            config.stale_after,
        ));
        progress.inc(1);
    }
    progress.finish_and_clear();

    if cli.json {
        for report in &reports {
            let line = serde_json::to_string(report).map_err(|e| {
                AppraiserError::internal(format!("cannot serialize report for {}: {e}", report.domain))
            })?;
            println!("{line}");
        }
        return Ok(());
    }

    println!("💎 Domain Appraiser");
    println!("═══════════════════");
    println!();
    for report in &reports {
        display_report(report);
    }

    if reports.len() > 1 {
        display_summary(&reports, start.elapsed().as_secs_f32());
    }

    Ok(())
}

/// Fetch the trend snapshot once; fetch failures only downgrade to heuristics
async fn load_trends(config: &TrendConfig) -> domain_appraiser::Result<Option<Arc<TrendEnrichment>>> {
    #[cfg(feature = "http")]
    {
        use domain_appraiser::{HttpTrendSource, TrendService};

        if !config.is_remote_enabled() {
            eprintln!("⚠️  --trends needs DOMAIN_TREND_URL; using built-in heuristics only");
            return Ok(None);
        }

        let source = HttpTrendSource::from_config(config)?;
        let service = TrendService::new(source, config);
        let snapshot = service.fetch_trend_enrichment().await;
        if snapshot.is_none() {
            eprintln!("⚠️  No trend snapshot available; using built-in heuristics only");
        }
        Ok(snapshot)
    }

    #[cfg(not(feature = "http"))]
    {
        let _ = config;
        eprintln!("⚠️  Built without the `http` feature; trend enrichment unavailable");
        Ok(None)
    }
}

fn display_report(report: &DomainReport) {
    let brand = &report.brandability;
    let pronounce = &report.pronounceability;
    let demand = &report.keyword_demand;
    let value = &report.valuation;

    println!("🔎 {}", report.domain);
    println!("   💰 Value:            {} (score {}/100)", value.band, value.score);
    println!("   🏷️  Brandability:     {}/100 ({})", brand.overall, brand.grade);
    println!("   🗣️  Pronounceability: {}/100 ({})", pronounce.score, pronounce.grade);
    println!("   📊 Demand:           {}/100 ({}) {}", demand.score, demand.grade, demand.label);

    if !demand.niche.is_general() {
        println!(
            "   🧭 Niche:            {} ({} confidence)",
            demand.niche.label, demand.niche.confidence
        );
    }
    if !demand.trending_keywords.is_empty() {
        println!("   🔥 Trending:         {}", demand.trending_keywords.join(", "));
    }
    if report.trend_boost.boost != 0 {
        println!("   🌡️  Trend boost:      {:+}", report.trend_boost.boost);
    }

    match &report.trademark.matched_brand {
        Some(brand_name) => println!(
            "   ⚖️  Trademark:        {} (resembles '{}')",
            report.trademark.risk_level, brand_name
        ),
        None => println!("   ⚖️  Trademark:        {}", report.trademark.risk_level),
    }
    if let Some(offensive) = &brand.offensive {
        println!("   ⚠️  Offensive:        {}", offensive.words.join(", "));
    }
    println!("   💬 {}", brand.summary);
    println!();
}

fn display_summary(reports: &[DomainReport], elapsed_secs: f32) {
    println!("📈 Summary:");
    println!("   📊 Total appraised: {}", reports.len());
    if let Some(best) = reports.iter().max_by_key(|r| r.valuation.score) {
        println!("   🏆 Top value: {} ({})", best.domain, best.valuation.band);
    }
    if let Some(best) = reports.iter().max_by_key(|r| r.brandability.overall) {
        println!("   🏷️  Most brandable: {} ({}/100)", best.domain, best.brandability.overall);
    }
    println!("   ⏱️  Total time: {:.2}s", elapsed_secs);
}

/// Print help information
fn print_help() {
    println!("💎 Domain Appraiser - domain scoring and valuation");
    println!("══════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-appraiser [OPTIONS] <DOMAIN>...");
    println!();
    println!("OPTIONS:");
    println!("    --json            One JSON report per line");
    println!("    --trends          Blend in the latest trend snapshot");
    println!("    -f, --file PATH   Read domains from a file (one per line)");
    println!("    -h, --help        Show this help");
    println!("    -V, --version     Show version");
    println!();
    println!("EXAMPLES:");
    println!("    domain-appraiser crypto.ai");
    println!("    domain-appraiser --json cloudpower.com navigate.io");
    println!("    domain-appraiser --trends --file watchlist.txt");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    DOMAIN_TREND_URL             Trend snapshot endpoint");
    println!("    DOMAIN_TREND_API_KEY         Bearer token for the endpoint");
    println!("    DOMAIN_TREND_CACHE_TTL_SECS  Snapshot cache lifetime (default: 600)");
    println!("    DOMAIN_TREND_STALE_HOURS     Snapshot age treated as stale (default: 24)");
    println!("    DOMAIN_TREND_TIMEOUT_SECS    Request timeout (default: 10)");
    println!("    RUST_LOG                     Log filter (default: warn)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_domains_and_flags() {
        let command = parse_args(&args(&["--json", "crypto.ai", "-f", "list.txt", "cloud.com"])).unwrap();
        assert_eq!(
            command,
            Command::Appraise(CliArgs {
                json: true,
                trends: false,
                files: vec![PathBuf::from("list.txt")],
                domains: vec!["crypto.ai".to_string(), "cloud.com".to_string()],
            })
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["x.com", "-V"])).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--bogus", "x.com"])).is_err());
        assert!(parse_args(&args(&["--file"])).is_err());
    }
}
