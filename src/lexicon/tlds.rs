//! TLD premium table.
//!
//! Two columns per TLD: points toward the keyword demand score and points toward
//! the quick valuation (capped at 25 there).

/// Demand and valuation weight of a top-level domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TldProfile {
    pub tld: &'static str,
    pub demand_points: i32,
    pub value_points: u32,
}

pub const TLD_TABLE: &[TldProfile] = &[
    TldProfile { tld: "com", demand_points: 15, value_points: 25 },
    TldProfile { tld: "ai", demand_points: 16, value_points: 22 },
    TldProfile { tld: "io", demand_points: 10, value_points: 18 },
    TldProfile { tld: "co", demand_points: 7, value_points: 15 },
    TldProfile { tld: "app", demand_points: 7, value_points: 12 },
    TldProfile { tld: "dev", demand_points: 7, value_points: 11 },
    TldProfile { tld: "net", demand_points: 5, value_points: 12 },
    TldProfile { tld: "org", demand_points: 5, value_points: 12 },
    TldProfile { tld: "tech", demand_points: 4, value_points: 8 },
    TldProfile { tld: "me", demand_points: 3, value_points: 7 },
    TldProfile { tld: "us", demand_points: 3, value_points: 7 },
    TldProfile { tld: "xyz", demand_points: 2, value_points: 5 },
    TldProfile { tld: "info", demand_points: 2, value_points: 4 },
    TldProfile { tld: "biz", demand_points: 2, value_points: 4 },
];

/// Profile used for TLDs absent from the table.
pub const OBSCURE_TLD: TldProfile = TldProfile {
    tld: "",
    demand_points: 2,
    value_points: 3,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_points_capped() {
        assert!(TLD_TABLE.iter().all(|t| t.value_points <= 25));
    }

    #[test]
    fn test_com_and_ai_lead() {
        let com = TLD_TABLE.iter().find(|t| t.tld == "com").map(|t| t.demand_points);
        let ai = TLD_TABLE.iter().find(|t| t.tld == "ai").map(|t| t.demand_points);
        assert!(com >= Some(10));
        assert!(ai >= Some(13));
    }
}
