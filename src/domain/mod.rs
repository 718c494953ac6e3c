//! Domain name parsing

pub mod name;

pub use name::DomainName;
