//! Technology analysis: freshness of the detected stack, and which gym
//! software the business runs.

pub mod age;
pub mod signal;
pub mod software;

pub use age::{analyze_technology_age, FlagSeverity, OutdatedTechnology, TechnologyReport};
pub use signal::{parse_signals, parse_timestamp, TechnologySignal, UNKNOWN_CATEGORY};
pub use software::{analyze_software, detect_software, SoftwareAnalysis};
