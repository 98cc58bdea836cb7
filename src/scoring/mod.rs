// Scoring: per-sender statistics, the combined risk score, and its label.

pub mod label;
pub mod risk;
pub mod stats;
