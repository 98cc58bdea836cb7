// Whatsafe: heuristic boycott-risk detection for exported group chats
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline; `pipeline::analysis` ties them together.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod signals;
pub mod target;
pub mod transcript;

pub use pipeline::analysis::{analyze, analyze_from_path, AnalysisResult, Analyzer};
