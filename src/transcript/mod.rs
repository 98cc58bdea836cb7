// Transcript ingestion: turning exported chat text into structured messages.

pub mod message;
pub mod parser;
