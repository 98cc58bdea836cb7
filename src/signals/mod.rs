// Lexical signals: fixed vocabulary of exclusion-indicative phrases.

pub mod vocabulary;
