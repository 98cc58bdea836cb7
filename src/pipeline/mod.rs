// Analysis pipeline: parse, aggregate, score, classify, infer target.

pub mod analysis;
