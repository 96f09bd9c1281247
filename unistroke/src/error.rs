use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StrokeError {
    // A stroke must carry at least one point; rejected before any math runs.
    #[error("stroke has no points")]
    EmptyStroke,
    #[error("unknown dictionary name: {0}")]
    UnknownDictionary(String),
    #[error("bad template row at line {line}: {reason}")]
    BadTemplateRow { line: usize, reason: String },
}
