use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("entity '{0}' has no primary column; resolver operation {1} needs one")]
    MissingPrimaryKey(String, String),
    #[error("input for entity '{0}' requested with neither create nor update variant")]
    NoInputVariant(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: '{found}' closes nothing")]
    UnexpectedClose { line: usize, found: char },
    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },
    #[error("{depth} unclosed bracket(s) at end of input")]
    Unclosed { depth: usize },
}
