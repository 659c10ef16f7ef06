use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefectError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Species symbol for '{field}' cannot be empty")]
    EmptySymbol { field: &'static str },

    #[error("Site element '{symbol}' not found in the structure")]
    UnknownSite { symbol: String },

    #[error("No '{symbol}' atoms remain in the structure")]
    EmptySite { symbol: String },
}
