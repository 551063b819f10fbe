use thiserror::Error;

/// A date string that is not an exact `YYYY-MM-DD` calendar date.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseDateError{
    #[error("{0:?} is not a date in YYYY-MM-DD form")]
    Format(String),

    #[error("{0:?} is not a valid calendar date")]
    OutOfRange(String),
}

#[derive(Debug, Error)]
pub enum FetchError{
    /// The request never produced a response, or the body could not be read.
    #[error("bank holiday request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("bank holiday endpoint answered with status {0}")]
    UnexpectedStatus(u16),

    /// The body was not JSON of the expected shape, or held a malformed date.
    #[error("could not parse bank holiday payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not start a runtime for the blocking fetch: {0}")]
    Runtime(#[source] std::io::Error),
}
