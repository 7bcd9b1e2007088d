use thiserror::Error;

/// Failure talking to the log backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. `detail` comes from the backend body when it has one.
    #[error("{detail} (HTTP {status})")]
    Application { status: u16, detail: String },
    /// A 2xx response whose body is not what we expected.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Client-side validation failures. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please select a date for this log.")]
    MissingDate,
    #[error("\"{0}\" is not a valid date. Use YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("Still loading the entry for {0}, try again in a moment.")]
    StillLoading(String),
    #[error("Please select both a start and end date.")]
    MissingRange,
    #[error("Start date {start} must not be after end date {end}.")]
    InvalidRange { start: String, end: String },
    #[error("Backend URL \"{0}\" must start with http:// or https://")]
    InvalidApiUrl(String),
    #[error("Name must not be empty.")]
    MissingAuthor,
}
