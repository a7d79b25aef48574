use thiserror::Error;

/// Errors that stop a scrape from producing any recipe at all
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network failure while fetching the page or reading its body
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page responded with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Anything else that went wrong at the extraction boundary
    #[error("Recipe extraction failed: {0}")]
    ExtractionFailed(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The completion provider could not be constructed
    #[error("Completion provider error: {0}")]
    Completion(#[from] CompletionError),
}

impl ScrapeError {
    /// True for failures that happened while retrieving the page.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            ScrapeError::FetchError(_) | ScrapeError::HttpStatus { .. }
        )
    }
}

/// Errors returned by a [`CompletionProvider`](crate::completion::CompletionProvider)
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Transport failure talking to the completion service
    #[error("Completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with an error status
    #[error("Completion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not contain generated text where expected
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// No API key in config or environment
    #[error("{0} not found in config or environment")]
    MissingApiKey(String),

    #[error("Unknown completion provider: {0}")]
    UnknownProvider(String),
}
