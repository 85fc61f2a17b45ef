use crate::status::Status;
use crate::transport::TransportError;

/// Boxed cause of a [`Error::Mapping`] failure.
pub type MappingSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service answered with a status other than OK or NOT_FOUND.
    #[error("{message} ({status})")]
    Api { status: Status, message: String },

    /// The service answered OK but the body does not fit the expected schema.
    #[error("response body is not a valid {expected}: {source}")]
    Mapping {
        expected: &'static str,
        #[source]
        source: MappingSource,
    },

    #[error("{operation} requires an API key")]
    MissingApiKey { operation: &'static str },

    /// A name that would not survive as a single URL path segment: empty,
    /// `.` or `..` are collapsed by URL normalization and change the endpoint.
    #[error("{operation} was given an invalid name '{name}'")]
    InvalidPathSegment { operation: &'static str, name: String },

    #[error("invalid proxy '{proxy}': {source}")]
    InvalidProxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' cannot be used as a base URL")]
    InvalidBaseUrl { url: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },
}

impl Error {
    pub fn api(status: Status, message: impl Into<String>) -> Self {
        Error::Api { status, message: message.into() }
    }

    pub fn mapping(expected: &'static str, source: impl Into<MappingSource>) -> Self {
        Error::Mapping { expected, source: source.into() }
    }

    /// The classified status behind this error, when there is one. Transport
    /// failures never produced a status and report [`Status::Unknown`].
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport { .. } => Some(Status::Unknown),
            _ => None,
        }
    }

    /// True when the failure comes from client configuration rather than
    /// from talking to the service.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingApiKey { .. }
                | Error::InvalidProxy { .. }
                | Error::InvalidBaseUrl { .. }
                | Error::HttpClient(_)
        )
    }
}
