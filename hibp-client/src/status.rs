use std::fmt;

/// Semantic classification of an HTTP status code returned by the HIBP API.
///
/// `NotFound` is a valid answer ("no results"), not a failure. Mappers turn it
/// into the empty value of their result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// 2xx, the body carries data.
    Ok,
    /// 400, typically a malformed account name.
    BadRequest,
    /// 401, missing or invalid API key.
    Unauthorized,
    /// 403, no user agent or the key is not permitted.
    Forbidden,
    /// 404, nothing found for the query.
    NotFound,
    /// 429, rate limit exceeded.
    RateLimited,
    /// 5xx.
    ServerError,
    /// Anything the service does not document.
    Unknown,
}

impl Status {
    /// Classifies a raw status code. Total over `u16`; unrecognized codes
    /// map to [`Status::Unknown`].
    pub fn of(code: u16) -> Self {
        match code {
            200..=299 => Status::Ok,
            400 => Status::BadRequest,
            401 => Status::Unauthorized,
            403 => Status::Forbidden,
            404 => Status::NotFound,
            429 => Status::RateLimited,
            500..=599 => Status::ServerError,
            _ => Status::Unknown,
        }
    }

    /// True for every classification other than `Ok` and `NotFound`.
    pub fn is_error(self) -> bool {
        !matches!(self, Status::Ok | Status::NotFound)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "ok",
            Status::BadRequest => "bad request",
            Status::Unauthorized => "unauthorized",
            Status::Forbidden => "forbidden",
            Status::NotFound => "not found",
            Status::RateLimited => "rate limited",
            Status::ServerError => "server error",
            Status::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
