//! Response mappers.
//!
//! Each mapper turns a classified [`Status`] and the raw response body into a
//! typed result. They all follow the same contract:
//!
//! - [`Status::NotFound`] yields the empty value of the result type (an empty
//!   list, `false`, `None`). It is never an error.
//! - [`Status::Ok`] parses the body. A body that does not fit the schema is an
//!   [`Error::Mapping`].
//! - Any other status is an [`Error::Api`] carrying that status. The body is
//!   not inspected.
//!
//! [`ApiClient`](crate::ApiClient) holds one instance of each mapper behind an
//! `Arc` and lets callers replace it without touching call sites.

mod breach;
mod breach_list;
mod data_classes;
mod paste_list;
mod pwned_passwords;

pub use breach::DefaultBreachMapper;
pub use breach_list::DefaultBreachListMapper;
pub use data_classes::DefaultDataClassesListMapper;
pub use paste_list::DefaultPasteListMapper;
pub use pwned_passwords::DefaultPwnedPasswordsMapper;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::model::{Breach, DataClassName, Paste};
use crate::status::Status;

/// Maps the single-breach endpoint.
pub trait BreachMapper: Send + Sync {
    fn map(&self, status: Status, body: &str) -> Result<Option<Breach>, Error>;
}

/// Maps the breach list endpoints (all breaches, breaches for an account).
pub trait BreachListMapper: Send + Sync {
    fn map(&self, status: Status, body: &str) -> Result<Vec<Breach>, Error>;
}

pub trait DataClassesListMapper: Send + Sync {
    fn map(&self, status: Status, body: &str) -> Result<Vec<DataClassName>, Error>;
}

pub trait PasteListMapper: Send + Sync {
    fn map(&self, status: Status, body: &str) -> Result<Vec<Paste>, Error>;
}

/// Maps a Pwned Passwords range response. Receives the plaintext password so
/// the suffix comparison happens locally; implementations must not log or
/// store it.
pub trait PwnedPasswordsMapper: Send + Sync {
    fn map(&self, status: Status, body: &str, password: &str) -> Result<bool, Error>;
}

/// Shared status handling for the JSON endpoints.
pub(crate) fn map_json<T: DeserializeOwned>(
    status: Status,
    body: &str,
    empty: impl FnOnce() -> T,
    expected: &'static str,
    failure: &'static str,
) -> Result<T, Error> {
    match status {
        Status::NotFound => Ok(empty()),
        Status::Ok => serde_json::from_str(body).map_err(|e| Error::mapping(expected, e)),
        status => Err(Error::api(status, failure)),
    }
}
