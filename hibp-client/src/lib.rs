//! Blocking client for the [Have I Been Pwned](https://haveibeenpwned.com/API/v3)
//! API: breaches of an account, breach metadata, pastes, data classes, and
//! Pwned Passwords checks.
//!
//! # Response mapping
//!
//! Every endpoint's raw status and body go through a mapper (see [`mapper`]).
//! A 404 is a valid "nothing found" answer and becomes an empty list, `false`
//! or `None`; any other non-2xx status is an [`Error::Api`]. Mappers are
//! trait objects that can be swapped per client:
//!
//! ```no_run
//! use std::sync::Arc;
//! use hibp_client::{ApiClient, Error, Status};
//! use hibp_client::mapper::DataClassesListMapper;
//!
//! struct Uppercase;
//!
//! impl DataClassesListMapper for Uppercase {
//!     fn map(&self, status: Status, body: &str) -> Result<Vec<String>, Error> {
//!         let classes: Vec<String> = match status {
//!             Status::NotFound => Vec::new(),
//!             Status::Ok => serde_json::from_str(body).map_err(|e| Error::mapping("list", e))?,
//!             status => return Err(Error::api(status, "no data classes")),
//!         };
//!         Ok(classes.into_iter().map(|c| c.to_uppercase()).collect())
//!     }
//! }
//!
//! let client = ApiClient::new()?.with_data_classes_list_mapper(Arc::new(Uppercase));
//! let classes = client.data_classes()?;
//! # Ok::<(), Error>(())
//! ```
//!
//! # Password checks
//!
//! [`ApiClient::is_password_pwned`] never sends the password or its full hash.
//! Only the first 5 hex characters of the SHA-1 digest leave the process; the
//! service answers with every suffix sharing that prefix and the comparison
//! happens locally. Zero-count padding records in the answer are ignored.
//!
//! ```no_run
//! let client = hibp_client::ApiClient::new()?;
//! if client.is_password_pwned("password123")? {
//!     println!("choose another password");
//! }
//! # Ok::<(), hibp_client::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod hash;
pub mod mapper;
pub mod model;
pub mod status;
pub mod transport;

pub use client::{AccountQuery, ApiClient};
pub use config::{ClientConfig, HIBP_API_KEY_ENV, HIBP_PROXY_ENV};
pub use error::Error;
pub use hash::{hash_prefix, hash_suffix};
pub use model::{Breach, DataClassName, Paste};
pub use status::Status;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
