use super::{BreachMapper, map_json};
use crate::error::Error;
use crate::model::Breach;
use crate::status::Status;

/// Maps `GET breach/{name}`. An unknown breach name is `Ok(None)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBreachMapper;

impl BreachMapper for DefaultBreachMapper {
    fn map(&self, status: Status, body: &str) -> Result<Option<Breach>, Error> {
        map_json(status, body, || None, "breach", "Error fetching breach")
    }
}
