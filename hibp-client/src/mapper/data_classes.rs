use super::{DataClassesListMapper, map_json};
use crate::error::Error;
use crate::model::DataClassName;
use crate::status::Status;

/// Maps `GET dataclasses`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDataClassesListMapper;

impl DataClassesListMapper for DefaultDataClassesListMapper {
    fn map(&self, status: Status, body: &str) -> Result<Vec<DataClassName>, Error> {
        map_json(status, body, Vec::new, "data class list", "Error fetching data classes")
    }
}
