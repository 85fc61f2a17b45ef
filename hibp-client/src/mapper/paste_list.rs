use super::{PasteListMapper, map_json};
use crate::error::Error;
use crate::model::Paste;
use crate::status::Status;

/// Maps `GET pasteaccount/{account}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPasteListMapper;

impl PasteListMapper for DefaultPasteListMapper {
    fn map(&self, status: Status, body: &str) -> Result<Vec<Paste>, Error> {
        map_json(status, body, Vec::new, "paste list", "Error fetching pastes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok() {
        let body = r#"[
            {"Source":"Pastebin","Id":"8Q0BvKD8","Title":"syslog","Date":"2014-03-04T19:14:54Z","EmailCount":139},
            {"Source":"Pastie","Id":"7152479","Date":"2013-03-28T16:51:10Z","EmailCount":30}
        ]"#;
        let pastes = DefaultPasteListMapper.map(Status::Ok, body).unwrap();
        assert_eq!(pastes.len(), 2);
        assert_eq!(pastes[0].id, "8Q0BvKD8");
        assert_eq!(pastes[1].source, "Pastie");
        assert!(pastes[1].title.is_none());
    }

    #[test]
    fn test_not_found() {
        assert!(DefaultPasteListMapper.map(Status::NotFound, "").unwrap().is_empty());
    }

    #[test]
    fn test_server_error() {
        let err = DefaultPasteListMapper.map(Status::ServerError, "").unwrap_err();
        assert_eq!(err.status(), Some(Status::ServerError));
    }

    #[test]
    fn test_missing_email_count() {
        let body = r#"[{"Source":"Pastebin","Id":"8Q0BvKD8"}]"#;
        let err = DefaultPasteListMapper.map(Status::Ok, body).unwrap_err();
        assert!(matches!(err, Error::Mapping { .. }));
    }
}
