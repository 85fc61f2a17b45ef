use super::{BreachListMapper, map_json};
use crate::error::Error;
use crate::model::Breach;
use crate::status::Status;

/// Maps `GET breaches` and `GET breachedaccount/{account}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBreachListMapper;

impl BreachListMapper for DefaultBreachListMapper {
    fn map(&self, status: Status, body: &str) -> Result<Vec<Breach>, Error> {
        map_json(status, body, Vec::new, "breach list", "Error fetching breaches")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok() {
        let body = r#"[
            {"Name":"Adobe","Title":"Adobe","Domain":"adobe.com","BreachDate":"2013-10-04","PwnCount":152445165,"DataClasses":["Email addresses","Passwords"]},
            {"Name":"LinkedIn","Title":"LinkedIn","Domain":"linkedin.com","BreachDate":"2012-05-05","PwnCount":164611595,"DataClasses":["Email addresses","Passwords"]}
        ]"#;
        let breaches = DefaultBreachListMapper.map(Status::Ok, body).unwrap();
        assert_eq!(breaches.len(), 2);
        assert_eq!(breaches[0].name, "Adobe");
        assert_eq!(breaches[1].name, "LinkedIn");
        assert_eq!(breaches[1].pwn_count, Some(164611595));
    }

    #[test]
    fn test_truncated() {
        let body = r#"[{"Name":"Adobe"},{"Name":"Gawker"}]"#;
        let breaches = DefaultBreachListMapper.map(Status::Ok, body).unwrap();
        assert_eq!(breaches.len(), 2);
        assert!(breaches.iter().all(|b| b.domain.is_none() && b.data_classes.is_empty()));
    }

    #[test]
    fn test_not_found() {
        assert!(DefaultBreachListMapper.map(Status::NotFound, "").unwrap().is_empty());
    }

    #[test]
    fn test_unauthorized() {
        let body = r#"{"statusCode":401,"message":"Access denied due to missing hibp-api-key."}"#;
        let err = DefaultBreachListMapper.map(Status::Unauthorized, body).unwrap_err();
        assert!(matches!(err, Error::Api { status: Status::Unauthorized, .. }));
    }

    #[test]
    fn test_malformed() {
        let err = DefaultBreachListMapper.map(Status::Ok, "<html>").unwrap_err();
        assert!(matches!(err, Error::Mapping { .. }));
    }
}
