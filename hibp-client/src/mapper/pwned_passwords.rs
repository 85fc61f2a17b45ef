use super::PwnedPasswordsMapper;
use crate::error::Error;
use crate::hash::hash_suffix;
use crate::status::Status;

/// Maps a `GET range/{prefix}` response to "pwned or not".
///
/// The body lists one `SUFFIX:COUNT` per line for every known hash sharing the
/// queried prefix. When padding is requested the service adds lines with a
/// count of `0` that correspond to no real password; those never count as a
/// match.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPwnedPasswordsMapper;

impl PwnedPasswordsMapper for DefaultPwnedPasswordsMapper {
    fn map(&self, status: Status, body: &str, password: &str) -> Result<bool, Error> {
        match status {
            Status::NotFound => Ok(false),
            Status::Ok => Ok(range_contains(body, &hash_suffix(password))),
            status => Err(Error::api(status, "Error checking for pwned password")),
        }
    }
}

/// Scans a range response for `suffix` with a count other than the literal
/// `"0"`. Any other count, including garbage, is a match. Lines without a
/// `:` are skipped.
pub(crate) fn range_contains(body: &str, suffix: &str) -> bool {
    body.lines()
        .filter_map(|line| line.split_once(':'))
        .any(|(candidate, count)| candidate == suffix && count != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    // password123 -> SHA1: CBFDAC6008F9CAB4083784CBD1874F76618D2A97
    const SUFFIX: &str = "C6008F9CAB4083784CBD1874F76618D2A97";

    #[test]
    fn test_range_contains() {
        let body = "21BD1:0\n37D5B:5\n";
        assert!(range_contains(body, "37D5B"));
        assert!(!range_contains(body, "21BD1"), "padding line must not match");
        assert!(!range_contains(body, "00000"));
    }

    #[test]
    fn test_pwned() {
        let body = format!(
            "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\n{SUFFIX}:2254650\r\n00D4F6E8FA6EECAD2A3AA415EEC418D38EC:2"
        );
        assert!(DefaultPwnedPasswordsMapper.map(Status::Ok, &body, "password123").unwrap());
    }

    #[test]
    fn test_padding_record_is_not_a_match() {
        let body = format!("0018A45C4D1DEF81644B54AB7F969B88D65:1\n{SUFFIX}:0\n");
        assert!(!DefaultPwnedPasswordsMapper.map(Status::Ok, &body, "password123").unwrap());
    }

    #[test]
    fn test_empty_body() {
        assert!(!DefaultPwnedPasswordsMapper.map(Status::Ok, "", "anything").unwrap());
    }

    #[test]
    fn test_not_found_ignores_body() {
        let body = format!("{SUFFIX}:5\n");
        assert!(!DefaultPwnedPasswordsMapper.map(Status::NotFound, &body, "password123").unwrap());
        assert!(!DefaultPwnedPasswordsMapper.map(Status::NotFound, "garbage", "x").unwrap());
    }

    #[test]
    fn test_blank_and_colonless_lines() {
        let body = format!("\n\nnot-a-record\n{SUFFIX}:3\n\n");
        assert!(DefaultPwnedPasswordsMapper.map(Status::Ok, &body, "password123").unwrap());
        assert!(!range_contains("\n\n", ""));
        assert!(!range_contains(SUFFIX, SUFFIX), "a line without a count is skipped");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let body = format!("{}:5\n", SUFFIX.to_ascii_lowercase());
        assert!(!DefaultPwnedPasswordsMapper.map(Status::Ok, &body, "password123").unwrap());
    }

    #[test]
    fn test_non_numeric_count_is_a_match() {
        assert!(range_contains(&format!("{SUFFIX}:abc"), SUFFIX));
        assert!(range_contains(&format!("{SUFFIX}:"), SUFFIX));
        assert!(range_contains(&format!("{SUFFIX}:00"), SUFFIX));
        assert!(range_contains(&format!("{SUFFIX}:0:1"), SUFFIX));
    }

    // Duplicate suffixes do not occur in real responses; whichever nonzero
    // line is seen first decides. Not part of the API contract.
    #[test]
    fn test_duplicate_suffix_with_mixed_counts() {
        assert!(range_contains(&format!("{SUFFIX}:0\n{SUFFIX}:7\n"), SUFFIX));
        assert!(range_contains(&format!("{SUFFIX}:7\n{SUFFIX}:0\n"), SUFFIX));
    }

    #[test]
    fn test_error_status() {
        let statuses =
            [Status::BadRequest, Status::RateLimited, Status::ServerError, Status::Unknown];
        for status in statuses {
            let err = DefaultPwnedPasswordsMapper.map(status, "", "password123").unwrap_err();
            assert_eq!(err.status(), Some(status));
        }
    }
}
