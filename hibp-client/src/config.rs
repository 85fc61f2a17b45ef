use std::fmt;

use reqwest::Url;

use crate::error::Error;

/// Environment variable name for the HIBP API key.
pub const HIBP_API_KEY_ENV: &str = "HIBP_API_KEY";

/// Environment variable name for an HTTP(S) proxy URL.
pub const HIBP_PROXY_ENV: &str = "HIBP_PROXY";

pub const DEFAULT_API_BASE_URL: &str = "https://haveibeenpwned.com/api/v3/";

pub const DEFAULT_PASSWORDS_BASE_URL: &str = "https://api.pwnedpasswords.com/";

/// User agent sent with every request. The service rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("hibp-client/", env!("CARGO_PKG_VERSION"));

/// Settings for an [`ApiClient`](crate::ApiClient).
///
/// Without an API key only the public endpoints (breaches, single breach,
/// data classes, passwords) are usable.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: Option<String>,
    pub(crate) proxy: Option<String>,
    pub(crate) api_base_url: Url,
    pub(crate) passwords_base_url: Url,
    pub(crate) user_agent: String,
    pub(crate) add_padding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            proxy: None,
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("valid default API URL"),
            passwords_base_url: Url::parse(DEFAULT_PASSWORDS_BASE_URL)
                .expect("valid default Pwned Passwords URL"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            add_padding: true,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the API key from `HIBP_API_KEY` and the proxy from `HIBP_PROXY`.
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), resolving variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        Self { api_key: var(HIBP_API_KEY_ENV), proxy: var(HIBP_PROXY_ENV), ..Self::default() }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Whether range requests ask the service to pad responses with zero-count
    /// records. Enabled by default.
    pub fn add_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    pub fn api_base_url(mut self, url: &str) -> Result<Self, Error> {
        self.api_base_url = parse_base_url(url)?;
        Ok(self)
    }

    pub fn passwords_base_url(mut self, url: &str) -> Result<Self, Error> {
        self.passwords_base_url = parse_base_url(url)?;
        Ok(self)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("proxy", &self.proxy)
            .field("api_base_url", &self.api_base_url.as_str())
            .field("passwords_base_url", &self.passwords_base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("add_padding", &self.add_padding)
            .finish()
    }
}

fn parse_base_url(url: &str) -> Result<Url, Error> {
    match Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => Ok(parsed),
        _ => Err(Error::InvalidBaseUrl { url: url.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(!config.has_api_key());
        assert!(config.proxy_url().is_none());
        assert!(config.add_padding);
        assert_eq!(config.api_base_url.as_str(), DEFAULT_API_BASE_URL);
        assert_eq!(config.passwords_base_url.as_str(), DEFAULT_PASSWORDS_BASE_URL);
        assert!(config.user_agent.starts_with("hibp-client/"));
    }

    #[test]
    fn test_from_vars() {
        let config = ClientConfig::from_vars(|name| match name {
            HIBP_API_KEY_ENV => Some("0123456789abcdef".to_string()),
            HIBP_PROXY_ENV => Some("http://127.0.0.1:3128".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("0123456789abcdef"));
        assert_eq!(config.proxy_url(), Some("http://127.0.0.1:3128"));
        assert!(config.add_padding);
        assert_eq!(config.api_base_url.as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_from_vars_empty_is_unset() {
        let config = ClientConfig::from_vars(|_| Some(String::new()));
        assert!(!config.has_api_key());
        assert!(config.proxy_url().is_none());

        let config = ClientConfig::from_vars(|_| None);
        assert!(!config.has_api_key());
        assert!(config.proxy_url().is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new().api_key("0123456789abcdef");
        let debug = format!("{config:?}");
        assert!(!debug.contains("0123456789abcdef"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ClientConfig::new().api_base_url("not a url"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new().passwords_base_url("mailto:someone@example.com"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(ClientConfig::new().api_base_url("http://127.0.0.1:3000/api/v3/").is_ok());
    }
}
