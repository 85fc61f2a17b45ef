use std::fmt;
use std::sync::Arc;

use reqwest::Url;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::hash::hash_prefix;
use crate::mapper::{
    BreachListMapper, BreachMapper, DataClassesListMapper, DefaultBreachListMapper,
    DefaultBreachMapper, DefaultDataClassesListMapper, DefaultPasteListMapper,
    DefaultPwnedPasswordsMapper, PasteListMapper, PwnedPasswordsMapper,
};
use crate::model::{Breach, DataClassName, Paste};
use crate::status::Status;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

pub const API_KEY_HEADER: &str = "hibp-api-key";
pub const USER_AGENT_HEADER: &str = "user-agent";
pub const ADD_PADDING_HEADER: &str = "add-padding";

/// Options for [`ApiClient::breaches_for_account_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountQuery<'a> {
    /// Only return breaches of this domain.
    pub domain: Option<&'a str>,
    /// Only return breach names, leaving every other [`Breach`] field empty.
    pub truncate_response: bool,
    pub include_unverified: bool,
}

impl Default for AccountQuery<'_> {
    fn default() -> Self {
        Self { domain: None, truncate_response: false, include_unverified: true }
    }
}

/// Blocking client for the HIBP v3 and Pwned Passwords APIs.
///
/// Every operation builds one request, sends it through the transport, and
/// passes the classified status and body to that operation's mapper. There
/// is no retry. Mappers can be replaced per instance; replacing one takes
/// `&mut self`, so it never races an in-flight call on the same client.
pub struct ApiClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
    breach_mapper: Arc<dyn BreachMapper>,
    breach_list_mapper: Arc<dyn BreachListMapper>,
    data_classes_list_mapper: Arc<dyn DataClassesListMapper>,
    paste_list_mapper: Arc<dyn PasteListMapper>,
    pwned_passwords_mapper: Arc<dyn PwnedPasswordsMapper>,
}

impl ApiClient<ReqwestTransport> {
    /// Client without an API key, talking to the public endpoints only.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(ClientConfig::default())
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(ClientConfig::default().api_key(api_key))
    }

    /// Builds the default `reqwest` transport, honoring the configured proxy.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(config.proxy_url())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client over a caller-supplied transport with the default mappers.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            breach_mapper: Arc::new(DefaultBreachMapper),
            breach_list_mapper: Arc::new(DefaultBreachListMapper),
            data_classes_list_mapper: Arc::new(DefaultDataClassesListMapper),
            paste_list_mapper: Arc::new(DefaultPasteListMapper),
            pwned_passwords_mapper: Arc::new(DefaultPwnedPasswordsMapper),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All breaches of `account`, with full breach details and unverified
    /// breaches included. Requires an API key.
    #[instrument(level = "debug", skip(self, account))]
    pub fn breaches_for_account(&self, account: &str) -> Result<Vec<Breach>, Error> {
        self.breaches_for_account_with(account, &AccountQuery::default())
    }

    /// Breaches of `account` filtered and shaped by `query`. Requires an API key.
    #[instrument(level = "debug", skip(self, account))]
    pub fn breaches_for_account_with(
        &self,
        account: &str,
        query: &AccountQuery<'_>,
    ) -> Result<Vec<Breach>, Error> {
        self.require_api_key("breaches_for_account")?;
        let account = path_segment("breaches_for_account", account)?;

        let mut url = endpoint(&self.config.api_base_url, &["breachedaccount", account])?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(domain) = query.domain {
                pairs.append_pair("domain", domain);
            }
            pairs.append_pair("truncateResponse", bool_param(query.truncate_response));
            pairs.append_pair("includeUnverified", bool_param(query.include_unverified));
        }

        let (status, body) = self.execute(self.build_request(url))?;
        self.breach_list_mapper.map(status, &body)
    }

    /// Every breach in the system, optionally only those of `domain`.
    #[instrument(level = "debug", skip(self))]
    pub fn breaches(&self, domain: Option<&str>) -> Result<Vec<Breach>, Error> {
        let mut url = endpoint(&self.config.api_base_url, &["breaches"])?;
        if let Some(domain) = domain {
            url.query_pairs_mut().append_pair("domain", domain);
        }

        let (status, body) = self.execute(self.build_request(url))?;
        self.breach_list_mapper.map(status, &body)
    }

    /// A single breach by its name (e.g. `"Adobe"`), `None` if unknown.
    #[instrument(level = "debug", skip(self))]
    pub fn breach(&self, name: &str) -> Result<Option<Breach>, Error> {
        let name = path_segment("breach", name)?;
        let url = endpoint(&self.config.api_base_url, &["breach", name])?;
        let (status, body) = self.execute(self.build_request(url))?;
        self.breach_mapper.map(status, &body)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn data_classes(&self) -> Result<Vec<DataClassName>, Error> {
        let url = endpoint(&self.config.api_base_url, &["dataclasses"])?;
        let (status, body) = self.execute(self.build_request(url))?;
        self.data_classes_list_mapper.map(status, &body)
    }

    /// Pastes containing `account`. Requires an API key.
    #[instrument(level = "debug", skip(self, account))]
    pub fn pastes_for_account(&self, account: &str) -> Result<Vec<Paste>, Error> {
        self.require_api_key("pastes_for_account")?;
        let account = path_segment("pastes_for_account", account)?;

        let url = endpoint(&self.config.api_base_url, &["pasteaccount", account])?;
        let (status, body) = self.execute(self.build_request(url))?;
        self.paste_list_mapper.map(status, &body)
    }

    /// Checks `password` against Pwned Passwords using k-Anonymity: only the
    /// first 5 hex characters of its SHA-1 hash are sent, the match is decided
    /// locally by the mapper.
    #[instrument(level = "debug", skip_all)]
    pub fn is_password_pwned(&self, password: &str) -> Result<bool, Error> {
        let prefix = hash_prefix(password);
        let url = endpoint(&self.config.passwords_base_url, &["range", prefix.as_str()])?;

        let mut request = self.build_request(url);
        if self.config.add_padding {
            request.headers.push((ADD_PADDING_HEADER.to_string(), "true".to_string()));
        }

        let (status, body) = self.execute(request)?;
        self.pwned_passwords_mapper.map(status, &body, password)
    }

    /// A GET request for `url` carrying the user agent and, when configured,
    /// the API key.
    pub fn build_request(&self, url: Url) -> HttpRequest {
        let mut headers = Vec::with_capacity(2);
        if let Some(api_key) = &self.config.api_key {
            headers.push((API_KEY_HEADER.to_string(), api_key.clone()));
        }
        headers.push((USER_AGENT_HEADER.to_string(), self.config.user_agent.clone()));
        HttpRequest { url, headers }
    }

    pub fn breach_mapper(&self) -> &Arc<dyn BreachMapper> {
        &self.breach_mapper
    }

    pub fn set_breach_mapper(&mut self, mapper: Arc<dyn BreachMapper>) {
        self.breach_mapper = mapper;
    }

    pub fn with_breach_mapper(mut self, mapper: Arc<dyn BreachMapper>) -> Self {
        self.set_breach_mapper(mapper);
        self
    }

    pub fn breach_list_mapper(&self) -> &Arc<dyn BreachListMapper> {
        &self.breach_list_mapper
    }

    pub fn set_breach_list_mapper(&mut self, mapper: Arc<dyn BreachListMapper>) {
        self.breach_list_mapper = mapper;
    }

    pub fn with_breach_list_mapper(mut self, mapper: Arc<dyn BreachListMapper>) -> Self {
        self.set_breach_list_mapper(mapper);
        self
    }

    pub fn data_classes_list_mapper(&self) -> &Arc<dyn DataClassesListMapper> {
        &self.data_classes_list_mapper
    }

    pub fn set_data_classes_list_mapper(&mut self, mapper: Arc<dyn DataClassesListMapper>) {
        self.data_classes_list_mapper = mapper;
    }

    pub fn with_data_classes_list_mapper(mut self, mapper: Arc<dyn DataClassesListMapper>) -> Self {
        self.set_data_classes_list_mapper(mapper);
        self
    }

    pub fn paste_list_mapper(&self) -> &Arc<dyn PasteListMapper> {
        &self.paste_list_mapper
    }

    pub fn set_paste_list_mapper(&mut self, mapper: Arc<dyn PasteListMapper>) {
        self.paste_list_mapper = mapper;
    }

    pub fn with_paste_list_mapper(mut self, mapper: Arc<dyn PasteListMapper>) -> Self {
        self.set_paste_list_mapper(mapper);
        self
    }

    pub fn pwned_passwords_mapper(&self) -> &Arc<dyn PwnedPasswordsMapper> {
        &self.pwned_passwords_mapper
    }

    pub fn set_pwned_passwords_mapper(&mut self, mapper: Arc<dyn PwnedPasswordsMapper>) {
        self.pwned_passwords_mapper = mapper;
    }

    pub fn with_pwned_passwords_mapper(mut self, mapper: Arc<dyn PwnedPasswordsMapper>) -> Self {
        self.set_pwned_passwords_mapper(mapper);
        self
    }

    fn require_api_key(&self, operation: &'static str) -> Result<(), Error> {
        if self.config.api_key.is_none() {
            return Err(Error::MissingApiKey { operation });
        }
        Ok(())
    }

    fn execute(&self, request: HttpRequest) -> Result<(Status, String), Error> {
        let response = self
            .transport
            .send(&request)
            .map_err(|source| Error::Transport { url: request.url.to_string(), source })?;

        let status = Status::of(response.status);
        debug!(code = response.status, %status, "HIBP response");
        Ok((status, response.body))
    }
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Appends percent-encoded `segments` to `base`, replacing a trailing empty
/// segment so `https://host/api/v3/` + `breaches` gives `/api/v3/breaches`.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::InvalidBaseUrl { url: base.to_string() })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Rejects names that URL normalization would collapse into a different path.
fn path_segment<'a>(operation: &'static str, name: &'a str) -> Result<&'a str, Error> {
    match name {
        "" | "." | ".." => Err(Error::InvalidPathSegment { operation, name: name.to_string() }),
        name => Ok(name),
    }
}

fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
