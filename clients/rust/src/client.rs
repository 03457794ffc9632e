use async_trait::async_trait;
use http::Method;
use reqwest::{IntoUrl, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::log::info;
use url::Url;

use crate::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::{Error, Response, Result};

/// Everything needed to turn a path into a decoded [`Response`].
///
/// [`Client`] is the plain implementation. Callers that want to decorate
/// requests (extra headers, logging, printing metadata) wrap a `Client` and
/// delegate to it.
#[async_trait]
pub trait RequestRunner: Send + Sync {
    fn make_url(&self, path: &str) -> Result<Url>;

    fn prepare_request(
        &self,
        method: Method,
        url: Url,
    ) -> Result<RequestBuilder>;

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send;

    async fn run<T>(&self, method: Method, url: Url) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        let request = self.prepare_request(method, url)?;
        let response = request.send().await?;
        self.process_response(response).await
    }
}

/// An asynchronous client for the Deel REST API.
///
/// The client has various configuration options, but has reasonable defaults
/// that should suit most use-cases. To configure a client, use
/// [`Client::builder()`] or [`ClientBuilder::new()`]
///
/// a `Client` manages an internal connection pool, it's designed to be created
/// once and reused (via `Client::clone()`). You do **not** need to wrap
/// `Client` in [`Rc`] or [`Arc`] to reuse it.
///
/// [`Rc`]: std::rc::Rc
/// [`Arc`]: std::sync::Arc
#[derive(Clone)]
pub struct Client {
    http_client: reqwest::Client,
    config: ClientConfig,
}

/// A `ClientBuilder` is what should be used to construct a `Client` with custom
/// configuration.
///
/// We default to the production API `https://api.letsdeel.com/` unless
/// `DEEL_BASE_URL` environment variable is defined. Alternatively, the
/// `base_url` can be used to override the server url for this particular
/// client instance.
#[must_use]
#[derive(Default, Clone)]
pub struct ClientBuilder {
    config: Config,
}

impl ClientBuilder {
    /// Construct a new client builder with reasonable defaults. Use
    /// [`ClientBuilder::build`] to construct a client.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn base_url<T: IntoUrl>(mut self, base_url: T) -> Result<Self> {
        let mut base_url = base_url.into_url()?;
        // We want to make sure that the query string is empty.
        base_url.set_query(None);
        self.config.base_url = Some(base_url);
        Ok(self)
    }

    pub fn api_token(mut self, api_token: String) -> Self {
        self.config.api_token = Some(api_token);
        self
    }

    /// Use a pre-configured [`reqwest::Client`] instance instead of creating
    /// our own. This allows customising TLS, timeout, and other low-level http
    /// client configuration options.
    pub fn reqwest_client(mut self, c: reqwest::Client) -> Self {
        self.config.reqwest_client = Some(c);
        self
    }

    /// Construct the Deel client.
    pub fn build(self) -> Result<Client> {
        let api_token = self
            .config
            .api_token
            .filter(|t| !t.is_empty())
            .ok_or(Error::ApiTokenRequired)?;

        let http_client = match self.config.reqwest_client {
            | Some(c) => c,
            | None => {
                reqwest::ClientBuilder::new()
                    .redirect(reqwest::redirect::Policy::none())
                    .build()?
            }
        };

        let base_url = match self.config.base_url {
            | Some(c) => c,
            | None => {
                // Attempt to read from environment variable before fallback to
                // default.
                match std::env::var(BASE_URL_ENV) {
                    | Ok(base_url) => Url::parse(&base_url)?,
                    | Err(_) => DEFAULT_BASE_URL.clone(),
                }
            }
        };

        Ok(Client {
            http_client,
            config: ClientConfig {
                base_url,
                api_token,
            },
        })
    }
}

impl Client {
    /// Creates a `ClientBuilder` to configure a `Client`.
    ///
    /// This is the same as `ClientBuilder::new()`.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }
}

#[async_trait]
impl RequestRunner for Client {
    fn make_url(&self, path: &str) -> Result<Url> {
        Ok(self.config.base_url.join(path)?)
    }

    fn prepare_request(
        &self,
        method: Method,
        url: Url,
    ) -> Result<RequestBuilder> {
        info!("Sending a request '{} {}'", method, url);
        Ok(self
            .http_client
            .request(method, url)
            .bearer_auth(&self.config.api_token)
            .header(reqwest::header::ACCEPT, "application/json"))
    }

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        Response::from_raw_response(response).await
    }
}

#[derive(Default, Clone)]
struct Config {
    base_url: Option<Url>,
    api_token: Option<String>,
    reqwest_client: Option<reqwest::Client>,
}

#[derive(Clone)]
struct ClientConfig {
    base_url: Url,
    api_token: String,
}

// Ensure that Client is Send + Sync. Compiler will fail if it's not.
const _: () = {
    fn assert_send<T: Send + Sync>() {}
    let _ = assert_send::<Client>;
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_token() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::ApiTokenRequired)));

        let result = ClientBuilder::new().api_token(String::new()).build();
        assert!(matches!(result, Err(Error::ApiTokenRequired)));
    }

    #[test]
    fn urls_are_joined_onto_base() -> anyhow::Result<()> {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080/?stale=1")?
            .api_token("token".to_owned())
            .build()?;
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(
            client.make_url("/rest/v2/contracts")?.as_str(),
            "http://localhost:8080/rest/v2/contracts"
        );
        Ok(())
    }

    #[test]
    fn requests_carry_bearer_token() -> anyhow::Result<()> {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")?
            .api_token("s3cr3t".to_owned())
            .build()?;
        let url = client.make_url("/rest/v2/teams")?;
        let request = client.prepare_request(Method::GET, url)?.build()?;
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer s3cr3t"
        );
        Ok(())
    }
}
