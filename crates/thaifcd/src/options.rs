// ABOUTME: Configuration options for the retrieval client and the fluent ClientBuilder.
// ABOUTME: Compiled defaults point at the public relay and a browser-like request identity.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Relay origin used when the caller does not supply one.
pub const DEFAULT_RELAY_BASE: &str = "https://nutrition-thaifcd-proxy.skst-b13.workers.dev";

/// User agent the upstream site accepts without challenge pages.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; NutritionFinder/1.0; +github-pages)";

const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Configuration options for the retrieval client.
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL of the relay that proxies the upstream site.
    pub relay_base: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    /// Extra headers sent with every relay request.
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), DEFAULT_ACCEPT.to_string());

        Self {
            relay_base: DEFAULT_RELAY_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
            headers,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Point the client at a different relay.
    pub fn relay_base(mut self, relay_base: impl Into<String>) -> Self {
        self.opts.relay_base = relay_base.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
