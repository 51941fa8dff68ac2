// ABOUTME: The retrieval facade that talks to the relay and feeds pages to the extractors.
// ABOUTME: Provides async search() and fetch_detail() over a shared reqwest client.

use url::Url;

use crate::error::ClientError;
use crate::extractors::detail::parse_detail_html;
use crate::extractors::search::parse_search_html;
use crate::options::{ClientBuilder, Options};
use crate::record::{DetailRecord, SearchResultItem};
use crate::resource::fetch;

/// Client for retrieving ThaiFCD pages through the proxying relay.
///
/// The relay fetches the upstream site and answers with its raw markup;
/// this client only ever requests the relay's two endpoints and hands the
/// returned HTML to the extractors.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Search the food database by keyword.
    ///
    /// Issues `GET {relay_base}/api/search?keyword=...` and parses the
    /// returned results table. Transport failures (network errors and
    /// non-2xx relay answers) propagate; result pages the extractor does
    /// not recognize simply yield an empty list.
    pub async fn search(&self, keyword: &str) -> Result<Vec<SearchResultItem>, ClientError> {
        let endpoint = self.relay_endpoint("api/search", "keyword", keyword, "Search")?;
        let fetched = fetch(&self.http_client, endpoint.as_str(), &self.opts.headers).await?;
        Ok(parse_search_html(&fetched.text()))
    }

    /// Fetch one detail page and extract its nutrient record.
    ///
    /// `target` is the detail URL (or site-relative path) as reported by a
    /// search result; it is passed to the relay verbatim via
    /// `GET {relay_base}/api/detail?url=...` and echoed back as the
    /// record's `source_url`.
    pub async fn fetch_detail(&self, target: &str) -> Result<DetailRecord, ClientError> {
        if target.is_empty() {
            return Err(ClientError::invalid_url(target, "Detail", None));
        }

        let endpoint = self.relay_endpoint("api/detail", "url", target, "Detail")?;
        let fetched = fetch(&self.http_client, endpoint.as_str(), &self.opts.headers).await?;
        Ok(parse_detail_html(&fetched.text(), target))
    }

    /// Build a relay endpoint URL with one query parameter.
    ///
    /// `query_pairs_mut` percent-encodes the value, so keywords and detail
    /// URLs survive spaces, Thai script, and nested query strings.
    fn relay_endpoint(
        &self,
        path: &str,
        param: &str,
        value: &str,
        op: &str,
    ) -> Result<Url, ClientError> {
        let base = self.opts.relay_base.trim_end_matches('/');
        let mut endpoint = Url::parse(&format!("{}/{}", base, path)).map_err(|e| {
            ClientError::invalid_url(
                &self.opts.relay_base,
                op,
                Some(anyhow::anyhow!("invalid relay base: {}", e)),
            )
        })?;
        endpoint.query_pairs_mut().append_pair(param, value);
        Ok(endpoint)
    }
}
