use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Proxy;

use crate::{
    config::ClientConfig,
    error::Result,
    model::ArxivResult,
    parser::parse_feed,
    query::SearchQuery,
};

/// Blocking client for the arXiv atom API.
///
/// Holds no per-call state: each `search` is a single GET followed by a
/// feed parse, and a shared `&ArxivClient` may be used from several threads.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    http: Client,
    config: ClientConfig,
}

impl ArxivClient {
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout);
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(Proxy::all(proxy.as_str())?);
        }
        Ok(ArxivClient {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, query: &SearchQuery) -> RequestBuilder {
        self.http
            .get(self.config.base_url.as_str())
            .query(&query.params())
    }

    pub fn create_query_url(&self, query: &SearchQuery) -> Result<String> {
        let request = self.request(query).build()?;
        Ok(request.url().to_string())
    }

    /// Fetch one page of results for `query`, in feed order.
    ///
    /// Transport failures, including non-2xx statuses, surface as
    /// `ArxivError::Transport`; an unreadable body as `ArxivError::Parse`.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<ArxivResult>> {
        let request = self.request(query).build()?;
        tracing::debug!(url = %request.url(), "querying arxiv");
        let body = self.http.execute(request)?
            .error_for_status()?
            .text()?;
        parse_feed(&body)
    }

    /// Look up a single paper, e.g. `2101.00001` or `hep-th/9901001`.
    pub fn get(&self, arxiv_id: &str) -> Result<Option<ArxivResult>> {
        let query = SearchQuery::new(&format!("id:{}", arxiv_id.trim())).max_results(1);
        Ok(self.search(&query)?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::query::{SortBy, SortOrder};

    const ACTUAL: &str = concat!(
        "http://export.arxiv.org/api/query",
        "?search_query=all%3Aelectron&start=0&max_results=10",
        "&sortBy=relevance&sortOrder=descending"
    );

    #[test]
    fn test_url_generation() {
        let client = ArxivClient::new().unwrap();
        let url = client.create_query_url(&SearchQuery::new("all:electron")).unwrap();
        assert_eq!(url, ACTUAL, "URL improperly formatted");
    }

    #[test]
    fn test_url_generation_with_options() {
        let config = ClientConfig::new("http://localhost:9000/api/query", Duration::from_secs(5));
        let client = ArxivClient::from_config(config).unwrap();
        let query = SearchQuery::new("ti:quantum computing AND cat:quant-ph")
            .start(40)
            .max_results(25)
            .sort_by(SortBy::LastUpdatedDate)
            .sort_order(SortOrder::Ascending);
        let url = client.create_query_url(&query).unwrap();
        assert_eq!(
            url,
            concat!(
                "http://localhost:9000/api/query",
                "?search_query=ti%3Aquantum+computing+AND+cat%3Aquant-ph",
                "&start=40&max_results=25&sortBy=lastUpdatedDate&sortOrder=ascending"
            )
        );
    }

    #[test]
    fn test_invalid_proxy() {
        let config = ClientConfig::default().with_proxy("not a proxy url");
        assert!(ArxivClient::from_config(config).is_err());
    }
}
