use std::time::Duration;

use serde::Deserialize;
use url::Url;

const BASE_URL: &str = "https://newsapi.org/v2/top-headlines";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum NewsApiError {
    #[error("Failed fetching articles")]
    RequestFailed(#[from] Box<ureq::Error>),
    #[error("Failed converting response to string")]
    FailedResponseToString(#[from] std::io::Error),
    #[error("Article parsing failed")]
    ArticleParseFailed(#[from] serde_json::Error),
    #[error("Url parsing failed")]
    UrlParsing(#[from] url::ParseError),
    #[error("Request rejected: {0}")]
    BadRequest(&'static str),
}

/// One headline record. Every field is optional on the wire; missing values
/// are substituted at render time, not here.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    pub url: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct NewsApiResponse {
    status: String,
    articles: Vec<Article>,
}

impl NewsApiResponse {
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}

/// Client for the newsapi.org top-headlines endpoint. One blocking request
/// per `fetch`; retries are the caller's decision.
pub struct NewsApi {
    api_key: String,
    country: String,
}

impl NewsApi {
    pub fn new(api_key: &str) -> NewsApi {
        NewsApi {
            api_key: api_key.to_string(),
            country: "us".to_string(),
        }
    }

    pub fn country(mut self, country: &str) -> NewsApi {
        self.country = country.to_string();
        self
    }

    fn prepare_url(&self) -> Result<String, NewsApiError> {
        let url = Url::parse_with_params(
            BASE_URL,
            &[("country", self.country.as_str()), ("apiKey", &self.api_key)],
        )?;
        Ok(url.to_string())
    }

    /// Issues the request and parses the body. An empty article list is a
    /// successful outcome; judging emptiness is up to the caller.
    pub fn fetch(&self) -> Result<NewsApiResponse, NewsApiError> {
        let url = self.prepare_url()?;
        let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
        let body = agent
            .get(&url)
            .call()
            .map_err(Box::new)?
            .into_string()?;
        let response: NewsApiResponse = serde_json::from_str(&body)?;
        if response.status != "ok" {
            return Err(NewsApiError::BadRequest("service reported an error"));
        }
        Ok(response)
    }
}
