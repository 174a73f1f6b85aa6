//! GoogleSearchProvider -- [`SearchProvider`] backed by the Custom Search
//! JSON API.
//!
//! One `GET {base_url}?key=..&cx=..&q=..&num=..` per search; image searches
//! add `searchType=image`. Response items are mapped into the domain
//! [`WebResult`] / [`ImageResult`] shapes.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use maxai_core::search::SearchProvider;
use maxai_types::config::SearchConfig;
use maxai_types::search::{ImageResult, SearchError, SearchMode, SearchResults, WebResult};

/// Snippets longer than this many characters are cut before `...` is added.
pub const SNIPPET_MAX_CHARS: usize = 200;

#[derive(Debug, Default, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CseItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    display_link: Option<String>,
    #[serde(default)]
    pagemap: Option<PageMap>,
    #[serde(default)]
    image: Option<CseImage>,
}

#[derive(Debug, Default, Deserialize)]
struct PageMap {
    #[serde(default)]
    cse_thumbnail: Option<Vec<PageMapImage>>,
    #[serde(default)]
    cse_image: Option<Vec<PageMapImage>>,
}

#[derive(Debug, Deserialize)]
struct PageMapImage {
    #[serde(default)]
    src: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CseImage {
    #[serde(default)]
    context_link: Option<String>,
}

/// Credentials for the Custom Search API.
pub struct GoogleCredentials {
    pub api_key: SecretString,
    pub cse_id: String,
}

/// Google Custom Search provider.
///
/// Built even without credentials; every search then fails with
/// [`SearchError::NotConfigured`] and the caller shows no results.
pub struct GoogleSearchProvider {
    client: reqwest::Client,
    credentials: Option<GoogleCredentials>,
    base_url: String,
    web_results: u8,
    image_results: u8,
}

impl GoogleSearchProvider {
    pub fn new(
        config: &SearchConfig,
        credentials: Option<GoogleCredentials>,
    ) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            credentials,
            base_url: config.base_url.clone(),
            web_results: config.web_results,
            image_results: config.image_results,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn params(
        &self,
        credentials: &GoogleCredentials,
        query: &str,
        mode: SearchMode,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", credentials.api_key.expose_secret().to_string()),
            ("cx", credentials.cse_id.clone()),
            ("q", query.to_string()),
        ];
        match mode {
            SearchMode::Web => params.push(("num", self.web_results.to_string())),
            SearchMode::Images => {
                params.push(("num", self.image_results.to_string()));
                params.push(("searchType", "image".to_string()));
            }
        }
        params
    }
}

/// Cut to [`SNIPPET_MAX_CHARS`] characters and append `...`; empty stays empty.
fn truncate_snippet(snippet: Option<&str>) -> String {
    match snippet {
        Some(s) if !s.is_empty() => {
            let cut: String = s.chars().take(SNIPPET_MAX_CHARS).collect();
            format!("{cut}...")
        }
        _ => String::new(),
    }
}

fn first_src(images: Option<&Vec<PageMapImage>>) -> Option<String> {
    images?.first()?.src.clone()
}

fn web_result(item: CseItem) -> WebResult {
    let thumbnail = item.pagemap.as_ref().and_then(|pagemap| {
        if pagemap.cse_thumbnail.is_some() {
            first_src(pagemap.cse_thumbnail.as_ref())
        } else {
            first_src(pagemap.cse_image.as_ref())
        }
    });

    WebResult {
        snippet: truncate_snippet(item.snippet.as_deref()),
        title: item.title,
        link: item.link,
        thumbnail,
    }
}

fn image_result(item: CseItem) -> ImageResult {
    ImageResult {
        title: item.title,
        thumbnail: item.link.clone(),
        image_url: item.link.clone(),
        link: item.link,
        context_link: item
            .image
            .and_then(|image| image.context_link)
            .unwrap_or_else(|| "#".to_string()),
        display_link: item.display_link.unwrap_or_default(),
    }
}

/// Map a raw API body into results for `mode`.
fn map_results(body: &str, mode: SearchMode) -> Result<SearchResults, SearchError> {
    let response: CseResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Deserialization(e.to_string()))?;

    Ok(match mode {
        SearchMode::Web => SearchResults::Web(response.items.into_iter().map(web_result).collect()),
        SearchMode::Images => {
            SearchResults::Images(response.items.into_iter().map(image_result).collect())
        }
    })
}

impl SearchProvider for GoogleSearchProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn search(&self, query: &str, mode: SearchMode) -> Result<SearchResults, SearchError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            SearchError::NotConfigured("GOOGLE_API_KEY and GOOGLE_CSE_ID are required".to_string())
        })?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.params(credentials, query, mode))
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        map_results(&body, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const WEB_BODY: &str = r#"{
        "items": [
            {
                "title": "Kauai - Wikipedia",
                "link": "https://en.wikipedia.org/wiki/Kauai",
                "snippet": "Kauaʻi is geologically the oldest of the main Hawaiian Islands.",
                "pagemap": {
                    "cse_thumbnail": [{"src": "https://thumb.example/kauai.jpg"}],
                    "cse_image": [{"src": "https://img.example/kauai.jpg"}]
                }
            },
            {
                "title": "Visit Kauai",
                "link": "https://kauai.example",
                "pagemap": {"cse_image": [{"src": "https://img.example/visit.jpg"}]}
            },
            {
                "title": "No pagemap",
                "link": "https://plain.example",
                "snippet": ""
            }
        ]
    }"#;

    const IMAGE_BODY: &str = r#"{
        "items": [
            {
                "title": "Stitch",
                "link": "https://img.example/stitch.png",
                "displayLink": "img.example",
                "image": {"contextLink": "https://img.example/page"}
            },
            {"title": "Bare", "link": "https://img.example/bare.png"}
        ]
    }"#;

    fn config(base_url: &str) -> SearchConfig {
        SearchConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..SearchConfig::default()
        }
    }

    fn credentials() -> GoogleCredentials {
        GoogleCredentials {
            api_key: SecretString::from("test-key".to_string()),
            cse_id: "test-cx".to_string(),
        }
    }

    #[test]
    fn test_map_web_results() {
        let SearchResults::Web(items) = map_results(WEB_BODY, SearchMode::Web).unwrap() else {
            panic!("expected web results");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].thumbnail.as_deref(), Some("https://thumb.example/kauai.jpg"));
        assert!(items[0].snippet.ends_with("Islands...."));
        assert_eq!(items[1].thumbnail.as_deref(), Some("https://img.example/visit.jpg"));
        assert_eq!(items[1].snippet, "");
        assert_eq!(items[2].thumbnail, None);
        assert_eq!(items[2].snippet, "");
    }

    #[test]
    fn test_map_image_results() {
        let SearchResults::Images(items) = map_results(IMAGE_BODY, SearchMode::Images).unwrap()
        else {
            panic!("expected image results");
        };
        assert_eq!(items[0].thumbnail, "https://img.example/stitch.png");
        assert_eq!(items[0].image_url, items[0].link);
        assert_eq!(items[0].context_link, "https://img.example/page");
        assert_eq!(items[0].display_link, "img.example");
        assert_eq!(items[1].context_link, "#");
        assert_eq!(items[1].display_link, "");
    }

    #[test]
    fn test_no_items_is_empty_for_mode() {
        assert_eq!(
            map_results("{}", SearchMode::Images).unwrap(),
            SearchResults::Images(vec![])
        );
        assert!(matches!(
            map_results("not json", SearchMode::Web),
            Err(SearchError::Deserialization(_))
        ));
    }

    #[test]
    fn test_truncate_snippet_counts_characters() {
        let long = "ā".repeat(250);
        let cut = truncate_snippet(Some(&long));
        assert_eq!(cut.chars().count(), SNIPPET_MAX_CHARS + 3);
        assert_eq!(truncate_snippet(Some("short")), "short...");
        assert_eq!(truncate_snippet(None), "");
    }

    #[test]
    fn test_params_per_mode() {
        let provider = GoogleSearchProvider::new(&config("http://unused"), None).unwrap();
        let creds = credentials();

        let web = provider.params(&creds, "kauai", SearchMode::Web);
        assert!(web.contains(&("num", "5".to_string())));
        assert!(!web.iter().any(|(k, _)| *k == "searchType"));

        let images = provider.params(&creds, "kauai", SearchMode::Images);
        assert!(images.contains(&("num", "8".to_string())));
        assert!(images.contains(&("searchType", "image".to_string())));
        assert!(images.contains(&("cx", "test-cx".to_string())));
    }

    #[tokio::test]
    async fn test_unconfigured_search_fails_fast() {
        let provider = GoogleSearchProvider::new(&config("http://127.0.0.1:9"), None).unwrap();
        assert!(!provider.is_configured());
        assert!(matches!(
            provider.search("kauai", SearchMode::Web).await,
            Err(SearchError::NotConfigured(_))
        ));
    }

    #[tokio::test]
    async fn test_image_search_sends_mode_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/customsearch/v1")
                    .query_param("key", "test-key")
                    .query_param("cx", "test-cx")
                    .query_param("q", "stitch plush")
                    .query_param("num", "8")
                    .query_param("searchType", "image");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(IMAGE_BODY);
            })
            .await;

        let provider =
            GoogleSearchProvider::new(&config(&server.url("/customsearch/v1")), Some(credentials()))
                .unwrap();
        let results = provider.search("stitch plush", SearchMode::Images).await.unwrap();
        assert_eq!(results.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_web_search_sends_web_count() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/customsearch/v1")
                    .query_param("q", "kauai")
                    .query_param("num", "5");
                then.status(200).body(WEB_BODY);
            })
            .await;

        let provider =
            GoogleSearchProvider::new(&config(&server.url("/customsearch/v1")), Some(credentials()))
                .unwrap();
        let SearchResults::Web(items) = provider.search("kauai", SearchMode::Web).await.unwrap()
        else {
            panic!("expected web results");
        };
        assert_eq!(items[0].title, "Kauai - Wikipedia");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/customsearch/v1");
                then.status(403).body(r#"{"error":{"message":"quota"}}"#);
            })
            .await;

        let provider =
            GoogleSearchProvider::new(&config(&server.url("/customsearch/v1")), Some(credentials()))
                .unwrap();
        assert!(matches!(
            provider.search("kauai", SearchMode::Web).await,
            Err(SearchError::Status { status: 403, .. })
        ));
    }
}
