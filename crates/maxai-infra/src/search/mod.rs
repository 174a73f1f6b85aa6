//! Search provider implementations.

pub mod google;

use secrecy::SecretString;

use maxai_types::config::SearchConfig;
use maxai_types::search::SearchError;

use self::google::{GoogleCredentials, GoogleSearchProvider};

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const GOOGLE_CSE_ID_ENV: &str = "GOOGLE_CSE_ID";

/// Build the Google provider. Both the API key and the engine id are
/// needed; with either missing the provider is built unconfigured.
pub fn create_search_provider(
    config: &SearchConfig,
    api_key: Option<SecretString>,
    cse_id: Option<String>,
) -> Result<GoogleSearchProvider, SearchError> {
    let credentials = match (api_key, cse_id) {
        (Some(api_key), Some(cse_id)) => Some(GoogleCredentials { api_key, cse_id }),
        _ => {
            tracing::warn!(
                "{GOOGLE_API_KEY_ENV} or {GOOGLE_CSE_ID_ENV} is not set; searches will return no results"
            );
            None
        }
    };
    GoogleSearchProvider::new(config, credentials)
}
