use dictionary_api::get_definition;

mod dictionary;
mod dictionary_api;

pub use dictionary::{Definition, Entry, Meaning, Phonetic};
pub use dictionary_api::DICTIONARY_API_URL;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("no definitions found for {word:?}")]
    NotFound { word: String },
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response contained no entries")]
    EmptyResponse,
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Entries endpoint; the word is appended as the last path segment.
    pub base_url: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DICTIONARY_API_URL.to_string(),
        }
    }
}

impl DictionaryConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the first entry the API returns for `word`.
    pub async fn get_definition(&self, word: &str) -> Result<Entry, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
