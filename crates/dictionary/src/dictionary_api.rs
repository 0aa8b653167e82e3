// https://dictionaryapi.dev/ - GET {base}/{word}, responds with an array of entries or 404

use reqwest::StatusCode;

use crate::{DictionaryError, Entry};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// The word is appended as-is. Only what the url parser encodes implicitly
/// (spaces) gets escaped, so words containing `?`, `#` or `/` produce a
/// different request path.
pub(crate) fn definition_url(base_url: &str, word: &str) -> String {
    format!("{}/{word}", base_url.trim_end_matches('/'))
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Entry, DictionaryError> {
    let url = definition_url(base_url, word);
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client
        .get(&url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;

    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        return Err(DictionaryError::NotFound {
            word: word.to_owned(),
        });
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status.as_u16()));
    }

    let entries = res
        .json::<Vec<Entry>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    tracing::debug!(word, count = entries.len(), "received entries");
    entries
        .into_iter()
        .next()
        .ok_or(DictionaryError::EmptyResponse)
}
