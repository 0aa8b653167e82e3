use std::cell::{Cell, RefCell};
use std::fmt;

use async_trait::async_trait;
use dictionary::{Dictionary, DictionaryError, Entry};

pub const NOT_FOUND_MESSAGE: &str = "Word not found. Please try another word.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// What the user gets to see when a lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    NotFound,
    Unknown,
}

impl LookupError {
    pub fn message(&self) -> &'static str {
        match self {
            LookupError::NotFound => NOT_FOUND_MESSAGE,
            LookupError::Unknown => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<&DictionaryError> for LookupError {
    fn from(error: &DictionaryError) -> Self {
        match error {
            DictionaryError::NotFound { .. } => LookupError::NotFound,
            _ => LookupError::Unknown,
        }
    }
}

/// Everything the renderer needs to draw one lookup session.
///
/// After a search completes at most one of `result` and `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub loading: bool,
    pub result: Option<Entry>,
    pub error: Option<LookupError>,
}

#[async_trait(?Send)]
pub trait DefinitionSource {
    async fn definition(&self, word: &str) -> Result<Entry, DictionaryError>;
}

#[async_trait(?Send)]
impl DefinitionSource for Dictionary {
    async fn definition(&self, word: &str) -> Result<Entry, DictionaryError> {
        self.get_definition(word).await
    }
}

/// Owns the [`SearchState`] and is the only thing that mutates it.
///
/// Searches may overlap on the same thread; each one is tagged with a
/// sequence number and only the most recently dispatched search is allowed
/// to write its outcome.
pub struct LookupController<S> {
    source: S,
    state: RefCell<SearchState>,
    latest: Cell<u64>,
}

impl<S: DefinitionSource> LookupController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RefCell::new(SearchState::default()),
            latest: Cell::new(0),
        }
    }

    /// Gives `f` read access to the current state.
    pub fn with_state<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Looks `term` up and records the outcome. Blank terms are ignored.
    pub async fn search(&self, term: &str) {
        if term.trim().is_empty() {
            tracing::trace!("ignoring blank search");
            return;
        }

        let sequence = self.latest.get() + 1;
        self.latest.set(sequence);
        {
            let mut state = self.state.borrow_mut();
            state.term = term.to_owned();
            state.loading = true;
            state.result = None;
            state.error = None;
        }
        tracing::debug!(term, sequence, "search dispatched");

        let outcome = self.source.definition(term).await;

        if sequence != self.latest.get() {
            tracing::debug!(
                term,
                sequence,
                latest = self.latest.get(),
                "discarding superseded response"
            );
            return;
        }

        let mut state = self.state.borrow_mut();
        match outcome {
            Ok(entry) => {
                tracing::debug!(term, word = %entry.word, "search resolved");
                state.result = Some(entry);
                state.error = None;
            }
            Err(error) => {
                tracing::warn!(term, %error, "lookup failed");
                state.result = None;
                state.error = Some(LookupError::from(&error));
            }
        }
        state.loading = false;
    }
}
