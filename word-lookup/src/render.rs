use std::fmt::{self, Write};

use dictionary::Entry;

use crate::lookup::SearchState;

/// The prompt only accepts a new search once the current one has resolved.
pub fn submit_enabled(state: &SearchState) -> bool {
    !state.loading
}

pub fn render(state: &SearchState, out: &mut impl Write) -> fmt::Result {
    if state.loading {
        writeln!(out, "Loading...")?;
    }
    if let Some(error) = &state.error {
        writeln!(out, "{error}")?;
    }
    if let Some(entry) = &state.result {
        render_entry(entry, out)?;
    }
    Ok(())
}

pub fn render_to_string(state: &SearchState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render(state, &mut out);
    out
}

fn render_entry(entry: &Entry, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", entry.word)?;
    for phonetic in &entry.phonetics {
        if let Some(text) = &phonetic.text {
            writeln!(out, "  Phonetic: {text}")?;
        }
        if let Some(audio) = &phonetic.audio {
            writeln!(out, "  Audio: {audio}")?;
        }
    }
    for meaning in &entry.meanings {
        writeln!(out, "  {}", meaning.part_of_speech)?;
        for definition in &meaning.definitions {
            writeln!(out, "      Definition: {}", definition.definition)?;
            if let Some(example) = &definition.example {
                writeln!(out, "        Example: \"{example}\"")?;
            }
            if !definition.synonyms.is_empty() {
                writeln!(out, "        Synonyms: {}", definition.synonyms.join(", "))?;
            }
        }
    }
    Ok(())
}
