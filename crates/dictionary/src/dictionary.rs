use serde::{Deserialize, Deserializer};

/// One result for a word, as returned by the lookup API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}



#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    /// The API sends an empty string when there is no clip.
    #[serde(default, deserialize_with = "non_empty")]
    pub audio: Option<String>,
}


#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_entry() {
        let json = r#"{
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [
                { "text": "həˈləʊ", "audio": "//ssl.gstatic.com/dictionary/static/sounds/20200429/hello--_gb_1.mp3" },
                { "text": "hɛˈləʊ", "audio": "" }
            ],
            "origin": "early 19th century: variant of earlier hollo.",
            "meanings": [
                {
                    "partOfSpeech": "exclamation",
                    "definitions": [
                        {
                            "definition": "used as a greeting or to begin a phone conversation.",
                            "example": "hello there, Katie!",
                            "synonyms": [],
                            "antonyms": []
                        }
                    ]
                },
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "an utterance of ‘hello’; a greeting.", "synonyms": ["greeting"], "antonyms": [] }
                    ],
                    "synonyms": ["salutation"]
                }
            ]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetics.len(), 2);
        assert!(entry.phonetics[0].audio.is_some());
        assert_eq!(entry.phonetics[1].audio, None);
        assert_eq!(entry.meanings[0].part_of_speech, "exclamation");
        assert_eq!(
            entry.meanings[0].definitions[0].example.as_deref(),
            Some("hello there, Katie!")
        );
        assert_eq!(entry.meanings[1].definitions[0].synonyms, vec!["greeting"]);
        assert_eq!(entry.meanings[1].synonyms, vec!["salutation"]);
        assert!(entry.meanings[1].antonyms.is_empty());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "word": "serendipity",
            "phonetics": [{ "text": "/ˌsɛr.ənˈdɪp.ɪ.ti/" }],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{ "definition": "The occurrence of fortunate discoveries by accident." }]
            }]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.phonetic, None);
        assert_eq!(entry.origin, None);
        assert_eq!(entry.phonetics[0].audio, None);
        let definition = &entry.meanings[0].definitions[0];
        assert_eq!(definition.example, None);
        assert!(definition.synonyms.is_empty());
    }

    #[test]
    fn rejects_entry_without_word() {
        let json = r#"{ "phonetics": [], "meanings": [] }"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }
}
