use clap::Parser;
use dictionary::{DictionaryConfig, DICTIONARY_API_URL};

/// Look up English words in the free dictionary API.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Words to look up; opens an interactive prompt when none are given
    pub words: Vec<String>,

    /// Entries endpoint the word is appended to
    #[arg(long, env = "DICTIONARY_API_URL", default_value = DICTIONARY_API_URL)]
    pub api_url: String,

    /// Log filter directives, e.g. `debug` or `dictionary=trace`
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn dictionary_config(&self) -> DictionaryConfig {
        DictionaryConfig::default().with_base_url(&self.api_url)
    }
}
