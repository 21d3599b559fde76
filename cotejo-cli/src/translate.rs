//! Client for the machine-translation service that produces the reference
//! translation. Responses are cached on disk so repeated practice runs over
//! the same sentence file stay free and fast.

use anyhow::Context;
use language_utils::Language;
use std::path::PathBuf;
use xxhash_rust::xxh3::xxh3_64;

pub struct Translator {
    client: reqwest::Client,
    source_language: &'static str,
    target_language: &'static str,
    api_key: String,
    cache_dir: PathBuf,
}

impl Translator {
    pub fn from_env(
        source_language: Language,
        target_language: Language,
        cache_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY")
            .context("GOOGLE_TRANSLATE_API_KEY not set")?;
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self {
            client: reqwest::Client::new(),
            source_language: source_language.iso_639_1(),
            target_language: target_language.iso_639_1(),
            api_key,
            cache_dir,
        })
    }

    pub async fn translate(&self, text: &str) -> anyhow::Result<String> {
        let hash_input = format!("{}::{}::{text}", self.source_language, self.target_language);
        let cache_file = self
            .cache_dir
            .join(format!("{}.txt", xxh3_64(hash_input.as_bytes())));
        if cache_file.exists() {
            return std::fs::read_to_string(&cache_file).context("failed to read cached translation");
        }

        let url = format!(
            "https://translation.googleapis.com/language/translate/v2?key={}",
            self.api_key
        );
        let response = self
            .client
            .post(&url)
            .form(&[
                ("q", text),
                ("source", self.source_language),
                ("target", self.target_language),
                ("format", "text"),
            ])
            .send()
            .await
            .context("failed to call the translation service")?;
        let value: serde_json::Value = response
            .json()
            .await
            .context("failed to parse the translation response")?;
        let translated = value["data"]["translations"][0]["translatedText"]
            .as_str()
            .context("translation response had no translated text")?
            .to_string();

        std::fs::write(&cache_file, &translated)?;
        Ok(translated)
    }
}
