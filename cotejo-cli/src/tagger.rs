//! Client for the external POS-tagging service.
//!
//! The service wraps a pretrained tagging model behind a small JSON API:
//! POST the text, get back one entry per token with its Universal POS label
//! and lemma. Punctuation tokens are dropped here so they never participate
//! in alignment.

use anyhow::Context;
use language_utils::{AnnotatedSentence, Language, PosCategory};
use serde::{Deserialize, Serialize};

pub struct Tagger {
    client: reqwest::Client,
    url: String,
    language: Language,
}

#[derive(Serialize)]
struct TagRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct TagResponse {
    tokens: Vec<TaggedToken>,
}

#[derive(Deserialize)]
struct TaggedToken {
    text: String,
    pos: String,
    lemma: String,
}

impl Tagger {
    pub fn from_env(language: Language) -> anyhow::Result<Self> {
        let url = std::env::var("COTEJO_TAGGER_URL").context("COTEJO_TAGGER_URL not set")?;
        Ok(Self {
            client: reqwest::Client::new(),
            url,
            language,
        })
    }

    /// Tag a normalized sentence, returning index-aligned tokens, POS
    /// categories, and lemmas with punctuation excluded.
    pub async fn tag(&self, text: &str) -> anyhow::Result<AnnotatedSentence> {
        let response: TagResponse = self
            .client
            .post(&self.url)
            .json(&TagRequest {
                text,
                language: self.language.iso_639_1(),
            })
            .send()
            .await
            .context("failed to call the tagging service")?
            .json()
            .await
            .context("failed to parse the tagging response")?;

        log::debug!("tagged {:?} into {} tokens", text, response.tokens.len());

        let mut tokens = Vec::new();
        let mut tags = Vec::new();
        let mut lemmas = Vec::new();
        for token in response.tokens {
            if token.pos == "PUNCT" {
                continue;
            }
            tokens.push(token.text);
            tags.push(PosCategory::from_raw(&token.pos));
            lemmas.push(token.lemma);
        }
        AnnotatedSentence::new(tokens, tags, lemmas)
            .context("tagging service returned misaligned annotations")
    }
}
