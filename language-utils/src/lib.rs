pub mod text_cleanup;

use std::fmt;

#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    parse_display::Display,
)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub fn iso_639_1(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

/// Canonical part-of-speech category for a token.
///
/// Raw tagger labels follow the Universal POS tag set (`"NOUN"`, `"DET"`,
/// ...). Labels outside that set are carried through verbatim as
/// [`PosCategory::Raw`] so an unfamiliar tagger vocabulary degrades to
/// opaque-but-displayable categories instead of an error.
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
pub enum PosCategory {
    Noun,
    Verb,
    Aux,
    Det,
    Adj,
    Adp,
    Adv,
    Pron,
    Propn,
    Num,
    Part,
    Intj,
    Cconj,
    Sconj,
    Sym,
    Other,
    /// A tagger label with no known mapping, passed through unchanged.
    Raw(String),
}

impl PosCategory {
    /// Map a raw tagger label to its category. Total: unknown labels come
    /// back as [`PosCategory::Raw`].
    pub fn from_raw(label: &str) -> PosCategory {
        match label {
            "NOUN" => PosCategory::Noun,
            "VERB" => PosCategory::Verb,
            "AUX" => PosCategory::Aux,
            "DET" => PosCategory::Det,
            "ADJ" => PosCategory::Adj,
            "ADP" => PosCategory::Adp,
            "ADV" => PosCategory::Adv,
            "PRON" => PosCategory::Pron,
            "PROPN" => PosCategory::Propn,
            "NUM" => PosCategory::Num,
            "PART" => PosCategory::Part,
            "INTJ" => PosCategory::Intj,
            "CCONJ" => PosCategory::Cconj,
            "SCONJ" => PosCategory::Sconj,
            "SYM" => PosCategory::Sym,
            "X" => PosCategory::Other,
            other => PosCategory::Raw(other.to_string()),
        }
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            PosCategory::Noun => "noun",
            PosCategory::Verb => "verb",
            PosCategory::Aux => "auxiliary",
            PosCategory::Det => "determiner",
            PosCategory::Adj => "adjective",
            PosCategory::Adp => "adposition",
            PosCategory::Adv => "adverb",
            PosCategory::Pron => "pronoun",
            PosCategory::Propn => "proper noun",
            PosCategory::Num => "numeral",
            PosCategory::Part => "particle",
            PosCategory::Intj => "interjection",
            PosCategory::Cconj => "coordinating conjunction",
            PosCategory::Sconj => "subordinating conjunction",
            PosCategory::Sym => "symbol",
            PosCategory::Other => "other",
            PosCategory::Raw(label) => label,
        };
        write!(f, "{word}")
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SentenceError {
    #[error(
        "parallel annotation lists have mismatched lengths: {tokens} tokens, {tags} tags, {lemmas} lemmas"
    )]
    MismatchedLengths {
        tokens: usize,
        tags: usize,
        lemmas: usize,
    },
}

/// A tokenized sentence with index-aligned POS categories and lemmas.
///
/// The three parallel lists always have equal length; construction through
/// [`AnnotatedSentence::new`] is the only way to build one, so a length
/// mismatch coming out of a tagger fails fast instead of silently
/// misaligning every comparison downstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnnotatedSentence {
    tokens: Vec<String>,
    tags: Vec<PosCategory>,
    lemmas: Vec<String>,
}

impl AnnotatedSentence {
    pub fn new(
        tokens: Vec<String>,
        tags: Vec<PosCategory>,
        lemmas: Vec<String>,
    ) -> Result<Self, SentenceError> {
        if tokens.len() != tags.len() || tokens.len() != lemmas.len() {
            return Err(SentenceError::MismatchedLengths {
                tokens: tokens.len(),
                tags: tags.len(),
                lemmas: lemmas.len(),
            });
        }
        Ok(Self {
            tokens,
            tags,
            lemmas,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[PosCategory] {
        &self.tags
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    pub fn token(&self, index: usize) -> &str {
        &self.tokens[index]
    }

    pub fn tag(&self, index: usize) -> &PosCategory {
        &self.tags[index]
    }

    pub fn lemma(&self, index: usize) -> &str {
        &self.lemmas[index]
    }
}
