//! Feedback assembly: turns an alignment plus its classifications into the
//! two parallel text streams shown to the learner.

use itertools::Itertools;
use language_utils::AnnotatedSentence;

use crate::align::{EditOp, align};
use crate::classify::{HintFragment, SynonymLookup, classify};

/// Which of the three feedback shapes a comparison produced.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    parse_display::Display,
)]
#[display(style = "snake_case")]
pub enum SummaryKind {
    Perfect,
    WordOrder,
    General,
}

/// The rendered feedback for one comparison.
///
/// `hints` stays vague (POS categories and probable causes, never the
/// answer); `giveaways` spells out the exact token-level fixes. In the
/// general case the two run in parallel, one line per edit operation, in the
/// order the fixes should be applied.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Feedback {
    pub summary: SummaryKind,
    pub hints: Vec<String>,
    pub giveaways: Vec<String>,
}

/// Compare a learner's attempt against the reference translation.
///
/// Exact matches and pure word-order permutations are answered without
/// running the aligner; edit-distance output is ambiguous on reorderings and
/// would only confuse the learner there. Everything else goes through the
/// aligner and the per-operation classifier.
pub fn compare(
    attempt: &AnnotatedSentence,
    reference: &AnnotatedSentence,
    synonyms: &dyn SynonymLookup,
) -> Feedback {
    if attempt.tokens() == reference.tokens() {
        return Feedback {
            summary: SummaryKind::Perfect,
            hints: vec!["Wow! You got it perfect.".to_string()],
            giveaways: vec!["NO FIXES FOR YOU!".to_string()],
        };
    }

    if same_token_multiset(attempt.tokens(), reference.tokens()) {
        return Feedback {
            summary: SummaryKind::WordOrder,
            hints: vec![
                "So close! You have all the right words, but they're in the wrong order."
                    .to_string(),
            ],
            giveaways: vec!["The only error you made is in the order of your words.".to_string()],
        };
    }

    let ops = align(attempt, reference);
    let mut hints = vec![
        "Not bad! You have a few errors.".to_string(),
        "\nIn the order provided below, do the following:".to_string(),
    ];
    let mut giveaways = Vec::new();

    for op in &ops {
        match op {
            EditOp::Match { .. } => {}
            EditOp::Delete { token, tag, .. } => {
                hints.push(format!(
                    "~ DELETE a word. The word to delete has the tag {tag}."
                ));
                giveaways.push(format!("~ Delete \"{token}\"."));
            }
            EditOp::Insert { token, tag, .. } => {
                hints.push(format!("~ ADD a word. The word to add has the tag {tag}."));
                giveaways.push(format!("~ Add \"{token}\"."));
            }
            EditOp::Substitute {
                from_token,
                to_token,
                from_tag,
                to_tag,
                ..
            } => {
                let fragments = classify(op, attempt, reference, synonyms);
                let hint = match fragments.first() {
                    Some(synonym @ HintFragment::Synonyms { .. }) => format!("~ {synonym}"),
                    _ => {
                        let mut hint = format!(
                            "~ SUBSTITUTE a word. Delete a word with tag {from_tag}, and add a word with tag {to_tag}."
                        );
                        for fragment in &fragments {
                            hint.push(' ');
                            hint.push_str(&fragment.to_string());
                        }
                        hint
                    }
                };
                hints.push(hint);
                giveaways.push(format!("~ Replace \"{from_token}\" with \"{to_token}\"."));
            }
        }
    }

    Feedback {
        summary: SummaryKind::General,
        hints,
        giveaways,
    }
}

/// True when both sides hold the same words with the same counts.
fn same_token_multiset(a: &[String], b: &[String]) -> bool {
    a.iter().counts() == b.iter().counts()
}
