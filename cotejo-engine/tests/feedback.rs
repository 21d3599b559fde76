//! End-to-end comparisons through the public engine surface.

use cotejo_engine::{EditOp, NoSynonyms, SummaryKind, SynonymLookup, align, compare};
use language_utils::{AnnotatedSentence, PosCategory};

fn sentence(words: &[(&str, &str, &str)]) -> AnnotatedSentence {
    AnnotatedSentence::new(
        words.iter().map(|(t, _, _)| t.to_string()).collect(),
        words
            .iter()
            .map(|(_, tag, _)| PosCategory::from_raw(tag))
            .collect(),
        words.iter().map(|(_, _, l)| l.to_string()).collect(),
    )
    .unwrap()
}

/// Synonym table backed by a fixed pair list.
struct PairSynonyms(&'static [(&'static str, &'static str)]);

impl SynonymLookup for PairSynonyms {
    fn are_synonyms(&self, a: &str, b: &str) -> bool {
        self.0
            .iter()
            .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x))
    }
}

#[test]
fn identity_is_perfect_whatever_the_tokens() {
    for words in [
        vec![],
        vec![("hola", "INTJ", "hola")],
        vec![
            ("el", "DET", "el"),
            ("gato", "NOUN", "gato"),
            ("come", "VERB", "comer"),
        ],
    ] {
        let s = sentence(&words);
        assert_eq!(compare(&s, &s, &NoSynonyms).summary, SummaryKind::Perfect);
    }
}

#[test]
fn permutations_never_reach_the_aligner_branch() {
    let attempt = sentence(&[
        ("gato", "NOUN", "gato"),
        ("el", "DET", "el"),
        ("come", "VERB", "comer"),
    ]);
    let reference = sentence(&[
        ("el", "DET", "el"),
        ("gato", "NOUN", "gato"),
        ("come", "VERB", "comer"),
    ]);
    let feedback = compare(&attempt, &reference, &NoSynonyms);
    assert_eq!(feedback.summary, SummaryKind::WordOrder);
    // One line each, not per-operation output.
    assert_eq!(feedback.hints.len(), 1);
    assert_eq!(feedback.giveaways.len(), 1);
}

#[test]
fn gato_for_perro_ends_in_the_expected_giveaway() {
    let attempt = sentence(&[
        ("el", "DET", "el"),
        ("gato", "NOUN", "gato"),
        ("come", "VERB", "comer"),
    ]);
    let reference = sentence(&[
        ("el", "DET", "el"),
        ("perro", "NOUN", "perro"),
        ("come", "VERB", "comer"),
    ]);

    let ops = align(&attempt, &reference);
    let edits: Vec<_> = ops.iter().filter(|op| !op.is_match()).collect();
    assert_eq!(edits.len(), 1);
    assert!(matches!(
        edits[0],
        EditOp::Substitute {
            from_tag: PosCategory::Noun,
            to_tag: PosCategory::Noun,
            ..
        }
    ));

    let feedback = compare(&attempt, &reference, &NoSynonyms);
    assert_eq!(feedback.summary, SummaryKind::General);
    assert_eq!(
        feedback.giveaways,
        vec!["~ Replace \"gato\" with \"perro\".".to_string()]
    );
}

#[test]
fn synonym_substitution_renders_equivalence_not_grammar() {
    let attempt = sentence(&[("el", "DET", "el"), ("carro", "NOUN", "carro")]);
    let reference = sentence(&[("el", "DET", "el"), ("coche", "NOUN", "coche")]);
    let synonyms = PairSynonyms(&[("carro", "coche")]);

    let feedback = compare(&attempt, &reference, &synonyms);
    assert_eq!(feedback.summary, SummaryKind::General);
    let hint = &feedback.hints[2];
    assert_eq!(
        hint,
        "~ Actually, \"carro\" and \"coche\" mean the same thing!"
    );
    assert!(!hint.contains("SUBSTITUTE"));
    // The giveaway stays the plain replacement line.
    assert_eq!(
        feedback.giveaways,
        vec!["~ Replace \"carro\" with \"coche\".".to_string()]
    );
}

#[test]
fn hints_and_giveaways_stay_parallel_per_operation() {
    let attempt = sentence(&[
        ("la", "DET", "el"),
        ("gata", "NOUN", "gato"),
        ("son", "AUX", "ser"),
        ("contento", "ADJ", "contento"),
    ]);
    let reference = sentence(&[
        ("el", "DET", "el"),
        ("gato", "NOUN", "gato"),
        ("esta", "AUX", "estar"),
        ("contento", "ADJ", "contento"),
    ]);
    let feedback = compare(&attempt, &reference, &NoSynonyms);
    assert_eq!(feedback.summary, SummaryKind::General);
    // Two preamble lines, then one hint per giveaway.
    assert_eq!(feedback.hints.len() - 2, feedback.giveaways.len());
    assert_eq!(feedback.giveaways.len(), 3);
    assert!(feedback.hints[2].contains("gender"));
    assert!(feedback.hints[4].contains("wrong verb for \"to be\""));
}

#[test]
fn mixed_edit_sequence_keeps_alignment_order() {
    let attempt = sentence(&[
        ("yo", "PRON", "yo"),
        ("bebe", "VERB", "beber"),
        ("leche", "NOUN", "leche"),
    ]);
    let reference = sentence(&[("bebo", "VERB", "beber"), ("leche", "NOUN", "leche")]);
    let feedback = compare(&attempt, &reference, &NoSynonyms);
    assert_eq!(
        feedback.giveaways,
        vec![
            "~ Delete \"yo\".".to_string(),
            "~ Replace \"bebe\" with \"bebo\".".to_string(),
        ]
    );
    // Same verb lemma on both sides reads as a conjugation slip.
    assert!(feedback.hints[3].contains("wrong conjugation"));
}
