//! Minimum-edit-distance alignment of two token sequences.
//!
//! POS tags never influence the alignment cost. They ride along on the
//! emitted operations purely so the classifier and renderer can talk about
//! the words involved.

use language_utils::{AnnotatedSentence, PosCategory};

/// One step of the alignment, ordered left-to-right across the sentences.
///
/// Operations are produced only by [`align`] and are immutable afterwards.
/// `Match` steps are included for completeness but carry no cost and are
/// never surfaced to the learner.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EditOp {
    Match {
        token: String,
        attempt_index: usize,
        reference_index: usize,
    },
    Delete {
        token: String,
        tag: PosCategory,
        attempt_index: usize,
    },
    Insert {
        token: String,
        tag: PosCategory,
        reference_index: usize,
    },
    Substitute {
        from_token: String,
        to_token: String,
        from_tag: PosCategory,
        to_tag: PosCategory,
        attempt_index: usize,
        reference_index: usize,
    },
}

impl EditOp {
    pub fn is_match(&self) -> bool {
        matches!(self, EditOp::Match { .. })
    }
}

/// Align the attempt against the reference with classic Levenshtein dynamic
/// programming: cost 0 for an exact token match, unit cost for deletion,
/// insertion, and substitution.
///
/// When several minimal-cost paths exist, backtracking resolves ties in the
/// fixed priority order match > substitute > delete > insert, so identical
/// inputs always produce the identical operation sequence. O(mn) time and
/// space, fine for sentence-length input.
pub fn align(attempt: &AnnotatedSentence, reference: &AnnotatedSentence) -> Vec<EditOp> {
    let a = attempt.tokens();
    let b = reference.tokens();
    let m = a.len();
    let n = b.len();

    // Row/column 0 hold the cost of pure deletions/insertions from empty,
    // which also covers the empty-sentence edge cases with no special path.
    let mut cost = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in cost.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in cost[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            cost[i][j] = (cost[i - 1][j] + 1)
                .min(cost[i][j - 1] + 1)
                .min(cost[i - 1][j - 1] + substitution);
        }
    }

    // Backtrack from the far corner, collecting operations in reverse.
    let mut ops = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        // 1. Diagonal match: tokens equal and the cost did not increase.
        if i > 0 && j > 0 && cost[i][j] == cost[i - 1][j - 1] && a[i - 1] == b[j - 1] {
            ops.push(EditOp::Match {
                token: a[i - 1].clone(),
                attempt_index: i - 1,
                reference_index: j - 1,
            });
            i -= 1;
            j -= 1;
            continue;
        }
        // 2. Diagonal substitution.
        if i > 0 && j > 0 && cost[i][j] == cost[i - 1][j - 1] + 1 {
            ops.push(EditOp::Substitute {
                from_token: a[i - 1].clone(),
                to_token: b[j - 1].clone(),
                from_tag: attempt.tag(i - 1).clone(),
                to_tag: reference.tag(j - 1).clone(),
                attempt_index: i - 1,
                reference_index: j - 1,
            });
            i -= 1;
            j -= 1;
            continue;
        }
        // 3. Vertical delete.
        if i > 0 && cost[i][j] == cost[i - 1][j] + 1 {
            ops.push(EditOp::Delete {
                token: a[i - 1].clone(),
                tag: attempt.tag(i - 1).clone(),
                attempt_index: i - 1,
            });
            i -= 1;
            continue;
        }
        // 4. Horizontal insert.
        if j > 0 && cost[i][j] == cost[i][j - 1] + 1 {
            ops.push(EditOp::Insert {
                token: b[j - 1].clone(),
                tag: reference.tag(j - 1).clone(),
                reference_index: j - 1,
            });
            j -= 1;
            continue;
        }
        break;
    }
    ops.reverse();

    log::debug!(
        "aligned {} vs {} tokens with {} operations",
        m,
        n,
        ops.iter().filter(|op| !op.is_match()).count()
    );
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn edit_count(ops: &[EditOp]) -> usize {
        ops.iter().filter(|op| !op.is_match()).count()
    }

    #[test]
    fn test_identical_sentences_align_with_only_matches() {
        let s = sentence(&[("el", "DET", "el"), ("gato", "NOUN", "gato")]);
        let ops = align(&s, &s);
        assert_eq!(ops.len(), 2);
        assert_eq!(edit_count(&ops), 0);
    }

    #[test]
    fn test_empty_attempt_yields_all_inserts() {
        let empty = AnnotatedSentence::new(vec![], vec![], vec![]).unwrap();
        let reference = sentence(&[("hola", "INTJ", "hola")]);
        let ops = align(&empty, &reference);
        assert_eq!(
            ops,
            vec![EditOp::Insert {
                token: "hola".to_string(),
                tag: PosCategory::Intj,
                reference_index: 0,
            }]
        );
    }

    #[test]
    fn test_empty_reference_yields_all_deletes() {
        let empty = AnnotatedSentence::new(vec![], vec![], vec![]).unwrap();
        let attempt = sentence(&[("hola", "INTJ", "hola")]);
        let ops = align(&attempt, &empty);
        assert_eq!(
            ops,
            vec![EditOp::Delete {
                token: "hola".to_string(),
                tag: PosCategory::Intj,
                attempt_index: 0,
            }]
        );
    }

    #[test]
    fn test_single_substitution() {
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
        assert_eq!(edit_count(&ops), 1);
        assert_eq!(
            ops[1],
            EditOp::Substitute {
                from_token: "gato".to_string(),
                to_token: "perro".to_string(),
                from_tag: PosCategory::Noun,
                to_tag: PosCategory::Noun,
                attempt_index: 1,
                reference_index: 1,
            }
        );
    }

    #[test]
    fn test_non_match_count_equals_levenshtein_distance() {
        // Known distances checked by hand.
        let cases: &[(&[&str], &[&str], usize)] = &[
            (&["a", "b", "c"], &["a", "b", "c"], 0),
            (&["a", "b", "c"], &["a", "c"], 1),
            (&["a", "b"], &["a", "b", "c", "d"], 2),
            (&["x", "y", "z"], &["a", "b", "c"], 3),
            (&["el", "gato", "negro"], &["el", "negro", "gato"], 2),
            (&[], &["uno", "dos"], 2),
        ];
        for (a, b, distance) in cases {
            let attempt = sentence(
                &a.iter().map(|t| (*t, "X", *t)).collect::<Vec<_>>(),
            );
            let reference = sentence(
                &b.iter().map(|t| (*t, "X", *t)).collect::<Vec<_>>(),
            );
            assert_eq!(
                edit_count(&align(&attempt, &reference)),
                *distance,
                "distance({a:?}, {b:?})"
            );
        }
    }

    #[test]
    fn test_tie_break_prefers_substitutions_for_swapped_pair() {
        // ["a","b"] vs ["b","a"] admits several minimal paths; the fixed
        // priority order must pick two substitutions every time.
        let attempt = sentence(&[("a", "X", "a"), ("b", "X", "b")]);
        let reference = sentence(&[("b", "X", "b"), ("a", "X", "a")]);
        let ops = align(&attempt, &reference);
        assert_eq!(
            ops,
            vec![
                EditOp::Substitute {
                    from_token: "a".to_string(),
                    to_token: "b".to_string(),
                    from_tag: PosCategory::Other,
                    to_tag: PosCategory::Other,
                    attempt_index: 0,
                    reference_index: 0,
                },
                EditOp::Substitute {
                    from_token: "b".to_string(),
                    to_token: "a".to_string(),
                    from_tag: PosCategory::Other,
                    to_tag: PosCategory::Other,
                    attempt_index: 1,
                    reference_index: 1,
                },
            ]
        );
    }

    #[test]
    fn test_operations_come_back_in_sentence_order() {
        let attempt = sentence(&[
            ("yo", "PRON", "yo"),
            ("como", "VERB", "comer"),
            ("pan", "NOUN", "pan"),
        ]);
        let reference = sentence(&[("como", "VERB", "comer"), ("pan", "NOUN", "pan")]);
        let ops = align(&attempt, &reference);
        assert_eq!(
            ops[0],
            EditOp::Delete {
                token: "yo".to_string(),
                tag: PosCategory::Pron,
                attempt_index: 0,
            }
        );
        assert!(ops[1].is_match());
        assert!(ops[2].is_match());
    }
}
