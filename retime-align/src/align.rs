//! Levenshtein alignment between machine and corrected word sequences.

/// Single edit operation relating source (machine) and target (corrected)
/// word positions.
///
/// A full alignment covers every source index and every target index exactly
/// once each in their respective roles, in forward order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignmentOp {
    /// Words are equal, case-insensitively
    Match { source: usize, target: usize },
    /// Target word replaces the source word
    Substitute { source: usize, target: usize },
    /// Target word has no source counterpart
    Insert { target: usize },
    /// Source word was removed by the editor
    Delete { source: usize },
}

/// Align two word sequences with minimum-edit-distance dynamic programming.
///
/// Unit cost for substitute/insert/delete, zero for a case-insensitive exact
/// match. Comparison is raw lowercase, no punctuation stripping. When
/// backtracking hits equal-cost predecessors it takes substitute, then
/// delete, then insert; the order is arbitrary but fixed so equal-cost
/// alignments reproduce identically.
///
/// Always terminates, in O(m·n) time and space. Nothing bounds the inputs
/// here; callers aligning very long transcripts (>10k words) pay the
/// quadratic table cost.
pub fn align<S, T>(source: &[S], target: &[T]) -> Vec<AlignmentOp>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let source: Vec<String> = source.iter().map(|w| w.as_ref().to_lowercase()).collect();
    let target: Vec<String> = target.iter().map(|w| w.as_ref().to_lowercase()).collect();

    let m = source.len();
    let n = target.len();

    // cost[i * stride + j] = edits to align source[..i] with target[..j]
    let stride = n + 1;
    let mut cost = vec![0usize; (m + 1) * stride];
    for i in 0..=m {
        cost[i * stride] = i;
    }
    for j in 0..=n {
        cost[j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let idx = i * stride + j;
            cost[idx] = if source[i - 1] == target[j - 1] {
                cost[idx - stride - 1]
            } else {
                let substitute = cost[idx - stride - 1];
                let delete = cost[idx - stride];
                let insert = cost[idx - 1];
                substitute.min(delete).min(insert) + 1
            };
        }
    }

    // Backtrack from (m, n); ops come out reversed.
    let mut ops = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        if i == 0 {
            ops.push(AlignmentOp::Insert { target: j - 1 });
            j -= 1;
        } else if j == 0 {
            ops.push(AlignmentOp::Delete { source: i - 1 });
            i -= 1;
        } else if source[i - 1] == target[j - 1] {
            ops.push(AlignmentOp::Match {
                source: i - 1,
                target: j - 1,
            });
            i -= 1;
            j -= 1;
        } else {
            let current = cost[i * stride + j];
            if current == cost[(i - 1) * stride + (j - 1)] + 1 {
                ops.push(AlignmentOp::Substitute {
                    source: i - 1,
                    target: j - 1,
                });
                i -= 1;
                j -= 1;
            } else if current == cost[(i - 1) * stride + j] + 1 {
                ops.push(AlignmentOp::Delete { source: i - 1 });
                i -= 1;
            } else {
                ops.push(AlignmentOp::Insert { target: j - 1 });
                j -= 1;
            }
        }
    }

    ops.reverse();
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::AlignmentOp::*;

    #[test]
    fn equal_sequences_are_all_match() {
        let ops = align(&["I", "think"], &["i", "THINK"]);

        assert_eq!(
            ops,
            [
                Match {
                    source: 0,
                    target: 0
                },
                Match {
                    source: 1,
                    target: 1
                },
            ]
        );
    }

    #[test]
    fn corrections_become_substitutions() {
        let source = ["I", "think", "we", "should"];
        let target = ["I", "believe", "we", "must"];

        let ops = align(&source, &target);

        assert_eq!(
            ops,
            [
                Match {
                    source: 0,
                    target: 0
                },
                Substitute {
                    source: 1,
                    target: 1
                },
                Match {
                    source: 2,
                    target: 2
                },
                Substitute {
                    source: 3,
                    target: 3
                },
            ]
        );
    }

    #[test]
    fn added_word_is_an_insert() {
        let ops = align(&["hello", "world"], &["hello", "my", "world"]);

        assert_eq!(
            ops,
            [
                Match {
                    source: 0,
                    target: 0
                },
                Insert { target: 1 },
                Match {
                    source: 1,
                    target: 2
                },
            ]
        );
    }

    #[test]
    fn removed_word_is_a_delete() {
        let ops = align(&["hello", "my", "world"], &["hello", "world"]);

        assert_eq!(
            ops,
            [
                Match {
                    source: 0,
                    target: 0
                },
                Delete { source: 1 },
                Match {
                    source: 1,
                    target: 1
                },
            ]
        );
    }

    #[test]
    fn empty_source_degenerates_to_all_insert() {
        let ops = align::<&str, _>(&[], &["a", "b"]);

        assert_eq!(ops, [Insert { target: 0 }, Insert { target: 1 }]);
    }

    #[test]
    fn empty_target_degenerates_to_all_delete() {
        let ops = align::<_, &str>(&["a", "b"], &[]);

        assert_eq!(ops, [Delete { source: 0 }, Delete { source: 1 }]);
    }

    #[test]
    fn empty_inputs_produce_no_ops() {
        assert!(align::<&str, &str>(&[], &[]).is_empty());
    }

    #[test]
    fn ties_resolve_substitute_before_insert() {
        // "a" -> "b c" costs 2 either as insert+substitute or
        // substitute+insert; the fixed tie-break keeps the substitute at the
        // later position.
        let ops = align(&["a"], &["b", "c"]);

        assert_eq!(
            ops,
            [
                Insert { target: 0 },
                Substitute {
                    source: 0,
                    target: 1
                },
            ]
        );
    }

    #[test]
    fn ties_resolve_delete_before_insert() {
        // "a b" -> "c" costs 2; substitute wins the first choice, then
        // delete wins over insert for the remaining source word.
        let ops = align(&["a", "b"], &["c"]);

        assert_eq!(
            ops,
            [
                Delete { source: 0 },
                Substitute {
                    source: 1,
                    target: 0
                },
            ]
        );
    }

    #[test]
    fn comparison_is_not_punctuation_normalized() {
        // "hello," differs from "hello" at alignment time even though the
        // vocabulary normalizer would equate them.
        let ops = align(&["hello,"], &["hello"]);

        assert_eq!(
            ops,
            [Substitute {
                source: 0,
                target: 0
            }]
        );
    }
}
