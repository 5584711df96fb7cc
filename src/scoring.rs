// Scoring engine - pure answer evaluation, no storage access

use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Partial,
    Incorrect,
}

/// Evaluate a selected label set against the correct one.
///
/// Exact match scores 1.0; a proper non-empty subset of the correct set scores
/// the covered fraction, rounded to two decimals; anything else (including a
/// selection containing a wrong label) scores 0.0. The caller rejects empty
/// selections before calling.
pub fn evaluate(selected: &BTreeSet<String>, correct: &BTreeSet<String>) -> (Outcome, f64) {
    if selected == correct {
        return (Outcome::Correct, 1.0);
    }

    if !selected.is_empty() && selected.is_subset(correct) {
        let score = round2(selected.len() as f64 / correct.len() as f64);
        return (Outcome::Partial, score);
    }

    (Outcome::Incorrect, 0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_is_correct() {
        assert_eq!(
            evaluate(&set(&["A", "C"]), &set(&["A", "C"])),
            (Outcome::Correct, 1.0)
        );
    }

    #[test]
    fn proper_subset_is_partial() {
        assert_eq!(
            evaluate(&set(&["A"]), &set(&["A", "C"])),
            (Outcome::Partial, 0.5)
        );
    }

    #[test]
    fn partial_score_rounds_to_two_decimals() {
        let (outcome, score) = evaluate(&set(&["A"]), &set(&["A", "B", "C"]));
        assert_eq!(outcome, Outcome::Partial);
        assert_eq!(score, 0.33);
    }

    #[test]
    fn wrong_label_is_incorrect() {
        assert_eq!(
            evaluate(&set(&["B"]), &set(&["A", "C"])),
            (Outcome::Incorrect, 0.0)
        );
    }

    #[test]
    fn mixed_right_and_wrong_is_incorrect() {
        assert_eq!(
            evaluate(&set(&["A", "B"]), &set(&["A", "C"])),
            (Outcome::Incorrect, 0.0)
        );
    }

    #[test]
    fn empty_selection_is_incorrect_not_partial() {
        // The state machine rejects empty selections before scoring; if one
        // ever reaches evaluate it must not count as a subset match.
        assert_eq!(
            evaluate(&set(&[]), &set(&["A"])),
            (Outcome::Incorrect, 0.0)
        );
    }
}
