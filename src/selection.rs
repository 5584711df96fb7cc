use rand::seq::SliceRandom;

/// Strategy for choosing the next question among unanswered candidates.
///
/// Injected into the database handle so tests can swap the random pick for a
/// deterministic one.
pub trait QuestionPicker: Send + Sync {
    fn pick(&self, candidates: &[i64]) -> Option<i64>;
}

/// Picks uniformly at random.
pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick(&self, candidates: &[i64]) -> Option<i64> {
        candidates.choose(&mut rand::thread_rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_returns_a_candidate() {
        let candidates = [3, 7, 11];
        for _ in 0..20 {
            let picked = RandomPicker.pick(&candidates).unwrap();
            assert!(candidates.contains(&picked));
        }
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert_eq!(RandomPicker.pick(&[]), None);
    }
}
