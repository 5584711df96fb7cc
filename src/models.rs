use serde::Deserialize;

/// The four option labels every question uses.
pub const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

pub type Questions = Vec<Question>;

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: String,
    pub options: [String; 4],
    pub correct_options: Vec<String>,
    #[serde(default)]
    pub question_type: QuestionType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Single,
    Multiple,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
        }
    }
}

impl Question {
    /// Catalog invariant: `correct_options` is a non-empty subset of the four
    /// option labels, and a single-choice question has exactly one.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.correct_options.is_empty() {
            return Err("question has no correct options");
        }
        if self
            .correct_options
            .iter()
            .any(|label| !OPTION_LABELS.contains(&label.as_str()))
        {
            return Err("correct option label must be one of A, B, C, D");
        }

        let distinct: std::collections::BTreeSet<&str> =
            self.correct_options.iter().map(String::as_str).collect();
        if self.question_type == QuestionType::Single && distinct.len() != 1 {
            return Err("single-choice question must have exactly one correct option");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &[&str], question_type: QuestionType) -> Question {
        Question {
            question_text: "Q".to_string(),
            options: [
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
                "four".to_string(),
            ],
            correct_options: correct.iter().map(|s| s.to_string()).collect(),
            question_type,
        }
    }

    #[test]
    fn accepts_single_with_one_correct_label() {
        assert!(question(&["B"], QuestionType::Single).validate().is_ok());
    }

    #[test]
    fn accepts_multiple_with_several_correct_labels() {
        assert!(question(&["A", "C"], QuestionType::Multiple)
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_empty_correct_set() {
        assert!(question(&[], QuestionType::Single).validate().is_err());
    }

    #[test]
    fn rejects_label_outside_options() {
        assert!(question(&["E"], QuestionType::Single).validate().is_err());
    }

    #[test]
    fn rejects_single_with_two_correct_labels() {
        assert!(question(&["A", "B"], QuestionType::Single)
            .validate()
            .is_err());
    }

    #[test]
    fn duplicate_labels_collapse_for_single() {
        assert!(question(&["A", "A"], QuestionType::Single)
            .validate()
            .is_ok());
    }
}
