// src/models/question.rs

use serde::{Deserialize, Serialize};

/// Number of questions requested per generated quiz.
pub const QUESTIONS_PER_QUIZ: usize = 20;

/// Number of answer options per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single generated multiple-choice question, as served to the client.
///
/// `correct_option` always holds the text of the correct option after
/// normalization; the quiz page compares selected option labels against
/// it. Quizzes are transient and never stored server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: String,
}

/// Correct-option designation as emitted by the model.
/// Models answer either with the option text or with a 0-based index.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CorrectOption {
    Index(usize),
    Text(String),
}

/// A question as parsed straight from the model output, before
/// normalization.
#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: CorrectOption,
}

impl RawQuestion {
    /// Resolves the correct-option designation against the options list.
    ///
    /// Returns `None` unless the question has exactly
    /// [`OPTIONS_PER_QUESTION`] options and the designation identifies
    /// exactly one of them (an out-of-range index, unknown text, or text
    /// matching several options all reject the question).
    pub fn normalize(self) -> Option<Question> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return None;
        }

        let correct = match &self.correct_option {
            CorrectOption::Index(i) => self.options.get(*i)?.clone(),
            CorrectOption::Text(t) => {
                let t = t.trim();
                let mut matches = self.options.iter().filter(|o| o.trim() == t);
                let found = matches.next()?.clone();
                if matches.next().is_some() {
                    return None;
                }
                found
            }
        };

        Some(Question {
            question: self.question,
            options: self.options,
            correct_option: correct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(options: &[&str], correct: CorrectOption) -> RawQuestion {
        RawQuestion {
            question: "Что такое фотосинтез?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct,
        }
    }

    #[test]
    fn normalizes_text_designation() {
        let q = raw(&["А", "Б", "В", "Г"], CorrectOption::Text("В".to_string()))
            .normalize()
            .unwrap();
        assert_eq!(q.correct_option, "В");
    }

    #[test]
    fn normalizes_index_designation_to_option_text() {
        let q = raw(&["А", "Б", "В", "Г"], CorrectOption::Index(1))
            .normalize()
            .unwrap();
        assert_eq!(q.correct_option, "Б");
    }

    #[test]
    fn matches_text_ignoring_surrounding_whitespace() {
        let q = raw(&["А", "Б ", "В", "Г"], CorrectOption::Text(" Б".to_string()))
            .normalize()
            .unwrap();
        assert_eq!(q.correct_option, "Б ");
    }

    #[test]
    fn rejects_wrong_option_count() {
        assert!(
            raw(&["А", "Б", "В"], CorrectOption::Text("А".to_string()))
                .normalize()
                .is_none()
        );
        assert!(
            raw(&["А", "Б", "В", "Г", "Д"], CorrectOption::Index(0))
                .normalize()
                .is_none()
        );
    }

    #[test]
    fn rejects_unknown_text() {
        assert!(
            raw(&["А", "Б", "В", "Г"], CorrectOption::Text("Д".to_string()))
                .normalize()
                .is_none()
        );
    }

    #[test]
    fn rejects_out_of_range_index() {
        assert!(
            raw(&["А", "Б", "В", "Г"], CorrectOption::Index(4))
                .normalize()
                .is_none()
        );
    }

    #[test]
    fn rejects_ambiguous_text_designation() {
        assert!(
            raw(&["А", "Б", "Б", "Г"], CorrectOption::Text("Б".to_string()))
                .normalize()
                .is_none()
        );
    }

    #[test]
    fn index_designation_tolerates_duplicate_options() {
        // An index is positional, so a duplicate elsewhere does not make
        // it ambiguous.
        let q = raw(&["А", "Б", "Б", "Г"], CorrectOption::Index(0))
            .normalize()
            .unwrap();
        assert_eq!(q.correct_option, "А");
    }
}
