//! # Daily Quiz
//!
//! One fixed question with three fixed options. The first answer is recorded
//! and locks the quiz for the rest of the session; there is no retry.

use crate::catalog::{CORRECT_ANSWER, CORRECT_FEEDBACK, INCORRECT_FEEDBACK};

/// How an option button should be marked once the quiz is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Not yet answered, or neither chosen nor correct
    Unmarked,
    /// The designated correct option
    Correct,
    /// The chosen option, when it is not the correct one
    Wrong,
}

impl OptionMark {
    pub fn css_class(&self) -> &'static str {
        match self {
            OptionMark::Unmarked => "quiz-option",
            OptionMark::Correct => "quiz-option quiz-option-correct",
            OptionMark::Wrong => "quiz-option quiz-option-wrong",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    selected: Option<String>,
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `choice` if nothing has been recorded yet.
    ///
    /// Returns `Some(correct)` when the answer was accepted and `None` when the
    /// quiz was already locked.
    pub fn submit(&mut self, choice: &str) -> Option<bool> {
        if self.selected.is_some() {
            return None;
        }
        self.selected = Some(choice.to_string());
        Some(choice == CORRECT_ANSWER)
    }

    /// Answer-locked flag. One-way for the session.
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_correct(&self) -> bool {
        self.selected() == Some(CORRECT_ANSWER)
    }

    pub fn mark(&self, option: &str) -> OptionMark {
        match self.selected() {
            None => OptionMark::Unmarked,
            Some(_) if option == CORRECT_ANSWER => OptionMark::Correct,
            Some(chosen) if chosen == option => OptionMark::Wrong,
            Some(_) => OptionMark::Unmarked,
        }
    }

    /// Feedback paragraph shown under the options, once answered.
    pub fn feedback(&self) -> Option<&'static str> {
        if !self.is_answered() {
            None
        } else if self.is_correct() {
            Some(CORRECT_FEEDBACK)
        } else {
            Some(INCORRECT_FEEDBACK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_answer_locks() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.submit("Nuke it"), Some(false));
        assert!(quiz.is_answered());
        assert_eq!(quiz.submit("Redirect its trajectory"), None);
        assert_eq!(quiz.selected(), Some("Nuke it"));
        assert!(!quiz.is_correct());
    }

    #[test]
    fn test_marks_after_wrong_answer() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.mark("Nuke it"), OptionMark::Unmarked);
        quiz.submit("Build a giant shield");
        assert_eq!(quiz.mark("Redirect its trajectory"), OptionMark::Correct);
        assert_eq!(quiz.mark("Build a giant shield"), OptionMark::Wrong);
        assert_eq!(quiz.mark("Nuke it"), OptionMark::Unmarked);
    }

    #[test]
    fn test_marks_after_correct_answer() {
        let mut quiz = Quiz::new();
        quiz.submit(CORRECT_ANSWER);
        assert_eq!(quiz.mark(CORRECT_ANSWER), OptionMark::Correct);
        assert_eq!(quiz.mark("Build a giant shield"), OptionMark::Unmarked);
    }

    #[test]
    fn test_feedback() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.feedback(), None);
        quiz.submit("Nuke it");
        assert_eq!(quiz.feedback(), Some(INCORRECT_FEEDBACK));

        let mut quiz = Quiz::new();
        quiz.submit(CORRECT_ANSWER);
        assert_eq!(quiz.feedback(), Some(CORRECT_FEEDBACK));
    }

    #[test]
    fn test_unknown_option_is_accepted() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.submit("Ask nicely"), Some(false));
        assert!(quiz.is_answered());
    }
}
