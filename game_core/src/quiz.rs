use crate::params::Params;
use crate::questions::Question;

/// How an option should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    Open,    // Not answered yet
    Correct, // The right answer, revealed
    Wrong,   // The player's wrong pick
    Dimmed,  // Any other option once answered
}

/// Outcome of a selection and how long to show it before resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub delay_ms: u32,
}

/// Quiz overlay shown while the session awaits an answer.
///
/// The first selection locks the overlay; later selections are ignored.
#[derive(Debug, Clone)]
pub struct QuizOverlay {
    question: &'static Question,
    selected: Option<usize>,
}

impl QuizOverlay {
    pub fn new(question: &'static Question) -> Self {
        Self {
            question,
            selected: None,
        }
    }

    pub fn question(&self) -> &'static Question {
        self.question
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_locked(&self) -> bool {
        self.selected.is_some()
    }

    /// Pick an option. Returns the verdict the first time only.
    pub fn select(&mut self, option: usize) -> Option<Verdict> {
        if self.is_locked() || option >= self.question.options.len() {
            return None;
        }
        self.selected = Some(option);
        self.verdict()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        let correct = self.question.is_correct(self.selected?);
        let delay_ms = if correct {
            Params::CORRECT_REVEAL_MS
        } else {
            Params::WRONG_REVEAL_MS
        };
        Some(Verdict { correct, delay_ms })
    }

    pub fn option_status(&self, option: usize) -> OptionStatus {
        match self.selected {
            None => OptionStatus::Open,
            Some(_) if self.question.is_correct(option) => OptionStatus::Correct,
            Some(picked) if picked == option => OptionStatus::Wrong,
            Some(_) => OptionStatus::Dimmed,
        }
    }

    /// "A. Naming conventions"
    pub fn option_label(&self, option: usize) -> Option<String> {
        let text = self.question.options.get(option)?;
        let letter = char::from(b'A' + (option % 26) as u8);
        Some(format!("{letter}. {text}"))
    }

    /// Feedback line once answered
    pub fn feedback(&self) -> Option<String> {
        let verdict = self.verdict()?;
        Some(if verdict.correct {
            "Correct! You get an extra life!".to_string()
        } else {
            format!(
                "Sorry, that's incorrect. The correct answer is: {}",
                self.question.correct_answer()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QUESTIONS;

    fn overlay() -> QuizOverlay {
        QuizOverlay::new(&QUESTIONS[0])
    }

    #[test]
    fn test_open_before_answer() {
        let quiz = overlay();
        assert!(!quiz.is_locked());
        assert!(quiz.feedback().is_none());
        for i in 0..quiz.question().options.len() {
            assert_eq!(quiz.option_status(i), OptionStatus::Open);
        }
    }

    #[test]
    fn test_correct_selection() {
        let mut quiz = overlay();
        let right = quiz.question().correct;
        let verdict = quiz.select(right).expect("First pick returns a verdict");
        assert!(verdict.correct);
        assert_eq!(verdict.delay_ms, Params::CORRECT_REVEAL_MS);
        assert_eq!(quiz.option_status(right), OptionStatus::Correct);
        assert_eq!(
            quiz.feedback().as_deref(),
            Some("Correct! You get an extra life!")
        );
    }

    #[test]
    fn test_wrong_selection_reveals_answer() {
        let mut quiz = overlay();
        let right = quiz.question().correct;
        let wrong = (right + 1) % quiz.question().options.len();
        let other = (right + 2) % quiz.question().options.len();

        let verdict = quiz.select(wrong).expect("First pick returns a verdict");
        assert!(!verdict.correct);
        assert_eq!(verdict.delay_ms, Params::WRONG_REVEAL_MS);
        assert_eq!(quiz.option_status(wrong), OptionStatus::Wrong);
        assert_eq!(quiz.option_status(right), OptionStatus::Correct);
        assert_eq!(quiz.option_status(other), OptionStatus::Dimmed);
        assert!(quiz
            .feedback()
            .unwrap()
            .ends_with(quiz.question().correct_answer()));
    }

    #[test]
    fn test_selection_locks() {
        let mut quiz = overlay();
        let right = quiz.question().correct;
        let wrong = (right + 1) % quiz.question().options.len();
        quiz.select(wrong);
        assert!(quiz.select(right).is_none(), "No retries");
        assert_eq!(quiz.selected(), Some(wrong));
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut quiz = overlay();
        assert!(quiz.select(99).is_none());
        assert!(!quiz.is_locked());
    }

    #[test]
    fn test_option_labels() {
        let quiz = overlay();
        assert_eq!(quiz.option_label(0).as_deref(), Some("A. Naming conventions"));
        assert_eq!(quiz.option_label(3).as_deref(), Some("D. Indentation rules"));
        assert!(quiz.option_label(4).is_none());
    }
}
