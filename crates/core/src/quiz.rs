use crate::model::Question;

/// Result of submitting an answer to a [`QuizSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The session was already finished or empty; nothing changed.
    Ignored,
    Recorded { correct: bool, finished: bool },
}

/// Point-in-time view of session progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: usize,
    pub is_finished: bool,
}

/// One linear run through a fixed list of questions.
///
/// `finished` is true exactly when every question has been answered and the
/// list is non-empty. `score` never exceeds the number of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    finished: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let mut session = Self::default();
        session.start(questions);
        session
    }

    /// Replace the question list and reset progress.
    pub fn start(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.restart();
    }

    /// Reset progress, keeping the same questions.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.finished = false;
    }

    /// Grade `answer` against the current question and advance.
    pub fn submit_answer(&mut self, answer: &str) -> AnswerOutcome {
        if self.finished {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return AnswerOutcome::Ignored;
        };

        let correct = question.is_correct(answer);
        if correct {
            self.score += 1;
        }

        self.current_index += 1;
        if self.current_index == self.questions.len() {
            self.finished = true;
        }

        AnswerOutcome::Recorded {
            correct,
            finished: self.finished,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            answered: self.current_index,
            remaining: self.questions.len().saturating_sub(self.current_index),
            score: self.score,
            is_finished: self.finished,
        }
    }
}
