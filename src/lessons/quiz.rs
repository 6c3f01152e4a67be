use std::collections::BTreeSet;

use log::{debug, info};

use super::Outcome;
use crate::content::QuizQuestion;

/// Where the current question stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered,
    Submitted { correct: bool },
}

pub struct Quiz {
    questions: &'static [QuizQuestion],
    current: usize,
    selection: BTreeSet<usize>,
    state: QuestionState,
    score: usize,
    pub cursor: usize,
}

impl Quiz {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Quiz {
            questions,
            current: 0,
            selection: BTreeSet::new(),
            state: QuestionState::Unanswered,
            score: 0,
            cursor: 0,
        }
    }

    pub fn question(&self) -> &'static QuizQuestion {
        &self.questions[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn state(&self) -> QuestionState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, QuestionState::Submitted { .. })
    }

    /// Add or remove an option; locked once the question is submitted
    pub fn toggle_option(&mut self, index: usize) {
        if self.is_submitted() || index >= self.question().options.len() {
            debug!("quiz toggle of option {} ignored in {:?}", index, self.state);
            return;
        }
        if !self.selection.remove(&index) {
            self.selection.insert(index);
        }
        self.state = if self.selection.is_empty() {
            QuestionState::Unanswered
        } else {
            QuestionState::Answered
        };
    }

    pub fn toggle_cursor(&mut self) {
        self.toggle_option(self.cursor);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.question().options.len() {
            self.cursor += 1;
        }
    }

    /// Grade the selection; only an exact match with the answer set scores
    pub fn submit(&mut self) {
        if self.state != QuestionState::Answered {
            debug!("quiz submit ignored in {:?}", self.state);
            return;
        }
        let expected: BTreeSet<usize> = self.question().correct_answers.iter().copied().collect();
        let correct = self.selection == expected;
        if correct {
            self.score += 1;
        }
        self.state = QuestionState::Submitted { correct };
        info!(
            "quiz question {} submitted: {} (score {}/{})",
            self.current + 1,
            if correct { "correct" } else { "incorrect" },
            self.score,
            self.total()
        );
    }

    /// Move past a graded question, or finish after the last one
    pub fn next(&mut self) -> Outcome {
        if !self.is_submitted() {
            debug!("quiz next ignored in {:?}", self.state);
            return Outcome::Stay;
        }
        if self.is_last_question() {
            return Outcome::Complete;
        }
        self.current += 1;
        self.selection.clear();
        self.state = QuestionState::Unanswered;
        self.cursor = 0;
        Outcome::Stay
    }

    /// Submit when answering, move on when already graded
    pub fn confirm(&mut self) -> Outcome {
        if self.is_submitted() {
            self.next()
        } else {
            self.submit();
            Outcome::Stay
        }
    }
}
