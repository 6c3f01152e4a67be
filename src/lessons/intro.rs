use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::Outcome;
use crate::content::IntroQuestion;

/// Delays used to pace the mini quiz after a correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub advance_delay: Duration,
    pub complete_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            advance_delay: Duration::from_millis(1000),
            complete_delay: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Reading,
    Answering,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    NextQuestion,
    Complete,
}

pub struct Introduction {
    questions: Vec<IntroQuestion>,
    current: usize,
    pub answer: String,
    phase: Phase,
    is_correct: bool,
    show_hint: bool,
    pending: Option<(Instant, Transition)>,
    pacing: Pacing,
}

impl Introduction {
    /// Build the lesson with a freshly shuffled copy of `questions`
    pub fn new<R: Rng + ?Sized>(questions: &[IntroQuestion], rng: &mut R, pacing: Pacing) -> Self {
        let mut questions = questions.to_vec();
        questions.shuffle(rng);
        debug!(
            "intro question order: {:?}",
            questions.iter().map(|q| q.answer).collect::<Vec<_>>()
        );

        Introduction {
            questions,
            current: 0,
            answer: String::new(),
            phase: Phase::Reading,
            is_correct: false,
            show_hint: false,
            pending: None,
            pacing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[IntroQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&IntroQuestion> {
        self.questions.get(self.current)
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Hint for the current question, once a wrong answer revealed it
    pub fn visible_hint(&self) -> Option<&'static str> {
        if self.show_hint {
            self.current_question().and_then(|q| q.hint)
        } else {
            None
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn start_quiz(&mut self) {
        if self.phase == Phase::Reading {
            self.phase = Phase::Answering;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.accepts_input() {
            self.answer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.accepts_input() {
            self.answer.pop();
        }
    }

    fn accepts_input(&self) -> bool {
        self.phase == Phase::Answering && self.pending.is_none()
    }

    /// Submit whatever is in the answer buffer
    pub fn submit(&mut self, now: Instant) -> bool {
        let text = self.answer.clone();
        self.submit_answer(&text, now)
    }

    /// Check `text` against the current question; returns whether it matched
    pub fn submit_answer(&mut self, text: &str, now: Instant) -> bool {
        if !self.accepts_input() {
            debug!("intro submission ignored in phase {:?}", self.phase);
            return false;
        }
        let Some(question) = self.current_question() else {
            return false;
        };

        if text.trim().to_lowercase() == question.answer {
            self.is_correct = true;
            let transition = if self.is_last_question() {
                (now + self.pacing.complete_delay, Transition::Complete)
            } else {
                (now + self.pacing.advance_delay, Transition::NextQuestion)
            };
            self.pending = Some(transition);
            true
        } else {
            self.show_hint = true;
            false
        }
    }

    /// Fire a pending transition whose deadline has passed
    pub fn tick(&mut self, now: Instant) -> Outcome {
        match self.pending {
            Some((due, transition)) if now >= due => {
                self.pending = None;
                match transition {
                    Transition::NextQuestion => {
                        self.current += 1;
                        self.answer.clear();
                        self.is_correct = false;
                        self.show_hint = false;
                        Outcome::Stay
                    }
                    Transition::Complete => {
                        self.phase = Phase::Finished;
                        Outcome::Complete
                    }
                }
            }
            _ => Outcome::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::INTRO_QUESTIONS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn lesson(seed: u64) -> Introduction {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut intro = Introduction::new(&INTRO_QUESTIONS, &mut rng, Pacing::default());
        intro.start_quiz();
        intro
    }

    fn answer_current(intro: &mut Introduction, now: Instant) -> bool {
        let expected = intro.current_question().unwrap().answer;
        intro.submit_answer(expected, now)
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = lesson(42);
        let b = lesson(42);
        assert_eq!(a.questions(), b.questions());

        let mut sorted: Vec<_> = a.questions().iter().map(|q| q.answer).collect();
        sorted.sort();
        assert_eq!(sorted, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_fixed_rng_gives_known_order() {
        // Every draw is 0, so each step swaps with the front
        let mut rng = StepRng::new(0, 0);
        let intro = Introduction::new(&INTRO_QUESTIONS, &mut rng, Pacing::default());
        let order: Vec<_> = intro.questions().iter().map(|q| q.answer).collect();
        assert_eq!(order, vec!["0", "2", "1"]);
    }

    #[test]
    fn test_submissions_ignored_before_quiz_starts() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut intro = Introduction::new(&INTRO_QUESTIONS, &mut rng, Pacing::default());
        assert_eq!(intro.phase(), Phase::Reading);
        assert!(!intro.submit_answer("1", Instant::now()));
        intro.push_char('1');
        assert!(intro.answer.is_empty());
    }

    #[test]
    fn test_wrong_answer_reveals_hint_only_for_that_question() {
        let mut intro = lesson(7);
        let now = Instant::now();

        // Walk to the question that carries a hint
        while intro.current_question().unwrap().hint.is_none() {
            assert!(answer_current(&mut intro, now));
            intro.tick(now + Duration::from_secs(1));
        }

        assert!(!intro.submit_answer("trois", now));
        assert_eq!(intro.visible_hint(), Some("Pensez aux états possibles : allumé ou éteint"));
        // Retries stay open
        assert!(answer_current(&mut intro, now));
    }

    #[test]
    fn test_hint_does_not_carry_over_to_next_question() {
        let mut rng = StepRng::new(0, 0);
        let mut intro = Introduction::new(&INTRO_QUESTIONS, &mut rng, Pacing::default());
        intro.start_quiz();
        let now = Instant::now();

        // "0" has no hint, the wrong answer still arms the flag
        assert_eq!(intro.current_question().unwrap().answer, "0");
        assert!(!intro.submit_answer("9", now));
        assert_eq!(intro.visible_hint(), None);
        assert!(answer_current(&mut intro, now));
        intro.tick(now + Duration::from_secs(1));

        assert!(intro.current_question().unwrap().hint.is_some());
        assert_eq!(intro.visible_hint(), None);
    }

    #[test]
    fn test_answer_is_case_insensitive_and_trimmed() {
        let mut intro = lesson(3);
        let expected = intro.current_question().unwrap().answer.to_uppercase();
        assert!(intro.submit_answer(&format!(" {expected} "), Instant::now()));
    }

    #[test]
    fn test_advance_waits_for_delay() {
        let mut intro = lesson(11);
        let now = Instant::now();
        assert!(answer_current(&mut intro, now));
        assert!(intro.is_correct());

        assert_eq!(intro.tick(now + Duration::from_millis(999)), Outcome::Stay);
        assert_eq!(intro.current_index(), 0);

        assert_eq!(intro.tick(now + Duration::from_millis(1000)), Outcome::Stay);
        assert_eq!(intro.current_index(), 1);
        assert!(!intro.is_correct());
        assert!(intro.answer.is_empty());
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut intro = lesson(5);
        let mut now = Instant::now();
        let mut completions = 0;

        for _ in 0..INTRO_QUESTIONS.len() {
            assert!(answer_current(&mut intro, now));
            // A second submission while waiting is ignored
            assert!(!intro.submit_answer("x", now));
            now += Duration::from_millis(1000);
            if intro.tick(now).is_complete() {
                completions += 1;
            }
        }
        assert_eq!(completions, 0, "last question needs the longer delay");

        now += Duration::from_millis(500);
        for _ in 0..3 {
            if intro.tick(now).is_complete() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(intro.phase(), Phase::Finished);
    }
}
