use std::time::Instant;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::content::{FILE_EXAMPLES, INTRO_QUESTIONS, QUIZ_QUESTIONS, STEPS, Step};
use crate::lessons::{
    BitManipulation, ByteConverter, FileExamples, Introduction, Lesson, Outcome, Pacing, Quiz,
};

pub const FIRST_STEP: usize = 1;
pub const TICK_RATE_MS: u64 = 100;

/// Top-level state: which step is on screen and whether help is open
pub struct App {
    current_step: usize,
    pub help_visible: bool,
    pub lesson: Lesson,
    rng: StdRng,
    pacing: Pacing,
}

impl App {
    pub fn new(seed: Option<u64>, pacing: Pacing, help_visible: bool) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let lesson = build_lesson(FIRST_STEP, &mut rng, pacing);
        App {
            current_step: FIRST_STEP,
            help_visible,
            lesson,
            rng,
            pacing,
        }
    }

    pub fn steps(&self) -> &'static [Step] {
        &STEPS
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Show `step`; anything outside the course falls back to the first step
    pub fn go_to(&mut self, step: usize) {
        let step = if (1..=STEPS.len()).contains(&step) {
            step
        } else {
            FIRST_STEP
        };
        self.current_step = step;
        self.lesson = build_lesson(step, &mut self.rng, self.pacing);
        info!("entering step {}: {}", self.lesson.step_id(), STEPS[step - 1].title);
    }

    /// Next step, wrapping back to the introduction after the quiz
    pub fn advance(&mut self) {
        let next = if self.current_step >= STEPS.len() {
            FIRST_STEP
        } else {
            self.current_step + 1
        };
        self.go_to(next);
    }

    pub fn reset(&mut self) {
        self.go_to(FIRST_STEP);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// React to a lesson reporting its result
    pub fn apply(&mut self, outcome: Outcome) {
        if outcome.is_complete() {
            self.advance();
        }
    }

    /// Let time-based lesson transitions fire
    pub fn on_tick(&mut self, now: Instant) {
        let outcome = match &mut self.lesson {
            Lesson::Introduction(intro) => intro.tick(now),
            _ => Outcome::Stay,
        };
        self.apply(outcome);
    }
}

fn build_lesson(step: usize, rng: &mut StdRng, pacing: Pacing) -> Lesson {
    match step {
        2 => Lesson::BitManipulation(BitManipulation::new()),
        3 => Lesson::ByteConverter(ByteConverter::new()),
        4 => Lesson::FileExamples(FileExamples::new(&FILE_EXAMPLES)),
        5 => Lesson::Quiz(Quiz::new(&QUIZ_QUESTIONS)),
        _ => Lesson::Introduction(Introduction::new(&INTRO_QUESTIONS, rng, pacing)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::new(Some(3), Pacing::default(), false)
    }

    #[test]
    fn test_advance_walks_every_step_then_wraps() {
        let mut app = app();
        assert_eq!(app.current_step(), 1);
        for expected in [2, 3, 4, 5, 1] {
            app.advance();
            assert_eq!(app.current_step(), expected);
            assert_eq!(app.lesson.step_id(), expected);
        }
    }

    #[test]
    fn test_out_of_range_falls_back_to_first_step() {
        let mut app = app();
        app.go_to(0);
        assert_eq!(app.current_step(), 1);
        app.go_to(4);
        assert_eq!(app.current_step(), 4);
        app.go_to(42);
        assert_eq!(app.current_step(), 1);
        assert!(matches!(app.lesson, Lesson::Introduction(_)));
    }

    #[test]
    fn test_reset_and_help() {
        let mut app = app();
        app.go_to(3);
        app.reset();
        assert_eq!(app.current_step(), 1);

        assert!(!app.help_visible);
        app.toggle_help();
        assert!(app.help_visible);
        app.toggle_help();
        assert!(!app.help_visible);
    }

    #[test]
    fn test_stay_keeps_step() {
        let mut app = app();
        app.go_to(2);
        app.apply(Outcome::Stay);
        assert_eq!(app.current_step(), 2);
        app.apply(Outcome::Complete);
        assert_eq!(app.current_step(), 3);
    }

    #[test]
    fn test_intro_completion_advances_on_tick() {
        let mut app = app();
        let mut now = Instant::now();
        for _ in 0..INTRO_QUESTIONS.len() {
            let Lesson::Introduction(intro) = &mut app.lesson else {
                panic!("expected the introduction");
            };
            intro.start_quiz();
            let answer = intro.current_question().unwrap().answer;
            assert!(intro.submit_answer(answer, now));
            now += Duration::from_millis(1500);
            app.on_tick(now);
        }
        assert_eq!(app.current_step(), 2);
    }

    #[test]
    fn test_pending_intro_transition_dropped_on_reset() {
        let mut app = app();
        let now = Instant::now();
        if let Lesson::Introduction(intro) = &mut app.lesson {
            intro.start_quiz();
            let answer = intro.current_question().unwrap().answer;
            assert!(intro.submit_answer(answer, now));
        }
        app.reset();
        app.on_tick(now + Duration::from_secs(5));
        let Lesson::Introduction(intro) = &app.lesson else {
            panic!("expected the introduction");
        };
        assert_eq!(intro.current_index(), 0);
        assert!(!intro.is_waiting());
    }
}
