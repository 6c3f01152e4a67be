use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use crate::lessons::converter::ConverterField;
use crate::lessons::intro::Phase;
use crate::lessons::{BitManipulation, ByteConverter, FileExamples, Introduction, Lesson, Outcome, Quiz};
use crate::types::App;

/// Handle keyboard input; returns true when the user asked to quit
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::F(1) => {
            app.toggle_help();
            return false;
        }
        KeyCode::F(5) => {
            app.reset();
            return false;
        }
        _ => {}
    }

    let outcome = match &mut app.lesson {
        Lesson::Introduction(intro) => handle_intro_keys(intro, key.code, now),
        Lesson::BitManipulation(bits) => handle_bits_keys(bits, key.code),
        Lesson::ByteConverter(conv) => handle_converter_keys(conv, key.code),
        Lesson::FileExamples(gallery) => handle_files_keys(gallery, key.code),
        Lesson::Quiz(quiz) => handle_quiz_keys(quiz, key.code),
    };
    app.apply(outcome);
    false
}

/// 1-based digit key to a 0-based index
fn digit_index(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|d| *d > 0)
        .map(|d| d as usize - 1)
}

fn handle_intro_keys(intro: &mut Introduction, key: KeyCode, now: Instant) -> Outcome {
    match intro.phase() {
        Phase::Reading => {
            if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
                intro.start_quiz();
            }
        }
        Phase::Answering => match key {
            KeyCode::Char(c) => intro.push_char(c),
            KeyCode::Backspace => intro.pop_char(),
            KeyCode::Enter => {
                let correct = intro.submit(now);
                debug!("intro answer {:?} correct: {}", intro.answer, correct);
            }
            _ => {}
        },
        Phase::Finished => {}
    }
    // Completion only ever comes from the pacing timer
    Outcome::Stay
}

fn handle_bits_keys(bits: &mut BitManipulation, key: KeyCode) -> Outcome {
    match key {
        KeyCode::Left => bits.select_prev(),
        KeyCode::Right => bits.select_next(),
        KeyCode::Char(' ') => bits.toggle_selected(),
        KeyCode::Char('i') => bits.toggle_info(),
        KeyCode::Char(c) => {
            if let Some(index) = digit_index(c) {
                bits.toggle_bit(index);
            }
        }
        KeyCode::Enter => return bits.complete(),
        _ => {}
    }
    Outcome::Stay
}

fn handle_converter_keys(conv: &mut ByteConverter, key: KeyCode) -> Outcome {
    match key {
        KeyCode::Tab | KeyCode::BackTab => conv.switch_focus(),
        KeyCode::Enter => return conv.complete(),
        _ => match conv.focus {
            ConverterField::Value => match key {
                KeyCode::Char(c) => conv.push_char(c),
                KeyCode::Backspace => conv.pop_char(),
                KeyCode::Right | KeyCode::Up => conv.next_unit(),
                KeyCode::Left | KeyCode::Down => conv.prev_unit(),
                _ => {}
            },
            ConverterField::Unit => match key {
                KeyCode::Right | KeyCode::Up => conv.next_unit(),
                KeyCode::Left | KeyCode::Down => conv.prev_unit(),
                _ => {}
            },
        },
    }
    Outcome::Stay
}

fn handle_files_keys(gallery: &mut FileExamples, key: KeyCode) -> Outcome {
    match key {
        KeyCode::Up => gallery.cursor_up(),
        KeyCode::Down => gallery.cursor_down(),
        KeyCode::Char(' ') => gallery.select_cursor(),
        KeyCode::Char(c) => {
            if let Some(index) = digit_index(c) {
                gallery.select_example(index);
            }
        }
        KeyCode::Enter => return gallery.complete(),
        _ => {}
    }
    Outcome::Stay
}

fn handle_quiz_keys(quiz: &mut Quiz, key: KeyCode) -> Outcome {
    match key {
        KeyCode::Up => quiz.cursor_up(),
        KeyCode::Down => quiz.cursor_down(),
        KeyCode::Char(' ') => quiz.toggle_cursor(),
        KeyCode::Char(c) => {
            if let Some(index) = digit_index(c) {
                quiz.toggle_option(index);
            }
        }
        KeyCode::Enter => return quiz.confirm(),
        _ => {}
    }
    Outcome::Stay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QUIZ_QUESTIONS;
    use crate::lessons::Pacing;
    use crate::units::Unit;
    use std::time::Duration;

    fn press(app: &mut App, code: KeyCode, now: Instant) -> bool {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    fn type_str(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Some(1), Pacing::default(), false);
        assert!(press(&mut app, KeyCode::Esc, Instant::now()));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(&mut app, ctrl_c, Instant::now()));
        assert!(!press(&mut app, KeyCode::Char('q'), Instant::now()));
    }

    #[test]
    fn test_help_and_restart_keys() {
        let mut app = App::new(Some(1), Pacing::default(), false);
        let now = Instant::now();
        press(&mut app, KeyCode::F(1), now);
        assert!(app.help_visible);
        app.go_to(4);
        press(&mut app, KeyCode::F(5), now);
        assert_eq!(app.current_step(), 1);
    }

    #[test]
    fn test_bits_enter_blocked_until_toggle() {
        let mut app = App::new(Some(1), Pacing::default(), false);
        let now = Instant::now();
        app.go_to(2);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.current_step(), 2);

        press(&mut app, KeyCode::Char('2'), now);
        press(&mut app, KeyCode::Char('8'), now);
        if let Lesson::BitManipulation(bits) = &app.lesson {
            assert_eq!(bits.decimal(), 65);
        }
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.current_step(), 3);
    }

    #[test]
    fn test_converter_keys() {
        let mut app = App::new(Some(1), Pacing::default(), false);
        let now = Instant::now();
        app.go_to(3);
        press(&mut app, KeyCode::Tab, now);
        for _ in 0..3 {
            press(&mut app, KeyCode::Right, now);
        }
        press(&mut app, KeyCode::Tab, now);
        type_str(&mut app, "2", now);
        if let Lesson::ByteConverter(conv) = &app.lesson {
            assert_eq!(conv.unit(), Unit::GB);
            assert_eq!(conv.bytes(), 2_147_483_648.0);
        }
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.current_step(), 4);
    }

    #[test]
    fn test_converter_arrows_change_unit_while_typing() {
        let mut app = App::new(Some(1), Pacing::default(), false);
        let now = Instant::now();
        app.go_to(3);
        press(&mut app, KeyCode::Right, now);
        if let Lesson::ByteConverter(conv) = &app.lesson {
            assert_eq!(conv.focus, ConverterField::Value);
            assert_eq!(conv.unit(), Unit::KB);
            assert!(conv.has_interacted());
        }
        press(&mut app, KeyCode::Right, now);
        press(&mut app, KeyCode::Left, now);
        if let Lesson::ByteConverter(conv) = &app.lesson {
            assert_eq!(conv.unit(), Unit::KB);
        }
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.current_step(), 4);
    }

    #[test]
    fn test_whole_course_by_keyboard() {
        let mut app = App::new(Some(99), Pacing::default(), false);
        let mut now = Instant::now();

        // Introduction
        press(&mut app, KeyCode::Enter, now);
        for _ in 0..3 {
            let answer = match &app.lesson {
                Lesson::Introduction(intro) => intro.current_question().unwrap().answer,
                _ => panic!("expected the introduction"),
            };
            type_str(&mut app, "x", now);
            press(&mut app, KeyCode::Backspace, now);
            type_str(&mut app, answer, now);
            press(&mut app, KeyCode::Enter, now);
            now += Duration::from_millis(1500);
            app.on_tick(now);
        }
        assert_eq!(app.current_step(), 2);

        // Bits
        press(&mut app, KeyCode::Char(' '), now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.current_step(), 3);

        // Converter
        type_str(&mut app, "5", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.current_step(), 4);

        // Files: continuing needs no selection
        press(&mut app, KeyCode::Char('4'), now);
        if let Lesson::FileExamples(gallery) = &app.lesson {
            assert_eq!(gallery.selected_index(), Some(3));
        }
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.current_step(), 5);

        // Quiz
        for question in QUIZ_QUESTIONS.iter() {
            for i in question.correct_answers {
                type_str(&mut app, &(i + 1).to_string(), now);
            }
            press(&mut app, KeyCode::Enter, now);
            if let Lesson::Quiz(quiz) = &app.lesson {
                assert!(matches!(
                    quiz.state(),
                    crate::lessons::quiz::QuestionState::Submitted { correct: true }
                ));
            }
            press(&mut app, KeyCode::Enter, now);
        }
        assert_eq!(app.current_step(), 1);
    }
}
