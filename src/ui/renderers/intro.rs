use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::lessons::Introduction;
use crate::lessons::intro::Phase;
use crate::ui::utils::{accent_bold, heading, muted, success, titled_block};

/// Render the introduction lesson and its mini quiz
pub fn render(f: &mut Frame, intro: &Introduction, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(7), // What is a bit
            Constraint::Min(0),    // Quiz
        ])
        .split(area);

    let title = Paragraph::new(heading(
        "Le bit : l'unité fondamentale",
        "Découvrons ensemble la plus petite unité d'information en informatique",
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_explanation(f, chunks[1]);

    match intro.phase() {
        Phase::Reading => {
            let start = Paragraph::new(Line::from(vec![
                Span::styled("Entrée", accent_bold()),
                Span::raw(" : Je comprends, passons au quiz ! ›"),
            ]))
            .alignment(Alignment::Center)
            .block(titled_block("Prêt ?"));
            f.render_widget(start, chunks[2]);
        }
        Phase::Answering | Phase::Finished => render_quiz(f, intro, chunks[2]),
    }
}

fn render_explanation(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Un bit (binary digit) est la plus petite unité d'information en informatique."),
        Line::from("Il ne peut prendre que deux valeurs possibles :"),
        Line::from(""),
        Line::from(vec![
            Span::styled("0", accent_bold()),
            Span::styled(" (éteint)", muted()),
            Span::raw("        "),
            Span::styled("1", accent_bold()),
            Span::styled(" (allumé)", muted()),
        ])
        .alignment(Alignment::Center),
    ];
    let explanation = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(titled_block("Qu'est-ce qu'un bit ?"));
    f.render_widget(explanation, area);
}

fn render_quiz(f: &mut Frame, intro: &Introduction, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question
            Constraint::Length(3), // Answer input
            Constraint::Min(0),    // Hint / feedback
        ])
        .split(area);

    let total = intro.questions().len();
    let question_text = intro.current_question().map(|q| q.text).unwrap_or_default();
    let question = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(titled_block(format!(
            "Question {} sur {}",
            intro.current_index() + 1,
            total
        )));
    f.render_widget(question, chunks[0]);

    let input = Paragraph::new(if intro.answer.is_empty() && !intro.is_waiting() {
        Span::styled("Entrez votre réponse...", muted())
    } else {
        Span::styled(intro.answer.as_str(), Style::default().fg(Color::Yellow))
    })
    .block(titled_block("Réponse (Entrée pour valider)"));
    f.render_widget(input, chunks[1]);

    if !intro.is_waiting() && intro.phase() == Phase::Answering {
        f.set_cursor(
            chunks[1].x + intro.answer.chars().count() as u16 + 1,
            chunks[1].y + 1,
        );
    }

    let mut feedback = Vec::new();
    if let Some(hint) = intro.visible_hint() {
        feedback.push(Line::from(Span::styled(hint, Style::default().fg(Color::Yellow))));
    }
    if intro.is_correct() {
        let message = if intro.is_last_question() {
            "✓ Excellent ! Passons à la suite..."
        } else {
            "✓ Excellent ! Question suivante..."
        };
        feedback.push(Line::from(Span::styled(message, success())));
    }
    f.render_widget(Paragraph::new(feedback).wrap(Wrap { trim: true }), chunks[2]);
}
