use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::lessons::Quiz;
use crate::lessons::quiz::QuestionState;
use crate::ui::utils::{HIGHLIGHT, accent_bold, failure, heading, muted, success, titled_block};

/// Render the final quiz
pub fn render(f: &mut Frame, quiz: &Quiz, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(8),    // Question + options
            Constraint::Length(4), // Explanation
            Constraint::Length(1), // Action
            Constraint::Length(1), // Score
        ])
        .split(area);

    let position = format!("Question {} sur {}", quiz.current_index() + 1, quiz.total());
    let title = Paragraph::new(heading("Questionnaire final", &position)).alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_options(f, quiz, chunks[1]);

    if let QuestionState::Submitted { correct } = quiz.state() {
        let verdict = if correct {
            Span::styled("✓ Bonne réponse. ", success())
        } else {
            Span::styled("✗ Mauvaise réponse. ", failure())
        };
        let explanation = Paragraph::new(Line::from(vec![
            verdict,
            Span::raw(quiz.question().explanation),
        ]))
        .wrap(Wrap { trim: true })
        .block(titled_block("Explication"));
        f.render_widget(explanation, chunks[2]);
    }

    let action = match quiz.state() {
        QuestionState::Unanswered => Line::from(Span::styled("Entrée : Valider", muted())),
        QuestionState::Answered => Line::from(vec![
            Span::styled("Entrée", accent_bold()),
            Span::raw(" : Valider"),
        ]),
        QuestionState::Submitted { .. } => {
            let label = if quiz.is_last_question() {
                " : Terminer le quiz ✓"
            } else {
                " : Question suivante ✓"
            };
            Line::from(vec![Span::styled("Entrée", accent_bold()), Span::raw(label)])
        }
    };
    f.render_widget(Paragraph::new(action).alignment(Alignment::Center), chunks[3]);

    let score = Paragraph::new(format!("Score actuel : {} / {}", quiz.score(), quiz.total()))
        .alignment(Alignment::Center)
        .style(muted());
    f.render_widget(score, chunks[4]);
}

/// Colour an option: yellow while picking, green/red once graded
fn option_style(quiz: &Quiz, index: usize) -> Style {
    if !quiz.is_selected(index) {
        return Style::default();
    }
    if quiz.is_submitted() {
        if quiz.question().correct_answers.contains(&index) {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}

fn render_options(f: &mut Frame, quiz: &Quiz, area: Rect) {
    let question = quiz.question();
    let mut lines = vec![
        Line::from(Span::styled(question.text, accent_bold())),
        Line::from(""),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let pointer = if i == quiz.cursor && !quiz.is_submitted() { "› " } else { "  " };
        let checkbox = if quiz.is_selected(i) { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(pointer, Style::default().fg(HIGHLIGHT)),
            Span::styled(format!("{} {}. {}", checkbox, i + 1, option), option_style(quiz, i)),
        ]));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_block("Choisissez une ou plusieurs réponses (Espace)"));
    f.render_widget(widget, area);
}
