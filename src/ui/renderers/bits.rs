use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::lessons::BitManipulation;
use crate::lessons::bits::CharClass;
use crate::ui::utils::{HIGHLIGHT, continue_line, heading, muted, titled_block};

/// Render the bit toggling exercise
pub fn render(f: &mut Frame, lesson: &BitManipulation, area: Rect) {
    let info_height = if lesson.show_info { 5 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Heading
            Constraint::Length(info_height), // ASCII info
            Constraint::Length(5),           // Bits
            Constraint::Min(5),              // Character
            Constraint::Length(1),           // Continue
        ])
        .split(area);

    let title = Paragraph::new(heading(
        "Manipulation des Bits",
        "Découvrez les caractères cachés derrière chaque combinaison de bits (i : info)",
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    if lesson.show_info {
        let info = Paragraph::new(vec![
            Line::from("Chaque caractère est représenté par 8 bits (1 octet) en ASCII."),
            Line::from("Activez ou désactivez les bits pour découvrir les différents caractères."),
            Line::from("Les caractères spéciaux comme Espace, Tab, ou Entrée ont aussi leur représentation !"),
        ])
        .wrap(Wrap { trim: true })
        .block(titled_block("Info"));
        f.render_widget(info, chunks[1]);
    }

    render_bits(f, lesson, chunks[2]);
    render_character(f, lesson, chunks[3]);

    let action = Paragraph::new(continue_line("Continuer", lesson.has_interacted()))
        .alignment(Alignment::Center);
    f.render_widget(action, chunks[4]);
}

fn render_bits(f: &mut Frame, lesson: &BitManipulation, area: Rect) {
    let mut cells = Vec::new();
    let mut cursor_row = Vec::new();
    for (i, bit) in lesson.bits().iter().enumerate() {
        let style = if *bit {
            Style::default().fg(Color::White).bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            muted()
        };
        cells.push(Span::styled(format!(" {} ", u8::from(*bit)), style));
        cells.push(Span::raw(" "));
        let marker = if i == lesson.cursor { " ^  " } else { "    " };
        cursor_row.push(Span::styled(marker, Style::default().fg(HIGHLIGHT)));
    }

    let weights: Vec<Span> = (0..8)
        .map(|i| Span::styled(format!("{:<4}", 1u32 << (7 - i)), muted()))
        .collect();

    let widget = Paragraph::new(vec![
        Line::from(weights),
        Line::from(cells),
        Line::from(cursor_row),
    ])
    .alignment(Alignment::Center)
    .block(titled_block("Bits (←/→ puis Espace, ou 1-8)"));
    f.render_widget(widget, area);
}

fn render_character(f: &mut Frame, lesson: &BitManipulation, area: Rect) {
    let class = lesson.character();
    let (glyph, caption) = match class {
        CharClass::Printable(c) => (c.to_string(), "Caractère visible".to_string()),
        other => (String::new(), other.description()),
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Valeur décimale : "),
            Span::styled(lesson.decimal().to_string(), Style::default().fg(HIGHLIGHT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            glyph,
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, muted())),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(titled_block("Caractère correspondant"));
    f.render_widget(widget, area);
}
