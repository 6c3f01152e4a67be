use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::content::FileExample;
use crate::lessons::FileExamples;
use crate::lessons::files::{fits_in_email, storage_tiers};
use crate::units::{bytes_to_bits, format_size, group_thousands};
use crate::ui::utils::{HIGHLIGHT, accent_bold, continue_line, failure, heading, muted, success, titled_block};

/// Render the gallery of file sizes
pub fn render(f: &mut Frame, gallery: &FileExamples, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(10),   // Gallery + explanation
            Constraint::Length(1), // Continue
        ])
        .split(area);

    let title = Paragraph::new(heading(
        "Exemples de Fichiers",
        "Découvrez le poids de différents types de fichiers courants",
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_gallery(f, gallery, body[0]);
    if let Some(example) = gallery.selected() {
        render_explanation(f, example, body[1]);
    } else {
        let placeholder = Paragraph::new(Span::styled("Sélectionnez un fichier pour voir les détails", muted()))
            .alignment(Alignment::Center)
            .block(titled_block("Détails"));
        f.render_widget(placeholder, body[1]);
    }

    let action = Paragraph::new(continue_line("Terminer le cours", true))
        .alignment(Alignment::Center);
    f.render_widget(action, chunks[2]);
}

fn render_gallery(f: &mut Frame, gallery: &FileExamples, area: Rect) {
    let lines: Vec<Line> = gallery
        .examples()
        .iter()
        .enumerate()
        .map(|(i, example)| {
            let selected = gallery.selected_index() == Some(i);
            let pointer = if i == gallery.cursor { "› " } else { "  " };
            let name_style = if selected {
                Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(pointer, Style::default().fg(HIGHLIGHT)),
                Span::raw(format!("{} {} ", i + 1, example.icon.glyph())),
                Span::styled(example.name, name_style),
                Span::styled(format!("  {}", format_size(example.size_bytes)), muted()),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(titled_block("Fichiers (↑/↓ puis Espace, ou 1-7)"));
    f.render_widget(widget, area);
}

fn render_explanation(f: &mut Frame, example: &FileExample, area: Rect) {
    let mut lines = vec![
        Line::from(Span::raw(example.description)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Taille en octets : "),
            Span::styled(
                format!("{} octets", group_thousands(example.size_bytes)),
                Style::default().fg(HIGHLIGHT),
            ),
        ]),
        Line::from(vec![
            Span::raw("Taille en bits : "),
            Span::styled(
                format!("{} bits", group_thousands(bytes_to_bits(example.size_bytes))),
                Style::default().fg(HIGHLIGHT),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Pour stocker ce fichier, il vous faudrait :", accent_bold())),
    ];
    for tier in storage_tiers(example.size_bytes) {
        lines.push(Line::from(format!("  • {}", tier.label())));
    }
    lines.push(Line::from(""));
    lines.push(if fits_in_email(example.size_bytes) {
        Line::from(Span::styled(
            "✓ Peut être envoyé en pièce jointe d'e-mail (limite : 25 Mo)",
            success(),
        ))
    } else {
        Line::from(Span::styled(
            "✗ Trop volumineux pour être envoyé en pièce jointe d'e-mail (limite : 25 Mo)",
            failure(),
        ))
    });

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(titled_block(example.name));
    f.render_widget(widget, area);
}
