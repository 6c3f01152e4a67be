use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::lessons::ByteConverter;
use crate::lessons::converter::ConverterField;
use crate::units::{Unit, format_in_unit, format_number};
use crate::ui::utils::{HIGHLIGHT, continue_line, heading, muted, titled_block};

/// Render the byte unit converter
pub fn render(f: &mut Frame, conv: &ByteConverter, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(3), // Inputs
            Constraint::Min(8),    // Results
            Constraint::Length(1), // Continue
        ])
        .split(area);

    let title = Paragraph::new(heading(
        "Conversion en Octets",
        "Explorez la relation entre les différentes unités de mesure",
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_inputs(f, conv, chunks[1]);
    render_results(f, conv, chunks[2]);

    let action = Paragraph::new(continue_line("Continuer", conv.has_interacted()))
        .alignment(Alignment::Center);
    f.render_widget(action, chunks[3]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default()
    }
}

fn render_inputs(f: &mut Frame, conv: &ByteConverter, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let value_focused = conv.focus == ConverterField::Value;
    let value = Paragraph::new(Span::styled(conv.input.as_str(), Style::default().fg(Color::Yellow)))
        .block(titled_block("Valeur :").border_style(focus_style(value_focused)));
    f.render_widget(value, chunks[0]);
    if value_focused {
        f.set_cursor(chunks[0].x + conv.input.chars().count() as u16 + 1, chunks[0].y + 1);
    }

    let mut units = Vec::new();
    for unit in Unit::ALL {
        let style = if unit == conv.unit() {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            muted()
        };
        units.push(Span::styled(format!(" {} ", unit.label()), style));
        units.push(Span::raw(" "));
    }
    let unit_focused = conv.focus == ConverterField::Unit;
    let selector = Paragraph::new(Line::from(units))
        .block(titled_block("Unité : (←/→)").border_style(focus_style(unit_focused)));
    f.render_widget(selector, chunks[1]);
}

fn render_results(f: &mut Frame, conv: &ByteConverter, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let bytes = conv.bytes();
    let mut cells = vec![("En bits :".to_string(), format!("{} bits", format_number(conv.bits())))];
    for unit in Unit::ALL {
        cells.push((format!("En {} :", unit.long_name()), format_in_unit(bytes, unit)));
    }

    for (row, pair) in rows.iter().zip(cells.chunks(2)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (col, (caption, value)) in cols.iter().zip(pair) {
            let widget = Paragraph::new(Span::styled(value.as_str(), Style::default().fg(HIGHLIGHT)))
                .block(titled_block(caption.as_str()));
            f.render_widget(widget, *col);
        }
    }
}
