use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders},
};

pub const ACCENT: Color = Color::Yellow;
pub const HIGHLIGHT: Color = Color::Magenta;

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn success() -> Style {
    Style::default().fg(Color::Green)
}

pub fn failure() -> Style {
    Style::default().fg(Color::Red)
}

pub fn titled_block<'a, T: Into<Title<'a>>>(title: T) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Lesson heading followed by a short subtitle
pub fn heading<'a>(title: &'a str, subtitle: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(title, accent_bold())),
        Line::from(Span::raw(subtitle)),
    ]
}

/// "Continuer" action, greyed out until the lesson allows it
pub fn continue_line(label: &str, enabled: bool) -> Line<'_> {
    if enabled {
        Line::from(vec![
            Span::styled("Entrée", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(format!(" : {} ", label)),
            Span::styled("✓", success()),
        ])
    } else {
        Line::from(Span::styled(format!("Entrée : {}", label), muted()))
    }
}

/// Footer key hints, e.g. [("Esc", "quitter"), ("F1", "aide")]
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(format!(": {}", action)));
    }
    Line::from(spans)
}
