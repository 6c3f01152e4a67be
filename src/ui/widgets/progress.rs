use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::content::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Upcoming,
}

pub fn step_status(step_id: usize, current: usize) -> StepStatus {
    if step_id < current {
        StepStatus::Done
    } else if step_id == current {
        StepStatus::Current
    } else {
        StepStatus::Upcoming
    }
}

/// Number of filled cells for a bar `width` cells wide
pub fn filled_cells(current: usize, total: usize, width: u16) -> u16 {
    if total == 0 {
        return 0;
    }
    let current = current.min(total);
    ((width as usize * current) / total) as u16
}

/// Progress track: a fill bar over the list of step titles
pub struct ProgressTrack<'a> {
    steps: &'a [Step],
    current: usize,
}

impl<'a> ProgressTrack<'a> {
    pub fn new(steps: &'a [Step], current: usize) -> Self {
        ProgressTrack { steps, current }
    }

    fn bar(&self, width: u16) -> Line<'static> {
        let filled = filled_cells(self.current, self.steps.len(), width);
        Line::from(vec![
            Span::styled("█".repeat(filled as usize), Style::default().fg(Color::Yellow)),
            Span::styled(
                "░".repeat(width.saturating_sub(filled) as usize),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }

    fn markers(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.steps.len() * 2);
        for step in self.steps {
            let (marker, style) = match step_status(step.id, self.current) {
                StepStatus::Done => (
                    "✓".to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                StepStatus::Current => (
                    format!("({})", step.id),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                StepStatus::Upcoming => (
                    step.id.to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            spans.push(Span::styled(format!("{} {}", marker, step.title), style));
            spans.push(Span::raw("   "));
        }
        spans.pop();
        Line::from(spans)
    }
}

impl Widget for ProgressTrack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![self.bar(area.width), self.markers()];
        Paragraph::new(lines).render(area, buf);
    }
}
