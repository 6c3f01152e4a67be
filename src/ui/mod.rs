pub mod terminal;
pub mod utils;
pub mod input;
pub mod renderers;
pub mod widgets;

use std::io;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame, Terminal,
};

use crate::content::HELP_TEXT;
use crate::lessons::Lesson;
use crate::types::App;
use utils::{accent_bold, key_hints, titled_block};
use widgets::ProgressTrack;

// Re-export the main public functions
pub use terminal::{setup_terminal, restore_terminal};

/// Main UI rendering function
pub fn render_ui(app: &App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    draw_app(app, terminal)
}

pub fn draw_app<B: Backend>(app: &App, terminal: &mut Terminal<B>) -> Result<(), io::Error> {
    terminal.draw(|f| render_frame(f, app))?;
    Ok(())
}

/// Lay out header, progress, optional help, the current lesson and the footer
pub fn render_frame(f: &mut Frame, app: &App) {
    let help_height = if app.help_visible { 5 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(4),           // Progress
            Constraint::Length(help_height), // Help
            Constraint::Min(0),              // Lesson
            Constraint::Length(3),           // Footer
        ])
        .split(f.size());

    render_header(f, chunks[0]);

    let progress = ProgressTrack::new(app.steps(), app.current_step());
    let progress_area = titled_inner(f, chunks[1], "Progression");
    f.render_widget(progress, progress_area);

    if app.help_visible {
        let help = Paragraph::new(HELP_TEXT)
            .wrap(Wrap { trim: true })
            .block(titled_block("Aide").border_style(accent_bold()));
        f.render_widget(help, chunks[2]);
    }

    let lesson_area = titled_inner(f, chunks[3], app.steps()[app.current_step() - 1].title);
    match &app.lesson {
        Lesson::Introduction(intro) => renderers::intro::render(f, intro, lesson_area),
        Lesson::BitManipulation(bits) => renderers::bits::render(f, bits, lesson_area),
        Lesson::ByteConverter(conv) => renderers::converter::render(f, conv, lesson_area),
        Lesson::FileExamples(gallery) => renderers::files::render(f, gallery, lesson_area),
        Lesson::Quiz(quiz) => renderers::quiz::render(f, quiz, lesson_area),
    }

    render_footer(f, app, chunks[4]);
}

/// Draw a bordered block and hand back the area inside it
fn titled_inner(f: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = titled_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

fn render_header(f: &mut Frame, area: Rect) {
    let block = titled_block("");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("💾 ByteWise", accent_bold()),
        Span::raw("  bits, octets et tailles de fichiers"),
    ]));
    f.render_widget(title, inner);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![("Esc", "quitter"), ("F1", "aide"), ("F5", "recommencer")];
    hints.extend_from_slice(match &app.lesson {
        Lesson::Introduction(_) => &[("Entrée", "valider")][..],
        Lesson::BitManipulation(_) => &[("←/→", "choisir"), ("Espace", "basculer"), ("i", "info")][..],
        Lesson::ByteConverter(_) => &[("Tab", "champ"), ("←/→", "unité")][..],
        Lesson::FileExamples(_) => &[("↑/↓", "parcourir"), ("Espace", "détails")][..],
        Lesson::Quiz(_) => &[("↑/↓", "parcourir"), ("Espace", "cocher"), ("Entrée", "valider")][..],
    });

    let footer = Paragraph::new(key_hints(&hints)).block(titled_block(""));
    f.render_widget(footer, area);
}
