use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::GridSize;
use crate::game::RenderSnapshot;
use crate::theme::Theme;

/// Values the status line shows besides the snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub max_apples: usize,
    pub bounds: GridSize,
    pub theme: &'a Theme,
}

/// Renders the one-line status bar into `area`.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &RenderSnapshot,
    info: &HudInfo<'_>,
) {
    frame.render_widget(
        Paragraph::new(status_line(snapshot, info)).alignment(Alignment::Center),
        area,
    );
}

fn status_line<'a>(snapshot: &RenderSnapshot, info: &HudInfo<'_>) -> Line<'a> {
    let label = Style::new().fg(info.theme.muted);
    let value = Style::new()
        .fg(info.theme.hud_text)
        .add_modifier(Modifier::BOLD);

    let fields = [
        ("Score", snapshot.score.to_string()),
        ("Length", snapshot.body.len().to_string()),
        (
            "Apples",
            format!("{}/{}", snapshot.apples.len(), info.max_apples),
        ),
        ("Best", info.high_score.max(snapshot.score).to_string()),
        (
            "Grid",
            format!("{}x{}", info.bounds.cols, info.bounds.rows),
        ),
    ];

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (index, (name, text)) in fields.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", label));
        }
        spans.push(Span::styled(format!("{name} "), label));
        spans.push(Span::styled(text, value));
    }

    Line::from(spans)
}
