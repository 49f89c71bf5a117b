use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::{Settings, SettingsField};
use crate::game::DeathReason;
use crate::theme::{theme_at, Theme};
use crate::ui::screen::{MainMenuItem, PauseItem};

/// Outcome shown by the end-of-game popup.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameResult {
    Over(Option<DeathReason>),
    Win,
}

/// Draws the title screen with its menu.
pub fn render_main_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: usize,
    high_score: u32,
    theme: &Theme,
) {
    let [title_row, menu_row, footer_row] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(centered_popup(area, 60, 60));

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("H E B I"),
            Line::from(""),
            Line::from(format!("Best: {high_score}")),
        ])
        .alignment(Alignment::Center)
        .style(Style::new().fg(theme.title).add_modifier(Modifier::BOLD)),
        title_row,
    );

    let labels = MainMenuItem::ALL.map(MainMenuItem::label);
    frame.render_widget(menu_list(&labels, selected, theme), menu_row);

    frame.render_widget(
        Paragraph::new(Line::from("Arrows/WASD move  [Enter] select  [Esc] quit"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.muted)),
        footer_row,
    );
}

/// Draws the settings page; left/right cycles the highlighted row.
pub fn render_settings(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: usize,
    settings: &Settings,
    theme: &Theme,
) {
    let popup = centered_popup(area, 60, 50);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = SettingsField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = settings.value_label(*field, theme_at(settings.theme_index).name);
            let text = format!("{:<10} < {value:^8} >", field.label());
            highlighted(text, index == selected, theme)
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(
        Line::from("Changes apply to the next game").style(Style::new().fg(theme.muted)),
    );

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" settings ").style(Style::new().fg(theme.hud_text))),
        popup,
    );
}

/// Draws the pause popup over the board.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, selected: usize, theme: &Theme) {
    let popup = centered_popup(area, 50, 40);
    frame.render_widget(Clear, popup);

    let labels = PauseItem::ALL.map(PauseItem::label);
    frame.render_widget(
        menu_list(&labels, selected, theme)
            .block(Block::bordered().title(" paused ").style(Style::new().fg(theme.hud_text))),
        popup,
    );
}

/// Final numbers shown by the end-of-game popup.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ResultSummary {
    pub score: u32,
    /// Best on this board, including the game just finished.
    pub best: u32,
    /// The finished game beat the board's previous best.
    pub is_new_high: bool,
}

/// Draws the game-over or win popup.
pub fn render_result(
    frame: &mut Frame<'_>,
    area: Rect,
    result: GameResult,
    summary: ResultSummary,
    theme: &Theme,
) {
    let popup = centered_popup(area, 60, 45);
    frame.render_widget(Clear, popup);

    let (title, cause) = match result {
        GameResult::Win => ("YOU WIN", "The grid is full"),
        GameResult::Over(reason) => (
            "GAME OVER",
            match reason {
                Some(DeathReason::WallCollision) => "Hit the wall",
                Some(DeathReason::SelfCollision) => "Bit yourself",
                None => "",
            },
        ),
    };

    let lines = vec![
        Line::from(title).style(Style::new().fg(theme.title).add_modifier(Modifier::BOLD)),
        Line::from(cause),
        Line::from(""),
        Line::from(format!("Score: {}", summary.score)),
        Line::from(format!("Best: {}", summary.best.max(summary.score))),
        Line::from(if summary.is_new_high { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("[Enter] Main menu").style(Style::new().fg(theme.muted)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().style(Style::new().fg(theme.hud_text))),
        popup,
    );
}

fn menu_list<'a>(labels: &[&'a str], selected: usize, theme: &Theme) -> Paragraph<'a> {
    let lines: Vec<Line<'a>> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| highlighted((*label).to_string(), index == selected, theme))
        .collect();

    Paragraph::new(lines).alignment(Alignment::Center)
}

fn highlighted<'a>(text: String, is_selected: bool, theme: &Theme) -> Line<'a> {
    if is_selected {
        Line::from(format!("> {text} <")).style(
            Style::new()
                .fg(theme.hud_text)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::from(text).style(Style::new().fg(theme.hud_text))
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
