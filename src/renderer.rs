use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{GridSize, Settings};
use crate::game::{GameState, RenderSnapshot};
use crate::input::Direction;
use crate::snake::Cell;
use crate::theme::{theme_at, Theme};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{
    render_main_menu, render_pause_menu, render_result, render_settings, GameResult,
    ResultSummary,
};
use crate::ui::screen::{SettingsOrigin, UiScreen};

/// Terminal columns per grid cell; keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;

const GLYPH_BODY: &str = "██";
const GLYPH_APPLE: &str = "()";
const GLYPH_EMPTY: &str = "· ";
const GLYPH_HEAD_UP: &str = "/\\";
const GLYPH_HEAD_DOWN: &str = "\\/";
const GLYPH_HEAD_LEFT: &str = "<█";
const GLYPH_HEAD_RIGHT: &str = "█>";

/// Everything one frame is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub screen: UiScreen,
    pub game: Option<&'a GameState>,
    pub settings: &'a Settings,
    /// Best score for the board on screen: the settings' board in the menus,
    /// the running game's board otherwise.
    pub high_score: u32,
    /// The finished game beat its board's previous best.
    pub new_best: bool,
}

/// Renders the full frame for the current screen.
pub fn render(frame: &mut Frame<'_>, view: &View<'_>) {
    let area = frame.area();
    let theme = theme_at(view.settings.theme_index);
    frame.render_widget(Block::new().style(Style::new().bg(theme.field_bg)), area);

    match view.screen {
        UiScreen::MainMenu { selected } => {
            render_main_menu(frame, area, selected, view.high_score, theme);
        }
        UiScreen::Settings {
            selected,
            origin: SettingsOrigin::MainMenu,
        } => {
            render_main_menu(frame, area, 1, view.high_score, theme);
            render_settings(frame, area, selected, view.settings, theme);
        }
        UiScreen::Settings {
            selected,
            origin: SettingsOrigin::Paused,
        } => {
            render_game(frame, area, view, theme);
            render_settings(frame, area, selected, view.settings, theme);
        }
        UiScreen::Playing => {
            let Some(board) = render_game(frame, area, view, theme) else {
                return;
            };
            if let Some(game) = view.game {
                let result = if game.is_win() {
                    Some(GameResult::Win)
                } else if game.is_over() {
                    Some(GameResult::Over(game.death_reason))
                } else {
                    None
                };
                if let Some(result) = result {
                    let summary = ResultSummary {
                        score: game.score,
                        best: view.high_score,
                        is_new_high: view.new_best,
                    };
                    render_result(frame, board, result, summary, theme);
                }
            }
        }
        UiScreen::Paused { selected } => {
            if let Some(board) = render_game(frame, area, view, theme) {
                render_pause_menu(frame, board, selected, theme);
            }
        }
    }
}

/// Draws board and HUD centered in `area`; returns the board rectangle.
fn render_game(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &View<'_>,
    theme: &Theme,
) -> Option<Rect> {
    let game = view.game?;
    let bounds = game.bounds();
    let snapshot = game.snapshot();

    let (board_width, board_height) = board_size(bounds);
    if area.width < board_width || area.height < board_height + 1 {
        let message = format!(
            "Terminal too small: need {board_width}x{}, have {}x{}",
            board_height + 1,
            area.width,
            area.height
        );
        frame.render_widget(
            Paragraph::new(Line::from(message))
                .alignment(Alignment::Center)
                .style(Style::new().fg(theme.hud_text)),
            area,
        );
        return None;
    }

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [board, hud] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border))
        .style(Style::new().bg(theme.field_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_cells(frame, inner, bounds, &snapshot, theme);
    render_hud(
        frame,
        hud,
        &snapshot,
        &HudInfo {
            high_score: view.high_score,
            max_apples: game.config().max_apples,
            bounds,
            theme,
        },
    );

    Some(board)
}

fn render_cells(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    snapshot: &RenderSnapshot,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();

    let empty = Style::new().fg(theme.grid_dot).bg(theme.field_bg);
    for row in 0..i32::from(bounds.rows) {
        for col in 0..i32::from(bounds.cols) {
            if let Some((x, y)) = cell_to_terminal(inner, bounds, Cell::new(row, col)) {
                buffer.set_string(x, y, GLYPH_EMPTY, empty);
            }
        }
    }

    let apple = Style::new().fg(theme.apple).bg(theme.field_bg);
    for cell in &snapshot.apples {
        if let Some((x, y)) = cell_to_terminal(inner, bounds, *cell) {
            buffer.set_string(x, y, GLYPH_APPLE, apple);
        }
    }

    let body = Style::new().fg(theme.snake_body).bg(theme.field_bg);
    for cell in snapshot.body.iter().skip(1) {
        if let Some((x, y)) = cell_to_terminal(inner, bounds, *cell) {
            buffer.set_string(x, y, GLYPH_BODY, body);
        }
    }

    if let Some(head) = snapshot.body.first() {
        if let Some((x, y)) = cell_to_terminal(inner, bounds, *head) {
            let style = Style::new()
                .fg(theme.snake_head)
                .bg(theme.field_bg)
                .add_modifier(Modifier::BOLD);
            buffer.set_string(x, y, head_glyph(snapshot.direction), style);
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

/// Outer size of the bordered board in terminal cells.
#[must_use]
pub fn board_size(bounds: GridSize) -> (u16, u16) {
    (
        bounds.cols.saturating_mul(CELL_WIDTH).saturating_add(2),
        bounds.rows.saturating_add(2),
    )
}

fn cell_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.col).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
