use std::time::Duration;

use crate::error::ConfigError;
use crate::snake::SPAWN_LENGTH;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Default number of apples kept on the board.
pub const DEFAULT_MAX_APPLES: usize = 5;

/// Redraw cadence of the terminal loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Validated-on-demand inputs for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub max_apples: usize,
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Settings::default().to_config(None)
    }
}

impl GameConfig {
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Checks that a game can be built from this configuration.
    ///
    /// The spawn snake is a horizontal run of three cells, so the grid needs
    /// at least three columns and one further free cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rows, cols) = (self.rows, self.cols);

        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        if usize::from(cols) < SPAWN_LENGTH || self.grid().total_cells() <= SPAWN_LENGTH {
            return Err(ConfigError::GridTooSmall { rows, cols });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(())
    }
}

/// Tick speed preset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    const ALL: [Self; 3] = [Self::Slow, Self::Normal, Self::Fast];

    #[must_use]
    pub fn tick_interval_ms(self) -> u64 {
        match self {
            Self::Slow => 200,
            Self::Normal => DEFAULT_TICK_INTERVAL_MS,
            Self::Fast => 100,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
        }
    }
}

/// Board size preset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum MapSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl MapSize {
    const ALL: [Self; 3] = [Self::Small, Self::Normal, Self::Large];

    #[must_use]
    pub fn grid(self) -> GridSize {
        match self {
            Self::Small => GridSize { rows: 15, cols: 20 },
            Self::Normal => GridSize { rows: 20, cols: 30 },
            Self::Large => GridSize { rows: 30, cols: 40 },
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Normal => "Normal",
            Self::Large => "Large",
        }
    }
}

/// Apple count preset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum AppleCount {
    Few,
    #[default]
    Normal,
    Many,
}

impl AppleCount {
    const ALL: [Self; 3] = [Self::Few, Self::Normal, Self::Many];

    #[must_use]
    pub fn max_apples(self) -> usize {
        match self {
            Self::Few => 3,
            Self::Normal => DEFAULT_MAX_APPLES,
            Self::Many => 10,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Few => "Few",
            Self::Normal => "Normal",
            Self::Many => "Many",
        }
    }
}

/// Rows of the settings screen, in display order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SettingsField {
    Speed,
    MapSize,
    Apples,
    Theme,
}

impl SettingsField {
    pub const ALL: [Self; 4] = [Self::Speed, Self::MapSize, Self::Apples, Self::Theme];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Speed => "Speed",
            Self::MapSize => "Map size",
            Self::Apples => "Apples",
            Self::Theme => "Theme",
        }
    }
}

/// Player-adjustable presets chosen in the settings screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Settings {
    pub speed: Speed,
    pub map_size: MapSize,
    pub apples: AppleCount,
    pub theme_index: usize,
}

impl Settings {
    /// Resolves the presets into a concrete game configuration.
    #[must_use]
    pub fn to_config(self, seed: Option<u64>) -> GameConfig {
        let grid = self.map_size.grid();
        GameConfig {
            rows: grid.rows,
            cols: grid.cols,
            max_apples: self.apples.max_apples(),
            tick_interval_ms: self.speed.tick_interval_ms(),
            seed,
        }
    }

    /// Steps `field` to its next (`forward`) or previous preset, wrapping.
    pub fn cycle(&mut self, field: SettingsField, forward: bool, theme_count: usize) {
        match field {
            SettingsField::Speed => self.speed = cycled(&Speed::ALL, self.speed, forward),
            SettingsField::MapSize => {
                self.map_size = cycled(&MapSize::ALL, self.map_size, forward);
            }
            SettingsField::Apples => self.apples = cycled(&AppleCount::ALL, self.apples, forward),
            SettingsField::Theme => {
                if theme_count > 0 {
                    self.theme_index = step_index(self.theme_index, theme_count, forward);
                }
            }
        }
    }

    /// Display value for one settings row.
    #[must_use]
    pub fn value_label(&self, field: SettingsField, theme_name: &'static str) -> &'static str {
        match field {
            SettingsField::Speed => self.speed.label(),
            SettingsField::MapSize => self.map_size.label(),
            SettingsField::Apples => self.apples.label(),
            SettingsField::Theme => theme_name,
        }
    }
}

fn cycled<T: Copy + Eq>(all: &[T], current: T, forward: bool) -> T {
    let index = all.iter().position(|item| *item == current).unwrap_or(0);
    all[step_index(index, all.len(), forward)]
}

fn step_index(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}
