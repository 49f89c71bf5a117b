use crate::config::SettingsField;
use crate::input::{Direction, GameInput};

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MainMenuItem {
    Start,
    Settings,
    Quit,
}

impl MainMenuItem {
    pub const ALL: [Self; 3] = [Self::Start, Self::Settings, Self::Quit];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Settings => "Settings",
            Self::Quit => "Quit",
        }
    }
}

/// Entries of the pause popup, top to bottom.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PauseItem {
    Resume,
    Settings,
    MainMenu,
}

impl PauseItem {
    pub const ALL: [Self; 3] = [Self::Resume, Self::Settings, Self::MainMenu];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Settings => "Settings",
            Self::MainMenu => "Main menu",
        }
    }
}

/// Screen the settings page returns to when closed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SettingsOrigin {
    MainMenu,
    Paused,
}

/// Which screen the driver is showing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UiScreen {
    MainMenu { selected: usize },
    Settings { selected: usize, origin: SettingsOrigin },
    Playing,
    Paused { selected: usize },
}

/// Side effect the driver performs after a transition.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UiCommand {
    None,
    StartGame,
    Steer(Direction),
    AdjustSetting { field: SettingsField, forward: bool },
    Quit,
}

impl Default for UiScreen {
    fn default() -> Self {
        Self::MainMenu { selected: 0 }
    }
}

impl UiScreen {
    /// Applies one input to this screen.
    ///
    /// `game_finished` tells the playing screen that the game reached a
    /// terminal state, where confirm returns to the main menu and steering
    /// or pausing does nothing.
    #[must_use]
    pub fn apply(self, input: GameInput, game_finished: bool) -> (Self, UiCommand) {
        if input == GameInput::Quit {
            return (self, UiCommand::Quit);
        }

        match self {
            Self::MainMenu { selected } => main_menu(selected, input),
            Self::Settings { selected, origin } => settings(selected, origin, input),
            Self::Playing => playing(input, game_finished),
            Self::Paused { selected } => paused(selected, input),
        }
    }

    /// Whether the simulation clock should run on this screen.
    #[must_use]
    pub fn is_ticking(self) -> bool {
        self == Self::Playing
    }
}

fn main_menu(selected: usize, input: GameInput) -> (UiScreen, UiCommand) {
    let stay = |selected| (UiScreen::MainMenu { selected }, UiCommand::None);

    match input {
        GameInput::Direction(direction) => {
            stay(move_cursor(selected, MainMenuItem::ALL.len(), direction))
        }
        GameInput::Confirm => match MainMenuItem::ALL[selected % MainMenuItem::ALL.len()] {
            MainMenuItem::Start => (UiScreen::Playing, UiCommand::StartGame),
            MainMenuItem::Settings => (
                UiScreen::Settings {
                    selected: 0,
                    origin: SettingsOrigin::MainMenu,
                },
                UiCommand::None,
            ),
            MainMenuItem::Quit => (UiScreen::MainMenu { selected }, UiCommand::Quit),
        },
        GameInput::Back => (UiScreen::MainMenu { selected }, UiCommand::Quit),
        GameInput::Pause | GameInput::Quit => stay(selected),
    }
}

fn settings(selected: usize, origin: SettingsOrigin, input: GameInput) -> (UiScreen, UiCommand) {
    let len = SettingsField::ALL.len();

    match input {
        GameInput::Direction(direction @ (Direction::Left | Direction::Right)) => (
            UiScreen::Settings { selected, origin },
            UiCommand::AdjustSetting {
                field: SettingsField::ALL[selected % len],
                forward: direction == Direction::Right,
            },
        ),
        GameInput::Direction(direction) => (
            UiScreen::Settings {
                selected: move_cursor(selected, len, direction),
                origin,
            },
            UiCommand::None,
        ),
        GameInput::Confirm | GameInput::Back => {
            let next = match origin {
                SettingsOrigin::MainMenu => UiScreen::MainMenu { selected: 1 },
                SettingsOrigin::Paused => UiScreen::Paused { selected: 1 },
            };
            (next, UiCommand::None)
        }
        GameInput::Pause | GameInput::Quit => {
            (UiScreen::Settings { selected, origin }, UiCommand::None)
        }
    }
}

fn playing(input: GameInput, game_finished: bool) -> (UiScreen, UiCommand) {
    if game_finished {
        return match input {
            GameInput::Confirm | GameInput::Back => (UiScreen::default(), UiCommand::None),
            _ => (UiScreen::Playing, UiCommand::None),
        };
    }

    match input {
        GameInput::Direction(direction) => (UiScreen::Playing, UiCommand::Steer(direction)),
        GameInput::Pause | GameInput::Back => (UiScreen::Paused { selected: 0 }, UiCommand::None),
        GameInput::Confirm | GameInput::Quit => (UiScreen::Playing, UiCommand::None),
    }
}

fn paused(selected: usize, input: GameInput) -> (UiScreen, UiCommand) {
    match input {
        GameInput::Direction(direction) => (
            UiScreen::Paused {
                selected: move_cursor(selected, PauseItem::ALL.len(), direction),
            },
            UiCommand::None,
        ),
        GameInput::Confirm => {
            let next = match PauseItem::ALL[selected % PauseItem::ALL.len()] {
                PauseItem::Resume => UiScreen::Playing,
                PauseItem::Settings => UiScreen::Settings {
                    selected: 0,
                    origin: SettingsOrigin::Paused,
                },
                PauseItem::MainMenu => UiScreen::default(),
            };
            (next, UiCommand::None)
        }
        GameInput::Pause | GameInput::Back => (UiScreen::Playing, UiCommand::None),
        GameInput::Quit => (UiScreen::Paused { selected }, UiCommand::None),
    }
}

fn move_cursor(selected: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Up => (selected + len - 1) % len,
        Direction::Down => (selected + 1) % len,
        Direction::Left | Direction::Right => selected,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SettingsField;
    use crate::input::{Direction, GameInput};

    use super::{SettingsOrigin, UiCommand, UiScreen};

    fn press(screen: UiScreen, input: GameInput) -> (UiScreen, UiCommand) {
        screen.apply(input, false)
    }

    #[test]
    fn start_from_main_menu_begins_game() {
        let (screen, command) = press(UiScreen::default(), GameInput::Confirm);

        assert_eq!(screen, UiScreen::Playing);
        assert_eq!(command, UiCommand::StartGame);
    }

    #[test]
    fn main_menu_cursor_wraps() {
        let (screen, _) = press(UiScreen::default(), GameInput::Direction(Direction::Up));

        assert_eq!(screen, UiScreen::MainMenu { selected: 2 });
        assert_eq!(press(screen, GameInput::Confirm).1, UiCommand::Quit);
    }

    #[test]
    fn settings_opened_from_pause_return_to_pause() {
        let (screen, _) = press(UiScreen::Paused { selected: 1 }, GameInput::Confirm);
        assert_eq!(
            screen,
            UiScreen::Settings {
                selected: 0,
                origin: SettingsOrigin::Paused
            }
        );

        let (screen, _) = press(screen, GameInput::Back);
        assert_eq!(screen, UiScreen::Paused { selected: 1 });
    }

    #[test]
    fn settings_left_right_adjust_selected_field() {
        let screen = UiScreen::Settings {
            selected: 2,
            origin: SettingsOrigin::MainMenu,
        };

        let (_, command) = press(screen, GameInput::Direction(Direction::Left));

        assert_eq!(
            command,
            UiCommand::AdjustSetting {
                field: SettingsField::Apples,
                forward: false
            }
        );
    }

    #[test]
    fn pause_toggles_and_steering_is_forwarded() {
        let (screen, _) = press(UiScreen::Playing, GameInput::Pause);
        assert_eq!(screen, UiScreen::Paused { selected: 0 });
        assert!(!screen.is_ticking());

        let (screen, _) = press(screen, GameInput::Back);
        assert_eq!(screen, UiScreen::Playing);

        let (_, command) = press(screen, GameInput::Direction(Direction::Up));
        assert_eq!(command, UiCommand::Steer(Direction::Up));
    }

    #[test]
    fn finished_game_confirms_back_to_main_menu() {
        let (screen, command) =
            UiScreen::Playing.apply(GameInput::Direction(Direction::Up), true);
        assert_eq!((screen, command), (UiScreen::Playing, UiCommand::None));

        let (screen, _) = UiScreen::Playing.apply(GameInput::Confirm, true);
        assert_eq!(screen, UiScreen::MainMenu { selected: 0 });
    }

    #[test]
    fn quit_is_honoured_everywhere() {
        let screens = [
            UiScreen::default(),
            UiScreen::Playing,
            UiScreen::Paused { selected: 2 },
        ];
        for screen in screens {
            assert_eq!(screen.apply(GameInput::Quit, false).1, UiCommand::Quit);
        }
    }
}
