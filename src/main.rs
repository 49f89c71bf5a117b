use std::io;
use std::panic;
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

use clap::Parser;
use hebi::clock::FixedStep;
use hebi::config::{FRAME_INTERVAL, GameConfig, Settings};
use hebi::error::AppError;
use hebi::game::GameState;
use hebi::input::InputHandler;
use hebi::renderer::View;
use hebi::score::{self, HighScores};
use hebi::terminal_runtime::{self, TerminalSession};
use hebi::theme::THEMES;
use hebi::ui::screen::{SettingsOrigin, UiCommand, UiScreen};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid rows; overrides the map size preset.
    #[arg(long)]
    rows: Option<u16>,

    /// Grid columns; overrides the map size preset.
    #[arg(long)]
    cols: Option<u16>,

    /// Apples kept on the board; overrides the apple count preset.
    #[arg(long)]
    apples: Option<usize>,

    /// Milliseconds per tick; overrides the speed preset.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for reproducible apple placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a trace log to the data directory (filter via RUST_LOG).
    #[arg(long)]
    log: bool,
}

impl Cli {
    fn game_config(&self, settings: Settings) -> GameConfig {
        let mut config = settings.to_config(self.seed);
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(apples) = self.apples {
            config.max_apples = apples;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        config
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    if cli.log {
        if let Err(error) = init_tracing() {
            eprintln!(
                "Failed to open log file {}: {error}",
                score::log_path().display()
            );
        }
    }

    // Reject bad overrides before the terminal switches to raw mode.
    let config = cli.game_config(Settings::default());
    config.validate()?;

    let scores = HighScores::load().unwrap_or_else(|error| {
        eprintln!("Failed to read high scores: {error}");
        warn!(%error, "high scores unreadable, starting from an empty table");
        HighScores::default()
    });

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&cli, &mut session, scores)
}

struct App {
    screen: UiScreen,
    settings: Settings,
    game: Option<GameState>,
    step: FixedStep,
    scores: HighScores,
    result_recorded: bool,
    new_best: bool,
}

impl App {
    /// Best score for the board currently on screen.
    fn shown_best(&self, cli: &Cli) -> u32 {
        let in_menus = matches!(
            self.screen,
            UiScreen::MainMenu { .. }
                | UiScreen::Settings {
                    origin: SettingsOrigin::MainMenu,
                    ..
                }
        );

        match self.game.as_ref() {
            Some(game) if !in_menus => self.scores.best_for(game.config()),
            _ => self.scores.best_for(&cli.game_config(self.settings)),
        }
    }
}

fn run(cli: &Cli, session: &mut TerminalSession, scores: HighScores) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let settings = Settings::default();
    let mut app = App {
        screen: UiScreen::default(),
        settings,
        game: None,
        step: FixedStep::new(cli.game_config(settings).tick_interval(), Instant::now()),
        scores,
        result_recorded: false,
        new_best: false,
    };

    loop {
        for game_input in input.drain()? {
            let finished = app.game.as_ref().is_some_and(GameState::is_terminal);
            let (next, command) = app.screen.apply(game_input, finished);

            match command {
                UiCommand::None => {}
                UiCommand::Quit => {
                    info!("quit requested");
                    return Ok(());
                }
                UiCommand::StartGame => {
                    let config = cli.game_config(app.settings);
                    match app.game.as_mut() {
                        Some(game) => game.reset(config)?,
                        None => app.game = Some(GameState::new(config)?),
                    }
                    app.step.set_interval(config.tick_interval());
                    app.result_recorded = false;
                    app.new_best = false;
                }
                UiCommand::Steer(direction) => {
                    if let Some(game) = app.game.as_mut() {
                        game.handle_input(direction);
                    }
                }
                UiCommand::AdjustSetting { field, forward } => {
                    app.settings.cycle(field, forward, THEMES.len());
                }
            }

            if next.is_ticking() && !app.screen.is_ticking() {
                app.step.restart(Instant::now());
            }
            app.screen = next;
        }

        if app.screen.is_ticking() {
            step_game(&mut app);
        }

        session.draw(&View {
            screen: app.screen,
            game: app.game.as_ref(),
            settings: &app.settings,
            high_score: app.shown_best(cli),
            new_best: app.new_best,
        })?;

        thread::sleep(FRAME_INTERVAL);
    }
}

fn step_game(app: &mut App) {
    let Some(game) = app.game.as_mut() else {
        return;
    };

    for _ in 0..app.step.advance(Instant::now()) {
        if game.is_terminal() {
            break;
        }
        game.update();
    }

    if game.is_terminal() && !app.result_recorded {
        app.result_recorded = true;
        app.new_best = app.scores.record(game.config(), game.score);
        if app.new_best {
            info!(
                board = %score::board_key(game.config()),
                score = game.score,
                "new high score"
            );
            if let Err(error) = app.scores.save() {
                warn!(%error, "failed to save high scores");
            }
        }
    }
}

fn init_tracing() -> io::Result<()> {
    let file = score::open_log_file(&score::log_path())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        terminal_runtime::restore();
        default_hook(panic_info);
    }));
}
