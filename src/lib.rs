pub mod apple;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod rng;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
