use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::*;
use crate::theme::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One slide at a time with a fade between slides
    Paged,
    /// Continuous column of slides with snap scrolling
    Scroll,
}

/// Presents a project-plan slide deck.
#[derive(Debug, Clone, Parser)]
#[command(name = "plandeck", version, about)]
pub struct Config {
    /// Deck file (TOML); the bundled deck is shown when omitted
    #[arg(long)]
    pub deck: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::Paged)]
    pub mode: Mode,

    #[arg(long, value_enum, default_value_t = ThemeName::Light)]
    pub theme: ThemeName,

    /// TrueType font with Hangul coverage
    #[arg(long)]
    pub font: Option<PathBuf>,

    #[arg(long)]
    pub fullscreen: bool,

    /// Render every slide into a video file instead of opening a window
    #[arg(long, value_name = "FILE", conflicts_with = "outline")]
    pub record: Option<PathBuf>,

    /// Print the laid-out text of every slide and exit
    #[arg(long)]
    pub outline: bool,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,
}
