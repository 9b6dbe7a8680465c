use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, error};

use plandeck::config::Config;
use plandeck::deck::Deck;
use plandeck::layout::outline;
use plandeck::theme::Theme;

#[cfg(feature = "window")]
mod app;
#[cfg(feature = "window")]
mod engine;
#[cfg(feature = "window")]
mod ffmpeg;
#[cfg(feature = "window")]
mod paged;
#[cfg(feature = "window")]
mod painter;
#[cfg(feature = "window")]
mod record;
#[cfg(feature = "window")]
mod scrolling;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Config::parse()) {
        error!("{err:#}");
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let deck = match &config.deck {
        Some(path) => Deck::load(path).with_context(|| format!("cannot open deck {}", path.display()))?,
        None => Deck::bundled().context("bundled deck is invalid")?,
    };
    let theme = Theme::named(config.theme);

    if config.outline {
        print!("{}", outline(&deck, &theme));
        return Ok(());
    }

    present(&config, &deck, theme)
}

#[cfg(feature = "window")]
fn present(config: &Config, deck: &Deck, theme: Theme) -> Result<()> {
    app::run(config, deck, theme)
}

#[cfg(not(feature = "window"))]
fn present(_config: &Config, _deck: &Deck, _theme: Theme) -> Result<()> {
    anyhow::bail!("built without the `window` feature; only --outline is available")
}
