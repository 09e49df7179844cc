use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

use slideshow_viewer::{Config, Deck, SlideState, Strings};

mod constants;
mod texture_loader;
mod viewer;

use crate::constants::FPS;
use crate::viewer::Viewer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    // --- Build the deck before opening a window ---
    let mut deck = Deck::from_dir(config.image_dir())
        .with_context(|| format!("Cannot build a slideshow from '{}'", config.image_dir().display()))?;
    if config.shuffle {
        deck = deck.shuffled(&mut rand::rng());
    }

    let strings = match config.strings_path() {
        Some(path) => Strings::load(&path)
            .with_context(|| format!("Cannot load strings from '{}'", path.display()))?,
        None => Strings::default(),
    };

    let state = SlideState::starting_at(deck, config.start.as_deref())
        .with_context(|| format!("Invalid --start value '{}'", config.start.as_deref().unwrap_or_default()))?;

    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title(strings.get(slideshow_viewer::strings::APP_TITLE))
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut viewer = Viewer::new(&mut rl, &thread, state, strings);

    // --- Main Loop ---
    while !rl.window_should_close() {
        viewer.handle_input(&mut rl);

        let mut d = rl.begin_drawing(&thread);
        viewer.draw(&mut d);
    }

    Ok(())
}
