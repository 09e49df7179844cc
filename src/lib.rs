//! Navigation state for a captioned image slideshow.
//!
//! [`SlideState`] owns a fixed [`Deck`] and the index of the slide on screen.
//! Rendering lives in the `slideshow-viewer` binary and only calls
//! [`SlideState::next`], [`SlideState::previous`] and [`SlideState::jump_to`].

pub mod config;
pub mod deck;
pub mod error;
pub mod input;
pub mod slide;
pub mod state;
pub mod strings;

pub use config::Config;
pub use deck::Deck;
pub use error::{DeckError, InvalidIndex, StringsError};
pub use input::JumpInput;
pub use slide::{ImageRef, Slide, TextRef};
pub use state::{Position, SlideState, ViewState};
pub use strings::Strings;
