//! Slide deck model, navigation and layout for the `plandeck` presenter.
//!
//! The window, recorder and raylib painter live in the binary; everything
//! here is backend-neutral.

pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod scroll;
pub mod slide;
pub mod state;
pub mod theme;

pub use deck::Deck;
pub use error::{DeckError, RecordError};
pub use navigation::{ChangeOrigin, Command, Navigator};
pub use slide::{Slide, SlideKind};
