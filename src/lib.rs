//! slidedeck: keyboard and swipe driven slide presentations with animated
//! transitions, rendered with raylib.

pub mod animation;
pub mod config;
pub mod constants;
pub mod content;
pub mod deck;
pub mod engine;
pub mod error;
pub mod input;
pub mod navigation;
pub mod outline;
pub mod render;
pub mod scene;
pub mod state;
pub mod texture_loader;

pub use deck::Deck;
pub use error::{DeckError, Result};
pub use navigation::Presentation;
