//! Terminal input adapter.
//!
//! Maps `crossterm` key events to engine-facing commands so the core never
//! sees a platform event type. Terminal auto-repeat provides held-key
//! movement; there is no separate repeat handler.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, Command};
