//! Terminal rendering collaborator.
//!
//! Reads engine snapshots and never mutates game state. Rendering goes
//! through a plain framebuffer so layout can be tested without a terminal:
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: snapshot → framebuffer (pure)
//! - [`renderer`]: framebuffer → terminal, diffing against the last frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, HudStatus, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
