//! Session driver for the core engine.
//!
//! The core crate is purely reactive: something has to call `tick()` on a
//! fixed cadence and feed player actions in between. This crate provides that
//! driver without committing to a platform:
//!
//! - [`Ticker`]: cancelable fixed-period timer that the caller polls with `now`
//! - [`Session`]: owns one `GameState` and one `Ticker`, serializing ticks
//!   and actions through `&mut self`
//!
//! A typical event loop waits for input up to
//! [`Session::time_until_tick`], forwards any action to
//! [`Session::handle`], then calls [`Session::poll`].

pub mod session;
pub mod ticker;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use session::Session;
pub use ticker::Ticker;
