//! Ratatui presentation layer for the menu screen.
//!
//! Model (`App`) + update (key/mouse handlers) + view (`layout::draw`).
//! Immediate mode, no retained widget state: every frame re-renders
//! from `App`, and the handlers only mutate `App`.

pub mod app;
pub mod input;
pub mod layout;
pub mod mouse;
pub mod runner;
