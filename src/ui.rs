//! UI module for the card screen. Dark mode, single window.

pub mod animation;
pub mod components;
pub mod theme;
