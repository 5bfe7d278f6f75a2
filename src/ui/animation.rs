//! Animation system for the card screen.
//!
//! The entrance choreography is a pure deadline table (`choreography`), the
//! spring curve it uses lives in `spring`, and the interactive bits (hover
//! lift, card color blend) run on `iced_anim`.

pub mod blend;
pub mod choreography;
pub mod hover;
pub mod spring;

pub use blend::ColorBlend;
pub use choreography::{Choreography, Phase};
pub use hover::SwatchHover;
