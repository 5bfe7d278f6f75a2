//! Screen components. Each exposes a stateless `view(...)` building an
//! `Element` from the state passed in; message mapping happens here.

pub mod credit_card;
pub mod header;
pub mod swatch_grid;
