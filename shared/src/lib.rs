#![forbid(missing_docs)]

//! The `shared` crate contains the behavior of every page enhancement, free of any browser dependency.
//! The WebAssembly crate only forwards DOM events into these types and mirrors their state back onto the page.

mod form;
mod modal;
mod particle;
mod registration;
mod reveal;
mod settings;
mod storage;
mod theme;
mod tilt;

pub use form::*;
pub use modal::*;
pub use particle::*;
pub use registration::*;
pub use reveal::*;
pub use settings::*;
pub use storage::*;
pub use theme::*;
pub use tilt::*;
