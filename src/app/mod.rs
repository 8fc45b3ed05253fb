mod app;
mod form;
mod modal;
mod particle;
mod reveal;
mod theme;
mod tilt;

pub use app::*;
pub use form::*;
pub use modal::*;
pub use particle::*;
pub use reveal::*;
pub use theme::*;
pub use tilt::*;
