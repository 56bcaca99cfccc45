//! Tick-driven animation primitives.
//!
//! Every primitive is advanced from `App::tick` with the frame delta and
//! owns only its own transient state. Teardown is ownership: dropping the
//! page state that holds a primitive stops it, so no timer outlives its
//! view.

mod magnetic;
mod parallax;
mod reveal;
mod spotlight;
mod spring;
mod tilt;
mod timer;
mod transition;
mod typewriter;

pub use magnetic::Magnetic;
pub use parallax::{parallax_offset, scroll_progress};
pub use reveal::TextReveal;
pub use spotlight::Spotlight;
pub use spring::{Spring, SpringVec2};
pub use tilt::Tilt;
pub use timer::{EffectTimer, ease_out_cubic, normalized_progress};
pub use transition::{OverlayEffect, OverlayEffectKind, PageEffect};
pub use typewriter::{CursorBlink, Typewriter};
