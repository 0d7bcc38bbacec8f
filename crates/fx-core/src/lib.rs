//! Platform-free core of the portfolio visual layer.
//!
//! Nothing in this crate touches the DOM. Hosts feed it geometry and input
//! events, drive the frame loops, and apply the returned updates.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod lifecycle;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod tween;

pub use carousel::{Carousel, SlideChange, TimerHost};
pub use config::FxConfig;
pub use counter::{CounterAnimation, CounterDescriptor, CounterFrame};
pub use cursor::CursorFollower;
pub use error::{FxError, Result};
pub use geometry::{Rect, VerticalBounds};
pub use grid::GridPulse;
pub use lifecycle::{LoopControl, StopHandle};
pub use particles::{Connection, Particle, ParticleField};
pub use reveal::{observe_once, RevealTracker, Stagger, VisibilitySource};
pub use scroll::{NavChange, NavMap, ScrollScheduler, ScrollSnapshot, ScrollUpdate, Section};
pub use surface::{Rgba, Surface};
pub use tween::ScrollTween;
