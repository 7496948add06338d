//! Core library for the Tool Wheel inertial selector.
//!
//! The crate models a draggable radial menu as a headless engine: items sit
//! on a circle, a pointer drag spins the wheel, releases coast under
//! decaying velocity, and the wheel settles deterministically on the
//! nearest item. Each module owns a distinct subsystem (item placement,
//! selection derivation, pointer tracking, per-frame motion, discrete
//! input) and the whole API is synchronous so it can be driven by tests and
//! by the command line demo in the application crate. Presentation lives
//! entirely outside and consumes only placements, the current index and the
//! two boundary flags.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod item;
pub mod motion;
pub mod pointer;
pub mod selection;
pub mod selector;
pub mod state;

pub use config::{MotionConfig, SelectorConfig};
pub use error::{Result, ToolWheelError};
pub use geometry::{Placement, Point, Viewport};
pub use input::NavDirection;
pub use item::{Item, Roster};
pub use motion::FrameProgress;
pub use selector::WheelSelector;
pub use state::{DragSession, Phase, WheelState};
