//! # Widgets
//!
//! Four self-contained state machines. Each takes itself by value and
//! returns its next value plus any command it wants scheduled. None of them
//! knows about focus or about each other; `focus` and `update` do the wiring.

pub mod input;
pub mod list;
pub mod spinner;
pub mod timer;

pub use input::InputState;
pub use list::{Entry, ListState};
pub use spinner::{STYLES, SpinnerState, SpinnerStyle};
pub use timer::TimerState;
