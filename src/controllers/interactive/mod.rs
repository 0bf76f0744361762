//! Interactive layer between the event source and the view.
//!
//! Input events and periodic ticks mutate the [`ViewState`](crate::core::data::view_state::ViewState);
//! the session decides when the mutated view gets redrawn.

mod controller;
pub mod events;
mod session;
mod tick;

pub use controller::InputController;
pub use events::{InputEvent, Key};
pub use session::{LoopControl, ViewerSession};
pub use tick::TickScheduler;
