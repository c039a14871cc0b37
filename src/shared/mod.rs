//! Vocabulary shared between the coordinator and render layers
//!
//! Typed input events, render instructions and the state snapshot.

pub mod state;
pub mod messages;

pub use state::UiSnapshot;
pub use messages::{
    DisplayMode, ElementId, ElementRef, InputEvent, Marker, RenderInstruction, RenderSink,
};
