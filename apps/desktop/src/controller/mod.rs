//! Controller layer: parsed terminal commands, UI events, and dispatch into the app core.

pub mod events;
pub mod orchestration;
