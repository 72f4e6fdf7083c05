//! Controller layer: UI events from the asset worker and command dispatch.

pub mod events;
pub mod orchestration;
