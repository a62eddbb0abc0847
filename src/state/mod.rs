//! Application state module

mod app_state;
mod forms;
mod reveal;
mod viewport;
mod visibility;

pub use app_state::*;
pub use forms::*;
pub use reveal::*;
pub use viewport::*;
#[cfg(test)]
pub use visibility::ManualDetector;
