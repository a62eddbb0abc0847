//! Contact form submission: transport, timers and the controller tying them
//! to the form state

mod controller;
mod timer;
mod transport;

pub use controller::{ContactController, SubmitTiming};
pub use transport::{SimulatedTransport, SubmitError, SubmitTransport};

#[cfg(test)]
pub use transport::MockSubmitTransport;
