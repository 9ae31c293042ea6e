//! Form client
//!
//! The form controller, its state and the transport it submits through.

pub mod controller;
mod loading;
pub mod results;
pub mod state;
pub mod transport;
pub mod view;

pub use controller::{FormController, SUCCESS_MESSAGE};
pub use results::SubmitOutcome;
pub use state::FormState;
pub use transport::{FormTransport, HttpTransport};
