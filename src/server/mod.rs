//! Server core functionality
//!
//! The HTTP side of the login form: the form endpoint, static assets, and
//! the listener that serves them.

pub mod assets;
pub mod core;
pub mod handlers;
pub mod router;
pub mod state;

pub use core::Server;
pub use router::build_router;
pub use state::AppState;
