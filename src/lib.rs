pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod server;
pub mod validation;

pub use client::{FormController, HttpTransport};
pub use server::Server;
