//! Stack whose components never hold a logger.
//!
//! Records go straight through the `tracing` macros: the target is the
//! module path and the component name comes from the span that
//! `#[instrument]` opens around each call.

pub mod controller;
pub mod service;

pub use controller::Controller;
pub use service::Service;
