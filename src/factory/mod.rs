//! Stack whose components acquire their logger from [`crate::logger::LoggerFactory`].

pub mod controller;
pub mod service;

pub use controller::Controller;
pub use service::Service;
