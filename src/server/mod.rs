//! HTTP server assembly: routing, middleware, lifecycle

pub mod builder;
pub mod logging;

pub use builder::ServerBuilder;
