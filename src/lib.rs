//! Request echo service.
//!
//! Takes an inbound request (method, headers, query parameters, body), normalizes the
//! body according to its declared content type and returns a JSON description of the
//! whole request. Useful for checking what a gateway or proxy actually forwards.

pub mod config;
pub mod echo;
pub mod error;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod utils;

pub use echo::assemble;
pub use error::EchoError;
pub use normalize::normalize;
