pub mod signing_handlers;

pub use signing_handlers::*;
