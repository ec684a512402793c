//! Cross-cutting service plumbing: tracing setup, health handlers, and
//! middleware builders shared by the HTTP surface.

pub mod health;
pub mod middleware;
pub mod tracing;
