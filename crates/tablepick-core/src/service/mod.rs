//! Business logic services (use cases).
//!
//! Services orchestrate repository calls and the pure pipeline steps. They
//! depend on traits (ports) -- never on concrete infrastructure
//! implementations.

pub mod loader;
pub mod recommend;
