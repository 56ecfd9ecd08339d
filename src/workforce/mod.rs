//! Workforce domain layer: entities, value objects, pure reporting
//! services, and request-shaping policies. No I/O lives here.

pub mod domain;
pub mod policies;
pub mod services;
