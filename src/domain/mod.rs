// Domain layer: value types and the traits the core operates through.

pub mod model;
pub mod ports;
