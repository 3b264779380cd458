// Domain layer: value types and the capability traits the core implements.

pub mod model;
pub mod ports;
