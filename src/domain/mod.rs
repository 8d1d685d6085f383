// Domain layer: value types and ports shared by core and adapters.

pub mod model;
pub mod ports;
