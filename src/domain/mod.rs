// Domain layer: models and ports. Concrete IO lives under adapters.

pub mod model;
pub mod ports;
