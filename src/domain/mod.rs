// Domain layer: control-plane models and the ports the managers talk through.

pub mod model;
pub mod ports;
