// Domain layer: transient request/response values and the ports the bridge talks through.

pub mod model;
pub mod ports;
