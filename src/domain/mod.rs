// Domain layer: breed records and the catalog port.

pub mod model;
pub mod ports;
