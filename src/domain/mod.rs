// Domain layer: image references, source kinds and the ports the fetchers depend on.

pub mod model;
pub mod ports;
