// Domain layer: models, schemas and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod schema;
