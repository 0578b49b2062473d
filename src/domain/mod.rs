// Domain layer: media classification types. No I/O here.

pub mod model;
