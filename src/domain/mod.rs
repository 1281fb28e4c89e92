// Domain layer: data shapes and the seams (localization, HTTP API) the core depends on.

pub mod model;
pub mod ports;
