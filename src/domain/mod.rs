// Domain layer: records, selection, view models and ports (interfaces).

pub mod model;
pub mod ports;
pub mod view;
