pub mod model;
pub mod painter;
pub mod simulation;
