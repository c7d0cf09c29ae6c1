//! Domain layer: value types, capability interfaces and policy results.

pub mod documents;
pub mod money;
pub mod outcome;
pub mod ports;
pub mod shapes;
pub mod user;
pub mod workers;
