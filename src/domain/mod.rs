// Domain layer: wire-level models only. No dependencies beyond serde/chrono.

pub mod model;
