pub mod fill_model;
pub mod filler;
pub mod orchestrator;
