pub mod collector;
pub mod export_model;
