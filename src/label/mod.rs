pub mod matcher;
pub mod resolver;
