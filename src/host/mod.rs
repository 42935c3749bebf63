pub mod content_script;
pub mod error;
pub mod message;
pub mod session;
