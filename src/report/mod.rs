pub mod console;
pub mod html;
