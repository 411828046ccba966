pub mod handlers;
pub mod pdf;
pub mod sections;
pub mod text;
