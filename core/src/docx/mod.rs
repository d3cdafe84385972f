pub mod document;
pub mod package;
