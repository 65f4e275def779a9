pub mod file;
pub mod generic;
