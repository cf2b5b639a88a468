pub mod catalog;
pub mod course;
