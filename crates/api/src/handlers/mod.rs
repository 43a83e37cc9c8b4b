pub mod catalog;
pub mod predictions;
