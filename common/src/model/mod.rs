pub mod fields;
pub mod form;
pub mod wine;
