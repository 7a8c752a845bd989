pub mod form;
pub mod limit;
pub mod parse;
