pub mod money;
pub mod parse;
