pub mod poly;
pub mod term;
