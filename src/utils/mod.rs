pub mod date;
pub mod labels;
