pub mod form;
pub mod records;
pub mod totals;
