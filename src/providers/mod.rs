pub mod fmp;
pub mod offline;
