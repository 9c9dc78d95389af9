pub mod etf;
pub mod quote;
pub mod setup;
pub mod stock;
pub mod ui;
