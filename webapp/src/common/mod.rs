pub mod browser;
pub mod history;
pub mod storage;
pub mod style;
