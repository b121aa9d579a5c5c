pub mod format;
pub mod listing;
pub mod navigation;
pub mod storage;
pub mod time;
