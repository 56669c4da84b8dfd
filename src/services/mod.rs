pub mod booking;
pub mod session;
pub mod settings;
pub mod storage;
pub mod store;
