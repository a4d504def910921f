pub mod cli;
pub mod config;
pub mod items;
pub mod list_store;
pub mod logging;
pub mod storage;
pub mod ui;
