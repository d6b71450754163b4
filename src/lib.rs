pub mod args;
pub mod config;
pub mod db;
pub mod delivery;
pub mod evaluation;
pub mod gate;
pub mod histogram;
pub mod registration;
pub mod session;
pub mod share;
pub mod stats;
pub mod storage;
pub mod ui;
