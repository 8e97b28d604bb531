pub mod config;
pub mod db;
pub mod hours;
pub mod import;
pub mod init;
pub mod log;
pub mod show;
