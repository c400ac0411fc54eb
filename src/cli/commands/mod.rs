pub mod balance;
pub mod checkin;
pub mod config;
pub mod deposit;
pub mod init;
pub mod list;
pub mod reset;
