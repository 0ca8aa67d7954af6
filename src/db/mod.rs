pub mod connection;
pub mod providers;
