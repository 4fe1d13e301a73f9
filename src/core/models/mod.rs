pub mod balance;
pub mod network;
