pub mod cache;
pub mod providers;
