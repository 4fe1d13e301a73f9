pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::BalanceError;
pub use crate::core::services::{BalanceService, BalanceSettings};
pub use crate::infrastructure::cache::in_memory::InMemoryCache;
pub use crate::infrastructure::providers::registry::NetworkRegistry;

#[cfg(test)]
mod tests;
