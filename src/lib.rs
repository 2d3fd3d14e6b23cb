pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod format;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod schema;
pub mod selection;

#[cfg(test)]
mod testing;
