pub mod api;
pub mod config;
pub mod crawler;
pub mod data_models;
pub mod db;
pub mod enricher;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod handler;

pub use error::AgentError;
pub use handler::{InvocationResponse, handler};
