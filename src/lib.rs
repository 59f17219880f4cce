//! TightBlog Admin Client
//!
//! Typed access to the planet and weblog-membership admin pages of a TightBlog server,
//! with the page state kept in plain Rust values.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod views;

pub use api::AdminClient;
pub use config::Config;
pub use errors::ClientError;
