//! Data models for the TightBlog admin REST API.
//!
//! These models match the server's JSON payloads for planets and weblog membership.

mod member;
mod planet;

pub use member::*;
pub use planet::*;
