mod auth;
pub mod client;
pub mod gateway;
mod sessions;
mod teachers;
pub mod types;
mod users;

pub use client::*;
pub use gateway::*;
pub use types::*;
