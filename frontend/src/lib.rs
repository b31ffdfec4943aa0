//! Client core of the yoga studio application: the reactive login state,
//! typed gateways over the studio REST API and headless view models for
//! each page.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use app::{App, AppViewModel};
pub use state::session::SessionStore;
