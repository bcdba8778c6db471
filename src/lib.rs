//! # StoryCast page scripts
//!
//! Interactive behavior for the StoryCast podcast site, compiled to
//! WebAssembly and started once when the page loads:
//!
//! - [`ui::nav`] - mobile navigation menu (hamburger, outside click, Escape)
//! - [`ui::category_filter`] - mutually exclusive category pills
//! - [`ui::transcript`] - transcript panel driven from two buttons
//! - [`ui::player`] - control surface around the episode `<audio>` element
//! - [`ui::a11y_demo`] - text size and high-contrast demo on the about page
//! - [`ui::anchor_scroll`] - smooth scrolling and focus for same-page links
//!
//! Controllers are written against the small element traits in [`dom`] and
//! take their element handles explicitly, so they run (and are tested)
//! without a browser. The `web` module, built only for `wasm32`, looks the
//! elements up in the live document and forwards DOM events to them.

pub mod config;
pub mod dom;
pub mod error;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{BindError, ConfigError};
