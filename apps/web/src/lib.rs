//! Front end for the Glocal Policy Guardrail compliance API.
//!
//! Everything outside [`browser`] is plain Rust with no DOM access: the
//! API client is generic over a [`api::Transport`], charts and the map
//! draw through backend traits, and renderers fill handlebars
//! [`templates`]. The browser host and the `guardrail` CLI both drive the
//! same [`dashboard::Dashboard`] and renderers.

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod form;
pub mod map;
pub mod models;
pub mod notify;
pub mod page;
pub mod render;
pub mod templates;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use api::{ApiClient, ApiError, HttpResponse, Transport};
pub use config::DashboardConfig;
pub use dashboard::{Command, Dashboard, UiEvent};
pub use form::{CheckForm, FormError};
