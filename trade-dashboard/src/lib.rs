//! Presentation-neutral shell logic for the trade dashboard.
//!
//! This crate provides:
//! - `layout`: page text, chart titles, axis labels and table columns
//! - `views`: the per-selection [`DashboardViews`] bundle
//! - `state`: last rendered views and stale-result rejection
//! - `dispatch`: the [`Dashboard`] event handler and its [`ViewObserver`]s
//! - `render`: plain-text and JSON renderings of a views bundle

pub mod dispatch;
pub mod layout;
pub mod render;
pub mod state;
pub mod views;

pub use dispatch::{Dashboard, Notice, SelectionEvent, ViewObserver};
pub use state::DashboardState;
pub use views::{compute_views, ChartView, DashboardViews, TableView};
