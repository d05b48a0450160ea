//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod auth_form;
pub mod drawer;
pub mod loading;
pub mod results_panel;
pub mod sidebar;
pub mod uploader;

pub use auth_form::AuthForm;
pub use drawer::MobileDrawer;
pub use loading::Loading;
pub use results_panel::ResultsPanel;
pub use sidebar::Sidebar;
pub use uploader::Uploader;
