//! # mun-dashboard
//!
//! Staff web dashboard for the MUN attendance tracker.
//!
//! This crate provides:
//! - Home page with attendance totals per committee
//! - Participant roll call with one-click attendance updates
//! - Staff roster, loaded in two phases (public teams first, roster after sign-in)
//! - About and sign-in pages
//! - JSON endpoints mirroring the pages
//!
//! ## Tech Stack
//!
//! - Axum for HTTP server
//! - HTMX + Alpine.js for interactivity (minimal JS)
//! - Tailwind CSS for styling

pub mod api_types;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod pages;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
pub mod templates;

pub use error::DashboardError;
pub use loader::{LoadPhase, StaffDashboardLoader, StaffDashboardProps};
pub use routes::create_router;
pub use server::DashboardServer;
pub use session::SessionSigner;
pub use state::AppState;
