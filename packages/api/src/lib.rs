//! # API crate: typed client for the ProjectHub REST API
//!
//! Every frontend call to the backend goes through [`ApiClient`]. The client
//! holds the base URL and, once signed in, the bearer token; each resource
//! module adds its endpoints as inherent methods.
//!
//! ## Modules
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | `auth` | `POST /token` (form-encoded), `POST /register` |
//! | `users` | `/users/`, `DELETE /users/{id}` |
//! | `projects` | `/projects/`, `PUT`/`DELETE /projects/{id}` |
//! | `tasks` | `/tasks/` with `project_id` / `assigned_to` filters, `PUT`/`DELETE /tasks/{id}` |
//! | `dashboard` | `GET /dashboard/` |
//!
//! ## Errors
//!
//! Non-success responses become [`ApiError`]. The server's `detail` text is
//! kept so views can show it; [`rejects_session`] tells the session layer the
//! token is no longer valid.

mod auth;
mod client;
mod dashboard;
mod error;
mod projects;
mod tasks;
mod users;

pub use auth::TokenResponse;
pub use client::ApiClient;
pub use error::{rejects_session, ApiError};
