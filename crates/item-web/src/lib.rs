//! # Item Web
//!
//! Server-rendered HTTP front end for the item catalog. This library
//! exposes the application's modules for integration testing.
//!
//! - [`routes`]: axum router and the request handlers (the part that turns
//!   decoded requests into store calls and render/redirect decisions).
//! - [`pages`]: handlebars rendering of the HTML pages.
//! - [`error`]: the web-side error type and its HTTP mapping.
//! - [`lifecycle`]: actor spawn, bootstrap seeding, shutdown, tracing setup.

pub mod error;
pub mod lifecycle;
pub mod pages;
pub mod routes;
