//! Ventureboard web server library.
//!
//! Exposes the building blocks (config, state, error handling, flash
//! messages, views, routes) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod flash;
pub mod form;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
