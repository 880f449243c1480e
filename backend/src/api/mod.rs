//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains mounted
//! under `/api`.

pub mod user;
