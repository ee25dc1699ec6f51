//! Presenter Picker - Timed random draw of weekly presenters
//!
//! Keeps a roster of team members and runs a short animated draw that
//! assigns three distinct people to three presentation roles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
