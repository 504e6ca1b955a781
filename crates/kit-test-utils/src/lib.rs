//! Shared test utilities for the utility-kit workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`home`] — [`TestHome`] builder for a fully populated data directory

pub mod home;

pub use home::TestHome;
