//! Shared test utilities for the biome-manager workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`session`]: session document builder
//! - [`workspace`]: [`TestWorkspace`](workspace::TestWorkspace) for REDkit
//!   install, workspace and preset folder layouts

pub mod session;
pub mod workspace;

pub use session::{SessionBuilder, slot_header};
pub use workspace::TestWorkspace;
