//! simbank - voice-guided demo bank library
//!
//! Screen state machine, banking rules and local stand-ins for the services a
//! real bank would call, behind a ratatui front end.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
