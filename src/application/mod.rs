//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing screen state, form state, narration and the banking flows.

pub mod state;
pub mod forms;
pub mod controls;
pub mod narration;

pub use state::*;
pub use forms::*;
pub use controls::*;
pub use narration::*;
