pub mod models;
pub mod services;
pub mod errors;
pub mod i18n;

pub use models::*;
pub use services::*;
pub use errors::*;
pub use i18n::{Message, Text};
