//! Ephemeral field groups, one per flow. Each is reset to its default when
//! its owning screen is entered.

use crate::domain::BillCategory;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub pin: String,
    pub otp: String,
    pub otp_sent: bool,
    pub email_verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub id: String,
    pub pin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendForm {
    /// Receiver ID, kept upper-case.
    pub id: String,
    pub amount: String,
    /// Filled in once the directory lookup succeeds.
    pub receiver_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillForm {
    pub category: Option<BillCategory>,
    pub number: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinChangeForm {
    pub current: String,
    pub new_pin: String,
    pub confirm: String,
}
