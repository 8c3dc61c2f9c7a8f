use crate::domain::{BillCategory, Language, Screen, OTP_LEN, PIN_LEN};

/// An editable input on some screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SignupName,
    SignupMobile,
    SignupEmail,
    SignupPin,
    Otp,
    LoginId,
    LoginPin,
    SendId,
    SendAmount,
    BillNumber,
    BillAmount,
    CurrentPin,
    NewPin,
    ConfirmPin,
}

impl Field {
    pub fn max_len(self) -> usize {
        match self {
            Field::SignupPin | Field::LoginPin | Field::CurrentPin | Field::NewPin | Field::ConfirmPin => PIN_LEN,
            Field::Otp => OTP_LEN,
            Field::SignupMobile | Field::LoginId | Field::SendId => 10,
            Field::SendAmount | Field::BillAmount => 9,
            Field::BillNumber => 20,
            Field::SignupName => 40,
            Field::SignupEmail => 64,
        }
    }

    /// Whether `c` may be typed into this field.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Field::SignupPin
            | Field::LoginPin
            | Field::CurrentPin
            | Field::NewPin
            | Field::ConfirmPin
            | Field::Otp
            | Field::SignupMobile => c.is_ascii_digit(),
            Field::SendAmount | Field::BillAmount => c.is_ascii_digit() || c == '.',
            Field::LoginId | Field::SendId | Field::BillNumber => c.is_ascii_alphanumeric(),
            Field::SignupEmail => !c.is_whitespace(),
            Field::SignupName => !c.is_control(),
        }
    }

    /// Rendered as dots.
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            Field::SignupPin | Field::LoginPin | Field::CurrentPin | Field::NewPin | Field::ConfirmPin
        )
    }
}

/// Something the user can trigger with Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GoTo(Screen),
    SetLanguage(Language),
    VerifyEmail,
    VerifyOtp,
    CancelOtp,
    Register,
    SubmitLogin,
    Transfer,
    SelectBill(BillCategory),
    ChangeBillCategory,
    PayBill,
    ChangePin,
    CopyId,
    ExportHistory,
    SignOut,
}

/// One focusable element, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Field(Field),
    Action(Action),
}
