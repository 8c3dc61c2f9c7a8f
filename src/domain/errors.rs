use super::i18n::{Message, Text};
use super::models::Language;
use thiserror::Error;

/// Coarse classification of failures, used for logging and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authentication,
    InsufficientBalance,
    Verification,
    Storage,
    Platform,
}

/// Failures reading or writing the persisted bank records.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored record is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("email address is required")]
    MissingEmail,
    #[error("email address {0:?} is malformed")]
    InvalidEmail(String),
    #[error("email address {0:?} is already registered")]
    EmailAlreadyRegistered(String),
    #[error("verification code must be exactly 6 digits")]
    OtpLength,
    #[error("verification code does not match the issued code")]
    InvalidOtp,
    #[error("signup form is incomplete")]
    IncompleteSignup,
    #[error("email has not been verified")]
    EmailNotVerified,
    #[error("PIN does not match account {0}")]
    WrongPin(String),
    #[error("no account with id {0:?}")]
    UnknownAccount(String),
    #[error("no receiver found for id {0:?}")]
    ReceiverNotFound(String),
    #[error("transfer needs a confirmed receiver and an amount")]
    MissingTransferDetails,
    #[error("{0:?} is not a positive amount")]
    InvalidAmount(String),
    #[error("requested {requested} exceeds balance {available}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("bill of {requested} exceeds balance {available}")]
    BillExceedsBalance { requested: f64, available: f64 },
    #[error("bill payment needs a number and an amount")]
    MissingBillDetails,
    #[error("PIN must be 4 digits")]
    PinFormat,
    #[error("new PIN entries differ")]
    PinMismatch,
    #[error("no active session")]
    NotLoggedIn,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("history export failed: {0}")]
    Export(String),
}

impl BankError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::MissingEmail
            | BankError::IncompleteSignup
            | BankError::MissingTransferDetails
            | BankError::InvalidAmount(_)
            | BankError::MissingBillDetails
            | BankError::PinFormat
            | BankError::PinMismatch
            | BankError::ReceiverNotFound(_) => ErrorKind::Validation,
            BankError::WrongPin(_) | BankError::UnknownAccount(_) | BankError::NotLoggedIn => {
                ErrorKind::Authentication
            }
            BankError::InsufficientFunds { .. } | BankError::BillExceedsBalance { .. } => {
                ErrorKind::InsufficientBalance
            }
            BankError::InvalidEmail(_)
            | BankError::EmailAlreadyRegistered(_)
            | BankError::OtpLength
            | BankError::InvalidOtp
            | BankError::EmailNotVerified => ErrorKind::Verification,
            BankError::Storage(_) => ErrorKind::Storage,
            BankError::Clipboard(_) | BankError::Export(_) => ErrorKind::Platform,
        }
    }

    /// The user-facing message for this failure.
    pub fn message(&self) -> Message {
        match self {
            BankError::MissingEmail => Message::EnterEmail,
            BankError::InvalidEmail(_) => Message::InvalidEmail,
            BankError::EmailAlreadyRegistered(_) => Message::EmailAlreadyRegistered,
            BankError::OtpLength => Message::EnterSixDigitCode,
            BankError::InvalidOtp => Message::InvalidCode,
            BankError::IncompleteSignup => Message::FillAllDetails,
            BankError::EmailNotVerified => Message::VerifyEmailFirst,
            BankError::WrongPin(_) => Message::Static(Text::WrongPin),
            BankError::UnknownAccount(_)
            | BankError::ReceiverNotFound(_)
            | BankError::MissingTransferDetails => Message::Static(Text::InvalidFormat),
            BankError::InvalidAmount(_) => Message::InvalidAmount,
            BankError::InsufficientFunds { .. } => Message::NotEnoughBalance,
            BankError::BillExceedsBalance { .. } => Message::NotEnoughMoney,
            BankError::MissingBillDetails => Message::EnterDetails,
            BankError::PinFormat => Message::PinFormat,
            BankError::PinMismatch => Message::PinMismatch,
            BankError::NotLoggedIn => Message::NotLoggedIn,
            BankError::Storage(_) => Message::StorageFailure,
            BankError::Clipboard(_) => Message::ClipboardFailure,
            BankError::Export(_) => Message::ExportFailed,
        }
    }

    pub fn localized(&self, lang: Language) -> String {
        self.message().render(lang)
    }
}

pub type BankResult<T> = Result<T, BankError>;
pub type StorageResult<T> = Result<T, StorageError>;
