use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the interface can display and narrate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Kn,
    Hi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Kn, Language::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Kn => "kn",
            Language::Hi => "hi",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Kn => "ಕನ್ನಡ",
            Language::Hi => "हिन्दी",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "kn" => Some(Language::Kn),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }

    /// The next language in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Kn,
            Language::Kn => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The single account holder persisted by the demo bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub email: String,
    /// Stored in cleartext; this is a simulation only.
    pub pin: String,
    pub language: Language,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Credit,
    Debit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub amount: f64,
    pub date: String,
    pub description: String,
    pub category: String,
}

impl Transaction {
    pub fn debit(id: String, amount: f64, date: String, description: String, category: &str) -> Self {
        Self {
            id,
            direction: Direction::Debit,
            amount,
            date,
            description,
            category: category.to_string(),
        }
    }
}

/// Every view the application can show. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    ProjectSpecs,
    Landing,
    Login,
    LanguageSelect,
    Signup,
    SignupSuccess,
    Dashboard,
    SendMoney,
    ReceiveMoney,
    Transactions,
    Analysis,
    BillPay,
    Loans,
    PinChange,
    Profile,
    Success,
}

impl Screen {
    /// Stable upper-case tag, used for narration bookkeeping and logs.
    pub fn tag(self) -> &'static str {
        match self {
            Screen::ProjectSpecs => "PROJECT_SPECS",
            Screen::Landing => "LANDING",
            Screen::Login => "LOGIN",
            Screen::LanguageSelect => "LANGUAGE_SELECT",
            Screen::Signup => "SIGNUP",
            Screen::SignupSuccess => "SIGNUP_SUCCESS",
            Screen::Dashboard => "DASHBOARD",
            Screen::SendMoney => "SEND_MONEY",
            Screen::ReceiveMoney => "RECEIVE_MONEY",
            Screen::Transactions => "TRANSACTIONS",
            Screen::Analysis => "ANALYSIS",
            Screen::BillPay => "BILL_PAY",
            Screen::Loans => "LOANS",
            Screen::PinChange => "PIN_CHANGE",
            Screen::Profile => "PROFILE",
            Screen::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillCategory {
    Mobile,
    Electricity,
    Water,
    Dth,
}

impl BillCategory {
    pub const ALL: [BillCategory; 4] = [
        BillCategory::Mobile,
        BillCategory::Electricity,
        BillCategory::Water,
        BillCategory::Dth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BillCategory::Mobile => "Mobile",
            BillCategory::Electricity => "Electricity",
            BillCategory::Water => "Water",
            BillCategory::Dth => "DTH",
        }
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A loan product shown on the loans screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanOffer {
    pub title: &'static str,
    pub interest: &'static str,
    pub max_amount: &'static str,
}

pub const LOAN_OFFERS: [LoanOffer; 3] = [
    LoanOffer { title: "Kisan Credit Card", interest: "4%", max_amount: "₹3,00,000" },
    LoanOffer { title: "Gold Loan", interest: "7.5%", max_amount: "₹10,00,000" },
    LoanOffer { title: "Small Business", interest: "9%", max_amount: "₹1,00,000" },
];
