//! Static string tables for the three supported languages.
//!
//! Labels are looked up through [`Text`] keys. Sentences that carry runtime
//! values (names, amounts, identifiers) are [`Message`] variants whose fields
//! are the typed placeholders, rendered per language by [`Message::render`].

use super::models::{BillCategory, Language};

/// Fixed labels and headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Welcome,
    ChooseLanguage,
    Tagline,
    LandingLogin,
    LandingSignup,
    LoginTitle,
    AccIdLabel,
    PinLabel,
    Signup,
    RegisterBtn,
    SignupSuccess,
    SaveIdMsg,
    Balance,
    SendMoney,
    ReceiveMoney,
    BillPay,
    Loans,
    LastFive,
    Profile,
    ReportTitle,
    Success,
    IdFound,
    Confirm,
    WrongPin,
    InvalidFormat,
    PinChange,
    SignOut,
    Reports,
    CaseStudy,
    NameLabel,
    MobileLabel,
    EmailLabel,
    OtpLabel,
    AmountLabel,
    ConsumerNumber,
    CurrentPinLabel,
    NewPinLabel,
    ConfirmPinLabel,
    VerifyEmailBtn,
    VerifyCodeBtn,
    ChangeEmailBtn,
    ChangeCategoryBtn,
    CopyIdBtn,
    ExportBtn,
    Back,
    Home,
    CheckingId,
    NoTransactions,
    Spent,
    Received,
    Interest,
    UpTo,
    KeyHint,
}

pub fn text(lang: Language, key: Text) -> &'static str {
    match lang {
        Language::En => english(key),
        Language::Kn => kannada(key),
        Language::Hi => hindi(key),
    }
}

fn english(key: Text) -> &'static str {
    match key {
        Text::Welcome => "Welcome",
        Text::ChooseLanguage => "Choose your language",
        Text::Tagline => "Simple banking for everyone",
        Text::LandingLogin => "I have an account",
        Text::LandingSignup => "Open new account",
        Text::LoginTitle => "Login",
        Text::AccIdLabel => "Enter your bank ID",
        Text::PinLabel => "Enter your 4-digit PIN",
        Text::Signup => "Create your account",
        Text::RegisterBtn => "Create Account",
        Text::SignupSuccess => "Account created",
        Text::SaveIdMsg => "Please save this ID. You need it to login",
        Text::Balance => "Balance",
        Text::SendMoney => "Send Money",
        Text::ReceiveMoney => "Receive Money",
        Text::BillPay => "Pay Bills",
        Text::Loans => "Loans",
        Text::LastFive => "Last 5 Payments",
        Text::Profile => "My Profile",
        Text::ReportTitle => "Spending Report",
        Text::Success => "Success",
        Text::IdFound => "ID found",
        Text::Confirm => "Please confirm",
        Text::WrongPin => "Wrong PIN. Please try again",
        Text::InvalidFormat => "Invalid ID. Please check",
        Text::PinChange => "Change PIN",
        Text::SignOut => "Sign Out Safely",
        Text::Reports => "Reports",
        Text::CaseStudy => "View Case Study Info",
        Text::NameLabel => "Name",
        Text::MobileLabel => "Mobile number",
        Text::EmailLabel => "Email",
        Text::OtpLabel => "Verification code",
        Text::AmountLabel => "Amount",
        Text::ConsumerNumber => "Consumer number",
        Text::CurrentPinLabel => "Current PIN",
        Text::NewPinLabel => "New PIN",
        Text::ConfirmPinLabel => "Confirm new PIN",
        Text::VerifyEmailBtn => "Verify email",
        Text::VerifyCodeBtn => "Verify code",
        Text::ChangeEmailBtn => "Change email",
        Text::ChangeCategoryBtn => "Change category",
        Text::CopyIdBtn => "Copy ID",
        Text::ExportBtn => "Export CSV",
        Text::Back => "Back",
        Text::Home => "Home",
        Text::CheckingId => "Checking ID...",
        Text::NoTransactions => "No transactions yet",
        Text::Spent => "Spent",
        Text::Received => "Received",
        Text::Interest => "interest",
        Text::UpTo => "up to",
        Text::KeyHint => "Tab/↑↓: move | Enter: select | Esc: back | Ctrl+L: language | Ctrl+C: quit",
    }
}

fn kannada(key: Text) -> &'static str {
    match key {
        Text::Welcome => "ಸ್ವಾಗತ",
        Text::ChooseLanguage => "ನಿಮ್ಮ ಭಾಷೆಯನ್ನು ಆರಿಸಿ",
        Text::Tagline => "ಎಲ್ಲರಿಗೂ ಸರಳ ಬ್ಯಾಂಕಿಂಗ್",
        Text::LandingLogin => "ನನಗೆ ಖಾತೆ ಇದೆ",
        Text::LandingSignup => "ಹೊಸ ಖಾತೆ ತೆರೆಯಿರಿ",
        Text::LoginTitle => "ಲಾಗಿನ್",
        Text::AccIdLabel => "ನಿಮ್ಮ ಬ್ಯಾಂಕ್ ಐಡಿ ನಮೂದಿಸಿ",
        Text::PinLabel => "ನಿಮ್ಮ 4 ಅಂಕಿಯ ಪಿನ್ ನಮೂದಿಸಿ",
        Text::Signup => "ನಿಮ್ಮ ಖಾತೆ ತೆರೆಯಿರಿ",
        Text::RegisterBtn => "ಖಾತೆ ತೆರೆಯಿರಿ",
        Text::SignupSuccess => "ಖಾತೆ ತೆರೆಯಲಾಗಿದೆ",
        Text::SaveIdMsg => "ದಯವಿಟ್ಟು ಈ ಐಡಿಯನ್ನು ಉಳಿಸಿ. ಲಾಗಿನ್ ಮಾಡಲು ಬೇಕು",
        Text::Balance => "ಬಾಕಿ ಹಣ",
        Text::SendMoney => "ಹಣ ಕಳುಹಿಸಿ",
        Text::ReceiveMoney => "ಹಣ ಪಡೆಯಿರಿ",
        Text::BillPay => "ಬಿಲ್ ಪಾವತಿ",
        Text::Loans => "ಸಾಲಗಳು",
        Text::LastFive => "ಕೊನೆಯ 5 ಪಾವತಿಗಳು",
        Text::Profile => "ನನ್ನ ಪ್ರೊಫೈಲ್",
        Text::ReportTitle => "ಖರ್ಚಿನ ವರದಿ",
        Text::Success => "ಯಶಸ್ವಿಯಾಗಿದೆ",
        Text::IdFound => "ಐಡಿ ಸಿಕ್ಕಿದೆ",
        Text::Confirm => "ದಯವಿಟ್ಟು ಖಚಿತಪಡಿಸಿ",
        Text::WrongPin => "ತಪ್ಪು ಪಿನ್. ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ",
        Text::InvalidFormat => "ಅಮಾನ್ಯ ಐಡಿ. ದಯವಿಟ್ಟು ಪರಿಶೀಲಿಸಿ",
        Text::PinChange => "ಪಿನ್ ಬದಲಿಸಿ",
        Text::SignOut => "ಸುರಕ್ಷಿತವಾಗಿ ನಿರ್ಗಮಿಸಿ",
        Text::Reports => "ವರದಿಗಳು",
        Text::CaseStudy => "ಕೇಸ್ ಸ್ಟಡಿ ಮಾಹಿತಿ",
        Text::NameLabel => "ಹೆಸರು",
        Text::MobileLabel => "ಮೊಬೈಲ್ ಸಂಖ್ಯೆ",
        Text::EmailLabel => "ಇಮೇಲ್",
        Text::OtpLabel => "ಪರಿಶೀಲನಾ ಕೋಡ್",
        Text::AmountLabel => "ಮೊತ್ತ",
        Text::ConsumerNumber => "ಗ್ರಾಹಕ ಸಂಖ್ಯೆ",
        Text::CurrentPinLabel => "ಈಗಿನ ಪಿನ್",
        Text::NewPinLabel => "ಹೊಸ ಪಿನ್",
        Text::ConfirmPinLabel => "ಹೊಸ ಪಿನ್ ಖಚಿತಪಡಿಸಿ",
        Text::VerifyEmailBtn => "ಇಮೇಲ್ ಪರಿಶೀಲಿಸಿ",
        Text::VerifyCodeBtn => "ಕೋಡ್ ಪರಿಶೀಲಿಸಿ",
        Text::ChangeEmailBtn => "ಇಮೇಲ್ ಬದಲಿಸಿ",
        Text::ChangeCategoryBtn => "ವಿಭಾಗ ಬದಲಿಸಿ",
        Text::CopyIdBtn => "ಐಡಿ ನಕಲಿಸಿ",
        Text::ExportBtn => "CSV ರಫ್ತು",
        Text::Back => "ಹಿಂದೆ",
        Text::Home => "ಮುಖಪುಟ",
        Text::CheckingId => "ಐಡಿ ಪರಿಶೀಲಿಸಲಾಗುತ್ತಿದೆ...",
        Text::NoTransactions => "ಇನ್ನೂ ವಹಿವಾಟುಗಳಿಲ್ಲ",
        Text::Spent => "ಖರ್ಚು",
        Text::Received => "ಜಮೆ",
        Text::Interest => "ಬಡ್ಡಿ",
        Text::UpTo => "ಗರಿಷ್ಠ",
        Text::KeyHint => "Tab/↑↓: ಸರಿಸಿ | Enter: ಆರಿಸಿ | Esc: ಹಿಂದೆ | Ctrl+L: ಭಾಷೆ | Ctrl+C: ನಿರ್ಗಮಿಸಿ",
    }
}

fn hindi(key: Text) -> &'static str {
    match key {
        Text::Welcome => "स्वागत है",
        Text::ChooseLanguage => "अपनी भाषा चुनें",
        Text::Tagline => "सबके लिए आसान बैंकिंग",
        Text::LandingLogin => "मेरा खाता है",
        Text::LandingSignup => "नया खाता खोलें",
        Text::LoginTitle => "लॉगिन",
        Text::AccIdLabel => "अपनी बैंक आईडी डालें",
        Text::PinLabel => "अपना 4 अंकों का पिन डालें",
        Text::Signup => "अपना खाता बनाएं",
        Text::RegisterBtn => "खाता बनाएं",
        Text::SignupSuccess => "खाता बन गया",
        Text::SaveIdMsg => "कृपया यह आईडी संभाल कर रखें. लॉगिन के लिए ज़रूरी है",
        Text::Balance => "शेष राशि",
        Text::SendMoney => "पैसे भेजें",
        Text::ReceiveMoney => "पैसे पाएं",
        Text::BillPay => "बिल भरें",
        Text::Loans => "लोन",
        Text::LastFive => "पिछले 5 भुगतान",
        Text::Profile => "मेरी प्रोफ़ाइल",
        Text::ReportTitle => "खर्च की रिपोर्ट",
        Text::Success => "सफल",
        Text::IdFound => "आईडी मिल गई",
        Text::Confirm => "कृपया पुष्टि करें",
        Text::WrongPin => "गलत पिन. फिर से कोशिश करें",
        Text::InvalidFormat => "अमान्य आईडी. कृपया जांचें",
        Text::PinChange => "पिन बदलें",
        Text::SignOut => "सुरक्षित रूप से बाहर निकलें",
        Text::Reports => "रिपोर्ट",
        Text::CaseStudy => "केस स्टडी जानकारी",
        Text::NameLabel => "नाम",
        Text::MobileLabel => "मोबाइल नंबर",
        Text::EmailLabel => "ईमेल",
        Text::OtpLabel => "सत्यापन कोड",
        Text::AmountLabel => "राशि",
        Text::ConsumerNumber => "उपभोक्ता संख्या",
        Text::CurrentPinLabel => "मौजूदा पिन",
        Text::NewPinLabel => "नया पिन",
        Text::ConfirmPinLabel => "नया पिन दोबारा डालें",
        Text::VerifyEmailBtn => "ईमेल सत्यापित करें",
        Text::VerifyCodeBtn => "कोड सत्यापित करें",
        Text::ChangeEmailBtn => "ईमेल बदलें",
        Text::ChangeCategoryBtn => "श्रेणी बदलें",
        Text::CopyIdBtn => "आईडी कॉपी करें",
        Text::ExportBtn => "CSV निर्यात",
        Text::Back => "वापस",
        Text::Home => "होम",
        Text::CheckingId => "आईडी जांची जा रही है...",
        Text::NoTransactions => "अभी कोई लेन-देन नहीं",
        Text::Spent => "खर्च",
        Text::Received => "प्राप्त",
        Text::Interest => "ब्याज",
        Text::UpTo => "अधिकतम",
        Text::KeyHint => "Tab/↑↓: चलें | Enter: चुनें | Esc: वापस | Ctrl+L: भाषा | Ctrl+C: बाहर",
    }
}

/// Sentences shown in the status line and spoken aloud.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    EnterEmail,
    CodeSent { email: String },
    InvalidEmail,
    EmailAlreadyRegistered,
    EnterSixDigitCode,
    EmailVerified,
    InvalidCode,
    FillAllDetails,
    VerifyEmailFirst,
    NotEnoughBalance,
    NotEnoughMoney,
    EnterDetails,
    InvalidAmount,
    BillPaid,
    PayingFor { category: BillCategory },
    TransferDone { amount: f64, receiver: String },
    ReceiverFound { name: String },
    DashboardGreeting { name: String, balance: f64 },
    AccountCreated { id: String },
    PinChanged,
    PinMismatch,
    PinFormat,
    NotLoggedIn,
    StorageFailure,
    ClipboardFailure,
    IdCopied,
    HistoryExported { path: String },
    ExportFailed,
    Static(Text),
}

impl Message {
    pub fn render(&self, lang: Language) -> String {
        match (self, lang) {
            (Message::Static(key), _) => text(lang, *key).to_string(),

            (Message::EnterEmail, Language::Kn) => "ದಯವಿಟ್ಟು ಇಮೇಲ್ ವಿಳಾಸವನ್ನು ನಮೂದಿಸಿ".to_string(),
            (Message::EnterEmail, Language::Hi) => "कृपया ईमेल पता डालें".to_string(),
            (Message::EnterEmail, Language::En) => "Please enter email address".to_string(),

            (Message::CodeSent { .. }, Language::Kn) => "ಪರಿಶೀಲನಾ ಕೋಡ್ ಕಳುಹಿಸಲಾಗಿದೆ".to_string(),
            (Message::CodeSent { email }, Language::Hi) => format!("{email} पर सत्यापन कोड भेजा गया"),
            (Message::CodeSent { email }, Language::En) => format!("Verification code sent to {email}"),

            (Message::InvalidEmail, Language::Kn) => "ಅಮಾನ್ಯ ಇಮೇಲ್ ವಿಳಾಸ".to_string(),
            (Message::InvalidEmail, Language::Hi) => "अमान्य ईमेल पता".to_string(),
            (Message::InvalidEmail, Language::En) => "Please enter a valid email address".to_string(),

            (Message::EmailAlreadyRegistered, Language::Kn) => "ಈ ಇಮೇಲ್ ಈಗಾಗಲೇ ನೋಂದಾಯಿಸಲಾಗಿದೆ".to_string(),
            (Message::EmailAlreadyRegistered, Language::Hi) => "यह ईमेल पहले से पंजीकृत है".to_string(),
            (Message::EmailAlreadyRegistered, Language::En) => "This email is already registered".to_string(),

            (Message::EnterSixDigitCode, Language::Kn) => "ದಯವಿಟ್ಟು 6 ಅಂಕಿಯ ಕೋಡ್ ನಮೂದಿಸಿ".to_string(),
            (Message::EnterSixDigitCode, Language::Hi) => "कृपया 6 अंकों का कोड डालें".to_string(),
            (Message::EnterSixDigitCode, Language::En) => "Please enter 6-digit code".to_string(),

            (Message::EmailVerified, Language::Kn) => "ಇಮೇಲ್ ಯಶಸ್ವಿಯಾಗಿ ಪರಿಶೀಲಿಸಲಾಗಿದೆ".to_string(),
            (Message::EmailVerified, Language::Hi) => "ईमेल सफलतापूर्वक सत्यापित हुआ".to_string(),
            (Message::EmailVerified, Language::En) => "Email verified successfully".to_string(),

            (Message::InvalidCode, Language::Kn) => "ಅಮಾನ್ಯ ಪರಿಶೀಲನಾ ಕೋಡ್".to_string(),
            (Message::InvalidCode, Language::Hi) => "अमान्य सत्यापन कोड".to_string(),
            (Message::InvalidCode, Language::En) => "Invalid verification code".to_string(),

            (Message::FillAllDetails, Language::Kn) => "ದಯವಿಟ್ಟು ಎಲ್ಲಾ ವಿವರಗಳನ್ನು ಭರ್ತಿ ಮಾಡಿ".to_string(),
            (Message::FillAllDetails, Language::Hi) => "कृपया सभी विवरण सही भरें".to_string(),
            (Message::FillAllDetails, Language::En) => "Please fill all details correctly".to_string(),

            (Message::VerifyEmailFirst, Language::Kn) => "ದಯವಿಟ್ಟು ಮೊದಲು ನಿಮ್ಮ ಇಮೇಲ್ ಪರಿಶೀಲಿಸಿ".to_string(),
            (Message::VerifyEmailFirst, Language::Hi) => "कृपया पहले अपना ईमेल सत्यापित करें".to_string(),
            (Message::VerifyEmailFirst, Language::En) => "Please verify your email first".to_string(),

            (Message::NotEnoughBalance, Language::Kn) => "ಸಾಕಷ್ಟು ಬಾಕಿ ಹಣ ಇಲ್ಲ".to_string(),
            (Message::NotEnoughBalance, Language::Hi) => "पर्याप्त शेष राशि नहीं है".to_string(),
            (Message::NotEnoughBalance, Language::En) => "Not enough balance".to_string(),

            (Message::NotEnoughMoney, Language::Kn) => "ಬ್ಯಾಂಕಿನಲ್ಲಿ ಸಾಕಷ್ಟು ಹಣ ಇಲ್ಲ".to_string(),
            (Message::NotEnoughMoney, Language::Hi) => "बैंक में पर्याप्त पैसे नहीं हैं".to_string(),
            (Message::NotEnoughMoney, Language::En) => "Not enough money in bank".to_string(),

            (Message::EnterDetails, Language::Kn) => "ದಯವಿಟ್ಟು ವಿವರಗಳನ್ನು ನಮೂದಿಸಿ".to_string(),
            (Message::EnterDetails, Language::Hi) => "कृपया विवरण डालें".to_string(),
            (Message::EnterDetails, Language::En) => "Please enter details".to_string(),

            (Message::InvalidAmount, Language::Kn) => "ದಯವಿಟ್ಟು ಸರಿಯಾದ ಮೊತ್ತ ನಮೂದಿಸಿ".to_string(),
            (Message::InvalidAmount, Language::Hi) => "कृपया सही राशि डालें".to_string(),
            (Message::InvalidAmount, Language::En) => "Please enter a valid amount".to_string(),

            (Message::BillPaid, Language::Kn) => "ಬಿಲ್ ಯಶಸ್ವಿಯಾಗಿ ಪಾವತಿಸಲಾಗಿದೆ".to_string(),
            (Message::BillPaid, Language::Hi) => "बिल सफलतापूर्वक भरा गया".to_string(),
            (Message::BillPaid, Language::En) => "Bill paid successfully".to_string(),

            (Message::PayingFor { category }, Language::Kn) => format!("{category} ಪಾವತಿ. ವಿವರಗಳನ್ನು ನಮೂದಿಸಿ."),
            (Message::PayingFor { category }, Language::Hi) => format!("{category} का भुगतान. विवरण डालें."),
            (Message::PayingFor { category }, Language::En) => format!("Paying for {category}. Enter details."),

            (Message::TransferDone { amount, receiver }, _) => {
                let sent = match lang {
                    Language::En => format!("Sent {} to {receiver}", format_amount(*amount)),
                    Language::Kn => format!("{receiver} ಅವರಿಗೆ {} ಕಳುಹಿಸಲಾಗಿದೆ", format_amount(*amount)),
                    Language::Hi => format!("{receiver} को {} भेजे गए", format_amount(*amount)),
                };
                format!("{}. {sent}", text(lang, Text::Success))
            }

            (Message::ReceiverFound { name }, _) => {
                format!("{} {name}. {}", text(lang, Text::IdFound), text(lang, Text::Confirm))
            }

            (Message::DashboardGreeting { name, balance }, _) => {
                let is = match lang {
                    Language::En => "is",
                    Language::Kn => "ಆಗಿದೆ",
                    Language::Hi => "है",
                };
                format!(
                    "{}, {name}. {} {is} {}",
                    text(lang, Text::Welcome),
                    text(lang, Text::Balance),
                    format_amount(*balance)
                )
            }

            (Message::AccountCreated { id }, _) => {
                let your_id = match lang {
                    Language::En => "Your ID is",
                    Language::Kn => "ನಿಮ್ಮ ಐಡಿ",
                    Language::Hi => "आपकी आईडी है",
                };
                format!(
                    "{}. {}. {your_id} {}",
                    text(lang, Text::SignupSuccess),
                    text(lang, Text::SaveIdMsg),
                    spell_out(id)
                )
            }

            (Message::PinChanged, Language::Kn) => "ಪಿನ್ ಯಶಸ್ವಿಯಾಗಿ ಬದಲಿಸಲಾಗಿದೆ".to_string(),
            (Message::PinChanged, Language::Hi) => "पिन सफलतापूर्वक बदला गया".to_string(),
            (Message::PinChanged, Language::En) => "PIN changed successfully".to_string(),

            (Message::PinMismatch, Language::Kn) => "ಹೊಸ ಪಿನ್‌ಗಳು ಹೊಂದಿಕೆಯಾಗುತ್ತಿಲ್ಲ".to_string(),
            (Message::PinMismatch, Language::Hi) => "नए पिन मेल नहीं खाते".to_string(),
            (Message::PinMismatch, Language::En) => "New PINs do not match".to_string(),

            (Message::PinFormat, Language::Kn) => "ಪಿನ್ 4 ಅಂಕಿಗಳಾಗಿರಬೇಕು".to_string(),
            (Message::PinFormat, Language::Hi) => "पिन 4 अंकों का होना चाहिए".to_string(),
            (Message::PinFormat, Language::En) => "PIN must be 4 digits".to_string(),

            (Message::NotLoggedIn, Language::Kn) => "ದಯವಿಟ್ಟು ಮೊದಲು ಲಾಗಿನ್ ಮಾಡಿ".to_string(),
            (Message::NotLoggedIn, Language::Hi) => "कृपया पहले लॉगिन करें".to_string(),
            (Message::NotLoggedIn, Language::En) => "Please login first".to_string(),

            (Message::StorageFailure, Language::Kn) => "ಮಾಹಿತಿ ಉಳಿಸಲು ಸಾಧ್ಯವಾಗಲಿಲ್ಲ".to_string(),
            (Message::StorageFailure, Language::Hi) => "डेटा सहेजा नहीं जा सका".to_string(),
            (Message::StorageFailure, Language::En) => "Could not read or save bank data".to_string(),

            (Message::ClipboardFailure, Language::Kn) => "ನಕಲು ಮಾಡಲು ಸಾಧ್ಯವಾಗಲಿಲ್ಲ".to_string(),
            (Message::ClipboardFailure, Language::Hi) => "कॉपी नहीं हो सका".to_string(),
            (Message::ClipboardFailure, Language::En) => "Could not copy to clipboard".to_string(),

            (Message::IdCopied, Language::Kn) => "ಐಡಿ ನಕಲು ಮಾಡಲಾಗಿದೆ".to_string(),
            (Message::IdCopied, Language::Hi) => "आईडी कॉपी हो गई".to_string(),
            (Message::IdCopied, Language::En) => "ID copied".to_string(),

            (Message::HistoryExported { path }, Language::Kn) => format!("ವಹಿವಾಟುಗಳನ್ನು {path} ಗೆ ರಫ್ತು ಮಾಡಲಾಗಿದೆ"),
            (Message::HistoryExported { path }, Language::Hi) => format!("लेन-देन {path} में निर्यात किए गए"),
            (Message::HistoryExported { path }, Language::En) => format!("Transactions exported to {path}"),

            (Message::ExportFailed, Language::Kn) => "ರಫ್ತು ವಿಫಲವಾಗಿದೆ".to_string(),
            (Message::ExportFailed, Language::Hi) => "निर्यात विफल रहा".to_string(),
            (Message::ExportFailed, Language::En) => "Export failed".to_string(),
        }
    }
}

/// Formats an amount without a trailing `.0` for whole rupees.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

/// Separates every character with a space so speech reads it letter by letter.
pub fn spell_out(id: &str) -> String {
    id.chars().map(String::from).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_distinct_invalid_format_text() {
        let en = text(Language::En, Text::InvalidFormat);
        let kn = text(Language::Kn, Text::InvalidFormat);
        let hi = text(Language::Hi, Text::InvalidFormat);
        assert_ne!(en, kn);
        assert_ne!(kn, hi);
        assert_ne!(en, hi);
    }

    #[test]
    fn test_placeholders_are_interpolated() {
        let msg = Message::CodeSent { email: "a@b.com".to_string() };
        assert_eq!(msg.render(Language::En), "Verification code sent to a@b.com");

        let msg = Message::TransferDone { amount: 500.0, receiver: "Ravi".to_string() };
        assert_eq!(msg.render(Language::En), "Success. Sent 500 to Ravi");

        let msg = Message::DashboardGreeting { name: "Asha".to_string(), balance: 10000.0 };
        assert_eq!(msg.render(Language::En), "Welcome, Asha. Balance is 10000");
    }

    #[test]
    fn test_account_created_spells_identifier() {
        let msg = Message::AccountCreated { id: "GB12".to_string() };
        assert!(msg.render(Language::En).ends_with("Your ID is G B 1 2"));
    }

    #[test]
    fn test_static_message_matches_table() {
        for lang in Language::ALL {
            assert_eq!(Message::Static(Text::WrongPin).render(lang), text(lang, Text::WrongPin));
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(300.0), "300");
        assert_eq!(format_amount(12.5), "12.50");
    }
}
