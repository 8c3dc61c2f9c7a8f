//! Validation rules, identifier generation and ledger arithmetic.
//!
//! Everything here is pure with respect to the UI: no screens, no storage.
//! The application layer calls into these helpers and turns their errors
//! into localized status messages.

use super::errors::{BankError, BankResult};
use super::models::{Direction, Transaction, User};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};

/// Every account identifier starts with this prefix.
pub const ACCOUNT_ID_PREFIX: &str = "GB";
/// Total length of an account identifier, prefix included.
pub const ACCOUNT_ID_LEN: usize = 10;
pub const PIN_LEN: usize = 4;
pub const OTP_LEN: usize = 6;

const ID_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const TX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces account identifiers, transaction identifiers and OTP codes.
///
/// Account identifiers are best-effort unique: the generator remembers what
/// it has handed out in this process and draws again on a repeat.
#[derive(Debug)]
pub struct IdGenerator {
    rng: StdRng,
    issued: HashSet<String>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            issued: HashSet::new(),
        }
    }
}

impl IdGenerator {
    /// Deterministic generator, for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            issued: HashSet::new(),
        }
    }

    pub fn next_account_id(&mut self) -> String {
        loop {
            let suffix = self.draw(ID_ALPHABET, ACCOUNT_ID_LEN - ACCOUNT_ID_PREFIX.len());
            let id = format!("{ACCOUNT_ID_PREFIX}{suffix}");
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn next_transaction_id(&mut self) -> String {
        self.draw(TX_ALPHABET, 9)
    }

    pub fn next_otp(&mut self) -> String {
        format!("{:06}", self.rng.gen_range(0..1_000_000u32))
    }

    fn draw(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| char::from(alphabet[self.rng.gen_range(0..alphabet.len())]))
            .collect()
    }
}

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_pin(pin: &str) -> bool {
    all_digits(pin, PIN_LEN)
}

pub fn is_valid_otp(code: &str) -> bool {
    all_digits(code, OTP_LEN)
}

/// Loose syntactic check: one `@`, a non-empty local part, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn validate_signup(name: &str, mobile: &str, email: &str, pin: &str) -> BankResult<()> {
    if name.trim().is_empty() || mobile.trim().is_empty() || email.trim().is_empty() || !is_valid_pin(pin) {
        return Err(BankError::IncompleteSignup);
    }
    Ok(())
}

/// Parses a user-entered amount. Only finite, strictly positive numbers pass.
pub fn parse_amount(input: &str) -> BankResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(BankError::InvalidAmount(trimmed.to_string())),
    }
}

/// Debits `amount` from the user when the balance covers it.
///
/// On failure the user is left untouched. `bill` only selects which
/// insufficient-funds error is reported.
pub fn apply_debit(user: &mut User, amount: f64, bill: bool) -> BankResult<()> {
    if amount > user.balance {
        return Err(if bill {
            BankError::BillExceedsBalance { requested: amount, available: user.balance }
        } else {
            BankError::InsufficientFunds { requested: amount, available: user.balance }
        });
    }
    user.balance -= amount;
    Ok(())
}

/// Date stamp used on transactions, in the local time zone.
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// Aggregated view of a transaction list for the reports screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendingSummary {
    /// Debit totals per category, sorted by category name.
    pub by_category: Vec<(String, f64)>,
    pub total_debits: f64,
    pub total_credits: f64,
}

impl SpendingSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut buckets: BTreeMap<&str, f64> = BTreeMap::new();
        let mut summary = Self::default();
        for tx in transactions {
            match tx.direction {
                Direction::Debit => {
                    *buckets.entry(tx.category.as_str()).or_default() += tx.amount;
                    summary.total_debits += tx.amount;
                }
                Direction::Credit => summary.total_credits += tx.amount,
            }
        }
        summary.by_category = buckets.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        summary
    }
}

/// The newest `limit` transactions, newest first.
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(limit).collect()
}
