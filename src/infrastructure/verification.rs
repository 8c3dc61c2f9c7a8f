//! Local stand-in for an email verification service.
//!
//! Nothing is delivered: issued codes are kept in memory and compared on
//! submission. The caller decides how (or whether) to show the code.

use crate::domain::{BankError, BankResult, IdGenerator, is_valid_email};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

pub trait EmailVerifier {
    /// Accepts or rejects an address before any code is issued.
    fn verify_email(&self, email: &str) -> BankResult<()>;
    /// Issues a fresh 6-digit code for `email`, replacing any earlier one.
    fn send_verification_otp(&mut self, email: &str) -> String;
    fn verify_otp(&self, email: &str, code: &str) -> bool;
    /// Marks an address as taken once its owner has proven it.
    fn register_email(&mut self, email: &str);
    /// Frees an address whose account has been closed.
    fn unregister_email(&mut self, email: &str);
    /// Drops every outstanding code; called when a new signup session starts.
    fn reset_codes(&mut self);
}

#[derive(Debug, Default)]
pub struct MockEmailService {
    ids: IdGenerator,
    issued: HashMap<String, String>,
    registered: HashSet<String>,
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MockEmailService {
    pub fn with_generator(ids: IdGenerator) -> Self {
        Self {
            ids,
            issued: HashMap::new(),
            registered: HashSet::new(),
        }
    }
}

impl EmailVerifier for MockEmailService {
    fn verify_email(&self, email: &str) -> BankResult<()> {
        let email = normalize(email);
        if email.is_empty() {
            return Err(BankError::MissingEmail);
        }
        if !is_valid_email(&email) {
            return Err(BankError::InvalidEmail(email));
        }
        if self.registered.contains(&email) {
            return Err(BankError::EmailAlreadyRegistered(email));
        }
        Ok(())
    }

    fn send_verification_otp(&mut self, email: &str) -> String {
        let code = self.ids.next_otp();
        info!(email = %normalize(email), "verification code issued");
        self.issued.insert(normalize(email), code.clone());
        code
    }

    fn verify_otp(&self, email: &str, code: &str) -> bool {
        let matched = self.issued.get(&normalize(email)).is_some_and(|issued| issued == code);
        debug!(matched, "verification code checked");
        matched
    }

    fn register_email(&mut self, email: &str) {
        let email = normalize(email);
        self.issued.remove(&email);
        self.registered.insert(email);
    }

    fn unregister_email(&mut self, email: &str) {
        let email = normalize(email);
        info!(%email, "email released");
        self.registered.remove(&email);
    }

    fn reset_codes(&mut self) {
        self.issued.clear();
    }
}
