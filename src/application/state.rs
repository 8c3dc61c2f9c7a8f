//! Application state for the demo bank.
//!
//! [`App`] is the screen controller: it owns the active [`Screen`], every
//! form, the logged-in session and the collaborators (storage, email
//! verification, name directory, clipboard, narration). Presentation code
//! only reads this state and calls the operations defined here.

use super::controls::{Action, Control, Field};
use super::forms::{BillForm, LoginForm, PinChangeForm, SendForm, SignupForm};
use super::narration::{Narrator, screen_script};
use crate::domain::i18n::Message;
use crate::domain::{
    BankError, BankResult, BillCategory, IdGenerator, Language, Screen, Transaction, User, apply_debit,
    is_valid_otp, is_valid_pin, parse_amount, today, validate_signup,
};
use crate::infrastructure::{
    CannedDirectory, ClipboardSink, CsvExporter, EmailVerifier, MemoryClipboard, MemoryRepository,
    MockEmailService, NameDirectory, Settings, Storage, SystemClipboard,
};
use std::time::Instant;
use tracing::{debug, info, warn};

/// A receiver lookup waiting for its artificial delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub id: String,
    pub due: Instant,
}

pub struct App {
    pub screen: Screen,
    pub language: Language,
    /// The logged-in user, if any.
    pub session: Option<User>,
    pub signup: SignupForm,
    pub login: LoginForm,
    pub send: SendForm,
    pub bill: BillForm,
    pub pin_change: PinChangeForm,
    /// Identifier shown on the signup success screen.
    pub generated_id: Option<String>,
    /// Localized failure text for the current screen.
    pub error: Option<String>,
    /// Non-error notice (copied, exported, demo code).
    pub status_message: Option<String>,
    /// Vertical scroll offset of the main view.
    pub scroll: u16,
    /// Index into [`App::controls`].
    pub focus: usize,
    pub pending_lookup: Option<PendingLookup>,
    /// Transactions as of the last time a history view was opened.
    pub transactions: Vec<Transaction>,
    pub narrator: Narrator,
    pub should_quit: bool,
    settings: Settings,
    storage: Box<dyn Storage>,
    verifier: Box<dyn EmailVerifier>,
    directory: Box<dyn NameDirectory>,
    clipboard: Box<dyn ClipboardSink>,
    ids: IdGenerator,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default(), Box::new(MemoryRepository::default()))
            .with_clipboard(Box::new(MemoryClipboard::default()))
    }
}

impl App {
    /// Creates the controller on the landing screen and speaks its greeting.
    ///
    /// The stored account's email is registered with the verifier so it
    /// cannot be claimed twice.
    ///
    /// # Arguments
    ///
    /// * `settings` - Resolved runtime settings
    /// * `storage` - Backing store for the account and its transactions
    ///
    /// An unreadable stored account does not abort start-up: the failure is
    /// shown on the landing screen instead.
    pub fn new(settings: Settings, storage: Box<dyn Storage>) -> Self {
        let (ids, mut verifier) = match settings.seed {
            Some(seed) => (
                IdGenerator::seeded(seed),
                MockEmailService::with_generator(IdGenerator::seeded(seed.wrapping_add(1))),
            ),
            None => (IdGenerator::default(), MockEmailService::default()),
        };
        let mut startup_error = None;
        match storage.load_user() {
            Ok(Some(user)) => verifier.register_email(&user.email),
            Ok(None) => {}
            Err(e) => startup_error = Some(BankError::from(e)),
        }

        let mut app = Self {
            screen: Screen::Landing,
            language: settings.default_language,
            session: None,
            signup: SignupForm::default(),
            login: LoginForm::default(),
            send: SendForm::default(),
            bill: BillForm::default(),
            pin_change: PinChangeForm::default(),
            generated_id: None,
            error: None,
            status_message: None,
            scroll: 0,
            focus: 0,
            pending_lookup: None,
            transactions: Vec::new(),
            narrator: Narrator::default(),
            should_quit: false,
            settings,
            storage,
            verifier: Box::new(verifier),
            directory: Box::new(CannedDirectory),
            clipboard: Box::new(SystemClipboard),
            ids,
        };
        app.announce_screen();
        if let Some(err) = startup_error {
            app.fail(err);
        }
        app
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Switches screens.
    ///
    /// Clears the error and notice, resets scroll and focus, cancels any
    /// pending receiver lookup and resets the form owned by `screen`.
    /// Transitions are not validated: every screen is reachable from every
    /// other.
    pub fn navigate_to(&mut self, screen: Screen) {
        info!(from = %self.screen, to = %screen, "navigate");
        if self.screen == Screen::SignupSuccess && screen != Screen::SignupSuccess {
            self.generated_id = None;
        }

        self.screen = screen;
        self.error = None;
        self.status_message = None;
        self.scroll = 0;
        self.focus = 0;
        self.pending_lookup = None;

        match screen {
            Screen::SendMoney => self.send = SendForm::default(),
            Screen::BillPay => self.bill = BillForm::default(),
            Screen::Signup => {
                self.signup = SignupForm::default();
                self.verifier.reset_codes();
            }
            Screen::PinChange => self.pin_change = PinChangeForm::default(),
            Screen::Transactions | Screen::Analysis => self.refresh_transactions(),
            _ => {}
        }

        self.announce_screen();
    }

    /// Where Esc leads from the current screen, if anywhere.
    pub fn back_target(&self) -> Option<Screen> {
        match self.screen {
            Screen::Landing | Screen::Dashboard => None,
            Screen::Login | Screen::Signup | Screen::LanguageSelect | Screen::ProjectSpecs => Some(Screen::Landing),
            Screen::SignupSuccess => Some(Screen::Login),
            Screen::PinChange => Some(Screen::Profile),
            Screen::SendMoney
            | Screen::ReceiveMoney
            | Screen::Transactions
            | Screen::Analysis
            | Screen::BillPay
            | Screen::Loans
            | Screen::Profile
            | Screen::Success => Some(Screen::Dashboard),
        }
    }

    pub fn go_back(&mut self) {
        if let Some(target) = self.back_target() {
            self.navigate_to(target);
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        info!(from = %self.language, to = %language, "language changed");
        self.language = language;
        self.announce_screen();
    }

    pub fn cycle_language(&mut self) {
        self.set_language(self.language.next());
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    fn announce_screen(&mut self) {
        let script = screen_script(
            self.screen,
            self.language,
            self.session.as_ref(),
            self.generated_id.as_deref(),
        );
        self.narrator.announce(self.screen, self.language, script);
    }

    fn say(&mut self, message: &Message) {
        let text = message.render(self.language);
        self.narrator.say(&text, self.language);
    }

    /// Shows and speaks a failure. Nothing else changes.
    fn fail(&mut self, err: BankError) {
        warn!(kind = ?err.kind(), error = %err, screen = %self.screen, "operation failed");
        let text = err.localized(self.language);
        self.narrator.say(&text, self.language);
        self.error = Some(text);
    }

    fn report(&mut self, result: BankResult<()>) {
        if let Err(e) = result {
            self.fail(e);
        }
    }

    // ---------------------------------------------------------------------
    // Focus and field editing
    // ---------------------------------------------------------------------

    /// The focusable elements of the current screen, in tab order.
    pub fn controls(&self) -> Vec<Control> {
        use Action as A;
        use Control::{Action as Act, Field as F};

        match self.screen {
            Screen::Landing => vec![
                Act(A::GoTo(Screen::Login)),
                Act(A::GoTo(Screen::Signup)),
                Act(A::GoTo(Screen::LanguageSelect)),
                Act(A::GoTo(Screen::ProjectSpecs)),
            ],
            Screen::LanguageSelect => {
                let mut controls: Vec<Control> = Language::ALL.iter().map(|l| Act(A::SetLanguage(*l))).collect();
                controls.push(Act(A::GoTo(Screen::Landing)));
                controls
            }
            Screen::Login => vec![
                F(Field::LoginId),
                F(Field::LoginPin),
                Act(A::SubmitLogin),
                Act(A::GoTo(Screen::Landing)),
            ],
            Screen::Signup => {
                let mut controls = vec![F(Field::SignupName), F(Field::SignupMobile), F(Field::SignupEmail)];
                if !self.signup.email_verified {
                    if self.signup.otp_sent {
                        controls.extend([F(Field::Otp), Act(A::VerifyOtp), Act(A::CancelOtp)]);
                    } else {
                        controls.push(Act(A::VerifyEmail));
                    }
                }
                controls.extend([F(Field::SignupPin), Act(A::Register), Act(A::GoTo(Screen::Landing))]);
                controls
            }
            Screen::SignupSuccess => vec![Act(A::GoTo(Screen::Login))],
            Screen::Dashboard => vec![
                Act(A::GoTo(Screen::SendMoney)),
                Act(A::GoTo(Screen::ReceiveMoney)),
                Act(A::GoTo(Screen::BillPay)),
                Act(A::GoTo(Screen::Loans)),
                Act(A::GoTo(Screen::Analysis)),
                Act(A::GoTo(Screen::Transactions)),
                Act(A::GoTo(Screen::Profile)),
                Act(A::GoTo(Screen::ProjectSpecs)),
            ],
            Screen::SendMoney => {
                let mut controls = vec![F(Field::SendId)];
                if self.send.receiver_name.is_some() {
                    controls.extend([F(Field::SendAmount), Act(A::Transfer)]);
                }
                controls.push(Act(A::GoTo(Screen::Dashboard)));
                controls
            }
            Screen::ReceiveMoney => vec![Act(A::CopyId), Act(A::GoTo(Screen::Dashboard))],
            Screen::Transactions => vec![Act(A::ExportHistory), Act(A::GoTo(Screen::Dashboard))],
            Screen::BillPay => {
                let mut controls: Vec<Control> = match self.bill.category {
                    None => BillCategory::ALL.iter().map(|c| Act(A::SelectBill(*c))).collect(),
                    Some(_) => vec![
                        F(Field::BillNumber),
                        F(Field::BillAmount),
                        Act(A::PayBill),
                        Act(A::ChangeBillCategory),
                    ],
                };
                controls.push(Act(A::GoTo(Screen::Dashboard)));
                controls
            }
            Screen::PinChange => vec![
                F(Field::CurrentPin),
                F(Field::NewPin),
                F(Field::ConfirmPin),
                Act(A::ChangePin),
                Act(A::GoTo(Screen::Profile)),
            ],
            Screen::Profile => vec![
                Act(A::GoTo(Screen::PinChange)),
                Act(A::SignOut),
                Act(A::GoTo(Screen::Dashboard)),
            ],
            Screen::Analysis | Screen::Loans | Screen::Success => vec![Act(A::GoTo(Screen::Dashboard))],
            Screen::ProjectSpecs => vec![Act(A::GoTo(Screen::Landing))],
        }
    }

    pub fn focused(&self) -> Option<Control> {
        let controls = self.controls();
        controls.get(self.focus.min(controls.len().saturating_sub(1))).copied()
    }

    pub fn focus_next(&mut self) {
        let len = self.controls().len();
        if len > 0 {
            self.focus = (self.focus.min(len - 1) + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = self.controls().len();
        if len > 0 {
            self.focus = (self.focus.min(len - 1) + len - 1) % len;
        }
    }

    /// Moves focus onto `control` if the current screen has it.
    pub fn focus_on(&mut self, control: Control) {
        if let Some(index) = self.controls().iter().position(|c| *c == control) {
            self.focus = index;
        }
    }

    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::SignupName => &self.signup.name,
            Field::SignupMobile => &self.signup.mobile,
            Field::SignupEmail => &self.signup.email,
            Field::SignupPin => &self.signup.pin,
            Field::Otp => &self.signup.otp,
            Field::LoginId => &self.login.id,
            Field::LoginPin => &self.login.pin,
            Field::SendId => &self.send.id,
            Field::SendAmount => &self.send.amount,
            Field::BillNumber => &self.bill.number,
            Field::BillAmount => &self.bill.amount,
            Field::CurrentPin => &self.pin_change.current,
            Field::NewPin => &self.pin_change.new_pin,
            Field::ConfirmPin => &self.pin_change.confirm,
        }
    }

    fn field_value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::SignupName => &mut self.signup.name,
            Field::SignupMobile => &mut self.signup.mobile,
            Field::SignupEmail => &mut self.signup.email,
            Field::SignupPin => &mut self.signup.pin,
            Field::Otp => &mut self.signup.otp,
            Field::LoginId => &mut self.login.id,
            Field::LoginPin => &mut self.login.pin,
            Field::SendId => &mut self.send.id,
            Field::SendAmount => &mut self.send.amount,
            Field::BillNumber => &mut self.bill.number,
            Field::BillAmount => &mut self.bill.amount,
            Field::CurrentPin => &mut self.pin_change.current,
            Field::NewPin => &mut self.pin_change.new_pin,
            Field::ConfirmPin => &mut self.pin_change.confirm,
        }
    }

    pub fn is_read_only(&self, field: Field) -> bool {
        field == Field::SignupEmail && self.signup.email_verified
    }

    /// Replaces a field's content, keeping only characters the field accepts.
    pub fn set_field(&mut self, field: Field, value: &str) {
        if self.is_read_only(field) {
            return;
        }
        let filtered: String = value
            .chars()
            .filter(|c| field.accepts(*c))
            .take(field.max_len())
            .collect();
        *self.field_value_mut(field) = filtered;
        self.after_edit(field);
    }

    /// Types one character into the focused field.
    pub fn type_char(&mut self, c: char) {
        let Some(Control::Field(field)) = self.focused() else {
            return;
        };
        if self.is_read_only(field) || !field.accepts(c) || self.field_value(field).chars().count() >= field.max_len() {
            return;
        }
        self.field_value_mut(field).push(c);
        self.after_edit(field);
    }

    pub fn backspace(&mut self) {
        let Some(Control::Field(field)) = self.focused() else {
            return;
        };
        if self.is_read_only(field) {
            return;
        }
        if self.field_value_mut(field).pop().is_some() {
            self.after_edit(field);
        }
    }

    fn after_edit(&mut self, field: Field) {
        if field == Field::SendId {
            self.on_receiver_id_changed(Instant::now());
        }
    }

    /// Enter: runs the focused action, or advances from a field.
    pub fn activate_focused(&mut self) {
        match self.focused() {
            Some(Control::Action(action)) => self.perform(action),
            Some(Control::Field(_)) => self.focus_next(),
            None => {}
        }
    }

    pub fn perform(&mut self, action: Action) {
        debug!(?action, screen = %self.screen, "action");
        match action {
            Action::GoTo(screen) => self.navigate_to(screen),
            Action::SetLanguage(language) => self.set_language(language),
            Action::VerifyEmail => self.request_email_verification(),
            Action::VerifyOtp => self.verify_otp(),
            Action::CancelOtp => self.cancel_otp(),
            Action::Register => self.submit_signup(),
            Action::SubmitLogin => self.submit_login(),
            Action::Transfer => self.submit_transfer(),
            Action::SelectBill(category) => self.select_bill_category(category),
            Action::ChangeBillCategory => self.clear_bill_category(),
            Action::PayBill => self.pay_bill(),
            Action::ChangePin => self.change_pin(),
            Action::CopyId => self.copy_account_id(),
            Action::ExportHistory => self.export_history(),
            Action::SignOut => self.sign_out(),
        }
    }

    // ---------------------------------------------------------------------
    // Signup
    // ---------------------------------------------------------------------

    /// Checks the entered email and issues a six-digit code for it.
    ///
    /// With `show_demo_codes` set the code is also put in the status line,
    /// since no mail is actually sent.
    pub fn request_email_verification(&mut self) {
        let result = self.try_request_email_verification();
        self.report(result);
    }

    fn try_request_email_verification(&mut self) -> BankResult<()> {
        let email = self.signup.email.trim().to_string();
        if email.is_empty() {
            return Err(BankError::MissingEmail);
        }
        self.error = None;
        self.verifier.verify_email(&email)?;

        let code = self.verifier.send_verification_otp(&email);
        self.signup.otp_sent = true;
        self.signup.otp.clear();
        if self.settings.show_demo_codes {
            info!(%email, %code, "demo verification code");
            self.status_message = Some(format!("Demo code: {code}"));
        }
        self.focus_on(Control::Field(Field::Otp));
        self.say(&Message::CodeSent { email });
        Ok(())
    }

    pub fn verify_otp(&mut self) {
        let result = self.try_verify_otp();
        self.report(result);
    }

    fn try_verify_otp(&mut self) -> BankResult<()> {
        if !is_valid_otp(&self.signup.otp) {
            return Err(BankError::OtpLength);
        }
        let email = self.signup.email.trim().to_string();
        if !self.verifier.verify_otp(&email, &self.signup.otp) {
            return Err(BankError::InvalidOtp);
        }

        self.signup.email_verified = true;
        self.verifier.register_email(&email);
        self.error = None;
        self.status_message = None;
        info!(%email, "email verified");
        self.focus_on(Control::Field(Field::SignupPin));
        self.say(&Message::EmailVerified);
        Ok(())
    }

    pub fn cancel_otp(&mut self) {
        self.signup.otp_sent = false;
        self.signup.otp.clear();
        self.error = None;
        self.status_message = None;
        self.focus_on(Control::Action(Action::VerifyEmail));
    }

    /// Creates the account once every field is valid and the email has
    /// been verified, then shows the new ID on the success screen.
    pub fn submit_signup(&mut self) {
        let result = self.try_submit_signup();
        self.report(result);
    }

    fn try_submit_signup(&mut self) -> BankResult<()> {
        let form = &self.signup;
        validate_signup(&form.name, &form.mobile, &form.email, &form.pin)?;
        if !form.email_verified {
            return Err(BankError::EmailNotVerified);
        }

        let user = User {
            id: self.ids.next_account_id(),
            name: form.name.trim().to_string(),
            mobile: form.mobile.trim().to_string(),
            email: form.email.trim().to_string(),
            pin: form.pin.clone(),
            language: self.language,
            balance: self.settings.starting_balance,
        };
        self.storage.save_user(&user)?;
        info!(id = %user.id, "account created");

        self.generated_id = Some(user.id);
        self.navigate_to(Screen::SignupSuccess);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Login
    // ---------------------------------------------------------------------

    /// Logs in with the entered ID and PIN.
    ///
    /// The ID is compared case-insensitively. On success the interface
    /// switches to the account's language and opens the dashboard; on
    /// failure the session stays empty.
    pub fn submit_login(&mut self) {
        let result = self.try_login();
        self.report(result);
    }

    fn try_login(&mut self) -> BankResult<()> {
        let id = self.login.id.trim().to_uppercase();
        let stored = self.storage.load_user()?;

        match stored {
            Some(user) if user.id == id && user.pin == self.login.pin => {
                info!(%id, "login succeeded");
                self.language = user.language;
                self.session = Some(user);
                self.login = LoginForm::default();
                self.navigate_to(Screen::Dashboard);
                Ok(())
            }
            Some(user) if user.id == id && !self.settings.uniform_login_errors => Err(BankError::WrongPin(id)),
            _ => Err(BankError::UnknownAccount(id)),
        }
    }

    fn require_session(&self) -> BankResult<&User> {
        self.session.as_ref().ok_or(BankError::NotLoggedIn)
    }

    // ---------------------------------------------------------------------
    // Send money
    // ---------------------------------------------------------------------

    /// Called whenever the receiver ID changes. Forgets any resolved name
    /// and, once the ID is long enough, schedules a lookup.
    pub fn on_receiver_id_changed(&mut self, now: Instant) {
        self.send.id = self.send.id.to_uppercase();
        self.send.receiver_name = None;
        if self.send.id.chars().count() >= self.settings.lookup_min_len {
            debug!(id = %self.send.id, "receiver lookup scheduled");
            self.pending_lookup = Some(PendingLookup {
                id: self.send.id.clone(),
                due: now + self.settings.lookup_delay(),
            });
        } else {
            self.pending_lookup = None;
        }
    }

    pub fn is_verifying_receiver(&self) -> bool {
        self.pending_lookup.is_some()
    }

    /// Resolves a pending lookup whose delay has elapsed.
    ///
    /// # Arguments
    ///
    /// * `now` - Current time, compared against the lookup's due instant
    pub fn tick(&mut self, now: Instant) {
        let due = self.pending_lookup.as_ref().is_some_and(|p| now >= p.due);
        if !due {
            return;
        }
        let Some(pending) = self.pending_lookup.take() else {
            return;
        };

        match self.directory.lookup(&pending.id) {
            Some(name) => {
                debug!(id = %pending.id, %name, "receiver found");
                self.error = None;
                self.send.receiver_name = Some(name.clone());
                self.say(&Message::ReceiverFound { name });
            }
            None => self.fail(BankError::ReceiverNotFound(pending.id)),
        }
    }

    /// Sends the entered amount to the resolved receiver.
    ///
    /// On success the balance drops, one debit is recorded and the success
    /// screen is shown. Any failure (no receiver, bad amount, not enough
    /// balance, storage) leaves the account unchanged and is shown and
    /// spoken instead.
    pub fn submit_transfer(&mut self) {
        let result = self.try_transfer();
        self.report(result);
    }

    fn try_transfer(&mut self) -> BankResult<()> {
        let receiver = match &self.send.receiver_name {
            Some(name) if !self.send.amount.trim().is_empty() => name.clone(),
            _ => return Err(BankError::MissingTransferDetails),
        };
        let amount = parse_amount(&self.send.amount)?;

        let previous = self.require_session()?.clone();
        let mut updated = previous.clone();
        apply_debit(&mut updated, amount, false)?;
        let tx = Transaction::debit(
            self.ids.next_transaction_id(),
            amount,
            today(),
            format!("Sent to {receiver}"),
            "Transfer",
        );
        self.commit_debit(&previous, updated, &tx)?;
        info!(amount, %receiver, "transfer completed");

        self.navigate_to(Screen::Success);
        self.say(&Message::TransferDone { amount, receiver });
        Ok(())
    }

    /// Persists the lowered balance together with its debit record.
    ///
    /// # Arguments
    ///
    /// * `previous` - The account as it was before the debit
    /// * `updated` - The account with the amount already deducted
    /// * `tx` - The debit to record
    ///
    /// # Errors
    ///
    /// Returns the storage error if either write fails. When the debit
    /// cannot be appended, `previous` is written back and the session is
    /// reloaded from storage, so the balance never drops without a record.
    fn commit_debit(&mut self, previous: &User, updated: User, tx: &Transaction) -> BankResult<()> {
        self.storage.save_user(&updated)?;
        if let Err(e) = self.storage.append_transaction(tx) {
            if let Err(restore) = self.storage.save_user(previous) {
                warn!(error = %restore, id = %previous.id, "account could not be restored after failed debit");
            }
            self.reload_session();
            return Err(e.into());
        }
        self.transactions.push(tx.clone());
        self.session = Some(updated);
        Ok(())
    }

    /// Replaces the session with the stored record of the same account.
    fn reload_session(&mut self) {
        match self.storage.load_user() {
            Ok(Some(user)) if self.session.as_ref().is_some_and(|s| s.id == user.id) => {
                self.session = Some(user);
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "session could not be reloaded"),
        }
    }

    // ---------------------------------------------------------------------
    // Bill payment
    // ---------------------------------------------------------------------

    pub fn select_bill_category(&mut self, category: BillCategory) {
        self.bill.category = Some(category);
        self.focus = 0;
        self.say(&Message::PayingFor { category });
    }

    pub fn clear_bill_category(&mut self) {
        self.bill.category = None;
        self.focus = 0;
    }

    pub fn pay_bill(&mut self) {
        let result = self.try_pay_bill();
        self.report(result);
    }

    fn try_pay_bill(&mut self) -> BankResult<()> {
        let category = self.bill.category.ok_or(BankError::MissingBillDetails)?;
        let number = self.bill.number.trim().to_string();
        if number.is_empty() || self.bill.amount.trim().is_empty() {
            return Err(BankError::MissingBillDetails);
        }
        let amount = parse_amount(&self.bill.amount)?;

        let previous = self.require_session()?.clone();
        let mut updated = previous.clone();
        apply_debit(&mut updated, amount, true)?;
        let tx = Transaction::debit(
            self.ids.next_transaction_id(),
            amount,
            today(),
            format!("{category} Payment: {number}"),
            "Bill",
        );
        self.commit_debit(&previous, updated, &tx)?;
        info!(amount, %category, "bill paid");

        self.navigate_to(Screen::Success);
        self.say(&Message::BillPaid);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Profile
    // ---------------------------------------------------------------------

    pub fn change_pin(&mut self) {
        let result = self.try_change_pin();
        self.report(result);
    }

    fn try_change_pin(&mut self) -> BankResult<()> {
        let session = self.require_session()?;
        if session.pin != self.pin_change.current {
            return Err(BankError::WrongPin(session.id.clone()));
        }
        if !is_valid_pin(&self.pin_change.new_pin) {
            return Err(BankError::PinFormat);
        }
        if self.pin_change.new_pin != self.pin_change.confirm {
            return Err(BankError::PinMismatch);
        }

        let mut updated = session.clone();
        updated.pin = self.pin_change.new_pin.clone();
        self.storage.save_user(&updated)?;
        info!(id = %updated.id, "PIN changed");
        self.session = Some(updated);

        self.navigate_to(Screen::Success);
        self.say(&Message::PinChanged);
        Ok(())
    }

    pub fn copy_account_id(&mut self) {
        let result = self.try_copy_account_id();
        self.report(result);
    }

    fn try_copy_account_id(&mut self) -> BankResult<()> {
        let id = self.require_session()?.id.clone();
        self.clipboard.set_text(&id)?;
        let message = Message::IdCopied;
        self.status_message = Some(message.render(self.language));
        self.say(&message);
        Ok(())
    }

    pub fn refresh_transactions(&mut self) {
        match self.storage.transactions() {
            Ok(all) => self.transactions = all,
            Err(e) => self.fail(e.into()),
        }
    }

    /// The newest transactions, newest first, as many as the history shows.
    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        crate::domain::recent(&self.transactions, self.settings.history_limit)
    }

    pub fn export_history(&mut self) {
        let result = self.try_export_history();
        self.report(result);
    }

    fn try_export_history(&mut self) -> BankResult<()> {
        let all = self.storage.transactions()?;
        let path = self.settings.export_path();
        let count = CsvExporter::export_transactions(&all, &path)?;
        info!(count, path = %path.display(), "history exported");

        let message = Message::HistoryExported {
            path: path.display().to_string(),
        };
        self.status_message = Some(message.render(self.language));
        self.say(&message);
        Ok(())
    }

    /// Destroys the stored account and ends the session.
    ///
    /// The account's email is released so it can sign up again.
    pub fn sign_out(&mut self) {
        let result = self.try_sign_out();
        self.report(result);
    }

    fn try_sign_out(&mut self) -> BankResult<()> {
        let email = match self.storage.load_user() {
            Ok(Some(user)) => Some(user.email),
            _ => self.session.as_ref().map(|user| user.email.clone()),
        };
        self.storage.clear()?;
        if let Some(email) = email {
            self.verifier.unregister_email(&email);
        }
        info!("signed out, local data cleared");
        self.session = None;
        self.transactions.clear();
        self.navigate_to(Screen::Landing);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::i18n::{Text, text};
    use crate::domain::Direction;
    use std::time::Duration;

    const EMAIL: &str = "a@b.com";

    fn english_app() -> App {
        let settings = Settings {
            default_language: Language::En,
            seed: Some(11),
            ..Settings::default()
        };
        App::new(settings, Box::new(MemoryRepository::default()))
            .with_clipboard(Box::new(MemoryClipboard::default()))
    }

    /// Drives the full signup flow, reading the issued code off the notice.
    fn sign_up(app: &mut App) -> String {
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupName, "Asha");
        app.set_field(Field::SignupMobile, "9999999999");
        app.set_field(Field::SignupEmail, EMAIL);
        app.set_field(Field::SignupPin, "1234");
        app.request_email_verification();
        let code = demo_code(app);
        app.set_field(Field::Otp, &code);
        app.verify_otp();
        app.submit_signup();
        app.generated_id.clone().unwrap()
    }

    fn demo_code(app: &App) -> String {
        app.status_message
            .as_deref()
            .and_then(|s| s.strip_prefix("Demo code: "))
            .unwrap()
            .to_string()
    }

    fn logged_in(balance: f64) -> App {
        let mut app = english_app();
        let id = sign_up(&mut app);
        if balance != app.settings.starting_balance {
            let mut user = app.storage.load_user().unwrap().unwrap();
            user.balance = balance;
            app.storage.save_user(&user).unwrap();
        }
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, &id);
        app.set_field(Field::LoginPin, "1234");
        app.submit_login();
        assert_eq!(app.screen, Screen::Dashboard);
        app
    }

    fn resolve_receiver(app: &mut App, id: &str) {
        app.navigate_to(Screen::SendMoney);
        app.set_field(Field::SendId, id);
        app.tick(Instant::now() + Duration::from_secs(5));
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Landing);
        assert_eq!(app.language, Language::Kn);
        assert!(app.session.is_none());
        assert!(app.error.is_none());
        assert!(app.narrator.has_announced(Screen::Landing, Language::Kn));
    }

    #[test]
    fn test_navigate_resets_error_scroll_and_owned_form() {
        let mut app = english_app();
        app.navigate_to(Screen::BillPay);
        app.select_bill_category(BillCategory::Water);
        app.set_field(Field::BillNumber, "77");
        app.error = Some("boom".to_string());
        app.scroll = 12;

        app.navigate_to(Screen::BillPay);
        assert_eq!(app.bill, BillForm::default());
        assert!(app.error.is_none());
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_navigate_keeps_login_form() {
        let mut app = english_app();
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, "gbabc");
        app.navigate_to(Screen::Landing);
        app.navigate_to(Screen::Login);
        assert_eq!(app.login.id, "gbabc");
    }

    #[test]
    fn test_any_screen_reaches_any_other() {
        let mut app = english_app();
        app.navigate_to(Screen::Transactions);
        assert_eq!(app.screen, Screen::Transactions);
        app.navigate_to(Screen::SignupSuccess);
        assert_eq!(app.screen, Screen::SignupSuccess);
    }

    #[test]
    fn test_signup_creates_user_with_starting_balance() {
        let mut app = english_app();
        let id = sign_up(&mut app);

        assert_eq!(app.screen, Screen::SignupSuccess);
        let stored = app.storage.load_user().unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.balance, 10000.0);
        assert_eq!(stored.name, "Asha");
        assert_eq!(stored.language, Language::En);
        assert!(app.narrator.last_spoken().unwrap().contains(&crate::domain::i18n::spell_out(&id)));
    }

    #[test]
    fn test_second_signup_gets_a_fresh_id() {
        let mut app = english_app();
        let first = sign_up(&mut app);
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupName, "Ravi");
        app.set_field(Field::SignupMobile, "8888888888");
        app.set_field(Field::SignupEmail, "ravi@b.com");
        app.set_field(Field::SignupPin, "4321");
        app.request_email_verification();
        let code = demo_code(&app);
        app.set_field(Field::Otp, &code);
        app.verify_otp();
        app.submit_signup();
        assert_ne!(app.generated_id.unwrap(), first);
    }

    #[test]
    fn test_signup_requires_verified_email() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupName, "Asha");
        app.set_field(Field::SignupMobile, "9999999999");
        app.set_field(Field::SignupEmail, EMAIL);
        app.set_field(Field::SignupPin, "1234");
        app.submit_signup();

        assert_eq!(app.screen, Screen::Signup);
        assert_eq!(app.error.as_deref(), Some("Please verify your email first"));
        assert!(app.storage.load_user().unwrap().is_none());
    }

    #[test]
    fn test_signup_rejects_short_pin() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupName, "Asha");
        app.set_field(Field::SignupMobile, "9999999999");
        app.set_field(Field::SignupEmail, EMAIL);
        app.set_field(Field::SignupPin, "12");
        app.submit_signup();
        assert_eq!(app.error.as_deref(), Some("Please fill all details correctly"));
        assert!(app.generated_id.is_none());
    }

    #[test]
    fn test_email_verification_requires_address() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.request_email_verification();
        assert!(!app.signup.otp_sent);
        assert_eq!(app.error.as_deref(), Some("Please enter email address"));
        assert_eq!(app.narrator.last_spoken(), Some("Please enter email address"));
    }

    #[test]
    fn test_otp_must_be_six_digits() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupEmail, EMAIL);
        app.request_email_verification();
        assert!(app.signup.otp_sent);
        assert_eq!(app.focused(), Some(Control::Field(Field::Otp)));

        app.set_field(Field::Otp, "123");
        app.verify_otp();
        assert!(!app.signup.email_verified);
        assert_eq!(app.error.as_deref(), Some("Please enter 6-digit code"));
    }

    #[test]
    fn test_wrong_otp_leaves_email_unverified() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupEmail, EMAIL);
        app.request_email_verification();
        let code = demo_code(&app);
        let wrong = if code == "999999" { "000000" } else { "999999" };

        app.set_field(Field::Otp, wrong);
        app.verify_otp();
        assert!(!app.signup.email_verified);
        assert_eq!(app.error.as_deref(), Some("Invalid verification code"));

        app.set_field(Field::Otp, &code);
        app.verify_otp();
        assert!(app.signup.email_verified);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_code_from_previous_signup_session_is_void() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupEmail, EMAIL);
        app.request_email_verification();
        let stale = demo_code(&app);

        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupEmail, EMAIL);
        app.signup.otp_sent = true;
        app.set_field(Field::Otp, &stale);
        app.verify_otp();
        assert!(!app.signup.email_verified);
    }

    #[test]
    fn test_cancel_otp_returns_to_verify_button() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.set_field(Field::SignupEmail, EMAIL);
        app.request_email_verification();
        app.set_field(Field::Otp, "12");
        app.cancel_otp();
        assert!(!app.signup.otp_sent);
        assert!(app.signup.otp.is_empty());
        assert_eq!(app.focused(), Some(Control::Action(Action::VerifyEmail)));
    }

    #[test]
    fn test_verified_email_is_read_only() {
        let mut app = english_app();
        sign_up(&mut app);
        app.signup.email_verified = true;
        app.signup.email = EMAIL.to_string();
        app.set_field(Field::SignupEmail, "other@b.com");
        assert_eq!(app.signup.email, EMAIL);
    }

    #[test]
    fn test_otp_field_strips_non_digits() {
        let mut app = english_app();
        app.navigate_to(Screen::Signup);
        app.set_field(Field::Otp, "12a34-5678");
        assert_eq!(app.signup.otp, "123456");
    }

    #[test]
    fn test_login_is_case_insensitive_on_id() {
        let mut app = english_app();
        let id = sign_up(&mut app);
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, &id.to_lowercase());
        app.set_field(Field::LoginPin, "1234");
        app.submit_login();
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.session.as_ref().unwrap().id, id);
        assert_eq!(app.narrator.last_spoken(), Some("Welcome, Asha. Balance is 10000"));
    }

    #[test]
    fn test_login_with_unknown_id_shows_invalid_format() {
        let mut app = english_app();
        sign_up(&mut app);
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, "GBNOSUCHID");
        app.set_field(Field::LoginPin, "1234");
        app.submit_login();

        assert_eq!(app.screen, Screen::Login);
        assert!(app.session.is_none());
        assert_eq!(app.error.as_deref(), Some(text(Language::En, Text::InvalidFormat)));
    }

    #[test]
    fn test_login_with_no_account_at_all() {
        let mut app = english_app();
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, "GBANYTHING");
        app.set_field(Field::LoginPin, "0000");
        app.submit_login();
        assert!(app.session.is_none());
        assert_eq!(app.error.as_deref(), Some(text(Language::En, Text::InvalidFormat)));
    }

    #[test]
    fn test_login_with_wrong_pin() {
        let mut app = english_app();
        let id = sign_up(&mut app);
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, &id);
        app.set_field(Field::LoginPin, "9999");
        app.submit_login();
        assert!(app.session.is_none());
        assert_eq!(app.error.as_deref(), Some(text(Language::En, Text::WrongPin)));
    }

    #[test]
    fn test_uniform_login_errors_hide_id_existence() {
        let settings = Settings {
            default_language: Language::En,
            uniform_login_errors: true,
            ..Settings::default()
        };
        let mut app = App::new(settings, Box::new(MemoryRepository::default()))
            .with_clipboard(Box::new(MemoryClipboard::default()));
        let id = sign_up(&mut app);
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, &id);
        app.set_field(Field::LoginPin, "9999");
        app.submit_login();
        assert_eq!(app.error.as_deref(), Some(text(Language::En, Text::InvalidFormat)));
    }

    #[test]
    fn test_login_switches_to_users_language() {
        let mut app = english_app();
        let id = sign_up(&mut app);
        app.set_language(Language::Hi);
        app.navigate_to(Screen::Login);
        app.set_field(Field::LoginId, &id);
        app.set_field(Field::LoginPin, "1234");
        app.submit_login();
        assert_eq!(app.language, Language::En);
        assert!(app.narrator.has_announced(Screen::Dashboard, Language::En));
        assert!(!app.narrator.has_announced(Screen::Dashboard, Language::Hi));
    }

    #[test]
    fn test_receiver_lookup_waits_for_delay() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::SendMoney);
        app.set_field(Field::SendId, "gbq4rt7yz2");
        assert_eq!(app.send.id, "GBQ4RT7YZ2");
        assert!(app.is_verifying_receiver());

        app.tick(Instant::now());
        assert!(app.send.receiver_name.is_none());

        app.tick(Instant::now() + Duration::from_secs(5));
        assert!(!app.is_verifying_receiver());
        let name = app.send.receiver_name.clone().unwrap();
        assert!(app.narrator.last_spoken().unwrap().contains(&name));
    }

    #[test]
    fn test_short_receiver_id_is_not_looked_up() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::SendMoney);
        app.set_field(Field::SendId, "GBQ4");
        assert!(!app.is_verifying_receiver());
    }

    #[test]
    fn test_unknown_receiver_sets_error() {
        let mut app = logged_in(10000.0);
        resolve_receiver(&mut app, "XX12345678");
        assert!(app.send.receiver_name.is_none());
        assert_eq!(app.error.as_deref(), Some(text(Language::En, Text::InvalidFormat)));
    }

    #[test]
    fn test_editing_receiver_id_forgets_resolved_name() {
        let mut app = logged_in(10000.0);
        resolve_receiver(&mut app, "GBQ4RT7YZ2");
        assert!(app.send.receiver_name.is_some());
        app.focus_on(Control::Field(Field::SendId));
        app.backspace();
        assert!(app.send.receiver_name.is_none());
        assert!(!app.is_verifying_receiver());
    }

    #[test]
    fn test_navigation_cancels_pending_lookup() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::SendMoney);
        app.set_field(Field::SendId, "GBQ4RT7YZ2");
        app.navigate_to(Screen::Dashboard);
        app.tick(Instant::now() + Duration::from_secs(5));
        assert!(app.error.is_none());
        assert!(app.send.receiver_name.is_none());
    }

    struct FixedDirectory;

    impl NameDirectory for FixedDirectory {
        fn lookup(&self, id: &str) -> Option<String> {
            (id == "GBRAVI0001").then(|| "Ravi".to_string())
        }
    }

    #[test]
    fn test_transfer_names_receiver_from_directory() {
        let mut app = logged_in(10000.0);
        app.directory = Box::new(FixedDirectory);
        resolve_receiver(&mut app, "GBRAVI0001");
        app.set_field(Field::SendAmount, "500");
        app.submit_transfer();
        assert_eq!(app.narrator.last_spoken(), Some("Success. Sent 500 to Ravi"));
        assert_eq!(app.storage.transactions().unwrap()[0].description, "Sent to Ravi");
    }

    #[test]
    fn test_transfer_debits_balance_and_appends_one_transaction() {
        let mut app = logged_in(10000.0);
        resolve_receiver(&mut app, "GBQ4RT7YZ2");
        let receiver = app.send.receiver_name.clone().unwrap();
        app.set_field(Field::SendAmount, "2500");
        app.submit_transfer();

        assert_eq!(app.screen, Screen::Success);
        assert_eq!(app.session.as_ref().unwrap().balance, 7500.0);
        assert_eq!(app.storage.load_user().unwrap().unwrap().balance, 7500.0);

        let txs = app.storage.transactions().unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].direction, Direction::Debit);
        assert_eq!(txs[0].amount, 2500.0);
        assert_eq!(txs[0].category, "Transfer");
        assert_eq!(txs[0].description, format!("Sent to {receiver}"));
        assert_eq!(
            app.narrator.last_spoken(),
            Some(format!("Success. Sent 2500 to {receiver}").as_str())
        );
    }

    #[test]
    fn test_transfer_of_entire_balance_is_allowed() {
        let mut app = logged_in(300.0);
        resolve_receiver(&mut app, "GBQ4RT7YZ2");
        app.set_field(Field::SendAmount, "300");
        app.submit_transfer();
        assert_eq!(app.session.as_ref().unwrap().balance, 0.0);
    }

    #[test]
    fn test_transfer_exceeding_balance_changes_nothing() {
        let mut app = logged_in(300.0);
        resolve_receiver(&mut app, "GBQ4RT7YZ2");
        app.set_field(Field::SendAmount, "500");
        app.submit_transfer();

        assert_eq!(app.screen, Screen::SendMoney);
        assert_eq!(app.session.as_ref().unwrap().balance, 300.0);
        assert_eq!(app.storage.load_user().unwrap().unwrap().balance, 300.0);
        assert!(app.storage.transactions().unwrap().is_empty());
        assert_eq!(app.narrator.last_spoken(), Some("Not enough balance"));
    }

    #[test]
    fn test_transfer_without_receiver_is_rejected() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::SendMoney);
        app.send.amount = "100".to_string();
        app.submit_transfer();
        assert_eq!(app.narrator.last_spoken(), Some(text(Language::En, Text::InvalidFormat)));
        assert!(app.storage.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_transfer_rejects_zero_amount() {
        let mut app = logged_in(10000.0);
        resolve_receiver(&mut app, "GBQ4RT7YZ2");
        app.set_field(Field::SendAmount, "0");
        app.submit_transfer();
        assert_eq!(app.error.as_deref(), Some("Please enter a valid amount"));
        assert_eq!(app.session.as_ref().unwrap().balance, 10000.0);
    }

    #[test]
    fn test_transfer_without_session_is_rejected() {
        let mut app = english_app();
        resolve_receiver(&mut app, "GBQ4RT7YZ2");
        app.set_field(Field::SendAmount, "10");
        app.submit_transfer();
        assert_eq!(app.error.as_deref(), Some("Please login first"));
    }

    #[test]
    fn test_bill_category_gates_fields() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::BillPay);
        assert!(!app.controls().contains(&Control::Field(Field::BillNumber)));
        app.select_bill_category(BillCategory::Electricity);
        assert!(app.controls().contains(&Control::Field(Field::BillNumber)));
        assert_eq!(app.narrator.last_spoken(), Some("Paying for Electricity. Enter details."));
        app.clear_bill_category();
        assert!(!app.controls().contains(&Control::Field(Field::BillAmount)));
    }

    #[test]
    fn test_bill_payment_records_category() {
        let mut app = logged_in(1000.0);
        app.navigate_to(Screen::BillPay);
        app.select_bill_category(BillCategory::Mobile);
        app.set_field(Field::BillNumber, "9876543210");
        app.set_field(Field::BillAmount, "199");
        app.pay_bill();

        assert_eq!(app.screen, Screen::Success);
        assert_eq!(app.session.as_ref().unwrap().balance, 801.0);
        let txs = app.storage.transactions().unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].description, "Mobile Payment: 9876543210");
        assert_eq!(txs[0].category, "Bill");
        assert_eq!(app.narrator.last_spoken(), Some("Bill paid successfully"));
    }

    #[test]
    fn test_bill_payment_needs_details() {
        let mut app = logged_in(1000.0);
        app.navigate_to(Screen::BillPay);
        app.select_bill_category(BillCategory::Water);
        app.set_field(Field::BillAmount, "50");
        app.pay_bill();
        assert_eq!(app.error.as_deref(), Some("Please enter details"));
        assert!(app.storage.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_bill_payment_over_balance() {
        let mut app = logged_in(100.0);
        app.navigate_to(Screen::BillPay);
        app.select_bill_category(BillCategory::Dth);
        app.set_field(Field::BillNumber, "55");
        app.set_field(Field::BillAmount, "150");
        app.pay_bill();
        assert_eq!(app.narrator.last_spoken(), Some("Not enough money in bank"));
        assert_eq!(app.session.as_ref().unwrap().balance, 100.0);
    }

    #[test]
    fn test_dashboard_narrated_once_per_language() {
        let mut app = logged_in(10000.0);
        app.narrator.say("marker", Language::En);
        app.navigate_to(Screen::Profile);
        app.navigate_to(Screen::Dashboard);
        assert_eq!(app.narrator.last_spoken(), Some("marker"));

        app.set_language(Language::Kn);
        assert!(app.narrator.last_spoken().unwrap().contains("Asha"));
        assert!(app.narrator.has_announced(Screen::Dashboard, Language::Kn));
    }

    #[test]
    fn test_leaving_signup_success_discards_generated_id() {
        let mut app = english_app();
        sign_up(&mut app);
        assert!(app.generated_id.is_some());
        app.navigate_to(Screen::Login);
        assert!(app.generated_id.is_none());
    }

    #[test]
    fn test_change_pin() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::PinChange);
        app.set_field(Field::CurrentPin, "1234");
        app.set_field(Field::NewPin, "5678");
        app.set_field(Field::ConfirmPin, "5678");
        app.change_pin();
        assert_eq!(app.screen, Screen::Success);
        assert_eq!(app.storage.load_user().unwrap().unwrap().pin, "5678");
    }

    #[test]
    fn test_change_pin_failures() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::PinChange);
        app.set_field(Field::CurrentPin, "0000");
        app.set_field(Field::NewPin, "5678");
        app.set_field(Field::ConfirmPin, "5678");
        app.change_pin();
        assert_eq!(app.error.as_deref(), Some(text(Language::En, Text::WrongPin)));

        app.set_field(Field::CurrentPin, "1234");
        app.set_field(Field::ConfirmPin, "5679");
        app.change_pin();
        assert_eq!(app.error.as_deref(), Some("New PINs do not match"));

        app.set_field(Field::NewPin, "56");
        app.change_pin();
        assert_eq!(app.error.as_deref(), Some("PIN must be 4 digits"));
        assert_eq!(app.storage.load_user().unwrap().unwrap().pin, "1234");
    }

    #[test]
    fn test_copy_account_id() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::ReceiveMoney);
        app.copy_account_id();
        assert_eq!(app.status_message.as_deref(), Some("ID copied"));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut app = logged_in(10000.0);
        for amount in ["10", "20", "30", "40", "50", "60"] {
            resolve_receiver(&mut app, "GBQ4RT7YZ2");
            app.set_field(Field::SendAmount, amount);
            app.submit_transfer();
        }
        app.navigate_to(Screen::Transactions);
        let shown: Vec<f64> = app.recent_transactions().iter().map(|t| t.amount).collect();
        assert_eq!(shown, vec![60.0, 50.0, 40.0, 30.0, 20.0]);
        assert_eq!(app.transactions.len(), 6);
    }

    #[test]
    fn test_export_history_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            default_language: Language::En,
            export_path: Some(dir.path().join("out.csv")),
            ..Settings::default()
        };
        let mut app = App::new(settings, Box::new(MemoryRepository::default()))
            .with_clipboard(Box::new(MemoryClipboard::default()));
        app.export_history();
        assert!(app.error.is_none());
        assert!(dir.path().join("out.csv").exists());
        assert!(app.status_message.unwrap().starts_with("Transactions exported to"));
    }

    #[test]
    fn test_sign_out_destroys_account() {
        let mut app = logged_in(10000.0);
        app.navigate_to(Screen::Profile);
        app.sign_out();
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.session.is_none());
        assert!(app.storage.load_user().unwrap().is_none());
    }

    #[test]
    fn test_same_email_can_sign_up_after_sign_out() {
        let mut app = logged_in(10000.0);
        app.sign_out();

        let id = sign_up(&mut app);
        assert!(app.error.is_none());
        assert_eq!(app.screen, Screen::SignupSuccess);
        assert_eq!(app.storage.load_user().unwrap().unwrap().id, id);
    }

    /// Keeps the account in memory but refuses to record transactions.
    struct AppendFails {
        inner: MemoryRepository,
    }

    impl Storage for AppendFails {
        fn load_user(&self) -> crate::domain::StorageResult<Option<User>> {
            self.inner.load_user()
        }

        fn save_user(&mut self, user: &User) -> crate::domain::StorageResult<()> {
            self.inner.save_user(user)
        }

        fn transactions(&self) -> crate::domain::StorageResult<Vec<Transaction>> {
            self.inner.transactions()
        }

        fn append_transaction(&mut self, _tx: &Transaction) -> crate::domain::StorageResult<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn clear(&mut self) -> crate::domain::StorageResult<()> {
            self.inner.clear()
        }
    }

    #[test]
    fn test_failed_debit_record_leaves_balance_untouched() {
        let mut app = logged_in(10000.0);
        let mut inner = MemoryRepository::default();
        inner.save_user(app.session.as_ref().unwrap()).unwrap();
        app.storage = Box::new(AppendFails { inner });

        resolve_receiver(&mut app, "GBQ4RT7YZ2");
        app.set_field(Field::SendAmount, "4000");
        app.submit_transfer();

        assert_eq!(app.screen, Screen::SendMoney);
        assert_eq!(app.error.as_deref(), Some("Could not read or save bank data"));
        assert_eq!(app.session.as_ref().unwrap().balance, 10000.0);
        assert_eq!(app.storage.load_user().unwrap().unwrap().balance, 10000.0);
        assert!(app.storage.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_failed_bill_record_leaves_balance_untouched() {
        let mut app = logged_in(500.0);
        let mut inner = MemoryRepository::default();
        inner.save_user(app.session.as_ref().unwrap()).unwrap();
        app.storage = Box::new(AppendFails { inner });

        app.navigate_to(Screen::BillPay);
        app.select_bill_category(BillCategory::Water);
        app.set_field(Field::BillNumber, "42");
        app.set_field(Field::BillAmount, "120");
        app.pay_bill();

        assert_eq!(app.session.as_ref().unwrap().balance, 500.0);
        assert_eq!(app.storage.load_user().unwrap().unwrap().balance, 500.0);
    }

    fn corrupt_repository(dir: &std::path::Path) -> Box<dyn Storage> {
        std::fs::write(dir.join("bank_user.json"), "{ not json").unwrap();
        Box::new(crate::infrastructure::FileRepository::new(dir).unwrap())
    }

    #[test]
    fn test_corrupt_account_is_reported_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            default_language: Language::En,
            ..Settings::default()
        };
        let app = App::new(settings, corrupt_repository(dir.path()))
            .with_clipboard(Box::new(MemoryClipboard::default()));

        assert_eq!(app.screen, Screen::Landing);
        assert_eq!(app.error.as_deref(), Some("Could not read or save bank data"));
    }

    #[test]
    fn test_login_against_corrupt_account_shows_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            default_language: Language::En,
            ..Settings::default()
        };
        let mut app = App::new(settings, corrupt_repository(dir.path()))
            .with_clipboard(Box::new(MemoryClipboard::default()));

        app.navigate_to(Screen::Login);
        assert!(app.error.is_none());
        app.set_field(Field::LoginId, "GBQ4RT7YZ2");
        app.set_field(Field::LoginPin, "1234");
        app.submit_login();

        assert!(app.session.is_none());
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.error.as_deref(), Some("Could not read or save bank data"));
    }

    #[test]
    fn test_seeded_apps_issue_the_same_account_id() {
        let mut first = english_app();
        let mut second = english_app();
        assert_eq!(sign_up(&mut first), sign_up(&mut second));
    }

    #[test]
    fn test_back_targets() {
        let mut app = english_app();
        assert_eq!(app.back_target(), None);
        app.navigate_to(Screen::Login);
        app.go_back();
        assert_eq!(app.screen, Screen::Landing);
        app.navigate_to(Screen::PinChange);
        assert_eq!(app.back_target(), Some(Screen::Profile));
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = english_app();
        let len = app.controls().len();
        for _ in 0..len {
            app.focus_next();
        }
        assert_eq!(app.focus, 0);
        app.focus_prev();
        assert_eq!(app.focus, len - 1);
    }

    #[test]
    fn test_typing_respects_field_limits() {
        let mut app = english_app();
        app.navigate_to(Screen::Login);
        app.focus_on(Control::Field(Field::LoginPin));
        for c in "12a345".chars() {
            app.type_char(c);
        }
        assert_eq!(app.login.pin, "1234");
        app.backspace();
        assert_eq!(app.login.pin, "123");
    }
}
