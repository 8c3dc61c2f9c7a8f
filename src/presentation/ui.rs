use crate::application::{Action, App, Control, Field};
use crate::domain::i18n::{Text, format_amount, text};
use crate::domain::{Direction as TxDirection, LOAN_OFFERS, Screen, SpendingSummary};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph, Wrap},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(4)])
        .split(f.area());

    render_header(f, app, chunks[0]);
    if app.screen == Screen::Analysis {
        render_analysis(f, app, chunks[1]);
    } else {
        render_body(f, app, chunks[1]);
    }
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let user = app
        .session
        .as_ref()
        .map(|u| format!(" | {} ({})", u.name, u.id))
        .unwrap_or_default();
    let header = Paragraph::new(format!(
        "simbank - Gramin Bank | {} | {}{}",
        screen_title(app),
        app.language.native_name(),
        user
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn screen_title(app: &App) -> &'static str {
    let lang = app.language;
    match app.screen {
        Screen::Landing => text(lang, Text::Welcome),
        Screen::Login => text(lang, Text::LoginTitle),
        Screen::LanguageSelect => text(lang, Text::ChooseLanguage),
        Screen::Signup => text(lang, Text::Signup),
        Screen::SignupSuccess => text(lang, Text::SignupSuccess),
        Screen::Dashboard => text(lang, Text::Balance),
        Screen::SendMoney => text(lang, Text::SendMoney),
        Screen::ReceiveMoney => text(lang, Text::ReceiveMoney),
        Screen::Transactions => text(lang, Text::LastFive),
        Screen::Analysis => text(lang, Text::ReportTitle),
        Screen::BillPay => text(lang, Text::BillPay),
        Screen::Loans => text(lang, Text::Loans),
        Screen::PinChange => text(lang, Text::PinChange),
        Screen::Profile => text(lang, Text::Profile),
        Screen::Success => text(lang, Text::Success),
        Screen::ProjectSpecs => text(lang, Text::CaseStudy),
    }
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = screen_lines(app);
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.extend(control_lines(app));

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(screen_title(app)))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(body, area);
}

/// Informational lines shown above the controls.
fn screen_lines(app: &App) -> Vec<Line<'static>> {
    let lang = app.language;
    let mut lines = Vec::new();

    match app.screen {
        Screen::Landing => {
            lines.push(Line::from(text(lang, Text::Tagline)));
        }
        Screen::SignupSuccess => {
            if let Some(id) = &app.generated_id {
                lines.push(Line::from(Span::styled(
                    id.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
            }
            lines.push(Line::from(text(lang, Text::SaveIdMsg)));
        }
        Screen::Dashboard => {
            if let Some(user) = &app.session {
                lines.push(Line::from(vec![
                    Span::raw(format!("{}: ", text(lang, Text::Balance))),
                    Span::styled(
                        format!("₹{}", format_amount(user.balance)),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
        }
        Screen::SendMoney => {
            if app.is_verifying_receiver() {
                lines.push(Line::from(Span::styled(text(lang, Text::CheckingId), Style::default().fg(Color::Yellow))));
            } else if let Some(name) = &app.send.receiver_name {
                lines.push(Line::from(Span::styled(
                    format!("{}: {name}", text(lang, Text::IdFound)),
                    Style::default().fg(Color::Green),
                )));
                lines.push(Line::from(text(lang, Text::Confirm)));
            }
        }
        Screen::ReceiveMoney => {
            if let Some(user) = &app.session {
                lines.push(Line::from(Span::styled(
                    user.id.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
        }
        Screen::Transactions => {
            let recent = app.recent_transactions();
            if recent.is_empty() {
                lines.push(Line::from(text(lang, Text::NoTransactions)));
            }
            for tx in recent {
                let (sign, color) = match tx.direction {
                    TxDirection::Credit => ("+", Color::Green),
                    TxDirection::Debit => ("-", Color::Red),
                };
                lines.push(Line::from(vec![
                    Span::raw(format!("{:<10} {:<32} ", tx.date, tx.description)),
                    Span::styled(format!("{sign}₹{}", format_amount(tx.amount)), Style::default().fg(color)),
                ]));
            }
        }
        Screen::BillPay => {
            if let Some(category) = app.bill.category {
                lines.push(Line::from(format!("{}: {category}", text(lang, Text::BillPay))));
            }
        }
        Screen::Loans => {
            for offer in LOAN_OFFERS {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<20}", offer.title), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!(
                        " {} {:<6} {} {}",
                        text(lang, Text::Interest),
                        offer.interest,
                        text(lang, Text::UpTo),
                        offer.max_amount
                    )),
                ]));
            }
        }
        Screen::Profile => {
            if let Some(user) = &app.session {
                let rows = [
                    (text(lang, Text::NameLabel), &user.name),
                    (text(lang, Text::MobileLabel), &user.mobile),
                    ("ID", &user.id),
                    (text(lang, Text::EmailLabel), &user.email),
                ];
                for (label, value) in rows {
                    lines.push(Line::from(format!("{label:<16} {value}")));
                }
            }
        }
        Screen::Success => {
            lines.push(Line::from(Span::styled(
                text(lang, Text::Success),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            if let Some(user) = &app.session {
                lines.push(Line::from(format!("{}: ₹{}", text(lang, Text::Balance), format_amount(user.balance))));
            }
        }
        Screen::ProjectSpecs => {
            for line in PROJECT_SPECS.lines() {
                lines.push(Line::from(line));
            }
        }
        Screen::Login
        | Screen::LanguageSelect
        | Screen::Signup
        | Screen::Analysis
        | Screen::PinChange => {}
    }

    lines
}

fn control_lines(app: &App) -> Vec<Line<'static>> {
    let focused = app.focus.min(app.controls().len().saturating_sub(1));
    app.controls()
        .into_iter()
        .enumerate()
        .map(|(i, control)| {
            let style = if i == focused {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            let rendered = match control {
                Control::Field(field) => {
                    let value = app.field_value(field);
                    let shown = if field.is_secret() {
                        "•".repeat(value.chars().count())
                    } else {
                        value.to_string()
                    };
                    let lock = if app.is_read_only(field) { " ✓" } else { "" };
                    format!("{:<22} [{shown}]{lock}", field_label(app, field))
                }
                Control::Action(action) => format!("{}. {}", i + 1, action_label(app, action)),
            };
            Line::from(Span::styled(rendered, style))
        })
        .collect()
}

fn field_label(app: &App, field: Field) -> &'static str {
    let lang = app.language;
    match field {
        Field::SignupName => text(lang, Text::NameLabel),
        Field::SignupMobile => text(lang, Text::MobileLabel),
        Field::SignupEmail => text(lang, Text::EmailLabel),
        Field::SignupPin | Field::LoginPin => text(lang, Text::PinLabel),
        Field::Otp => text(lang, Text::OtpLabel),
        Field::LoginId | Field::SendId => text(lang, Text::AccIdLabel),
        Field::SendAmount | Field::BillAmount => text(lang, Text::AmountLabel),
        Field::BillNumber => text(lang, Text::ConsumerNumber),
        Field::CurrentPin => text(lang, Text::CurrentPinLabel),
        Field::NewPin => text(lang, Text::NewPinLabel),
        Field::ConfirmPin => text(lang, Text::ConfirmPinLabel),
    }
}

fn action_label(app: &App, action: Action) -> String {
    let lang = app.language;
    match action {
        Action::GoTo(Screen::Login) => text(lang, Text::LandingLogin).to_string(),
        Action::GoTo(Screen::Signup) => text(lang, Text::LandingSignup).to_string(),
        Action::GoTo(Screen::LanguageSelect) => text(lang, Text::ChooseLanguage).to_string(),
        Action::GoTo(Screen::ProjectSpecs) => text(lang, Text::CaseStudy).to_string(),
        Action::GoTo(Screen::SendMoney) => text(lang, Text::SendMoney).to_string(),
        Action::GoTo(Screen::ReceiveMoney) => text(lang, Text::ReceiveMoney).to_string(),
        Action::GoTo(Screen::BillPay) => text(lang, Text::BillPay).to_string(),
        Action::GoTo(Screen::Loans) => text(lang, Text::Loans).to_string(),
        Action::GoTo(Screen::Analysis) => text(lang, Text::Reports).to_string(),
        Action::GoTo(Screen::Transactions) => text(lang, Text::LastFive).to_string(),
        Action::GoTo(Screen::Profile) => text(lang, Text::Profile).to_string(),
        Action::GoTo(Screen::PinChange) => text(lang, Text::PinChange).to_string(),
        Action::GoTo(screen) if app.back_target() == Some(screen) => text(lang, Text::Back).to_string(),
        Action::GoTo(_) => text(lang, Text::Home).to_string(),
        Action::SetLanguage(language) if language == app.language => format!("{} ✓", language.native_name()),
        Action::SetLanguage(language) => language.native_name().to_string(),
        Action::VerifyEmail => text(lang, Text::VerifyEmailBtn).to_string(),
        Action::VerifyOtp => text(lang, Text::VerifyCodeBtn).to_string(),
        Action::CancelOtp => text(lang, Text::ChangeEmailBtn).to_string(),
        Action::Register => text(lang, Text::RegisterBtn).to_string(),
        Action::SubmitLogin => text(lang, Text::LoginTitle).to_string(),
        Action::Transfer => text(lang, Text::SendMoney).to_string(),
        Action::SelectBill(category) => category.label().to_string(),
        Action::ChangeBillCategory => text(lang, Text::ChangeCategoryBtn).to_string(),
        Action::PayBill => text(lang, Text::BillPay).to_string(),
        Action::ChangePin => text(lang, Text::PinChange).to_string(),
        Action::CopyId => text(lang, Text::CopyIdBtn).to_string(),
        Action::ExportHistory => text(lang, Text::ExportBtn).to_string(),
        Action::SignOut => text(lang, Text::SignOut).to_string(),
    }
}

fn render_analysis(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    let summary = SpendingSummary::from_transactions(&app.transactions);
    let bars: Vec<(&str, u64)> = summary
        .by_category
        .iter()
        .map(|(category, total)| (category.as_str(), total.round().max(0.0) as u64))
        .collect();
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(text(app.language, Text::ReportTitle)))
        .data(bars.as_slice())
        .bar_width(10)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));
    f.render_widget(chart, chunks[0]);

    let mut lines = vec![
        Line::from(format!("{}: ₹{}", text(app.language, Text::Spent), format_amount(summary.total_debits))),
        Line::from(format!("{}: ₹{}", text(app.language, Text::Received), format_amount(summary.total_credits))),
    ];
    lines.extend(control_lines(app));
    let totals = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(totals, chunks[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    match (&app.error, &app.status_message) {
        (Some(error), _) => lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))),
        (None, Some(status)) => lines.push(Line::from(Span::styled(status.clone(), Style::default().fg(Color::Green)))),
        (None, None) => lines.push(Line::from(text(app.language, Text::KeyHint))),
    }
    if let Some(spoken) = app.narrator.last_spoken() {
        lines.push(Line::from(Span::styled(
            format!("🔊 {spoken}"),
            Style::default().fg(Color::Magenta),
        )));
    }

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

const PROJECT_SPECS: &str = r#"GRAMIN BANK - CASE STUDY

=== PROBLEM ===
Rural account holders often cannot read banking apps written in English.
Small text and long forms keep first-time users away from digital payments.

=== APPROACH ===
• Every screen is available in English, Kannada and Hindi
• Each screen is read aloud the first time it is opened
• Errors and confirmations are always read aloud
• Four-digit PIN and a ten-character bank ID, nothing else to remember

=== WHAT THIS DEMO SIMULATES ===
• Email verification with a six-digit code (shown on screen)
• Receiver name lookup after a short delay
• Transfers and bill payments against a single local account

All data stays on this machine in the configured data directory."#;
