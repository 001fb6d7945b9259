//! Contact form validation and simulated submission
//!
//! There is no backend: a valid submission spends a fixed delay "sending",
//! shows a success message, then returns the form to idle.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::state::StateCell;
use super::timer::{millis, Timer};

/// Time spent in [`FormStatus::Sending`]
pub const SENDING_DELAY_MS: u32 = 1_500;

/// Time the success message stays up before the form is usable again
pub const SUCCESS_RESET_MS: u32 = 5_000;

/// local-part@domain.tld, no whitespace, exactly one `@`
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("company")]
    Company,
    #[display("message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Company => "Company",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@company.com",
            ContactField::Company => "Acme Corp",
            ContactField::Message => "Tell us about your needs...",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Company)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Message is required")]
    MessageRequired,
}

/// Field errors, ordered by field
pub type FieldErrors = BTreeMap<ContactField, ContactError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check required fields and the email shape.
///
/// Required fields are checked after trimming; the email pattern is matched
/// against the value as typed.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(ContactField::Name, ContactError::NameRequired);
    }

    if form.email.trim().is_empty() {
        errors.insert(ContactField::Email, ContactError::EmailRequired);
    } else if !is_valid_email(&form.email) {
        errors.insert(ContactField::Email, ContactError::InvalidEmail);
    }

    if form.message.trim().is_empty() {
        errors.insert(ContactField::Message, ContactError::MessageRequired);
    }

    errors
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl ContactFormState {
    pub fn error(&self, field: ContactField) -> Option<ContactError> {
        self.errors.get(&field).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed, the form is now sending
    Accepted,
    /// Validation failed; the errors are also stored in the state
    Rejected(FieldErrors),
    /// A submission is already in flight or its success message is showing
    Ignored,
}

/// Drives a [`ContactFormState`] through `Idle -> Sending -> Success -> Idle`
#[derive(Clone, Copy)]
pub struct ContactFormController<C, T> {
    state: C,
    timer: T,
}

impl<C, T> ContactFormController<C, T>
where
    C: StateCell<ContactFormState>,
    T: Timer,
{
    pub fn new(state: C, timer: T) -> Self {
        Self { state, timer }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Update one field and clear its error
    pub fn edit(&self, field: ContactField, value: String) {
        self.state.mutate(|s| {
            s.form.set(field, value);
            s.errors.remove(&field);
        });
    }

    pub fn submit(&self) -> SubmitOutcome {
        let outcome = self.state.mutate(|s| {
            if s.status != FormStatus::Idle {
                return SubmitOutcome::Ignored;
            }
            let errors = validate(&s.form);
            if !errors.is_empty() {
                s.errors = errors.clone();
                return SubmitOutcome::Rejected(errors);
            }
            s.status = FormStatus::Sending;
            SubmitOutcome::Accepted
        });

        let Some(outcome) = outcome else {
            return SubmitOutcome::Ignored;
        };
        if outcome == SubmitOutcome::Accepted {
            self.schedule_success();
        }
        outcome
    }

    fn schedule_success(&self) {
        let state = self.state.clone();
        let timer = self.timer.clone();
        self.timer.schedule(
            millis(SENDING_DELAY_MS),
            Box::new(move || {
                let delivered = state.mutate(|s| {
                    if s.status != FormStatus::Sending {
                        return false;
                    }
                    s.status = FormStatus::Success;
                    s.form = ContactForm::default();
                    s.errors.clear();
                    true
                });
                if delivered != Some(true) {
                    return;
                }
                timer.schedule(
                    millis(SUCCESS_RESET_MS),
                    Box::new(move || {
                        state.mutate(|s| {
                            if s.status == FormStatus::Success {
                                s.status = FormStatus::Idle;
                            }
                        });
                    }),
                );
            }),
        );
    }
}
