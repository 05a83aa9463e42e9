use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-().\s]+$").expect("valid phone regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Standard,
    Deep,
    MoveOut,
    Office,
    Carpet,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Standard,
        Service::Deep,
        Service::MoveOut,
        Service::Office,
        Service::Carpet,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Service::Standard => "standard",
            Service::Deep => "deep",
            Service::MoveOut => "move_out",
            Service::Office => "office",
            Service::Carpet => "carpet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::Standard => "Standard Home Cleaning",
            Service::Deep => "Deep Cleaning",
            Service::MoveOut => "Move-In / Move-Out",
            Service::Office => "Office & Commercial",
            Service::Carpet => "Carpet & Upholstery",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Phone => "contact-phone",
            Field::Service => "contact-service",
            Field::Message => "contact-message",
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please choose a service")]
    MissingService,
    #[error("Please tell us a little more (at least 10 characters)")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::MissingName | FieldError::NameTooShort => Field::Name,
            FieldError::MissingEmail | FieldError::InvalidEmail => Field::Email,
            FieldError::InvalidPhone => Field::Phone,
            FieldError::MissingService => Field::Service,
            FieldError::MessageTooShort => Field::Message,
        }
    }
}

/// Raw form input as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }
}

/// A form that passed validation, trimmed and typed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Service,
    pub message: String,
}

fn check_name(name: &str) -> Option<FieldError> {
    match name.chars().count() {
        0 => Some(FieldError::MissingName),
        n if n < MIN_NAME_CHARS => Some(FieldError::NameTooShort),
        _ => None,
    }
}

fn check_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::MissingEmail)
    } else if !EMAIL_RE.is_match(email) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

fn check_phone(phone: &str) -> Option<FieldError> {
    if phone.is_empty() {
        return None;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !PHONE_CHARS_RE.is_match(phone) || !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
    {
        return Some(FieldError::InvalidPhone);
    }
    None
}

pub fn validate_field(form: &ContactForm, field: Field) -> Option<FieldError> {
    match field {
        Field::Name => check_name(form.name.trim()),
        Field::Email => check_email(form.email.trim()),
        Field::Phone => check_phone(form.phone.trim()),
        Field::Service => Service::from_slug(form.service.trim())
            .is_none()
            .then_some(FieldError::MissingService),
        Field::Message => (form.message.trim().chars().count() < MIN_MESSAGE_CHARS)
            .then_some(FieldError::MessageTooShort),
    }
}

/// Checks every field and reports all failures together.
pub fn validate(form: &ContactForm) -> Result<ContactRequest, Vec<FieldError>> {
    let errors: Vec<FieldError> = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Message,
    ]
    .into_iter()
    .filter_map(|field| validate_field(form, field))
    .collect();

    let service = Service::from_slug(form.service.trim());
    let Some(service) = service.filter(|_| errors.is_empty()) else {
        return Err(errors);
    };

    let phone = form.phone.trim();
    Ok(ContactRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        service,
        message: form.message.trim().to_string(),
    })
}
