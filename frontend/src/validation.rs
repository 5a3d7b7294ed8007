use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// `(11) 8765-4321` or `(11) 98765-4321`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$").expect("phone pattern"));

/// How a form field's value is checked, derived from its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Tel,
    Other,
}

impl FieldKind {
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            _ => FieldKind::Other,
        }
    }
}

/// Rejection reasons; `Display` is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,
    #[error("Por favor, insira um telefone válido.")]
    InvalidPhone,
    #[error("Este campo é obrigatório.")]
    Required,
}

/// Checks a raw field value. Empty optional fields always pass; the required
/// rule wins over format rules.
pub fn validate(kind: FieldKind, raw: &str, required: bool) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return if required {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }
    match kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Tel if !PHONE_RE.is_match(value) => Err(ValidationError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Re-punctuates a Brazilian phone number as the user types.
///
/// Non-digits are dropped. Eleven digits format as a mobile number, ten as a
/// landline; any other length stays bare digits.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => digits,
    }
}
