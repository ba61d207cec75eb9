//! Field validation at the user-input boundary
//!
//! Every value typed at a prompt or passed as a CLI argument goes through
//! one of these validators before it reaches a library call. Validators
//! are pure `Result<T, String>` functions so subcommands can surface the
//! message once and menu prompts can loop until the input passes.

use biblio_core::{
    normalize_digits, round_to_cents, Date, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR,
};
use std::io::{self, Write};

pub const MIN_TEXT_LEN: usize = 2;
pub const MAX_TEXT_LEN: usize = 100;
pub const MAX_COPIES: u32 = 1000;
pub const MIN_FINE_AMOUNT: f64 = 0.01;
pub const MAX_FINE_AMOUNT: f64 = 10_000.0;

/// Validates a free-text field (name, title, address), trimmed
pub fn validate_text(field: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.len() < MIN_TEXT_LEN || trimmed.len() > MAX_TEXT_LEN {
        return Err(format!(
            "{} must be between {} and {} characters",
            field, MIN_TEXT_LEN, MAX_TEXT_LEN
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates an ISBN: exactly 10 or 13 digits once hyphens and spaces are
/// stripped
pub fn validate_isbn(value: &str) -> Result<String, String> {
    let digits = normalize_digits(value.trim());
    if !(digits.len() == 10 || digits.len() == 13) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("ISBN must be exactly 10 or 13 digits".to_string());
    }
    Ok(digits)
}

/// Validates an email address: one `@`, non-empty local part, dotted domain
pub fn validate_email(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    let mut parts = trimmed.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err("Email must contain exactly one '@'".to_string()),
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err("Email must have a local part and a dotted domain".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validates a phone number: 8 to 15 digits after stripping `+`, spaces and
/// hyphens
pub fn validate_phone(value: &str) -> Result<String, String> {
    let digits = normalize_digits(&value.trim().replace('+', ""));
    if digits.len() < 8 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone must be 8 to 15 digits".to_string());
    }
    Ok(digits)
}

/// Validates a publication year against the accepted range
pub fn validate_year(value: &str) -> Result<i32, String> {
    let year: i32 = value
        .trim()
        .parse()
        .map_err(|_| "Year must be a whole number".to_string())?;
    if !(MIN_PUBLICATION_YEAR..=MAX_PUBLICATION_YEAR).contains(&year) {
        return Err(format!(
            "Year must be between {} and {}",
            MIN_PUBLICATION_YEAR, MAX_PUBLICATION_YEAR
        ));
    }
    Ok(year)
}

/// Validates a copy count in `[1, 1000]`
pub fn validate_copies(value: &str) -> Result<u32, String> {
    let copies: u32 = value
        .trim()
        .parse()
        .map_err(|_| "Copies must be a whole number".to_string())?;
    if copies == 0 || copies > MAX_COPIES {
        return Err(format!("Copies must be between 1 and {}", MAX_COPIES));
    }
    Ok(copies)
}

/// Validates a manual fine amount, rounded to cents
pub fn validate_amount(value: &str) -> Result<f64, String> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| "Amount must be a number".to_string())?;
    let amount = round_to_cents(amount);
    if !(MIN_FINE_AMOUNT..=MAX_FINE_AMOUNT).contains(&amount) {
        return Err(format!(
            "Amount must be between {:.2} and {:.2}",
            MIN_FINE_AMOUNT, MAX_FINE_AMOUNT
        ));
    }
    Ok(amount)
}

/// Validates a `DD/MM/YYYY` date
pub fn validate_date(value: &str) -> Result<Date, String> {
    Date::parse(value.trim()).map_err(|_| "Date must be a real date in DD/MM/YYYY form".to_string())
}

/// Validates a numeric record id
pub fn validate_id(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| "Id must be a positive whole number".to_string())
}

/// Reads one line from stdin, trimmed
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts until the validator accepts the input
pub fn prompt<T>(label: &str, validate: impl Fn(&str) -> Result<T, String>) -> io::Result<T> {
    loop {
        let line = read_line(&format!("{}: ", label))?;
        match validate(&line) {
            Ok(value) => return Ok(value),
            Err(message) => println!("  Invalid input: {}", message),
        }
    }
}

/// Prompts once; an empty line means "keep the current value"
pub fn prompt_optional<T>(
    label: &str,
    validate: impl Fn(&str) -> Result<T, String>,
) -> io::Result<Option<T>> {
    loop {
        let line = read_line(&format!("{} (Enter to keep current): ", label))?;
        if line.is_empty() {
            return Ok(None);
        }
        match validate(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => println!("  Invalid input: {}", message),
        }
    }
}
