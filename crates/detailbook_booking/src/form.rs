// --- File: crates/detailbook_booking/src/form.rs ---
use serde::Deserialize;

/// The booking page's contact form, as submitted by the visitor.
///
/// Built fresh per submission attempt; nothing here is persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Where the van shows up: mobile detailing happens at the customer's
    /// address, so the full set of components is required.
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub vehicle: String,
}

impl BookingForm {
    /// All problems with the form, in field order, one message per field.
    ///
    /// Collected rather than short-circuited so the error box can show the
    /// whole list at once.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.name.trim().chars().count() < 2 {
            issues.push("Please enter your full name.".to_string());
        }
        if !valid_email(self.email.trim()) {
            issues.push("A valid email is required.".to_string());
        }
        if digit_count(&self.phone) < 10 {
            issues.push("Please provide a valid phone number.".to_string());
        }
        if self.street.trim().is_empty()
            || self.city.trim().is_empty()
            || self.state.trim().is_empty()
            || self.zip.trim().is_empty()
        {
            issues.push("Please provide your full service address.".to_string());
        }
        if self.vehicle.trim().chars().count() < 2 {
            issues.push("Vehicle type is required.".to_string());
        }
        issues
    }

    pub fn is_valid(&self) -> bool {
        self.issues().is_empty()
    }

    /// The composed service location sent with the booking,
    /// e.g. "123 Main St, St. George, UT 84770".
    pub fn service_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip.trim()
        )
    }
}

/// Standard address shape: one `@` with non-empty local part, and a dot in
/// the domain with characters on both sides. No whitespace anywhere.
fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}
