//! Client-side validation.
//!
//! Signup field rules and the add-item draft gates. Everything here is
//! pure so the rules run the same under test as in the browser; the
//! components decide when to run them and where the messages land.

/// Maximum number of pictures an item draft may hold.
pub const MAX_ITEM_PICTURES: usize = 5;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Characters accepted as a password's special character.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Per-field signup errors plus the general banner.
///
/// `None` means the field is fine. A field's error is cleared the
/// moment the user edits that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub general: Option<String>,
}

impl SignupErrors {
    /// True when no check failed.
    pub fn is_clean(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.general.is_none()
    }
}

/// Runs every signup check at once so all failing fields are reported
/// together.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> SignupErrors {
    let mut errors = SignupErrors::default();

    if username.trim().is_empty() {
        errors.username = Some("Username is required".to_string());
    }

    if email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address".to_string());
    }

    if password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else {
        let issues = password_issues(password);
        if !issues.is_empty() {
            errors.password = Some(issues.join(", "));
        }
    }

    if confirm_password.is_empty() {
        errors.confirm_password = Some("Please confirm your password".to_string());
    } else if password != confirm_password {
        errors.confirm_password = Some("Passwords do not match".to_string());
    }

    errors
}

/// Accepted email shape: `local@domain.tld`. No whitespace, a single
/// `@` with a non-empty local part, and a dot strictly inside the
/// domain part.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let len = domain.chars().count();
    domain
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < len)
}

/// Everything wrong with a candidate password: one message per missing
/// requirement, empty when the password passes.
pub fn password_issues(password: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if password.chars().count() < PASSWORD_MIN_LEN {
        issues.push(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        issues.push("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push("Password must contain at least one number".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        issues.push("Password must contain at least one special character".to_string());
    }

    issues
}

/// Gate for the add-item submission; `None` means the draft may be
/// posted.
pub fn draft_rejection(name: &str, price: &str, picture_count: usize) -> Option<&'static str> {
    if name.is_empty() || price.is_empty() || picture_count == 0 {
        Some("All fields are mandatory!")
    } else {
        None
    }
}

/// Gate for an incoming file selection; `None` means the selection
/// replaces the current picture set.
pub fn selection_rejection(file_count: usize) -> Option<&'static str> {
    if file_count > MAX_ITEM_PICTURES {
        Some("You can upload a maximum of 5 images.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
