use super::*;

// =========================================================
// Password rules
// =========================================================

#[test]
fn test_password_with_all_classes_at_min_length_passes() {
    assert!(password_issues("Abcdef1!").is_empty());
}

#[test]
fn test_password_of_seven_chars_fails_on_length_only() {
    let issues = password_issues("Abcde1!");
    assert_eq!(
        issues,
        vec!["Password must be at least 8 characters long".to_string()]
    );
}

#[test]
fn test_password_missing_uppercase() {
    let issues = password_issues("abcdefg1!");
    assert_eq!(
        issues,
        vec!["Password must contain at least one uppercase letter".to_string()]
    );
}

#[test]
fn test_password_missing_lowercase() {
    let issues = password_issues("ABCDEFG1!");
    assert_eq!(
        issues,
        vec!["Password must contain at least one lowercase letter".to_string()]
    );
}

#[test]
fn test_password_missing_number() {
    let issues = password_issues("Abcdefgh!");
    assert_eq!(
        issues,
        vec!["Password must contain at least one number".to_string()]
    );
}

#[test]
fn test_password_missing_special_character() {
    let issues = password_issues("Abcdefg1");
    assert_eq!(
        issues,
        vec!["Password must contain at least one special character".to_string()]
    );
}

#[test]
fn test_password_reports_every_missing_class() {
    let issues = password_issues("abc");
    assert_eq!(issues.len(), 4);
    assert!(issues[0].contains("at least 8 characters"));
}

#[test]
fn test_every_listed_special_character_counts() {
    for c in PASSWORD_SPECIAL_CHARS.chars() {
        let password = format!("Abcdefg1{c}");
        assert!(password_issues(&password).is_empty(), "rejected {c:?}");
    }
}

// =========================================================
// Email shape
// =========================================================

#[test]
fn test_email_accepts_plain_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@sub.domain.org"));
}

#[test]
fn test_email_rejects_missing_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("userexample.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@example"));
}

#[test]
fn test_email_rejects_edge_dots_and_extra_ats() {
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@com."));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn test_email_rejects_whitespace() {
    assert!(!is_valid_email("user @example.com"));
    assert!(!is_valid_email("user@example.com "));
}

#[test]
fn test_email_handles_multibyte_input() {
    assert!(is_valid_email("ü@exämple.com"));
    assert!(!is_valid_email("ü@exämple"));
}

// =========================================================
// Signup form
// =========================================================

#[test]
fn test_validate_signup_accepts_good_input() {
    let errors = validate_signup("alice", "alice@example.com", "Abcdef1!", "Abcdef1!");
    assert!(errors.is_clean());
}

#[test]
fn test_validate_signup_reports_all_failures_at_once() {
    let errors = validate_signup("", "not-an-email", "short", "");
    assert_eq!(errors.username, Some("Username is required".to_string()));
    assert_eq!(
        errors.email,
        Some("Please enter a valid email address".to_string())
    );
    assert!(errors.password.is_some());
    assert_eq!(
        errors.confirm_password,
        Some("Please confirm your password".to_string())
    );
}

#[test]
fn test_validate_signup_empty_fields_use_required_messages() {
    let errors = validate_signup("", "", "", "");
    assert_eq!(errors.username, Some("Username is required".to_string()));
    assert_eq!(errors.email, Some("Email is required".to_string()));
    assert_eq!(errors.password, Some("Password is required".to_string()));
}

#[test]
fn test_validate_signup_password_issues_joined_with_commas() {
    let errors = validate_signup("bob", "bob@example.com", "abcdefgh", "abcdefgh");
    let message = errors.password.unwrap();
    assert_eq!(
        message,
        "Password must contain at least one uppercase letter, \
         Password must contain at least one number, \
         Password must contain at least one special character"
    );
}

#[test]
fn test_validate_signup_mismatched_confirmation() {
    let errors = validate_signup("bob", "bob@example.com", "Abcdef1!", "Abcdef2!");
    assert_eq!(
        errors.confirm_password,
        Some("Passwords do not match".to_string())
    );
    assert!(errors.password.is_none());
}

// =========================================================
// Add-item draft gates
// =========================================================

#[test]
fn test_draft_with_everything_set_passes() {
    assert_eq!(draft_rejection("Lamp", "1499", 1), None);
}

#[test]
fn test_draft_missing_name_is_rejected() {
    assert_eq!(
        draft_rejection("", "1499", 2),
        Some("All fields are mandatory!")
    );
}

#[test]
fn test_draft_missing_price_or_pictures_is_rejected() {
    assert_eq!(
        draft_rejection("Lamp", "", 2),
        Some("All fields are mandatory!")
    );
    assert_eq!(
        draft_rejection("Lamp", "1499", 0),
        Some("All fields are mandatory!")
    );
}

#[test]
fn test_selection_of_five_or_fewer_is_accepted() {
    assert_eq!(selection_rejection(0), None);
    assert_eq!(selection_rejection(1), None);
    assert_eq!(selection_rejection(MAX_ITEM_PICTURES), None);
}

#[test]
fn test_selection_of_six_is_rejected() {
    assert_eq!(
        selection_rejection(6),
        Some("You can upload a maximum of 5 images.")
    );
}
