//! Field-level input validation
//!
//! Step screens call these before requesting a wizard transition; a
//! failure surfaces as a toast and never mutates wizard state. Messages
//! are written for the user, not the log.

/// Validate a username: at least 3 chars, letters/digits/underscores only
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("Username can only contain letters, numbers, and underscores".to_string());
    }
    Ok(())
}

/// Validate an email shape: `local@domain.tld`, no whitespace
pub fn validate_email(email: &str) -> Result<(), String> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email".to_string())
    }
}

/// Validate a password: at least 8 characters
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    Ok(())
}

/// Validate a verification code: exactly 6 digits
pub fn validate_code(code: &str) -> Result<(), String> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid 6-digit code".to_string());
    }
    Ok(())
}

/// Validate a phone number: at least 7 digits, allowing separators
pub fn validate_phone(number: &str) -> Result<(), String> {
    if number.trim().is_empty() {
        return Err("Please enter your phone number".to_string());
    }
    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = number
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'));
    if digits < 7 || !allowed {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(())
}

/// Validate a profile URL: must start with http:// or https:// and have a host
pub fn validate_url(url: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err("URL must start with http:// or https://".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("casey_creates").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name").is_err());
        assert!(validate_username("emoji🙂").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("casey@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("casey@nodot").is_err());
        assert!(validate_email("casey@.com").is_err());
        assert!(validate_email("ca sey@example.com").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_code_rules() {
        assert!(validate_code("123456").is_ok());
        assert!(validate_code("12345").is_err());
        assert!(validate_code("12345a").is_err());
    }

    #[test]
    fn test_phone_rules() {
        assert!(validate_phone("555-867-5309").is_ok());
        assert!(validate_phone("(020) 7946 0958").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("call me maybe").is_err());
    }

    #[test]
    fn test_url_rules() {
        assert!(validate_url("https://instagram.com/casey").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("instagram.com/casey").is_err());
        assert!(validate_url("https://").is_err());
    }
}
