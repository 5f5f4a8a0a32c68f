use crate::utils::consts::MIN_PASSWORD_LENGTH;

/// True if pw is at least `MIN_PASSWORD_LENGTH` characters long.
pub fn is_valid_password(pw: &str) -> bool {
    pw.chars().count() >= MIN_PASSWORD_LENGTH
}
