use crate::utils::consts::MIN_PASSWORD_LENGTH;
use crate::validation::is_valid_password;

/// A plaintext password that satisfies the length rule. Never persisted as-is.
#[derive(PartialEq, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        match is_valid_password(&password) {
            true => Ok(Password(password)),
            false => Err(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}
