use validator::validate_email;

const MAX_CHAR_LENGHT: usize = 254;

#[derive(Debug, Clone, serde::Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalizes (trim + lowercase) before validating, so the stored value
    /// is always the canonical form.
    pub fn parse(email: String) -> Result<EmailAddress, String> {
        let email = email.trim().to_lowercase();

        if email.len() > MAX_CHAR_LENGHT {
            return Err(String::from("Email too long"));
        }

        if !validate_email(&email) {
            return Err(String::from("Please enter a valid email"));
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
