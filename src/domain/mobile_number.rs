const MIN_CHAR_LENGHT: usize = 5;
const MAX_CHAR_LENGHT: usize = 20;

/// Loose phone-number wrapper. Only the length is checked, the format is up
/// to the visitor.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn parse(mobile: String) -> Result<MobileNumber, String> {
        let mobile = mobile.trim();

        if mobile.len() < MIN_CHAR_LENGHT {
            return Err(String::from("Please enter a valid phone number"));
        }

        if mobile.len() > MAX_CHAR_LENGHT {
            return Err(String::from("Phone number too long"));
        }

        Ok(Self(mobile.to_string()))
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
