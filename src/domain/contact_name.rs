use unicode_segmentation::UnicodeSegmentation;

const MIN_CHAR_LENGHT: usize = 2;
const MAX_CHAR_LENGHT: usize = 100;

#[derive(Debug, Clone, serde::Serialize)]
pub struct ContactName(String);

impl ContactName {
    /// Input is trimmed before the length rules apply.
    pub fn parse(name: String) -> Result<ContactName, String> {
        let name = name.trim();
        let char_count = name.graphemes(true).count();

        if char_count < MIN_CHAR_LENGHT {
            return Err(String::from("Name must be at least 2 characters"));
        }

        if char_count > MAX_CHAR_LENGHT {
            return Err(String::from("Name too long"));
        }

        Ok(Self(name.to_string()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
