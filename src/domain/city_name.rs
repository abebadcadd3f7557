use unicode_segmentation::UnicodeSegmentation;

const MIN_CHAR_LENGHT: usize = 2;
const MAX_CHAR_LENGHT: usize = 100;

#[derive(Debug, Clone, serde::Serialize)]
pub struct CityName(String);

impl CityName {
    pub fn parse(city: String) -> Result<CityName, String> {
        let city = city.trim();
        let char_count = city.graphemes(true).count();

        if char_count < MIN_CHAR_LENGHT {
            return Err(String::from("City must be at least 2 characters"));
        }

        if char_count > MAX_CHAR_LENGHT {
            return Err(String::from("City name too long"));
        }

        Ok(Self(city.to_string()))
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
