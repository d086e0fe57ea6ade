use serde::{Deserialize, Serialize};

/// 8-bit RGB color, serialized as a `"#RRGGBB"` hex string in level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse a `#RRGGBB` hex string. Case-insensitive, leading `#` required.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color {s:?} missing leading '#'"))?;
        if digits.len() != 6 {
            return Err(format!("color {s:?} must be #RRGGBB"));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| format!("color {s:?}: {e}"))
        };
        Ok(Rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    /// Format back to a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Normalized float triple (0.0–1.0 per channel) for painting.
    pub fn as_f32(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> String {
        c.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_reference_palette() {
        assert_eq!(Rgb::from_hex("#808000").unwrap(), Rgb(0x80, 0x80, 0x00));
        assert_eq!(Rgb::from_hex("#000080").unwrap(), Rgb(0x00, 0x00, 0x80));
        assert_eq!(Rgb::from_hex("#9ACD32").unwrap(), Rgb(0x9A, 0xCD, 0x32));
    }

    #[test]
    fn test_from_hex_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("#1e90ff").unwrap(),
            Rgb::from_hex("#1E90FF").unwrap()
        );
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(Rgb::from_hex("808000").is_err()); // no '#'
        assert!(Rgb::from_hex("#80800").is_err()); // short
        assert!(Rgb::from_hex("#80800G").is_err()); // bad digit
        assert!(Rgb::from_hex("#8080000").is_err()); // long
    }

    #[test]
    fn test_hex_roundtrip() {
        let c = Rgb(0x00, 0xCE, 0xD1);
        assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_as_f32_extremes() {
        assert_eq!(Rgb(0, 0, 0).as_f32(), (0.0, 0.0, 0.0));
        assert_eq!(Rgb(255, 255, 255).as_f32(), (1.0, 1.0, 1.0));
    }
}
