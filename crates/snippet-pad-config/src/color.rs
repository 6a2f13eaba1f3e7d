/// Hex color type with serde support for `"#RRGGBB"` / `"#RRGGBBAA"` strings.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Parses one two-digit hex channel at byte offset `at`.
fn channel(s: &str, at: usize) -> Option<u8> {
    u8::from_str_radix(s.get(at..at + 2)?, 16).ok()
}

impl HexColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#')?;
        let (r, g, b) = (channel(s, 0)?, channel(s, 2)?, channel(s, 4)?);
        match s.len() {
            6 => Some(Self::rgb(r, g, b)),
            8 => Some(Self::rgba(r, g, b, channel(s, 6)?)),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let c = HexColor::from_hex("#2AA198").unwrap();
        assert_eq!(c, HexColor::rgb(42, 161, 152));
    }

    #[test]
    fn test_parse_rgba() {
        let c = HexColor::from_hex("#2AA19864").unwrap();
        assert_eq!(c, HexColor::rgba(42, 161, 152, 100));
    }

    #[test]
    fn test_parse_lowercase() {
        let c = HexColor::from_hex("#ffcc00").unwrap();
        assert_eq!(c, HexColor::rgb(255, 204, 0));
    }

    #[test]
    fn test_round_trip() {
        let c = HexColor::rgb(40, 44, 52);
        let hex = c.to_hex();
        assert_eq!(hex, "#282C34");
        assert_eq!(HexColor::from_hex(&hex).unwrap(), c);

        let c = HexColor::rgba(40, 44, 52, 128);
        assert_eq!(HexColor::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_invalid_input() {
        assert!(HexColor::from_hex("").is_none());
        assert!(HexColor::from_hex("#").is_none());
        assert!(HexColor::from_hex("#XYZ123").is_none());
        assert!(HexColor::from_hex("#12345").is_none());
        assert!(HexColor::from_hex("282C34").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let c = HexColor::rgb(248, 248, 242);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#F8F8F2\"");
        let parsed: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }
}
