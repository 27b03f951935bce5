use core::fmt;

/// 8-bit RGB color. Pure black is reserved for divider lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Parses `RRGGBB` (an optional leading `#` is accepted).
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let raw = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::from_hex_u32(raw))
    }

    pub fn from_hex_u32(raw: u32) -> Self {
        Self {
            r: ((raw >> 16) & 0xFF) as u8,
            g: ((raw >> 8) & 0xFF) as u8,
            b: (raw & 0xFF) as u8,
        }
    }

    pub fn to_hex_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub color: Color,
    pub visited: bool,
}

impl Pixel {
    /// What every out-of-bounds read returns.
    pub const SENTINEL: Pixel = Pixel {
        color: Color::BLACK,
        visited: true,
    };

    pub const fn new(color: Color) -> Self {
        Self {
            color,
            visited: false,
        }
    }

    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Pixel};

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Color::from_hex("ff8000"), Some(Color::new(255, 128, 0)));
        assert_eq!(Color::from_hex("#00A0fF"), Some(Color::new(0, 160, 255)));
        assert_eq!(Color::from_hex("fff"), None);
        assert_eq!(Color::from_hex("gg0000"), None);
        assert_eq!(Color::from_hex("+12345"), None);
        assert_eq!(Color::from_hex("#1234567"), None);
    }

    #[test]
    fn hex_display_and_u32_agree() {
        let c = Color::new(0x12, 0xab, 0x04);
        assert_eq!(c.to_string(), "#12ab04");
        assert_eq!(c.to_hex_u32(), 0x12ab04);
        assert_eq!(Color::from_hex_u32(0x12ab04), c);
    }

    #[test]
    fn only_pure_black_is_black() {
        assert!(Color::BLACK.is_black());
        assert!(!Color::new(0, 0, 1).is_black());
        assert!(!Color::new(1, 0, 0).is_black());

        assert!(Pixel::SENTINEL.is_black());
        assert!(Pixel::SENTINEL.visited);
        assert!(!Pixel::from(Color::new(3, 3, 3)).visited);
    }
}
