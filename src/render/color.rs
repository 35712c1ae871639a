//! RGB colors and hex parsing.

use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Build a color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Rgb {
    Rgb {
        r: ((hex >> 16) & 0xff) as u8,
        g: ((hex >> 8) & 0xff) as u8,
        b: (hex & 0xff) as u8,
    }
}

pub const BLACK: Rgb = rgb(0x000000);

impl Rgb {
    /// Parse `rgb`, `rrggbb` or `rrggbbaa` hex digits, with or without a
    /// leading `#`. The alpha byte of the 8-digit form is ignored.
    pub fn parse_hex(s: &str) -> Option<Rgb> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            3 => {
                let value = u32::from_str_radix(digits, 16).ok()?;
                let expand = |nibble: u32| ((nibble & 0xf) * 0x11) as u8;
                Some(Rgb {
                    r: expand(value >> 8),
                    g: expand(value >> 4),
                    b: expand(value),
                })
            }
            6 => u32::from_str_radix(digits, 16).ok().map(rgb),
            8 => u32::from_str_radix(&digits[..6], 16).ok().map(rgb),
            _ => None,
        }
    }

    /// Parse a hex color, falling back to `default` when absent or invalid.
    pub fn parse_or(s: Option<&str>, default: Rgb) -> Rgb {
        s.and_then(Rgb::parse_hex).unwrap_or(default)
    }

    /// Mix `self` over `below` with the given opacity.
    pub fn over(self, below: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| {
            (top as f32 * alpha + bottom as f32 * (1.0 - alpha)).round() as u8
        };
        Rgb {
            r: mix(self.r, below.r),
            g: mix(self.g, below.g),
            b: mix(self.b, below.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_six_digits() {
        assert_eq!(Rgb::parse_hex("7d95b2"), Some(rgb(0x7d95b2)));
        assert_eq!(Rgb::parse_hex("#D8CEC6"), Some(rgb(0xd8cec6)));
    }

    #[test]
    fn test_parse_short_and_alpha_forms() {
        assert_eq!(Rgb::parse_hex("fa0"), Some(rgb(0xffaa00)));
        assert_eq!(Rgb::parse_hex("2a2a2a80"), Some(rgb(0x2a2a2a)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse_hex(""), None);
        assert_eq!(Rgb::parse_hex("blue"), None);
        assert_eq!(Rgb::parse_hex("12345"), None);
        assert_eq!(Rgb::parse_hex("+12345"), None);
    }

    #[test]
    fn test_parse_or_falls_back() {
        let default = rgb(0x2a2a2a);
        assert_eq!(Rgb::parse_or(None, default), default);
        assert_eq!(Rgb::parse_or(Some("nope"), default), default);
        assert_eq!(Rgb::parse_or(Some("ffffff"), default), rgb(0xffffff));
    }

    #[test]
    fn test_over() {
        let dot = rgb(0x7d95b2);
        let bg = rgb(0x2a2a2a);
        assert_eq!(dot.over(bg, 1.0), dot);
        assert_eq!(dot.over(bg, 0.0), bg);
        // 0x7d*0.3 + 0x2a*0.7 = 37.5 + 29.4 = 66.9
        assert_eq!(dot.over(bg, 0.3).r, 67);
    }

    #[test]
    fn test_display() {
        assert_eq!(rgb(0x0e151f).to_string(), "#0e151f");
    }
}
