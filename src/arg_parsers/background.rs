use std::str::FromStr;

use crate::arg_parse_err::ArgParseErr;

/// What the canvas is filled with before the image is painted on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Background {
    /// Every pixel not covered by the image has zero alpha.
    #[default]
    Transparent,
    /// Every pixel not covered by the image is this opaque RGB color.
    Color([u8; 3]),
}

impl Background {
    /// Background as 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        match self {
            Background::Transparent => [0, 0, 0, 0],
            Background::Color([r, g, b]) => [r, g, b, 255],
        }
    }
}

impl FromStr for Background {
    type Err = ArgParseErr;

    /// Accepts `transparent`, `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Background::Transparent);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(invalid_color(s));
        }
        let rgb = match hex.len() {
            6 => {
                let mut rgb = [0u8; 3];
                for (channel, chunk) in rgb.iter_mut().zip(hex.as_bytes().chunks(2)) {
                    *channel = parse_hex(chunk).ok_or_else(|| invalid_color(s))?;
                }
                rgb
            }
            // #abc is shorthand for #aabbcc
            3 => {
                let mut rgb = [0u8; 3];
                for (channel, digit) in rgb.iter_mut().zip(hex.as_bytes().chunks(1)) {
                    *channel = parse_hex(digit).ok_or_else(|| invalid_color(s))? * 17;
                }
                rgb
            }
            _ => return Err(invalid_color(s)),
        };
        Ok(Background::Color(rgb))
    }
}

fn parse_hex(digits: &[u8]) -> Option<u8> {
    // from_str_radix would also accept a leading `+`
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let digits = std::str::from_utf8(digits).ok()?;
    u8::from_str_radix(digits, 16).ok()
}

fn invalid_color(value: &str) -> ArgParseErr {
    ArgParseErr::with_msg(format!(
        "unrecognized color `{value}', expected `transparent' or a hex color like #ffffff"
    ))
}
