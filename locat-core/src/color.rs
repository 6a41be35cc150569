// locat-core/src/color.rs
//! The rainbow color function and truecolor escape-sequence formatting.
//!
//! The rainbow is three phase-shifted sinusoids of the same frequency, one per
//! channel, offset by 120 degrees from each other. As `position` increases the
//! hue rotates smoothly through the full wheel instead of pulsing a single
//! color.
//!
//! License: MIT OR Apache-2.0

use std::f64::consts::PI;
use std::fmt;

/// Control Sequence Introducer.
const CSI: &str = "\x1b[";

/// A 24-bit color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An SGR (Select Graphic Rendition) escape code in its truecolor form.
///
/// The `Display` impl renders the exact byte sequence a terminal expects:
/// `ESC[38;2;R;G;Bm` for foreground, `ESC[48;2;R;G;Bm` for background,
/// `ESC[0m` for reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    Foreground(Rgb),
    Background(Rgb),
    Reset,
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sgr::Foreground(Rgb { r, g, b }) => write!(f, "{CSI}38;2;{r};{g};{b}m"),
            Sgr::Background(Rgb { r, g, b }) => write!(f, "{CSI}48;2;{r};{g};{b}m"),
            Sgr::Reset => write!(f, "{CSI}0m"),
        }
    }
}

/// Maps a continuous position to a point on the rainbow.
///
/// Each channel is `sin(freq * position + phase) * 127 + 128` with phases of
/// 0, 2π/3 and 4π/3 for red, green and blue. The mathematical range is
/// [1, 255]; channels are rounded and clamped defensively to [0, 255].
///
/// The result is periodic in `position` with period `2π / freq`.
pub fn rainbow(freq: f64, position: f64) -> Rgb {
    let channel = |phase: f64| -> u8 {
        ((freq * position + phase).sin() * 127.0 + 128.0)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb {
        r: channel(0.0),
        g: channel(2.0 * PI / 3.0),
        b: channel(4.0 * PI / 3.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rainbow_channels_in_bounds() {
        // u8 already bounds the value; check the pre-clamp math stays inside
        // [0, 255] across a dense sweep of positions.
        for i in 0..10_000 {
            let position = i as f64 * 0.173;
            for phase in [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0] {
                let raw = (0.1 * position + phase).sin() * 127.0 + 128.0;
                assert!((0.0..=255.0).contains(&raw), "raw channel {raw} out of range");
            }
            let _ = rainbow(0.1, position);
        }
    }

    #[test]
    fn test_rainbow_periodicity() {
        let freq = 0.1;
        let period = 2.0 * PI / freq;
        for position in [0.0, 0.5, 1.0, 7.25, 42.0, 100.0] {
            assert_eq!(
                rainbow(freq, position),
                rainbow(freq, position + period),
                "rainbow not periodic at position {position}"
            );
        }
    }

    #[test]
    fn test_rainbow_matches_formula() {
        let color = rainbow(0.1, 1.0);
        let expected_r = ((0.1f64).sin() * 127.0 + 128.0).round() as u8;
        let expected_g = ((0.1f64 + 2.0 * PI / 3.0).sin() * 127.0 + 128.0).round() as u8;
        let expected_b = ((0.1f64 + 4.0 * PI / 3.0).sin() * 127.0 + 128.0).round() as u8;
        assert_eq!(color, Rgb { r: expected_r, g: expected_g, b: expected_b });
    }

    #[test]
    fn test_sgr_display() {
        let color = Rgb { r: 175, g: 215, b: 135 };
        assert_eq!(Sgr::Foreground(color).to_string(), "\x1b[38;2;175;215;135m");
        assert_eq!(Sgr::Background(color).to_string(), "\x1b[48;2;175;215;135m");
        assert_eq!(Sgr::Reset.to_string(), "\x1b[0m");
    }
}
