// src/theme/color.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cores nomeadas aceitas além de hex e `rgb(...)`.
const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("brown", (165, 42, 42)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Aceita `#rgb`, `#rrggbb` (com ou sem `#`), `rgb(r, g, b)` e alguns nomes CSS.
    pub fn parse(input: &str) -> Option<Self> {
        let value = input.trim().to_ascii_lowercase();
        if value.is_empty() {
            return None;
        }

        if let Some(&(_, (r, g, b))) = NAMED.iter().find(|(name, _)| *name == value) {
            return Some(Self::new(r, g, b));
        }

        if let Some(args) = value.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
            let channels: Vec<u8> = args
                .split(',')
                .map(|c| c.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .ok()?;
            return match channels.as_slice() {
                [r, g, b] => Some(Self::new(*r, *g, *b)),
                _ => None,
            };
        }

        let hex = value.strip_prefix('#').unwrap_or(&value);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|d| d * 17);
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
                Some(Self::new(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }

    /// Luminosidade HSL, entre 0 e 1.
    pub fn lightness(&self) -> f64 {
        self.to_hsl().2
    }

    pub fn is_dark(&self) -> bool {
        self.lightness() < 0.5
    }

    /// Escurece reduzindo a luminosidade HSL em `amount` pontos percentuais.
    pub fn darken(&self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        let l = (l - amount / 100.0).clamp(0.0, 1.0);
        Self::from_hsl(h, s, l)
    }

    /// Canais separados por espaço (`"51 102 255"`), o formato das variáveis CSS.
    pub fn to_channels(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }

    fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s, l)
    }

    fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

        if s == 0.0 {
            let v = to_u8(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, h)),
            to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 { t + 1.0 } else if t > 1.0 { t - 1.0 } else { t };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgb::parse("#3366ff"), Some(Rgb::new(51, 102, 255)));
        assert_eq!(Rgb::parse("3366FF"), Some(Rgb::new(51, 102, 255)));
        assert_eq!(Rgb::parse("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse("  #18181b "), Some(Rgb::new(24, 24, 27)));
    }

    #[test]
    fn parses_rgb_function_and_names() {
        assert_eq!(Rgb::parse("rgb(10, 20, 30)"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::parse("White"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Rgb::parse(""), None);
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#gggggg"), None);
        assert_eq!(Rgb::parse("rgb(300, 0, 0)"), None);
        assert_eq!(Rgb::parse("rgb(1, 2)"), None);
        assert_eq!(Rgb::parse("not-a-color"), None);
    }

    #[test]
    fn darkens_by_lightness_points() {
        assert_eq!(Rgb::new(51, 102, 255).darken(10.0), Rgb::new(0, 64, 255));
        assert_eq!(Rgb::new(17, 17, 17).darken(10.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn darkness_follows_hsl_lightness() {
        assert!(!Rgb::new(51, 102, 255).is_dark());
        assert!(Rgb::new(17, 17, 17).is_dark());
        assert!(!Rgb::new(255, 255, 255).is_dark());
    }

    #[test]
    fn channels_are_space_separated() {
        assert_eq!(Rgb::new(51, 102, 255).to_channels(), "51 102 255");
    }
}
