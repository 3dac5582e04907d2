use ratatui::style::Color;

/// Colors used by the picker widgets
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey0: Color,
    pub grey2: Color,

    // Semantic colors
    pub band: Color,
    pub mask: Color,
    pub accent: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            band: Color::Rgb(0x45, 0x40, 0x3d),
            mask: Color::Rgb(0x1d, 0x20, 0x21),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

/// Mix `fg` over `bg` at `alpha` (0 = all background, 1 = all foreground).
///
/// Terminals have no alpha channel, so opacity is rendered as a color blend.
/// Indexed and named colors cannot be mixed; those come back unchanged when
/// `alpha >= 0.5` and as `bg` otherwise.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };

    match (fg, bg) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |top: u8, bottom: u8| -> u8 {
                (top as f64 * alpha + bottom as f64 * (1.0 - alpha)).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_blend_out_of_range() {
        let fg = Color::Rgb(10, 20, 30);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 3.0), fg);
        assert_eq!(blend(fg, bg, f64::NAN), fg);
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::White, Color::Black, 0.75), Color::White);
        assert_eq!(blend(Color::White, Color::Black, 0.25), Color::Black);
    }
}
