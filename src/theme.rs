use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// Same colour with its alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn faded(self, factor: f32) -> Self {
        let alpha = (self.3 as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self(self.0, self.1, self.2, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Rgba,
    pub surface: Rgba,
    pub card: Rgba,
    pub title: Rgba,
    pub body: Rgba,
    pub muted: Rgba,
    pub accent: Rgba,
    pub accent_soft: Rgba,
    pub on_accent: Rgba,
    /// Phase bar shades, first to last.
    pub timeline: [Rgba; 4],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Rgba::rgb(0xf8, 0xfa, 0xfc),
            surface: Rgba(0xff, 0xff, 0xff, 0x66),
            card: Rgba::rgb(0xf1, 0xf5, 0xf9),
            title: Rgba::rgb(0x0f, 0x17, 0x2a),
            body: Rgba::rgb(0x47, 0x55, 0x69),
            muted: Rgba::rgb(0x64, 0x74, 0x8b),
            accent: Rgba::rgb(0x25, 0x63, 0xeb),
            accent_soft: Rgba::rgb(0xef, 0xf6, 0xff),
            on_accent: Rgba::rgb(0xff, 0xff, 0xff),
            timeline: [
                Rgba::rgb(0x38, 0xbd, 0xf8),
                Rgba::rgb(0x3b, 0x82, 0xf6),
                Rgba::rgb(0x25, 0x63, 0xeb),
                Rgba::rgb(0x31, 0x2e, 0x81),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(0x02, 0x06, 0x17),
            surface: Rgba(0x0f, 0x17, 0x2a, 0xcc),
            card: Rgba::rgb(0x1e, 0x29, 0x3b),
            title: Rgba::rgb(0xf8, 0xfa, 0xfc),
            body: Rgba::rgb(0xcb, 0xd5, 0xe1),
            muted: Rgba::rgb(0x94, 0xa3, 0xb8),
            accent: Rgba::rgb(0x60, 0xa5, 0xfa),
            accent_soft: Rgba::rgb(0x17, 0x25, 0x54),
            on_accent: Rgba::rgb(0x02, 0x06, 0x17),
            timeline: [
                Rgba::rgb(0x7d, 0xd3, 0xfc),
                Rgba::rgb(0x60, 0xa5, 0xfa),
                Rgba::rgb(0x3b, 0x82, 0xf6),
                Rgba::rgb(0x81, 0x8c, 0xf8),
            ],
        }
    }

    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fading_scales_alpha() {
        assert_eq!(Rgba::rgb(1, 2, 3).faded(0.5), Rgba(1, 2, 3, 128));
        assert_eq!(Rgba(1, 2, 3, 100).faded(2.0), Rgba(1, 2, 3, 100));
        assert_eq!(Rgba::rgb(1, 2, 3).faded(-1.0).3, 0);
    }

    #[test]
    fn themes_differ() {
        assert_ne!(Theme::named(ThemeName::Light), Theme::named(ThemeName::Dark));
    }
}
