//! Style catalog: the fixed aspect ratios and design skins.
//!
//! Pure data consumed by the selection controls and by the skin compositor.
//! Tokens are stable identifiers used in CSS class names and CLI arguments.

use std::fmt;
use std::str::FromStr;

/// Fixed aspect ratio of the card surface.
///
/// `Auto` lets the surface size follow its content; every other variant
/// constrains the surface to a fixed width:height box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Auto,
    Square,
    Standard,
    ClassicPhoto,
    Widescreen,
    UltraWide,
    Story,
    Portrait,
    TallStandard,
    SocialPortrait,
}

impl AspectRatio {
    /// All selectable ratios, in display order. `Auto` first.
    pub const ALL: [AspectRatio; 10] = [
        AspectRatio::Auto,
        AspectRatio::Square,
        AspectRatio::Standard,
        AspectRatio::ClassicPhoto,
        AspectRatio::Widescreen,
        AspectRatio::UltraWide,
        AspectRatio::Story,
        AspectRatio::Portrait,
        AspectRatio::TallStandard,
        AspectRatio::SocialPortrait,
    ];

    /// Stable token, also used as the CSS aspect class suffix.
    pub fn token(&self) -> &'static str {
        match self {
            AspectRatio::Auto => "auto",
            AspectRatio::Square => "1-1",
            AspectRatio::Standard => "4-3",
            AspectRatio::ClassicPhoto => "3-2",
            AspectRatio::Widescreen => "16-9",
            AspectRatio::UltraWide => "21-9",
            AspectRatio::Story => "9-16",
            AspectRatio::Portrait => "2-3",
            AspectRatio::TallStandard => "3-4",
            AspectRatio::SocialPortrait => "4-5",
        }
    }

    /// Human-readable label for the selector control.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Auto => "Auto",
            AspectRatio::Square => "1:1 — Square",
            AspectRatio::Standard => "4:3 — Standard",
            AspectRatio::ClassicPhoto => "3:2 — Classic Photo",
            AspectRatio::Widescreen => "16:9 — Widescreen",
            AspectRatio::UltraWide => "21:9 — Ultra-wide",
            AspectRatio::Story => "9:16 — Vertical / Story",
            AspectRatio::Portrait => "2:3 — Portrait",
            AspectRatio::TallStandard => "3:4 — Tall Standard",
            AspectRatio::SocialPortrait => "4:5 — Social Portrait",
        }
    }

    /// Width:height proportion, or `None` for `Auto`.
    pub fn ratio(&self) -> Option<(f32, f32)> {
        match self {
            AspectRatio::Auto => None,
            AspectRatio::Square => Some((1.0, 1.0)),
            AspectRatio::Standard => Some((4.0, 3.0)),
            AspectRatio::ClassicPhoto => Some((3.0, 2.0)),
            AspectRatio::Widescreen => Some((16.0, 9.0)),
            AspectRatio::UltraWide => Some((21.0, 9.0)),
            AspectRatio::Story => Some((9.0, 16.0)),
            AspectRatio::Portrait => Some((2.0, 3.0)),
            AspectRatio::TallStandard => Some((3.0, 4.0)),
            AspectRatio::SocialPortrait => Some((4.0, 5.0)),
        }
    }

    /// Parse a token back into a ratio.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.token() == token)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("unknown aspect ratio '{}'", s))
    }
}

/// Visual design skin applied to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Design {
    Glass,
    GradientDynamic,
    SolidBrand,
    MinimalLight,
    MinimalDark,
    NeonGlow,
    Neumorphism,
}

impl Design {
    /// All selectable skins, in display order. `Glass` is the default.
    pub const ALL: [Design; 7] = [
        Design::Glass,
        Design::GradientDynamic,
        Design::SolidBrand,
        Design::MinimalLight,
        Design::MinimalDark,
        Design::NeonGlow,
        Design::Neumorphism,
    ];

    /// Stable token, also used as the CSS design class suffix.
    pub fn token(&self) -> &'static str {
        match self {
            Design::Glass => "glass",
            Design::GradientDynamic => "gradient-dynamic",
            Design::SolidBrand => "solid-brand",
            Design::MinimalLight => "minimal-light",
            Design::MinimalDark => "minimal-dark",
            Design::NeonGlow => "neon-glow",
            Design::Neumorphism => "neumorphism",
        }
    }

    /// Human-readable label for the selector control.
    pub fn label(&self) -> &'static str {
        match self {
            Design::Glass => "Frosted Glass",
            Design::GradientDynamic => "Dynamic Gradient",
            Design::SolidBrand => "Solid Brand",
            Design::MinimalLight => "Minimal Light",
            Design::MinimalDark => "Minimal Dark",
            Design::NeonGlow => "Neon Glow",
            Design::Neumorphism => "Neumorphism",
        }
    }

    /// Parse a token back into a design.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.token() == token)
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Design {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("unknown design '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_aspect_ratios_auto_first() {
        assert_eq!(AspectRatio::ALL.len(), 10);
        assert_eq!(AspectRatio::ALL[0], AspectRatio::Auto);
    }

    #[test]
    fn test_aspect_tokens_unique_and_round_trip() {
        let tokens: HashSet<&str> = AspectRatio::ALL.iter().map(|r| r.token()).collect();
        assert_eq!(tokens.len(), 10);
        for ratio in AspectRatio::ALL {
            assert_eq!(AspectRatio::from_token(ratio.token()), Some(ratio));
        }
        assert_eq!(AspectRatio::from_token("5-4"), None);
    }

    #[test]
    fn test_only_auto_has_no_fixed_ratio() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.ratio().is_none(), ratio == AspectRatio::Auto);
        }
    }

    #[test]
    fn test_seven_designs_glass_first() {
        assert_eq!(Design::ALL.len(), 7);
        assert_eq!(Design::ALL[0], Design::Glass);
    }

    #[test]
    fn test_design_tokens_round_trip() {
        for design in Design::ALL {
            assert_eq!(Design::from_token(design.token()), Some(design));
        }
        assert_eq!(Design::from_token("vaporwave"), None);
    }

    #[test]
    fn test_tokens_parse_via_from_str() {
        assert_eq!("16-9".parse::<AspectRatio>(), Ok(AspectRatio::Widescreen));
        assert_eq!("neon-glow".parse::<Design>(), Ok(Design::NeonGlow));
        assert!("bogus".parse::<AspectRatio>().is_err());
    }
}
