//! Per-skin scene composition.
//!
//! Composes a [`Card`] into an SVG scene whose structure mirrors the live
//! preview: the glass skin gets three decorative orbs plus a frosted panel,
//! neon-glow gets a single layer with two glow orbs, every other skin is a
//! single styled layer. Content is the card text with an accent element, or
//! the placeholder when the trimmed text is empty.
//!
//! The scene is composed fresh on every call, so repeated exports always
//! reflect the current card state.

use crate::raster::SurfaceSize;
use crate::{Card, Design};

/// Shown in place of content while the trimmed text is empty.
pub const PLACEHOLDER_TEXT: &str = "Your text will appear here...";

// Skin palette
const GLASS_BG_TOP: &str = "#1a1a2e";
const GLASS_BG_BOTTOM: &str = "#16213e";
const ORB_PURPLE: &str = "#8b5cf6";
const ORB_PINK: &str = "#ec4899";
const ORB_CYAN: &str = "#22d3ee";
const NEON_BG: &str = "#05010d";
const NEON_CYAN: &str = "#00e5ff";
const NEON_PINK: &str = "#ff2ec4";
const BRAND: &str = "#4f46e5";
const BRAND_ACCENT: &str = "#c7d2fe";
const LIGHT_BG: &str = "#fafafa";
const DARK_BG: &str = "#101014";
const INK: &str = "#18181b";
const PAPER: &str = "#f5f5f7";
const NEU_BG: &str = "#e0e5ec";
const NEU_TEXT: &str = "#44476a";
const NEU_SHADOW_DARK: &str = "#a3b1c6";
const GRADIENT_STOPS: [&str; 3] = ["#f97316", "#ec4899", "#8b5cf6"];

/// Compose the SVG scene for one card at the given layout size.
pub fn compose(card: &Card, surface: SurfaceSize) -> String {
    let w = surface.width as f32;
    let h = surface.height as f32;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">"
    ));
    svg.push_str(&defs(w, h));

    match card.design {
        Design::Glass => glass_layer(&mut svg, card, w, h),
        design => design_layer(&mut svg, card, design, w, h),
    }

    svg.push_str("</svg>");
    svg
}

/// Gradients and blur filters shared by the skins.
fn defs(w: f32, h: f32) -> String {
    let soft = (w.min(h) * 0.09).max(8.0);
    let mut stops = String::new();
    for (i, color) in GRADIENT_STOPS.iter().enumerate() {
        let offset = i as f32 * 50.0;
        stops.push_str(&format!(
            "<stop offset=\"{offset}%\" stop-color=\"{color}\"/>"
        ));
    }
    format!(
        "<defs>\
         <linearGradient id=\"bg-glass\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"0%\" stop-color=\"{GLASS_BG_TOP}\"/>\
         <stop offset=\"100%\" stop-color=\"{GLASS_BG_BOTTOM}\"/>\
         </linearGradient>\
         <linearGradient id=\"bg-dynamic\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">{stops}</linearGradient>\
         <filter id=\"orb-blur\" x=\"-80%\" y=\"-80%\" width=\"260%\" height=\"260%\">\
         <feGaussianBlur stdDeviation=\"{soft}\"/>\
         </filter>\
         </defs>"
    )
}

/// Glass: gradient background, three orbs, frosted panel over the content.
fn glass_layer(svg: &mut String, card: &Card, w: f32, h: f32) {
    svg.push_str(&format!(
        "<rect width=\"{w}\" height=\"{h}\" fill=\"url(#bg-glass)\"/>"
    ));

    let r = w.min(h) * 0.26;
    orb(svg, w * 0.18, h * 0.22, r, ORB_PURPLE);
    orb(svg, w * 0.84, h * 0.82, r * 1.1, ORB_PINK);
    orb(svg, w * 0.80, h * 0.16, r * 0.8, ORB_CYAN);

    // Frosted panel, inset from every edge
    let (px, py) = (w * 0.10, h * 0.14);
    svg.push_str(&format!(
        "<g class=\"glass-overlay\">\
         <rect x=\"{px}\" y=\"{py}\" width=\"{pw}\" height=\"{ph}\" rx=\"20\" \
         fill=\"#ffffff\" fill-opacity=\"0.12\" \
         stroke=\"#ffffff\" stroke-opacity=\"0.25\" stroke-width=\"1.5\"/>",
        pw = w - 2.0 * px,
        ph = h - 2.0 * py,
    ));
    content(svg, card, w, h, PAPER, PAPER);
    svg.push_str("</g>");
}

/// Any non-glass skin: one styled layer, with two glow orbs for neon-glow.
fn design_layer(svg: &mut String, card: &Card, design: Design, w: f32, h: f32) {
    svg.push_str(&format!(
        "<g class=\"design-layer design-{}\">",
        design.token()
    ));

    let bg = match design {
        Design::GradientDynamic => "url(#bg-dynamic)",
        Design::SolidBrand => BRAND,
        Design::MinimalLight => LIGHT_BG,
        Design::MinimalDark => DARK_BG,
        Design::NeonGlow => NEON_BG,
        Design::Neumorphism => NEU_BG,
        Design::Glass => unreachable!("glass has its own layer"),
    };
    svg.push_str(&format!(
        "<rect width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>"
    ));

    if design == Design::NeonGlow {
        let r = w.min(h) * 0.3;
        orb(svg, w * 0.20, h * 0.25, r, NEON_CYAN);
        orb(svg, w * 0.80, h * 0.75, r, NEON_PINK);
    }

    if design == Design::Neumorphism {
        neumorphic_panel(svg, w, h);
    }

    let (text_color, accent_color) = match design {
        Design::GradientDynamic => (PAPER, PAPER),
        Design::SolidBrand => (PAPER, BRAND_ACCENT),
        Design::MinimalLight => (INK, INK),
        Design::MinimalDark => (PAPER, PAPER),
        Design::NeonGlow => (NEON_CYAN, NEON_PINK),
        Design::Neumorphism => (NEU_TEXT, NEU_SHADOW_DARK),
        Design::Glass => unreachable!("glass has its own layer"),
    };
    content(svg, card, w, h, text_color, accent_color);
    svg.push_str("</g>");
}

/// One blurred decorative orb.
fn orb(svg: &mut String, cx: f32, cy: f32, r: f32, color: &str) {
    svg.push_str(&format!(
        "<circle class=\"orb\" cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" \
         fill=\"{color}\" fill-opacity=\"0.55\" filter=\"url(#orb-blur)\"/>"
    ));
}

/// Raised panel with the two-tone soft shadow.
fn neumorphic_panel(svg: &mut String, w: f32, h: f32) {
    let (px, py) = (w * 0.10, h * 0.14);
    let (pw, ph) = (w - 2.0 * px, h - 2.0 * py);
    let off = w.min(h) * 0.02;
    svg.push_str(&format!(
        "<rect x=\"{lx}\" y=\"{ly}\" width=\"{pw}\" height=\"{ph}\" rx=\"24\" \
         fill=\"#ffffff\" fill-opacity=\"0.85\" filter=\"url(#orb-blur)\"/>\
         <rect x=\"{dx}\" y=\"{dy}\" width=\"{pw}\" height=\"{ph}\" rx=\"24\" \
         fill=\"{NEU_SHADOW_DARK}\" fill-opacity=\"0.7\" filter=\"url(#orb-blur)\"/>\
         <rect x=\"{px}\" y=\"{py}\" width=\"{pw}\" height=\"{ph}\" rx=\"24\" fill=\"{NEU_BG}\"/>",
        lx = px - off,
        ly = py - off,
        dx = px + off,
        dy = py + off,
    ));
}

/// Card text plus accent element, or the placeholder when text is empty.
fn content(svg: &mut String, card: &Card, w: f32, h: f32, text_color: &str, accent_color: &str) {
    let fs = (w.min(h) * 0.12).clamp(14.0, 96.0);
    let cx = w / 2.0;

    if card.has_text() {
        let baseline = h / 2.0 + fs * 0.35;
        svg.push_str(&format!(
            "<text x=\"{cx}\" y=\"{baseline}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-weight=\"600\" font-size=\"{fs}\" \
             fill=\"{text_color}\">{}</text>",
            escape(card.text.trim()),
        ));
        // Accent bar under the text
        let bar_w = w * 0.16;
        svg.push_str(&format!(
            "<rect class=\"accent\" x=\"{x}\" y=\"{y}\" width=\"{bar_w}\" height=\"{bh}\" \
             rx=\"{r}\" fill=\"{accent_color}\"/>",
            x = cx - bar_w / 2.0,
            y = h / 2.0 + fs * 0.9,
            bh = fs * 0.12,
            r = fs * 0.06,
        ));
    } else {
        let pfs = fs * 0.55;
        let baseline = h / 2.0 + pfs * 0.35;
        svg.push_str(&format!(
            "<text class=\"placeholder\" x=\"{cx}\" y=\"{baseline}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-style=\"italic\" font-size=\"{pfs}\" \
             fill=\"{text_color}\" fill-opacity=\"0.5\">{}</text>",
            escape(PLACEHOLDER_TEXT),
        ));
    }
}

/// Minimal XML escaping for text content embedded in the scene.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AspectRatio;

    fn scene(text: &str, design: Design) -> String {
        let card = Card::new(text, design, AspectRatio::Standard);
        compose(&card, SurfaceSize::for_aspect(card.aspect))
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_glass_has_three_orbs_and_frosted_panel() {
        let svg = scene("Hello", Design::Glass);
        assert_eq!(count(&svg, "class=\"orb\""), 3);
        assert!(svg.contains("glass-overlay"));
    }

    #[test]
    fn test_neon_glow_has_exactly_two_orbs() {
        let svg = scene("Hello", Design::NeonGlow);
        assert_eq!(count(&svg, "class=\"orb\""), 2);
        assert!(svg.contains("design-neon-glow"));
    }

    #[test]
    fn test_plain_skins_have_no_orbs() {
        for design in [
            Design::GradientDynamic,
            Design::SolidBrand,
            Design::MinimalLight,
            Design::MinimalDark,
            Design::Neumorphism,
        ] {
            let svg = scene("Hello", design);
            assert_eq!(count(&svg, "class=\"orb\""), 0, "{design}");
        }
    }

    #[test]
    fn test_placeholder_iff_trimmed_text_empty() {
        for design in Design::ALL {
            let empty = scene("   ", design);
            assert!(empty.contains(PLACEHOLDER_TEXT), "{design}");
            assert_eq!(count(&empty, "class=\"accent\""), 0, "{design}");

            let filled = scene("Hello", design);
            assert!(!filled.contains(PLACEHOLDER_TEXT), "{design}");
            assert_eq!(count(&filled, "class=\"accent\""), 1, "{design}");
        }
    }

    #[test]
    fn test_text_is_xml_escaped() {
        let svg = scene("a<b & \"c\"", Design::MinimalLight);
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
        assert!(!svg.contains("a<b"));
    }

    #[test]
    fn test_scene_uses_surface_dimensions() {
        let card = Card::new("Hi", Design::SolidBrand, AspectRatio::Widescreen);
        let svg = compose(&card, SurfaceSize::new(320, 180));
        assert!(svg.contains("viewBox=\"0 0 320 180\""));
    }
}
