//! End-to-end rasterization tests: scene → PNG bytes.

use cardforge_render::{
    export_file_name, AspectRatio, Card, Design, Rasterizer, SurfaceSize, PIXEL_RATIO,
};

#[test]
fn every_skin_renders_at_three_times_layout_size() {
    let rasterizer = Rasterizer::new();
    let surface = SurfaceSize::new(320, 240);
    for design in Design::ALL {
        let card = Card::new("Render", design, AspectRatio::Standard);
        let png = rasterizer
            .render_png(&card, surface)
            .unwrap_or_else(|e| panic!("{design}: {e}"));
        let img = image::load_from_memory(&png).expect("valid PNG");
        assert_eq!(img.width(), 320 * PIXEL_RATIO, "{design}");
        assert_eq!(img.height(), 240 * PIXEL_RATIO, "{design}");
    }
}

#[test]
fn repeated_export_of_unchanged_card_is_byte_identical() {
    let rasterizer = Rasterizer::new();
    let card = Card::new("Stable", Design::Glass, AspectRatio::Square);
    let surface = SurfaceSize::for_aspect(card.aspect);
    let first = rasterizer.render_png(&card, surface).expect("first render");
    let second = rasterizer.render_png(&card, surface).expect("second render");
    assert_eq!(first, second);
}

#[test]
fn changing_design_changes_the_payload() {
    let rasterizer = Rasterizer::new();
    let surface = SurfaceSize::for_aspect(AspectRatio::Standard);
    let a = rasterizer
        .render_png(
            &Card::new("", Design::MinimalDark, AspectRatio::Standard),
            surface,
        )
        .expect("placeholder render");
    let b = rasterizer
        .render_png(
            &Card::new("", Design::MinimalLight, AspectRatio::Standard),
            surface,
        )
        .expect("light render");
    assert_ne!(a, b);
}

#[test]
fn hello_world_neon_widescreen_scenario() {
    // "Hello World" + neon-glow + 16:9: filename, orb count, box constraint.
    assert_eq!(
        export_file_name("Hello World").as_deref(),
        Some("Hello_World.png")
    );

    let card = Card::new("Hello World", Design::NeonGlow, AspectRatio::Widescreen);
    let surface = SurfaceSize::for_aspect(card.aspect);
    let scene = cardforge_render::skin::compose(&card, surface);
    assert_eq!(scene.matches("class=\"orb\"").count(), 2);

    let png = Rasterizer::new().render_png(&card, surface).expect("render");
    let img = image::load_from_memory(&png).expect("valid PNG");
    assert_eq!(img.width() * 9, img.height() * 16);
}
