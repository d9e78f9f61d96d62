//! End-to-end rendering tests.
//!
//! Each test loads a font matrix through a labelling face loader, renders a
//! note onto a `RecordingSurface` and checks the recorded draw calls.

use std::cell::RefCell;
use std::path::Path;

use notes_render::markdown;
use notes_render::{
    DrawCall, FaceLoader, FontError, FontKey, FontMatrix, FontPaths, ImageInfo, ImageRegistry,
    RecordingSurface, RenderCapabilities, RenderState, Size, SizeTier, TextureId, Variant,
    compute_sizes, resolve_font,
};

/// Face loader that never touches disk.
struct LabelLoader;

impl FaceLoader for LabelLoader {
    type Face = String;

    fn load_face(&mut self, path: &Path, size_px: f32) -> Result<String, FontError> {
        Ok(format!("{}@{size_px}", path.display()))
    }
}

#[derive(Default)]
struct Capabilities {
    images: ImageRegistry,
    opened: RefCell<Vec<String>>,
}

impl RenderCapabilities for Capabilities {
    fn open_link(&self, href: &str) {
        self.opened.borrow_mut().push(href.to_string());
    }

    fn resolve_image(&self, href: &str) -> Option<ImageInfo> {
        self.images.resolve(href)
    }
}

fn matrix() -> FontMatrix<String> {
    let table = compute_sizes(16.0, 1.125);
    FontMatrix::load(&table, &FontPaths::default(), &mut LabelLoader).expect("label loader never fails")
}

fn key(variant: Variant, tier: SizeTier) -> Option<FontKey> {
    Some(FontKey::new(variant, tier))
}

#[test]
fn test_heading_and_inline_styles_scenario() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let mut surface = RecordingSurface::new();

    markdown::render("# Title\n\n**bold** and *italic* text", &matrix, &caps, &mut surface);

    let runs: Vec<_> = surface.text_runs().map(|r| (r.text.as_str(), r.font)).collect();
    assert_eq!(
        runs,
        vec![
            ("Title", key(Variant::Regular, SizeTier::H1)),
            ("bold", key(Variant::Bold, SizeTier::Body)),
            (" and ", key(Variant::Regular, SizeTier::Body)),
            ("italic", key(Variant::Italic, SizeTier::Body)),
            (" text", key(Variant::Regular, SizeTier::Body)),
        ]
    );
    assert_eq!(surface.font_depth(), 0);
}

#[test]
fn test_run_sizes_come_from_the_matrix() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let mut surface = RecordingSurface::new();

    markdown::render("# Big\n\nsmall", &matrix, &caps, &mut surface);

    let sizes: Vec<_> = surface.text_runs().map(|r| r.size_px).collect();
    assert_eq!(
        sizes,
        vec![
            Some(matrix.lookup(Variant::Regular, SizeTier::H1).size_px()),
            Some(16.0),
        ]
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let doc = "# Notes\n\n- **one**\n- *two*\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n<div class=\"red\">\n\nwarn\n\n</div>\n\n[x](https://example.com)";

    let mut first = RecordingSurface::new();
    markdown::render(doc, &matrix, &caps, &mut first);
    let mut second = RecordingSurface::new();
    markdown::render(doc, &matrix, &caps, &mut second);

    assert!(!first.calls().is_empty());
    assert_eq!(first.calls(), second.calls());
}

#[test]
fn test_same_surface_across_frames_repeats_calls() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let mut surface = RecordingSurface::new();

    markdown::render("*a* **b**", &matrix, &caps, &mut surface);
    let frame_one = surface.take_calls();
    markdown::render("*a* **b**", &matrix, &caps, &mut surface);
    let frame_two = surface.take_calls();

    assert_eq!(frame_one, frame_two);
}

#[test]
fn test_unresolved_image_is_skipped() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let mut surface = RecordingSurface::new();

    markdown::render("![broken](missing.png \"tip\") still **here**\n\n# Next", &matrix, &caps, &mut surface);

    assert_eq!(surface.images().count(), 0);
    assert!(!surface.calls().iter().any(|c| matches!(c, DrawCall::Tooltip(_))));
    let texts: Vec<_> = surface.text_runs().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec![" still ", "here", "Next"]);
}

#[test]
fn test_resolved_image_is_drawn() {
    let matrix = matrix();
    let mut caps = Capabilities::default();
    let info = ImageInfo::new(TextureId(1), Size::new(40.0, 20.0));
    caps.images.insert("logo.png", info);
    let mut surface = RecordingSurface::new();

    markdown::render("![logo](logo.png) ![gone](gone.png)", &matrix, &caps, &mut surface);

    assert_eq!(surface.images().copied().collect::<Vec<_>>(), vec![info]);
}

#[test]
fn test_out_of_range_heading_level_uses_fallback() {
    let matrix = matrix();
    let state = RenderState {
        heading_level: 12,
        ..RenderState::default()
    };
    let font = resolve_font(&matrix, &state);
    assert_eq!(font.key(), FontKey::new(Variant::Bold, SizeTier::Body));
}

#[test]
fn test_clicked_link_opens_after_render() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let mut surface = RecordingSurface::new();
    surface.click("https://example.com/docs");

    markdown::render(
        "read [the docs](https://example.com/docs) or [skip](https://example.com/skip)",
        &matrix,
        &caps,
        &mut surface,
    );

    assert_eq!(*caps.opened.borrow(), vec!["https://example.com/docs".to_string()]);
}

#[test]
fn test_unclosed_directive_is_unwound() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let mut surface = RecordingSurface::new();

    markdown::render("<div class=\"highlight\">\n\nnever closed", &matrix, &caps, &mut surface);

    assert_eq!(surface.color_depth(), 0);
    assert_eq!(surface.calls().last(), Some(&DrawCall::PopTextColor));
}

#[test]
fn test_matrix_lookup_total_after_load() {
    let matrix = matrix();
    for variant in Variant::ALL {
        for tier in SizeTier::ALL {
            let asset = matrix.lookup(variant, tier);
            assert_eq!(asset.key(), FontKey::new(variant, tier));
            assert!(!asset.face().is_empty());
        }
    }
}

#[test]
fn test_size_directive_inside_heading_does_not_leak() {
    let matrix = matrix();
    let caps = Capabilities::default();
    let mut surface = RecordingSurface::new();

    markdown::render("# T <div class=\"small\">\n\nbody\n\n</div>\n\nafter", &matrix, &caps, &mut surface);

    let after = surface.text_runs().find(|r| r.text == "after").map(|r| r.font);
    assert_eq!(after, Some(key(Variant::Regular, SizeTier::Body)));
    assert_eq!(surface.font_depth(), 0);
}
