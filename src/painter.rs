use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;
use tracing::{info, warn};

use plandeck::constants::*;
use plandeck::layout::{Element, Scene};
use plandeck::theme::{Rgba, Theme};

const ROUNDNESS: f32 = 0.2;
const SEGMENTS: i32 = 8;

fn color(rgba: Rgba, alpha: f32) -> Color {
    let Rgba(r, g, b, a) = rgba.faded(alpha);
    Color::new(r, g, b, a)
}

/// Draws scenes with the deck font.
pub struct Painter {
    font: Option<Font>,
    fallback: WeakFont,
    pub theme: Theme,
}

impl Painter {
    /// Loads `font_path` rasterised for every glyph in `text`, falling back to
    /// raylib's built-in font (ASCII only) when no path is given.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        font_path: Option<&Path>,
        text: &str,
        theme: Theme,
    ) -> Result<Self> {
        let fallback = rl.get_font_default();
        let Some(path) = font_path else {
            if !text.is_ascii() {
                warn!("no --font given; non-ASCII glyphs will not render");
            }
            return Ok(Self { font: None, fallback, theme });
        };

        let glyphs: BTreeSet<char> = (' '..='~').chain(text.chars().filter(|c| !c.is_control())).collect();
        let glyphs: String = glyphs.into_iter().collect();
        let path_str = path
            .to_str()
            .with_context(|| format!("font path {path:?} is not valid UTF-8"))?;
        let font = rl
            .load_font_ex(thread, path_str, FONT_SIZE, Some(glyphs.as_str()))
            .map_err(|e| anyhow!("failed to load font {}: {e}", path.display()))?;
        info!(path = %path.display(), glyphs = glyphs.chars().count(), "loaded font");
        Ok(Self { font: Some(font), fallback, theme })
    }

    fn draw_text<D: RaylibDraw>(&self, d: &mut D, text: &str, x: f32, y: f32, size: f32, tint: Color) {
        let position = Vector2::new(x, y);
        let spacing = size / 20.0;
        match &self.font {
            Some(font) => d.draw_text_ex(font, text, position, size, spacing, tint),
            None => d.draw_text_ex(&self.fallback, text, position, size, spacing, tint),
        }
    }

    /// Draws `scene` shifted down by `dy`, with every colour faded by `alpha`.
    pub fn paint<D: RaylibDraw>(&self, d: &mut D, scene: &Scene, dy: f32, alpha: f32) {
        for element in &scene.elements {
            match element {
                Element::Panel { rect, color: rgba, rounded } => {
                    let rec = Rectangle::new(rect.x, rect.y + dy, rect.w, rect.h);
                    if *rounded {
                        d.draw_rectangle_rounded(rec, ROUNDNESS, SEGMENTS, color(*rgba, alpha));
                    } else {
                        d.draw_rectangle_rec(rec, color(*rgba, alpha));
                    }
                }
                Element::Text { x, y, size, color: rgba, text } => {
                    self.draw_text(d, text, *x, *y + dy, *size, color(*rgba, alpha));
                }
            }
        }
    }

    pub fn clear<D: RaylibDraw>(&self, d: &mut D) {
        d.clear_background(color(self.theme.background, 1.0));
    }

    /// Faint page number in the bottom-right corner.
    pub fn page_counter<D: RaylibDraw>(&self, d: &mut D, position: usize) {
        let text = position.to_string();
        let x = RENDER_WIDTH as f32 - 140.0;
        let y = RENDER_HEIGHT as f32 - 100.0;
        self.draw_text(d, &text, x, y, 28.0, color(self.theme.muted, 0.4));
    }

    /// Previous/next chevrons drawn in the paged nav bar.
    pub fn chevrons<D: RaylibDraw>(&self, d: &mut D, has_previous: bool, has_next: bool) {
        let y = RENDER_HEIGHT as f32 - 100.0;
        let tint = |enabled: bool| color(self.theme.muted, if enabled { 0.8 } else { 0.2 });
        self.draw_text(d, "<", 80.0, y, 40.0, tint(has_previous));
        self.draw_text(d, ">", RENDER_WIDTH as f32 - 240.0, y, 40.0, tint(has_next));
    }
}
