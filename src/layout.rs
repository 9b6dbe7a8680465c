//! Slide layouts.
//!
//! Every slide kind maps to one layout function that turns the slide's fields
//! into a [`Scene`]: a backend-neutral list of boxes, text runs and clickable
//! hotspots on the 1920x1080 logical canvas.

use unicode_width::UnicodeWidthChar;

use crate::constants::*;
use crate::deck::{Deck, TOC_SEPARATOR};
use crate::navigation::Command;
use crate::slide::{Icon, Item, MAX_WEEKS, Slide, SlideKind, parse_weeks, split_duration_tag};
use crate::theme::{Rgba, Theme};

const MARGIN: f32 = 120.0;
const GUTTER: f32 = 32.0;
/// Advance of one display column, relative to the font size.
const COLUMN_ADVANCE: f32 = 0.5;
const LINE_SPACING: f32 = 1.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn canvas() -> Self {
        Self::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }

    pub fn inset(&self, by: f32) -> Self {
        Self::new(self.x + by, self.y + by, (self.w - 2.0 * by).max(0.0), (self.h - 2.0 * by).max(0.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Panel { rect: Rect, color: Rgba, rounded: bool },
    Text { x: f32, y: f32, size: f32, color: Rgba, text: String },
}

/// Clickable region bound to a navigation command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub rect: Rect,
    pub command: Command,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub elements: Vec<Element>,
    pub hotspots: Vec<Hotspot>,
}

impl Scene {
    /// Text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Panel { .. } => None,
        })
    }

    /// Command of the topmost hotspot under the point, if any.
    pub fn hit(&self, x: f32, y: f32) -> Option<Command> {
        self.hotspots
            .iter()
            .rev()
            .find(|hotspot| hotspot.rect.contains(x, y))
            .map(|hotspot| hotspot.command)
    }

    fn panel(&mut self, rect: Rect, color: Rgba) {
        self.elements.push(Element::Panel { rect, color, rounded: true });
    }

    fn bar(&mut self, rect: Rect, color: Rgba) {
        self.elements.push(Element::Panel { rect, color, rounded: false });
    }

    fn text(&mut self, x: f32, y: f32, size: f32, color: Rgba, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.elements.push(Element::Text { x, y, size, color, text });
        }
    }

    fn centered(&mut self, center_x: f32, y: f32, size: f32, color: Rgba, text: &str) {
        let x = center_x - text_width(text, size) * 0.5;
        self.text(x, y, size, color, text);
    }

    /// Draws `text` wrapped to `width`; returns the y below the last line.
    fn wrapped(&mut self, x: f32, y: f32, width: f32, size: f32, color: Rgba, text: &str) -> f32 {
        let mut cursor = y;
        for line in wrap(text, width, size) {
            self.text(x, cursor, size, color, line);
            cursor += size * LINE_SPACING;
        }
        cursor
    }

    fn hotspot(&mut self, rect: Rect, command: Command) {
        self.hotspots.push(Hotspot { rect, command });
    }
}

/// Estimated rendered width of `text` at `size`.
pub fn text_width(text: &str, size: f32) -> f32 {
    let columns: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    columns as f32 * size * COLUMN_ADVANCE
}

/// Greedy word wrap by display width. Words wider than a line are split.
pub fn wrap(text: &str, width: f32, size: f32) -> Vec<String> {
    let max_columns = ((width / (size * COLUMN_ADVANCE)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_columns = 0;

    for word in text.split_whitespace() {
        let word_columns: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
        let needed = if line.is_empty() { word_columns } else { word_columns + 1 };
        if line_columns + needed <= max_columns {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_columns += needed;
            continue;
        }
        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_columns = 0;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if line_columns + w > max_columns && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_columns = 0;
            }
            line.push(c);
            line_columns += w;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Binds slides to layouts.
pub struct Renderer<'a> {
    deck: &'a Deck,
    theme: &'a Theme,
}

impl<'a> Renderer<'a> {
    pub fn new(deck: &'a Deck, theme: &'a Theme) -> Self {
        Self { deck, theme }
    }

    pub fn render(&self, slide: &Slide) -> Scene {
        let frame = Rect::canvas();
        let mut scene = Scene::default();
        scene.panel(frame.inset(40.0), self.theme.surface);
        match slide.kind {
            SlideKind::Cover => self.cover(&mut scene, slide, frame),
            SlideKind::TableOfContents => self.table_of_contents(&mut scene, slide, frame),
            SlideKind::Section => self.section(&mut scene, slide, frame),
            SlideKind::Content => self.content(&mut scene, slide, frame),
            SlideKind::Summary => self.summary(&mut scene, slide, frame),
            SlideKind::Chart => self.chart(&mut scene, slide, frame),
            SlideKind::Roadmap => self.roadmap(&mut scene, slide, frame),
            SlideKind::Calendar => self.calendar(&mut scene, slide, frame),
            SlideKind::Detail => self.detail(&mut scene, slide, frame),
            SlideKind::Timeline => self.timeline(&mut scene, slide, frame),
        }
        scene
    }

    /// Title and optional subtitle; returns the y where the body starts.
    fn header(&self, scene: &mut Scene, slide: &Slide, frame: Rect, title_size: f32) -> f32 {
        let t = self.theme;
        let width = frame.w - 2.0 * MARGIN;
        let mut y = scene.wrapped(MARGIN, 110.0, width, title_size, t.title, &slide.title);
        if let Some(subtitle) = &slide.subtitle {
            y = scene.wrapped(MARGIN, y + 8.0, width, 28.0, t.muted, subtitle);
        }
        y + 48.0
    }

    fn icon_tile(&self, scene: &mut Scene, x: f32, y: f32, side: f32, icon: Option<Icon>) {
        let t = self.theme;
        scene.panel(Rect::new(x, y, side, side), t.accent_soft);
        if let Some(icon) = icon {
            let size = side * 0.45;
            scene.centered(x + side * 0.5, y + (side - size) * 0.5, size, t.accent, icon.glyph());
        }
    }

    fn duration_badge(&self, scene: &mut Scene, x: f32, y: f32, tag: &str) -> f32 {
        let t = self.theme;
        let size = 20.0;
        let w = text_width(tag, size) + 64.0;
        scene.panel(Rect::new(x, y, w, 36.0), t.accent_soft);
        scene.text(x + 16.0, y + 8.0, size, t.accent, Icon::Clock.glyph());
        scene.text(x + 44.0, y + 8.0, size, t.accent, tag);
        w
    }

    fn footer(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        if let Some(footer) = &slide.footer {
            scene.text(MARGIN, frame.h - MARGIN, 24.0, self.theme.muted, footer.as_str());
        }
    }

    fn cover(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let cx = frame.w * 0.5;

        let chip = "Project Execution Plan";
        let chip_w = text_width(chip, 22.0) + 48.0;
        scene.panel(Rect::new(cx - chip_w * 0.5, 300.0, chip_w, 44.0), t.accent_soft);
        scene.centered(cx, 311.0, 22.0, t.accent, chip);

        let mut y = 380.0;
        for line in wrap(&slide.title, frame.w - 4.0 * MARGIN, 84.0) {
            scene.centered(cx, y, 84.0, t.title, &line);
            y += 84.0 * 1.15;
        }
        if let Some(subtitle) = &slide.subtitle {
            for line in wrap(subtitle, frame.w * 0.5, 32.0) {
                scene.centered(cx, y + 24.0, 32.0, t.muted, &line);
                y += 32.0 * LINE_SPACING;
            }
        }
        if let Some(badge) = &slide.badge {
            let w = text_width(badge, 22.0) + 32.0;
            scene.panel(Rect::new(frame.w - MARGIN - w, MARGIN, w, 40.0), t.accent);
            scene.text(frame.w - MARGIN - w + 16.0, MARGIN + 9.0, 22.0, t.on_accent, badge.as_str());
        }
        if let Some(footer) = &slide.footer {
            scene.centered(cx, frame.h - MARGIN - 40.0, 24.0, t.muted, footer);
        }
    }

    fn table_of_contents(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let top = self.header(scene, slide, frame, 60.0);
        scene.bar(Rect::new(MARGIN, top - 30.0, 80.0, 6.0), t.accent);

        let columns = 2;
        let col_w = (frame.w - 2.0 * MARGIN - GUTTER) / columns as f32;
        let row_h = 130.0;
        for (idx, item) in slide.items.iter().enumerate() {
            let x = MARGIN + (idx % columns) as f32 * (col_w + GUTTER);
            let y = top + (idx / columns) as f32 * (row_h + 16.0);
            let (number, label) = item
                .title
                .split_once(TOC_SEPARATOR)
                .unwrap_or(("", item.title.as_str()));

            let tile = 64.0;
            scene.panel(Rect::new(x, y, tile, tile), t.card);
            scene.centered(x + tile * 0.5, y + 18.0, 26.0, t.muted, number);
            scene.text(x + tile + 24.0, y + 4.0, 34.0, t.title, label);
            scene.wrapped(x + tile + 24.0, y + 52.0, col_w - tile - 24.0, 22.0, t.muted, &item.desc);

            if let Some(target) = self.deck.toc_target(item) {
                scene.hotspot(Rect::new(x, y, col_w, row_h), Command::GoTo(target));
            }
        }
    }

    fn section(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let cx = frame.w * 0.5;
        self.icon_tile(scene, cx - 48.0, 300.0, 96.0, Some(Icon::TrendingUp));
        scene.centered(cx, 440.0, 96.0, t.title, &slide.title);
        if let Some(subtitle) = &slide.subtitle {
            scene.centered(cx, 580.0, 36.0, t.accent, &subtitle.to_uppercase());
        }
    }

    fn content(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let mut y = self.header(scene, slide, frame, 60.0);
        let width = frame.w - 2.0 * MARGIN;

        for line in &slide.content {
            scene.panel(Rect::new(MARGIN, y + 12.0, 10.0, 10.0), t.accent);
            y = scene.wrapped(MARGIN + 28.0, y, width - 28.0, 28.0, t.body, line) + 8.0;
        }
        if !slide.content.is_empty() {
            y += 24.0;
        }

        let columns = slide.items.len().clamp(1, 3);
        let col_w = (width - GUTTER * (columns as f32 - 1.0)) / columns as f32;
        let card_h = 320.0;
        for (idx, item) in slide.items.iter().enumerate() {
            let x = MARGIN + (idx % columns) as f32 * (col_w + GUTTER);
            let cy = y + (idx / columns) as f32 * (card_h + GUTTER);
            self.item_card(scene, item, Rect::new(x, cy, col_w, card_h));
        }
        self.footer(scene, slide, frame);
    }

    /// Card with icon, optional duration badge, title and cleaned description.
    fn item_card(&self, scene: &mut Scene, item: &Item, rect: Rect) {
        let t = self.theme;
        let (tag, desc) = split_duration_tag(&item.desc);
        scene.panel(rect, t.card);
        let inner = rect.inset(32.0);
        self.icon_tile(scene, inner.x, inner.y, 72.0, item.icon);
        if let Some(tag) = tag {
            let w = text_width(tag, 20.0) + 64.0;
            self.duration_badge(scene, inner.x + inner.w - w, inner.y, tag);
        }
        let y = scene.wrapped(inner.x, inner.y + 100.0, inner.w, 30.0, t.title, &item.title);
        scene.wrapped(inner.x, y + 8.0, inner.w, 22.0, t.muted, &desc);
    }

    fn summary(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let top = self.header(scene, slide, frame, 56.0);
        let width = frame.w - 2.0 * MARGIN;
        let row_h = 112.0;
        for (idx, item) in slide.items.iter().enumerate() {
            let y = top + idx as f32 * (row_h + 16.0);
            scene.panel(Rect::new(MARGIN, y, width, row_h), t.card);
            self.icon_tile(scene, MARGIN + 24.0, y + 20.0, 72.0, item.icon);
            scene.text(MARGIN + 124.0, y + 22.0, 30.0, t.title, item.title.as_str());
            scene.text(MARGIN + 124.0, y + 64.0, 22.0, t.muted, item.desc.as_str());
        }
    }

    fn chart(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let top = self.header(scene, slide, frame, 56.0);
        let baseline = frame.h - MARGIN - 80.0;
        let max_h = (baseline - top - 60.0).max(0.0);
        let count = slide.items.len().max(1);
        let slot = (frame.w - 2.0 * MARGIN) / count as f32;
        let bar_w = slot.min(120.0) * 0.8;

        for (idx, item) in slide.items.iter().enumerate() {
            let cx = MARGIN + slot * (idx as f32 + 0.5);
            let h = (leading_integer(&item.desc) as f32 * 3.0).clamp(0.0, max_h);
            scene.bar(Rect::new(cx - bar_w * 0.5, baseline - h, bar_w, h), t.accent);
            scene.centered(cx, baseline - h - 44.0, 32.0, t.accent, &item.desc);
            scene.centered(cx, baseline + 24.0, 22.0, t.muted, &item.title.to_uppercase());
        }
    }

    fn roadmap(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let top = self.header(scene, slide, frame, 56.0);
        let mid = top + (frame.h - MARGIN - top) * 0.5;
        let width = frame.w - 2.0 * MARGIN;
        scene.bar(Rect::new(MARGIN, mid - 2.0, width, 4.0), t.accent);

        let count = slide.items.len().max(1);
        let slot = width / count as f32;
        let card_w = slot - GUTTER;
        let card_h = 200.0;
        for (idx, item) in slide.items.iter().enumerate() {
            let x = MARGIN + slot * idx as f32 + GUTTER * 0.5;
            scene.panel(Rect::new(x + card_w * 0.5 - 10.0, mid - 10.0, 20.0, 20.0), t.accent);
            // Cards alternate above and below the track.
            let y = if idx % 2 == 0 { mid - 40.0 - card_h } else { mid + 40.0 };
            let (tag, desc) = split_duration_tag(&item.desc);
            scene.panel(Rect::new(x, y, card_w, card_h), t.card);
            scene.text(x + 20.0, y + 20.0, 26.0, t.title, item.title.as_str());
            let below = scene.wrapped(x + 20.0, y + 60.0, card_w - 40.0, 18.0, t.muted, &desc);
            if let Some(tag) = tag {
                self.duration_badge(scene, x + 20.0, below + 4.0, tag);
            }
        }
    }

    fn calendar(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let top = self.header(scene, slide, frame, 56.0);
        let width = frame.w - 2.0 * MARGIN;
        let columns = 3;
        let col_w = (width - GUTTER * (columns as f32 - 1.0)) / columns as f32;
        let card_h = 220.0;
        for (idx, item) in slide.items.iter().enumerate() {
            let x = MARGIN + (idx % columns) as f32 * (col_w + GUTTER);
            let y = top + (idx / columns) as f32 * (card_h + GUTTER);
            scene.panel(Rect::new(x, y, col_w, card_h), t.card);
            self.icon_tile(scene, x + 28.0, y + 28.0, 64.0, item.icon);
            scene.text(x + 112.0, y + 48.0, 22.0, t.accent, item.title.to_uppercase());
            scene.wrapped(x + 28.0, y + 116.0, col_w - 56.0, 30.0, t.title, &item.desc);
        }
    }

    fn detail(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let chip = "DETAILED PLAN";
        let chip_w = text_width(chip, 18.0) + 28.0;
        scene.panel(Rect::new(MARGIN, 64.0, chip_w, 32.0), t.accent);
        scene.text(MARGIN + 14.0, 71.0, 18.0, t.on_accent, chip);

        let top = self.header(scene, slide, frame, 56.0);
        let width = frame.w - 2.0 * MARGIN;
        let columns = slide.groups.len().clamp(1, 3);
        let col_w = (width - GUTTER * (columns as f32 - 1.0)) / columns as f32;
        let rows = slide.groups.len().div_ceil(columns).max(1);
        let card_h = (frame.h - MARGIN - top - GUTTER * (rows as f32 - 1.0)) / rows as f32;
        let footer_h = 150.0;
        let column_icons = [Icon::Search, Icon::Target, Icon::TrendingUp];

        for (idx, group) in slide.groups.iter().enumerate() {
            let x = MARGIN + (idx % columns) as f32 * (col_w + GUTTER);
            let y = top + (idx / columns) as f32 * (card_h + GUTTER);
            scene.panel(Rect::new(x, y, col_w, card_h), t.card);
            let inner = Rect::new(x, y, col_w, card_h - footer_h).inset(36.0);
            self.icon_tile(scene, inner.x, inner.y, 64.0, Some(column_icons[idx.min(2)]));

            let mut cursor = inner.y + 92.0;
            for item in &group.items {
                cursor = scene.wrapped(inner.x, cursor, inner.w, 30.0, t.title, &item.title);
                cursor = scene.wrapped(inner.x, cursor + 6.0, inner.w, 20.0, t.muted, &item.desc) + 20.0;
            }

            let foot = Rect::new(x, y + card_h - footer_h, col_w, footer_h);
            scene.bar(foot, t.surface);
            if let Some(deliverable) = &group.deliverable {
                scene.panel(Rect::new(foot.x + 32.0, foot.y + 38.0, 8.0, 8.0), t.accent);
                scene.wrapped(foot.x + 56.0, foot.y + 28.0, foot.w - 88.0, 22.0, t.body, &deliverable.text);
            }
        }
    }

    fn timeline(&self, scene: &mut Scene, slide: &Slide, frame: Rect) {
        let t = self.theme;
        let top = self.header(scene, slide, frame, 60.0);
        let width = frame.w - 2.0 * MARGIN;

        // Phases share the track by duration only when every one has a week count.
        let total = slide
            .items
            .iter()
            .map(|item| parse_weeks(&item.desc))
            .sum::<Option<f32>>()
            .filter(|total| *total > 0.0);
        let spans: Vec<f32> = match total {
            Some(total) => slide
                .items
                .iter()
                .filter_map(|item| parse_weeks(&item.desc))
                .map(|w| w / total)
                .collect(),
            None => vec![1.0 / slide.items.len().max(1) as f32; slide.items.len()],
        };

        // The week ruler only makes sense over proportional bars.
        if let Some(total) = total.filter(|total| *total <= MAX_WEEKS) {
            let week_count = total.ceil() as usize;
            let week_w = width / week_count as f32;
            for week in 0..week_count {
                let cx = MARGIN + week_w * (week as f32 + 0.5);
                scene.centered(cx, top, 18.0, t.muted, &format!("WEEK {:02}", week + 1));
            }
        }

        let track_y = top + 80.0;
        scene.bar(Rect::new(MARGIN, track_y + 22.0, width, 8.0), t.card);

        let mut x = MARGIN;
        for (idx, (item, span)) in slide.items.iter().zip(&spans).enumerate() {
            let w = width * span;
            let shade = t.timeline[idx.min(t.timeline.len() - 1)];
            scene.panel(Rect::new(x + 4.0, track_y, w - 8.0, 52.0), shade);
            let label = item
                .title
                .split_once(": ")
                .map_or(item.title.as_str(), |(_, label)| label);
            let label_line = wrap(label, w - 24.0, 20.0).into_iter().next().unwrap_or_default();
            scene.text(x + 16.0, track_y + 15.0, 20.0, t.on_accent, label_line);
            scene.centered(x + w * 0.5, track_y - 34.0, 18.0, t.muted, &item.desc);

            let mut cursor = track_y + 96.0;
            for sub in &item.sub_items {
                for line in wrap(sub, w - 16.0, 18.0) {
                    scene.centered(x + w * 0.5, cursor, 18.0, t.muted, &line);
                    cursor += 18.0 * LINE_SPACING;
                }
                cursor += 6.0;
            }
            x += w;
        }

        if let Some(footer) = &slide.footer {
            let y = frame.h - MARGIN - 40.0;
            scene.bar(Rect::new(MARGIN, y - 24.0, width, 2.0), t.card);
            scene.text(MARGIN, y, 26.0, t.body, footer.as_str());
        }
    }
}

/// Largest canvas-proportioned rectangle centred in a window of the given size.
pub fn letterbox(screen_w: f32, screen_h: f32) -> Rect {
    let canvas = Rect::canvas();
    let scale = (screen_w / canvas.w).min(screen_h / canvas.h);
    let (w, h) = (canvas.w * scale, canvas.h * scale);
    Rect::new((screen_w - w) * 0.5, (screen_h - h) * 0.5, w, h)
}

/// Maps a window position inside `view` back to canvas coordinates.
pub fn to_canvas(view: Rect, x: f32, y: f32) -> Option<(f32, f32)> {
    if !view.contains(x, y) || view.w <= 0.0 || view.h <= 0.0 {
        return None;
    }
    let canvas = Rect::canvas();
    Some(((x - view.x) * canvas.w / view.w, (y - view.y) * canvas.h / view.h))
}

fn leading_integer(text: &str) -> u32 {
    let digits: String = text.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Plain-text dump of every slide as it would be laid out.
pub fn outline(deck: &Deck, theme: &Theme) -> String {
    let renderer = Renderer::new(deck, theme);
    let mut out = String::new();
    for (idx, slide) in deck.iter().enumerate() {
        out.push_str(&format!("== {}/{} [{}] #{}\n", idx + 1, deck.len(), slide.kind, slide.id));
        for text in renderer.render(slide).texts() {
            out.push_str("   ");
            out.push_str(text);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::slide::{Deliverable, Group, GroupItem};

    fn id(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn render_one(deck: &Deck, index: usize) -> Scene {
        let theme = Theme::light();
        Renderer::new(deck, &theme).render(deck.get(index).unwrap())
    }

    #[test]
    fn wrap_respects_double_width_glyphs() {
        // 10 columns at size 20 fit in 100px; each Hangul glyph takes two.
        let lines = wrap("가나다라마바사", 100.0, 20.0);
        assert_eq!(lines, vec!["가나다라마", "바사"]);
        let lines = wrap("alpha beta gamma", 100.0, 20.0);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn content_cards_show_duration_separately() {
        let deck = Deck::new(vec![
            Slide::new(id(1), SlideKind::Content, "Phase 1")
                .with_items(vec![Item::new("분석", "현황 진단 [1W]").with_icon(Icon::Search)]),
        ])
        .unwrap();
        let scene = render_one(&deck, 0);
        let texts: Vec<&str> = scene.texts().collect();
        assert!(texts.contains(&"1W"));
        assert!(texts.contains(&"현황 진단"));
        assert!(!texts.iter().any(|t| t.contains("[1W]")));
    }

    #[test]
    fn toc_entries_become_hotspots() {
        let deck = Deck::new(vec![
            Slide::new(id(1), SlideKind::TableOfContents, "목차").with_items(vec![
                Item::new("01. 현황 및 목표", "진단"),
                Item::new("02. 없음", "dangling"),
            ]),
            Slide::new(id(2), SlideKind::Section, "현황 및 목표"),
        ])
        .unwrap();
        let scene = render_one(&deck, 0);
        assert_eq!(scene.hotspots.len(), 1);
        let spot = scene.hotspots[0];
        assert_eq!(spot.command, Command::GoTo(1));
        let (cx, cy) = (spot.rect.x + 10.0, spot.rect.y + 10.0);
        assert_eq!(scene.hit(cx, cy), Some(Command::GoTo(1)));
        assert_eq!(scene.hit(cx, cy + 2000.0), None);
    }

    #[test]
    fn timeline_spans_follow_week_durations() {
        let deck = Deck::new(vec![Slide::new(id(1), SlideKind::Timeline, "로드맵").with_items(vec![
            Item::new("1단계: 분석", "1W"),
            Item::new("2단계: 설계", "0.5W"),
            Item::new("3단계: 구현", "0.5W"),
            Item::new("4단계: 검증", "2W"),
        ])])
        .unwrap();
        let scene = render_one(&deck, 0);
        let texts: Vec<&str> = scene.texts().collect();
        assert!(texts.contains(&"WEEK 04"));
        assert!(!texts.contains(&"WEEK 05"));
        assert!(texts.contains(&"분석"));

        let bars = timeline_bars(&scene);
        assert_eq!(bars.len(), 4);
        assert!((bars[0] - 2.0 * bars[1]).abs() < 0.01);
        assert!((bars[3] - 4.0 * bars[2]).abs() < 0.01);
    }

    fn timeline_bars(scene: &Scene) -> Vec<f32> {
        scene
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Panel { rect, .. } if rect.h == 52.0 => Some(rect.w + 8.0),
                _ => None,
            })
            .collect()
    }

    fn week_labels(scene: &Scene) -> usize {
        scene.texts().filter(|t| t.starts_with("WEEK ")).count()
    }

    #[test]
    fn timeline_without_every_duration_has_equal_bars_and_no_ruler() {
        let deck = Deck::new(vec![Slide::new(id(1), SlideKind::Timeline, "로드맵").with_items(vec![
            Item::new("1단계: 분석", "1W"),
            Item::new("2단계: 연계", "연계"),
        ])])
        .unwrap();
        let scene = render_one(&deck, 0);
        assert_eq!(week_labels(&scene), 0);
        let bars = timeline_bars(&scene);
        assert_eq!(bars.len(), 2);
        assert!((bars[0] - bars[1]).abs() < 0.01);
    }

    #[test]
    fn timeline_ruler_is_bounded() {
        let deck = Deck::new(vec![
            Slide::new(id(1), SlideKind::Timeline, "huge")
                .with_items(vec![Item::new("a", "2000000W"), Item::new("b", "1e30W")]),
            Slide::new(id(2), SlideKind::Timeline, "long")
                .with_items(vec![Item::new("a", "40W"), Item::new("b", "40W")]),
            Slide::new(id(3), SlideKind::Timeline, "year")
                .with_items(vec![Item::new("a", "26W"), Item::new("b", "26W")]),
        ])
        .unwrap();

        let huge = render_one(&deck, 0);
        assert_eq!(week_labels(&huge), 0);
        assert_eq!(timeline_bars(&huge).len(), 2);

        let long = render_one(&deck, 1);
        assert_eq!(week_labels(&long), 0);
        let bars = timeline_bars(&long);
        assert!((bars[0] - bars[1]).abs() < 0.01);

        let year = render_one(&deck, 2);
        assert_eq!(week_labels(&year), MAX_WEEKS as usize);
    }

    #[test]
    fn detail_renders_every_group_and_deliverable() {
        let group = |title: &str, text: Option<&str>| Group {
            deliverable: text.map(|text| Deliverable { text: text.into(), duration: "1W".into() }),
            items: vec![GroupItem { title: title.into(), desc: "desc".into() }],
        };
        let deck = Deck::new(vec![Slide::new(id(1), SlideKind::Detail, "상세").with_groups(vec![
            group("1-1", Some("리포트")),
            group("1-2", None),
        ])])
        .unwrap();
        let texts: Vec<String> = render_one(&deck, 0).texts().map(str::to_string).collect();
        for expected in ["DETAILED PLAN", "상세", "1-1", "1-2", "리포트"] {
            assert!(texts.iter().any(|t| t == expected), "missing {expected}");
        }
    }

    #[test]
    fn chart_bars_scale_with_value() {
        let deck = Deck::new(vec![Slide::new(id(1), SlideKind::Chart, "지표").with_items(vec![
            Item::new("a", "40%"),
            Item::new("b", "80%"),
        ])])
        .unwrap();
        let heights: Vec<f32> = render_one(&deck, 0)
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Panel { rect, rounded: false, .. } => Some(rect.h),
                _ => None,
            })
            .collect();
        assert_eq!(heights, vec![120.0, 240.0]);
    }

    #[test]
    fn every_kind_renders_its_title() {
        for (n, kind) in SlideKind::ALL.into_iter().enumerate() {
            let deck = Deck::new(vec![Slide::new(id(n as u32 + 1), kind, "Title")]).unwrap();
            assert!(render_one(&deck, 0).texts().any(|t| t == "Title"), "{kind}");
        }
    }

    #[test]
    fn letterbox_pillarboxes_wide_windows() {
        let view = letterbox(1920.0, 540.0);
        assert_eq!(view, Rect::new(480.0, 0.0, 960.0, 540.0));
        assert_eq!(to_canvas(view, 960.0, 270.0), Some((960.0, 540.0)));
        assert_eq!(to_canvas(view, 100.0, 270.0), None);
    }

    #[test]
    fn outline_lists_bundled_deck() {
        let deck = Deck::bundled().unwrap();
        let text = outline(&deck, &Theme::dark());
        assert!(text.starts_with("== 1/"));
        assert!(text.contains("Bluevent GEO 수행계획"));
        assert!(text.contains("[poc_roadmap]"));
    }
}
