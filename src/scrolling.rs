use raylib::prelude::*;

use plandeck::constants::*;
use plandeck::layout::Scene;
use plandeck::navigation::{Command, Navigator};
use plandeck::scroll::Viewport;

use crate::engine::Presenter;
use crate::painter::Painter;

/// Continuous column of slides. The current index is only ever observed
/// from the viewport, never set by navigation commands.
pub struct ScrollPresenter {
    scenes: Vec<Scene>,
    navigator: Navigator,
    viewport: Viewport,
}

impl ScrollPresenter {
    pub fn new(scenes: Vec<Scene>) -> Self {
        let navigator = Navigator::new(scenes.len());
        let viewport = Viewport::new(scenes.len(), RENDER_HEIGHT as f32);
        Self {
            scenes,
            navigator,
            viewport,
        }
    }

    fn section_dy(&self, index: usize) -> f32 {
        self.viewport.section_top(index) - self.viewport.offset()
    }
}

impl Presenter for ScrollPresenter {
    fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    fn handle(&mut self, command: Command) {
        // Steps continue from a scroll still in flight, not the last observed slide.
        let current = self
            .viewport
            .target_section()
            .unwrap_or_else(|| self.navigator.current());
        let last = self.scenes.len().saturating_sub(1);
        let target = match command {
            Command::Next => (current + 1).min(last),
            Command::Previous => current.saturating_sub(1),
            Command::First => 0,
            Command::Last => last,
            Command::GoTo(index) => index,
            Command::ToggleFullscreen => return,
        };
        self.viewport.scroll_to_section(target);
    }

    fn scroll(&mut self, wheel: f32) {
        self.viewport.scroll_by(-wheel * WHEEL_STEP);
    }

    fn update(&mut self, dt: f32) {
        self.viewport.update(dt);
        let entered = self.viewport.intersections();
        self.navigator.observe(entered);
    }

    fn click(&self, x: f32, y: f32) -> Option<Command> {
        (0..self.scenes.len()).find_map(|index| {
            let dy = self.section_dy(index);
            if y < dy || y > dy + self.viewport.height() {
                return None;
            }
            self.scenes[index].hit(x, y - dy)
        })
    }

    fn render_frame<D: RaylibDraw>(&self, d: &mut D, painter: &Painter) {
        painter.clear(d);
        for (index, scene) in self.scenes.iter().enumerate() {
            if self.viewport.visible_ratio(index) > 0.0 {
                painter.paint(d, scene, self.section_dy(index), 1.0);
            }
        }
        painter.page_counter(d, self.navigator.position());
    }
}
