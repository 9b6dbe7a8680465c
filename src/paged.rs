use raylib::prelude::*;

use plandeck::constants::*;
use plandeck::input::wheel_command;
use plandeck::layout::Scene;
use plandeck::navigation::{Command, Navigator};
use plandeck::state::Transition;

use crate::engine::Presenter;
use crate::painter::Painter;

const NAV_BAR_HEIGHT: f32 = 140.0;

/// One slide at a time; every change fades from the previous slide.
pub struct PagedPresenter {
    scenes: Vec<Scene>,
    navigator: Navigator,
    transition: Option<Transition>,
}

impl PagedPresenter {
    pub fn new(scenes: Vec<Scene>) -> Self {
        let navigator = Navigator::new(scenes.len());
        Self {
            scenes,
            navigator,
            transition: None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }
}

impl Presenter for PagedPresenter {
    fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    fn handle(&mut self, command: Command) {
        let from = self.navigator.current();
        if self.navigator.apply(command) {
            self.transition = Some(Transition::new(from, ANIMATION_DURATION));
        }
    }

    fn scroll(&mut self, wheel: f32) {
        if let Some(command) = wheel_command(wheel) {
            self.handle(command);
        }
    }

    fn update(&mut self, dt: f32) {
        if let Some(transition) = self.transition.as_mut() {
            transition.update(dt);
            if transition.is_done() {
                self.transition = None;
            }
        }
    }

    fn click(&self, x: f32, y: f32) -> Option<Command> {
        if let Some(command) = self
            .scenes
            .get(self.navigator.current())
            .and_then(|scene| scene.hit(x, y))
        {
            return Some(command);
        }
        let width = RENDER_WIDTH as f32;
        if y < RENDER_HEIGHT as f32 - NAV_BAR_HEIGHT {
            None
        } else if x < width / 3.0 {
            Some(Command::Previous)
        } else if x > width * 2.0 / 3.0 {
            Some(Command::Next)
        } else {
            None
        }
    }

    fn render_frame<D: RaylibDraw>(&self, d: &mut D, painter: &Painter) {
        painter.clear(d);
        let current = self.navigator.current();
        match &self.transition {
            Some(transition) => {
                let p = transition.progress();
                if let Some(scene) = self.scenes.get(transition.from) {
                    painter.paint(d, scene, 0.0, 1.0 - p);
                }
                if let Some(scene) = self.scenes.get(current) {
                    painter.paint(d, scene, 0.0, p);
                }
            }
            None => {
                if let Some(scene) = self.scenes.get(current) {
                    painter.paint(d, scene, 0.0, 1.0);
                }
            }
        }
        painter.chevrons(d, !self.navigator.is_first(), !self.navigator.is_last());
        painter.page_counter(d, self.navigator.position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plandeck::layout::{Hotspot, Rect};

    const BOTTOM: f32 = RENDER_HEIGHT as f32 - 10.0;

    #[test]
    fn fade_starts_only_on_change() {
        let mut p = PagedPresenter::new(vec![Scene::default(); 3]);
        p.handle(Command::Previous);
        assert!(!p.is_transitioning());
        p.handle(Command::ToggleFullscreen);
        assert!(!p.is_transitioning());

        p.handle(Command::Next);
        assert_eq!(p.navigator().current(), 1);
        assert!(p.is_transitioning());
        p.update(ANIMATION_DURATION / 2.0);
        assert!(p.is_transitioning());
        p.update(ANIMATION_DURATION);
        assert!(!p.is_transitioning());
    }

    #[test]
    fn wheel_pages_one_slide() {
        let mut p = PagedPresenter::new(vec![Scene::default(); 3]);
        p.scroll(-1.0);
        assert_eq!(p.navigator().current(), 1);
        p.scroll(0.0);
        assert_eq!(p.navigator().current(), 1);
        p.scroll(2.0);
        assert_eq!(p.navigator().current(), 0);
    }

    #[test]
    fn nav_bar_thirds_step_the_deck() {
        let p = PagedPresenter::new(vec![Scene::default(); 3]);
        let width = RENDER_WIDTH as f32;
        assert_eq!(p.click(10.0, BOTTOM), Some(Command::Previous));
        assert_eq!(p.click(width - 10.0, BOTTOM), Some(Command::Next));
        assert_eq!(p.click(width / 2.0, BOTTOM), None);
        assert_eq!(p.click(10.0, 100.0), None);
    }

    #[test]
    fn slide_hotspots_win_over_the_nav_bar() {
        let contents = Scene {
            elements: Vec::new(),
            hotspots: vec![Hotspot {
                rect: Rect::new(0.0, RENDER_HEIGHT as f32 - 100.0, 200.0, 100.0),
                command: Command::GoTo(2),
            }],
        };
        let mut p = PagedPresenter::new(vec![contents, Scene::default(), Scene::default()]);
        assert_eq!(p.click(10.0, BOTTOM), Some(Command::GoTo(2)));

        p.handle(Command::GoTo(2));
        assert_eq!(p.click(10.0, BOTTOM), Some(Command::Previous));
    }
}
