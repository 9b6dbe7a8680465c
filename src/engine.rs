use raylib::prelude::*;

use plandeck::navigation::{Command, Navigator};

use crate::painter::Painter;

/// Window-side driver for one navigation style.
pub trait Presenter {
    fn navigator(&self) -> &Navigator;
    fn handle(&mut self, command: Command);
    /// Mouse wheel movement, positive away from the user.
    fn scroll(&mut self, wheel: f32);
    fn update(&mut self, dt: f32);
    /// Command bound to a click at canvas position `(x, y)`.
    fn click(&self, x: f32, y: f32) -> Option<Command>;
    fn render_frame<D: RaylibDraw>(&self, d: &mut D, painter: &Painter);
}
