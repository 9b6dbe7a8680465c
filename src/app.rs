use anyhow::{Result, anyhow};
use raylib::prelude::*;
use tracing::{debug, info};

use plandeck::config::{Config, Mode};
use plandeck::constants::*;
use plandeck::deck::Deck;
use plandeck::input::Key;
use plandeck::layout::{self, Renderer, Scene};
use plandeck::navigation::Command;
use plandeck::theme::Theme;

use crate::engine::Presenter;
use crate::paged::PagedPresenter;
use crate::painter::Painter;
use crate::record::record;
use crate::scrolling::ScrollPresenter;

fn raylib_key(key: Key) -> KeyboardKey {
    match key {
        Key::Right => KeyboardKey::KEY_RIGHT,
        Key::Left => KeyboardKey::KEY_LEFT,
        Key::Space => KeyboardKey::KEY_SPACE,
        Key::PageDown => KeyboardKey::KEY_PAGE_DOWN,
        Key::PageUp => KeyboardKey::KEY_PAGE_UP,
        Key::Home => KeyboardKey::KEY_HOME,
        Key::End => KeyboardKey::KEY_END,
        Key::F => KeyboardKey::KEY_F,
    }
}

/// Draws the canvas framebuffer letterboxed into the window.
pub fn blit(d: &mut RaylibDrawHandle, framebuffer: &RenderTexture2D) {
    let view = layout::letterbox(d.get_screen_width() as f32, d.get_screen_height() as f32);
    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        framebuffer,
        // Render textures are upside down
        Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
        Rectangle::new(view.x, view.y, view.w, view.h),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

pub fn run(config: &Config, deck: &Deck, theme: Theme) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("plandeck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let glyphs = layout::outline(deck, &theme);
    let painter = Painter::load(&mut rl, &thread, config.font.as_deref(), &glyphs, theme)?;
    let renderer = Renderer::new(deck, &painter.theme);
    let scenes: Vec<Scene> = deck.iter().map(|slide| renderer.render(slide)).collect();

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    if let Some(output) = &config.record {
        info!(slides = scenes.len(), "recording deck");
        return record(&mut rl, &thread, &mut framebuffer, PagedPresenter::new(scenes), &painter, output);
    }

    info!(slides = scenes.len(), mode = ?config.mode, "presenting deck");
    match config.mode {
        Mode::Paged => present(&mut rl, &thread, &mut framebuffer, PagedPresenter::new(scenes), &painter, config.fullscreen),
        Mode::Scroll => present(&mut rl, &thread, &mut framebuffer, ScrollPresenter::new(scenes), &painter, config.fullscreen),
    }
    Ok(())
}

fn present<P: Presenter>(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    framebuffer: &mut RenderTexture2D,
    mut presenter: P,
    painter: &Painter,
    mut fullscreen: bool,
) {
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let mut commands: Vec<Command> = Key::ALL
            .into_iter()
            .filter(|key| rl.is_key_pressed(raylib_key(*key)))
            .map(Key::command)
            .collect();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let view = layout::letterbox(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            let mouse = rl.get_mouse_position();
            if let Some((x, y)) = layout::to_canvas(view, mouse.x, mouse.y) {
                commands.extend(presenter.click(x, y));
            }
        }

        for command in commands {
            match command {
                Command::ToggleFullscreen => {
                    rl.toggle_fullscreen();
                    fullscreen = !fullscreen;
                    debug!(fullscreen, "toggled fullscreen");
                }
                command => presenter.handle(command),
            }
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            presenter.scroll(wheel);
        }

        presenter.update(dt);

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            presenter.render_frame(&mut tmd, painter);
        });

        let mut d = rl.begin_drawing(thread);
        blit(&mut d, framebuffer);
    }
}
