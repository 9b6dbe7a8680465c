use std::path::Path;

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::info;

use plandeck::constants::*;
use plandeck::error::RecordError;
use plandeck::navigation::Command;
use plandeck::state::RecordState;

use crate::engine::Presenter;
use crate::ffmpeg::Ffmpeg;
use crate::paged::PagedPresenter;
use crate::painter::Painter;

/// Plays the whole deck once at a fixed frame rate and encodes it to `output`.
pub fn record(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    framebuffer: &mut RenderTexture2D,
    mut presenter: PagedPresenter,
    painter: &Painter,
    output: &Path,
) -> Result<()> {
    let mut ffmpeg = Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, output)?;
    let mut state = RecordState::Displaying;
    let mut display_timer = 0.0;

    while !rl.window_should_close() {
        let dt = FRAME_TIME;

        match state {
            RecordState::Displaying => {
                display_timer += dt;
                if display_timer >= DISPLAY_DURATION {
                    if presenter.navigator().is_last() {
                        state = RecordState::Finished;
                    } else {
                        presenter.handle(Command::Next);
                        state = RecordState::Transitioning;
                    }
                }
            }
            RecordState::Transitioning => {
                if !presenter.is_transitioning() {
                    state = RecordState::Displaying;
                    display_timer = 0.0;
                }
            }
            RecordState::Finished => break,
        }
        presenter.update(dt);

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            presenter.render_frame(&mut tmd, painter);
        });

        // Mirror the frame to the window for feedback
        let mut d = rl.begin_drawing(thread);
        crate::app::blit(&mut d, framebuffer);
        drop(d);

        let image = framebuffer
            .load_image()
            .map_err(|e| RecordError::Readback(e.to_string()))?;
        ffmpeg.write(&image)?;
    }

    let frames = ffmpeg.finish().context("video encoding failed")?;
    info!(output = %output.display(), frames, "recording complete");
    Ok(())
}
