use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use raylib::prelude::*;
use tracing::{info, warn};

use plandeck::error::RecordError;

/// Pipes raw RGBA frames into an `ffmpeg` child that encodes H.264.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg, RecordError> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .map_err(RecordError::Spawn)?;
        let stdin = process.stdin.take().ok_or(RecordError::NoStdin)?;
        info!(output = %output.display(), width, height, fps, "started ffmpeg");
        Ok(Ffmpeg { process, stdin: Some(stdin), frames: 0 })
    }

    pub fn write(&mut self, image: &Image) -> Result<(), RecordError> {
        let stdin = self.stdin.as_mut().ok_or(RecordError::NoStdin)?;
        let width = image.width() as usize;
        let height = image.height() as usize;
        let row_len = width * 4; // 4 bytes per pixel (RGBA)

        // SAFETY: a framebuffer readback is an uncompressed RGBA8 image of
        // exactly width * height * 4 bytes, alive for the borrow of `image`.
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * height) };

        // Render textures are stored bottom-up; ffmpeg wants rows top-down.
        for row in pixels.chunks_exact(row_len).rev() {
            stdin.write_all(row).map_err(RecordError::Write)?;
        }
        self.frames += 1;
        Ok(())
    }

    /// Closes the pipe and waits for the encoder to finish.
    pub fn finish(mut self) -> Result<u64, RecordError> {
        self.stdin = None;
        let status = self.process.wait().map_err(RecordError::Write)?;
        if !status.success() {
            return Err(RecordError::Exit(status));
        }
        info!(frames = self.frames, "ffmpeg finished");
        Ok(self.frames)
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        if self.stdin.take().is_some() {
            // Dropped without `finish`, e.g. on a write error.
            if let Err(e) = self.process.wait() {
                warn!("failed to wait for ffmpeg: {e}");
            }
        }
    }
}
