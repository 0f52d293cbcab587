pub mod headless;
mod limiter;
#[cfg(feature = "sdl")]
pub mod sdl;

use crate::builder::AppBuilder;
use crate::events::InputEvent;
use crate::gfx::Canvas;
use limiter::{FrameLimiter, LimitMode};

pub use headless::HeadlessBackend;

/// Window surface plus its event source
pub trait Backend: Canvas {
    /// Next pending event of the current frame, `None` once the queue is drained
    fn poll_event(&mut self) -> Option<InputEvent>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum RunState {
    Running,
    Stopped,
}

pub(crate) fn run<S, B>(builder: AppBuilder<S>, backend: &mut B) -> Result<(), String>
where
    S: 'static,
    B: Backend,
{
    let AppBuilder {
        window,
        init_cb,
        mut event_cb,
        mut update_cb,
        cleanup_cb,
        ..
    } = builder;

    let mut state = init_cb();

    let mode = window
        .frame_delay
        .map_or(LimitMode::Disabled, LimitMode::Target);
    let mut limiter = FrameLimiter::new(mode);

    log::info!(
        "Running '{}' at {}x{}",
        window.title,
        window.size.x,
        window.size.y
    );

    let mut run_state = RunState::Running;
    let mut frames = 0u64;
    while run_state == RunState::Running {
        // every queued event lands before the frame is drawn
        while let Some(evt) = backend.poll_event() {
            if evt.is_quit() {
                log::debug!("Quit requested after {frames} frames");
                run_state = RunState::Stopped;
            }

            event_cb(&mut state, &evt);
        }

        backend.set_draw_color(window.clear_color);
        backend.clear();
        update_cb(&mut state, &mut *backend);
        backend.present();

        frames += 1;
        limiter.tick();
    }

    cleanup_cb(&mut state);
    log::info!("Stopped after {frames} frames");

    Ok(())
}
