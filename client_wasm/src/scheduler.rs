//! Browser timers: animation frames for ticking, a one-shot timeout for the
//! quiz reveal.

use game_core::FrameScheduler;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// `requestAnimationFrame` with a single long-lived callback
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
        }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> i32 {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .unwrap_or_else(|err| {
                warn!("requestAnimationFrame failed: {err:?}");
                0
            })
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            warn!("cancelAnimationFrame failed: {err:?}");
        }
    }
}

/// Pending `setTimeout`. Dropping it clears the timer.
pub struct Timeout {
    window: Window,
    handle: i32,
}

impl Timeout {
    /// Run `f` once after `delay_ms`. The callback frees itself after firing.
    pub fn start(window: &Window, delay_ms: u32, f: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::once_into_js(f);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            window: window.clone(),
            handle,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}
