//! Frame scheduling
//!
//! [`TickDriver`] keeps at most one frame request outstanding. It asks for a
//! frame while the session runs and cancels the outstanding request as soon
//! as it stops, so a frozen session never receives a stray tick.

/// Something that can call us back on the next display frame
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&mut self) -> Self::Handle;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub struct TickDriver<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> TickDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The requested frame has fired; its handle is spent
    pub fn frame_fired(&mut self) {
        self.pending = None;
    }

    /// Arm or disarm to match whether ticks are wanted
    pub fn sync(&mut self, running: bool) {
        match (running, self.pending.is_some()) {
            (true, false) => {
                self.pending = Some(self.scheduler.request_frame());
            }
            (false, true) => {
                if let Some(handle) = self.pending.take() {
                    self.scheduler.cancel_frame(handle);
                }
            }
            _ => {}
        }
    }

    /// Cancel any outstanding frame, e.g. on teardown
    pub fn stop(&mut self) {
        self.sync(false);
    }
}
