#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

/// Loop state plus the app it drives. Closing is terminal, and the app is
/// handed out for release at most once.
pub struct FrameLoop<T> {
    state: LoopState,
    app: Option<T>,
}

impl<T> FrameLoop<T> {
    /// True while running and no app has been attached yet.
    pub fn awaiting_app(&self) -> bool {
        self.state == LoopState::Running && self.app.is_none()
    }

    pub fn attach(&mut self, app: T) {
        if self.awaiting_app() {
            self.app = Some(app);
        }
    }

    /// The app, only while running.
    pub fn running_app(&mut self) -> Option<&mut T> {
        match self.state {
            LoopState::Running => self.app.as_mut(),
            LoopState::Closing => None,
        }
    }

    /// Returns true on the Running -> Closing transition only.
    pub fn close(&mut self) -> bool {
        let was_running = self.state == LoopState::Running;
        self.state = LoopState::Closing;
        was_running
    }

    pub fn release(&mut self) -> Option<T> {
        self.state = LoopState::Closing;
        self.app.take()
    }
}

impl<T> Default for FrameLoop<T> {
    fn default() -> Self {
        Self {
            state: LoopState::Running,
            app: None,
        }
    }
}
