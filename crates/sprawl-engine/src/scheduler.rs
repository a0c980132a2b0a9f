//! Fixed-interval frame scheduler.

/// Decides on which frames growth advances.
///
/// Growth is paused until [`start()`](Self::start). While running, every
/// `step_every`-th frame is a step frame, until `step_cap` steps have been
/// taken. Frames keep rendering after the cap; only growth stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameScheduler {
    step_every: u32,
    step_cap: Option<u64>,
    running: bool,
    frames: u64,
    steps: u64,
}

impl FrameScheduler {
    /// A paused scheduler. `step_every` of zero is treated as one.
    pub fn new(step_every: u32, step_cap: Option<u64>) -> Self {
        Self {
            step_every: step_every.max(1),
            step_cap,
            running: false,
            frames: 0,
            steps: 0,
        }
    }

    /// Begin (or resume) stepping.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop stepping. The frame count is kept, so resuming continues the
    /// same cadence.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Paused, with the frame and step counts cleared.
    pub fn reset(&mut self) {
        self.running = false;
        self.frames = 0;
        self.steps = 0;
    }

    /// Whether growth is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the step cap has been reached.
    pub fn is_capped(&self) -> bool {
        self.step_cap.is_some_and(|cap| self.steps >= cap)
    }

    /// Frames counted while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Steps granted so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Frames between steps.
    pub fn step_every(&self) -> u32 {
        self.step_every
    }

    /// Advance one frame. Returns `true` if growth should step on it.
    pub fn on_frame(&mut self) -> bool {
        if !self.running || self.is_capped() {
            return false;
        }
        self.frames += 1;
        if self.frames % u64::from(self.step_every) == 0 {
            self.steps += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepping_frames(s: &mut FrameScheduler, frames: usize) -> Vec<usize> {
        (1..=frames).filter(|_| s.on_frame()).collect()
    }

    #[test]
    fn paused_until_started() {
        let mut s = FrameScheduler::new(1, None);
        assert!(!s.on_frame());
        assert_eq!(s.frames(), 0);
        s.start();
        assert!(s.on_frame());
    }

    #[test]
    fn steps_every_nth_frame() {
        let mut s = FrameScheduler::new(10, None);
        s.start();
        assert_eq!(stepping_frames(&mut s, 35), vec![10, 20, 30]);
        assert_eq!(s.steps(), 3);
    }

    #[test]
    fn cap_stops_growth() {
        let mut s = FrameScheduler::new(2, Some(2));
        s.start();
        assert_eq!(stepping_frames(&mut s, 20), vec![2, 4]);
        assert!(s.is_capped());
        assert!(s.is_running());
    }

    #[test]
    fn pause_keeps_cadence() {
        let mut s = FrameScheduler::new(3, None);
        s.start();
        s.on_frame();
        s.on_frame();
        s.pause();
        assert!(!s.on_frame());
        s.start();
        assert!(s.on_frame());
    }

    #[test]
    fn reset_clears_counts() {
        let mut s = FrameScheduler::new(1, Some(1));
        s.start();
        s.on_frame();
        assert!(s.is_capped());
        s.reset();
        assert!(!s.is_capped());
        assert!(!s.is_running());
        assert_eq!(s.steps(), 0);
    }

    #[test]
    fn zero_interval_means_every_frame() {
        let s = FrameScheduler::new(0, None);
        assert_eq!(s.step_every(), 1);
    }
}
