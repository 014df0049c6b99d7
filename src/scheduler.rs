//! Frame scheduling.
//!
//! The game loop never sleeps on its own. It asks a [`FrameScheduler`] for
//! the next frame, gets back a [`FrameHandle`], and the host polls the
//! scheduler until that frame is due. Only one frame is pending at a time:
//! requesting a new frame replaces the pending one.
//!
//! Time comes from a [`Clock`]. The host uses [`SystemClock`]; tests use
//! [`ManualClock`] and step time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock, origin at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<Duration>>);

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}

/// Token identifying one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// A frame that came due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    pub handle: FrameHandle,
    /// Clock time when the frame was polled.
    pub timestamp: Duration,
    /// Time since the previous delivered frame (zero for the first one).
    pub delta: Duration,
}

/// Single-slot frame scheduler paced at a fixed interval.
#[derive(Debug)]
pub struct FrameScheduler<C: Clock> {
    clock: C,
    interval: Duration,
    next_handle: u64,
    pending: Option<(FrameHandle, Duration)>,
    last_frame: Option<Duration>,
}

impl<C: Clock> FrameScheduler<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            next_handle: 1,
            pending: None,
            last_frame: None,
        }
    }

    /// Scheduler paced at `fps` frames per second. Zero means unpaced.
    pub fn with_target_fps(clock: C, fps: u32) -> Self {
        let interval = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / u64::from(fps))
        };
        Self::new(clock, interval)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Request the next frame. Any frame still pending is replaced.
    ///
    /// The frame is due one interval after the last delivered frame, or
    /// immediately if none was delivered yet.
    pub fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        let due = match self.last_frame {
            Some(last) => last + self.interval,
            None => self.clock.now(),
        };
        self.pending = Some((handle, due));
        handle
    }

    /// Cancel a pending frame. Returns false when `handle` is not the
    /// pending frame (already delivered, replaced or cancelled).
    pub fn cancel_frame(&mut self, handle: FrameHandle) -> bool {
        match self.pending {
            Some((pending, _)) if pending == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending.map(|(handle, _)| handle)
    }

    /// Deliver the pending frame if it is due.
    pub fn poll(&mut self) -> Option<FrameTick> {
        let (handle, due) = self.pending?;
        let now = self.clock.now();
        if now < due {
            return None;
        }
        self.pending = None;
        let delta = self.last_frame.map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_frame = Some(now);
        Some(FrameTick {
            handle,
            timestamp: now,
            delta,
        })
    }

    /// How long until the pending frame is due. `None` when nothing is pending.
    pub fn time_until_due(&self) -> Option<Duration> {
        let (_, due) = self.pending?;
        Some(due.saturating_sub(self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_first_frame_is_due_immediately() {
        let clock = ManualClock::new();
        let mut s = FrameScheduler::new(clock, FRAME);
        let h = s.request_frame();
        let tick = s.poll().unwrap();
        assert_eq!(tick.handle, h);
        assert_eq!(tick.delta, Duration::ZERO);
        assert_eq!(s.pending(), None);
    }

    #[test]
    fn test_next_frame_waits_one_interval() {
        let clock = ManualClock::new();
        let mut s = FrameScheduler::new(clock.clone(), FRAME);
        s.request_frame();
        s.poll().unwrap();

        s.request_frame();
        assert!(s.poll().is_none());
        assert_eq!(s.time_until_due(), Some(FRAME));
        clock.advance(Duration::from_millis(10));
        assert!(s.poll().is_none());
        clock.advance(Duration::from_millis(6));
        let tick = s.poll().unwrap();
        assert_eq!(tick.delta, FRAME);
    }

    #[test]
    fn test_request_replaces_pending() {
        let mut s = FrameScheduler::new(ManualClock::new(), FRAME);
        let first = s.request_frame();
        let second = s.request_frame();
        assert_ne!(first, second);
        assert_eq!(s.pending(), Some(second));
        assert!(!s.cancel_frame(first));
        assert_eq!(s.poll().map(|t| t.handle), Some(second));
    }

    #[test]
    fn test_cancel_frame() {
        let mut s = FrameScheduler::new(ManualClock::new(), FRAME);
        let h = s.request_frame();
        assert!(s.cancel_frame(h));
        assert!(!s.cancel_frame(h));
        assert!(s.poll().is_none());
        assert_eq!(s.time_until_due(), None);
    }

    #[test]
    fn test_zero_fps_is_unpaced() {
        let mut s = FrameScheduler::with_target_fps(ManualClock::new(), 0);
        assert_eq!(s.interval(), Duration::ZERO);
        for _ in 0..3 {
            s.request_frame();
            assert!(s.poll().is_some());
        }
    }

    #[test]
    fn test_target_fps_interval() {
        let s = FrameScheduler::with_target_fps(ManualClock::new(), 50);
        assert_eq!(s.interval(), Duration::from_millis(20));
    }
}
