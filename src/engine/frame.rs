//! Render-frame timing and next-frame continuations
//!
//! `FrameClock` measures wall-clock time between rendered frames.
//! `FrameScheduler` holds one-shot tasks that run at the next frame boundary,
//! which lets callers coalesce work to at most once per rendered frame.

use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Longest delta handed out for a single frame, avoids huge jumps after a stall
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Wall-clock frame timing
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated every 10 frames)
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the delta since the previous one in seconds
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time).min(MAX_FRAME_DELTA);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        frame_time.as_secs_f32()
    }

    /// Total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a scheduled task so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: ScheduleHandle,
    due_frame: u64,
    task: T,
}

/// One-shot tasks keyed to the render-frame counter
///
/// Nothing runs on its own: the owner calls `advance` at each frame boundary
/// and gets back the tasks that became due.
#[derive(Debug)]
pub struct FrameScheduler<T> {
    frame: u64,
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self {
            frame: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Run `task` once at the next frame boundary
    pub fn schedule_next_frame(&mut self, task: T) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            due_frame: self.frame + 1,
            task,
        });
        handle
    }

    /// Drop a task before it runs
    /// Returns false if it already ran or was cancelled
    #[allow(dead_code)]
    pub fn cancel(&mut self, handle: ScheduleHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Cross a frame boundary and hand back the tasks due on it, in schedule order
    pub fn advance(&mut self) -> Vec<T> {
        self.frame += 1;
        let frame = self.frame;

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|s| s.due_frame <= frame);
        self.pending = waiting;

        due.into_iter().map(|s| s.task).collect()
    }
}

#[cfg(test)]
impl<T> FrameScheduler<T> {
    /// Number of frame boundaries crossed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of tasks still waiting
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_scheduled(&self, handle: ScheduleHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_frame_counting() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);

        clock.begin_frame();
        clock.begin_frame();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_clock_delta_is_capped() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(300));

        let dt = clock.begin_frame();
        assert!(dt <= MAX_FRAME_DELTA.as_secs_f32());
    }

    #[test]
    fn test_task_runs_on_next_frame_only() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule_next_frame("unset");
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.advance(), vec!["unset"]);
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.advance().is_empty());
    }

    #[test]
    fn test_task_scheduled_after_advance_waits_a_frame() {
        let mut scheduler = FrameScheduler::new();
        scheduler.advance();
        scheduler.schedule_next_frame(1);

        assert_eq!(scheduler.frame(), 1);
        assert_eq!(scheduler.advance(), vec![1]);
        assert_eq!(scheduler.frame(), 2);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = FrameScheduler::new();
        let keep = scheduler.schedule_next_frame('a');
        let dropped = scheduler.schedule_next_frame('b');

        assert!(scheduler.cancel(dropped));
        assert!(!scheduler.cancel(dropped), "Second cancel should be a no-op");
        assert!(scheduler.is_scheduled(keep));
        assert_eq!(scheduler.advance(), vec!['a']);
        assert!(!scheduler.cancel(keep), "Cannot cancel a task that already ran");
    }

    #[test]
    fn test_tasks_run_in_schedule_order() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule_next_frame(1);
        scheduler.schedule_next_frame(2);
        scheduler.schedule_next_frame(3);

        assert_eq!(scheduler.advance(), vec![1, 2, 3]);
    }
}
