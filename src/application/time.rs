//! Frame timing.

use std::collections::VecDeque;
use std::time::Duration;

/// Setup of a `FrameClock`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockParams {
    /// Clamps the frame time to `1 / min_fps` seconds. Zero disables clamping.
    pub min_fps: u32,
    /// Averages the frame time over this many frames. Zero disables smoothing.
    pub smoothing_step: usize,
}

/// Turns the timestamps of successive frames into frame times.
#[derive(Debug, Clone)]
pub struct FrameClock {
    params: ClockParams,
    last_frame_timepoint: Option<Duration>,
    previous_timesteps: VecDeque<Duration>,
    timestep: Duration,
}

impl FrameClock {
    pub fn new(params: ClockParams) -> Self {
        FrameClock {
            params,
            last_frame_timepoint: None,
            previous_timesteps: VecDeque::new(),
            timestep: Duration::new(0, 0),
        }
    }

    /// Starts a frame at `now`, measured from any fixed origin, and returns the
    /// seconds since the previous frame. The first frame takes no time.
    pub fn tick(&mut self, now: Duration) -> f32 {
        let last = match self.last_frame_timepoint.replace(now) {
            Some(last) => last,
            None => {
                self.timestep = Duration::new(0, 0);
                return 0.0;
            }
        };

        let mut elapsed = if now > last {
            now - last
        } else {
            Duration::new(0, 0)
        };

        // If fps lower than minimum, simply clamp it.
        if self.params.min_fps > 0 {
            elapsed = std::cmp::min(elapsed, Duration::from_secs(1) / self.params.min_fps);
        }

        // Perform timestep smoothing once the window is filled.
        if self.params.smoothing_step > 0 {
            self.previous_timesteps.push_front(elapsed);
            if self.previous_timesteps.len() > self.params.smoothing_step {
                self.previous_timesteps.truncate(self.params.smoothing_step);

                let total: Duration = self.previous_timesteps.iter().sum();
                self.timestep = total / self.previous_timesteps.len() as u32;
            } else {
                self.timestep = elapsed;
            }
        } else {
            self.timestep = elapsed;
        }

        duration_to_secs(self.timestep)
    }

    /// Gets the frame time computed by the last `tick`.
    #[inline]
    pub fn frame_delta(&self) -> Duration {
        self.timestep
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new(ClockParams::default())
    }
}

#[inline]
fn duration_to_secs(duration: Duration) -> f32 {
    duration.as_secs() as f32 + duration.subsec_nanos() as f32 * 1e-9
}
