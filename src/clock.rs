//! Frame-to-tick scheduling
//!
//! By default the game advances exactly one tick per displayed frame. A fixed
//! tick rate decouples game speed from the display refresh rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameClock {
    /// One tick per frame, whatever the frame time
    PerFrame,
    /// Fixed timestep with an accumulator
    Fixed { step: f32, accumulator: f32 },
}

impl FrameClock {
    pub fn new(tick_rate: Option<f32>) -> Self {
        match tick_rate {
            Some(hz) => FrameClock::Fixed {
                step: 1.0 / hz,
                accumulator: 0.0,
            },
            None => FrameClock::PerFrame,
        }
    }

    /// Number of ticks to run for a frame that took `dt` seconds
    pub fn ticks_for_frame(&mut self, dt: f32) -> u32 {
        match self {
            FrameClock::PerFrame => 1,
            FrameClock::Fixed { step, accumulator } => {
                *accumulator += dt.clamp(0.0, MAX_FRAME_DT);

                let mut substeps = 0;
                while *accumulator >= *step && substeps < MAX_SUBSTEPS {
                    *accumulator -= *step;
                    substeps += 1;
                }
                substeps
            }
        }
    }

    /// Drop any partial tick (on start/restart)
    pub fn reset(&mut self) {
        if let FrameClock::Fixed { accumulator, .. } = self {
            *accumulator = 0.0;
        }
    }
}
