/*
 * Animation Session Module
 *
 * The AnimationSession is owned by the driving loop and carries the only
 * state that survives between frames: the next frame index, the RNG, the
 * cadence accumulator and the frame currently on screen.
 *
 * State machine:
 *   Idle      -> Animating   (start)
 *   Animating -> Closed      (last frame shown and interval elapsed, or close)
 *   Idle      -> Closed      (close)
 * Closed is terminal. The final frame stays available after the sequence
 * runs out so it can remain on screen until the window is closed.
 */

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::generator::GalaxyGenerator;
use crate::params::GalaxyParams;
use crate::particle::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Animating,
    Closed,
}

pub struct AnimationSession {
    generator: GalaxyGenerator,
    rng: StdRng,
    state: SessionState,
    next_frame: u32,
    accumulator: Duration,
    current: Option<Frame>,
}

impl AnimationSession {
    // Unseeded: particle jitter differs between runs
    pub fn new(params: GalaxyParams) -> Result<Self> {
        Self::with_rng(params, StdRng::from_entropy())
    }

    pub fn with_seed(params: GalaxyParams, seed: u64) -> Result<Self> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: GalaxyParams, rng: StdRng) -> Result<Self> {
        let generator = GalaxyGenerator::new(params)?;
        Ok(Self {
            generator,
            rng,
            state: SessionState::Idle,
            next_frame: 0,
            accumulator: Duration::ZERO,
            current: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn params(&self) -> &GalaxyParams {
        self.generator.params()
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    // Number of frames produced so far
    pub fn frames_shown(&self) -> u32 {
        self.next_frame
    }

    /// Leave `Idle` and produce frame 0. Has no effect in any other state.
    pub fn start(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        self.state = SessionState::Animating;
        self.accumulator = Duration::ZERO;
        log::info!(
            "animation started: {} frames every {:?}",
            self.params().frame_count,
            self.params().frame_interval
        );
        self.advance();
    }

    /// Feed elapsed loop time into the session.
    ///
    /// Returns `true` when a new frame was produced. At most one frame is
    /// produced per call; time beyond a single interval is discarded.
    pub fn update(&mut self, since_last: Duration) -> bool {
        if self.state != SessionState::Animating {
            return false;
        }

        let interval = self.params().frame_interval;
        self.accumulator += since_last;
        if self.accumulator < interval {
            return false;
        }

        self.accumulator -= interval;
        if self.accumulator >= interval {
            log::warn!("dropping {:?} of animation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.advance()
    }

    pub fn close(&mut self) {
        if self.state != SessionState::Closed {
            log::info!("animation closed after {} frames", self.next_frame);
            self.state = SessionState::Closed;
        }
    }

    fn advance(&mut self) -> bool {
        if self.next_frame >= self.params().frame_count {
            log::info!("animation finished: all {} frames shown", self.next_frame);
            self.state = SessionState::Closed;
            return false;
        }

        let frame = self.generator.generate(self.next_frame, &mut self.rng);
        self.current = Some(frame);
        self.next_frame += 1;
        true
    }
}
