/// Natural frequency of the spring in normalized time (one unit = the full duration).
const NATURAL_FREQUENCY: f32 = 10.0;
/// Integration steps per normalized time unit.
const STEPS: u32 = 240;

/// Distance, in layout units, that a clearance of `1.0` moves the panel center.
const BOUNCE_SCALE: f32 = 100.0;
const MIN_CLEARANCE: f32 = 0.05;
const FALLBACK_CLEARANCE: f32 = 0.1;

/// Converts a clearance fraction into the center bounce distance.
///
/// Clearance is capped at `1.0`; anything below `0.05` (including NaN) falls back to `0.1`.
pub fn bounce_distance(clearance: f32) -> f32 {
    let c = if clearance >= 1.0 { 1.0 } else { clearance };
    let c = if c >= MIN_CLEARANCE {
        c
    } else {
        FALLBACK_CLEARANCE
    };
    c * BOUNCE_SCALE
}

/// A damped spring response from `0.0` to `1.0` over normalized time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringCurve {
    damping_ratio: f32,
    /// Initial velocity in normalized units (distances per duration).
    velocity: f32,
}

impl SpringCurve {
    /// `initial_velocity` is in total distances per second, as most platform spring APIs
    /// take it; it is rescaled to the animation duration here.
    pub fn new(damping_ratio: f32, initial_velocity: f32, duration_ms: u64) -> Self {
        let damping_ratio = if damping_ratio > 0.0 {
            damping_ratio.min(1.0)
        } else {
            1.0
        };
        let velocity = if initial_velocity.is_finite() {
            initial_velocity * duration_ms as f32 / 1000.0
        } else {
            0.0
        };
        Self {
            damping_ratio,
            velocity,
        }
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    /// Samples the response at normalized time `t`.
    ///
    /// Exactly `0.0` at `t <= 0` and exactly `1.0` at `t >= 1`; in between the value may
    /// overshoot `1.0` when the initial velocity is high or the spring is underdamped.
    pub fn sample(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let w = NATURAL_FREQUENCY;
        let dt = 1.0 / STEPS as f32;
        let steps = (t * STEPS as f32) as u32;

        // Semi-implicit Euler; stable for w * dt well below 1.
        let mut x = 0.0f32;
        let mut v = self.velocity;
        for _ in 0..steps {
            let a = -w * w * (x - 1.0) - 2.0 * self.damping_ratio * w * v;
            v += a * dt;
            x += v * dt;
        }
        x
    }
}

/// A settle animation: the presented height springs from `from` to `to` while the panel
/// center is displaced by up to `bounce`, after an optional delay.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringTween {
    pub from: f32,
    pub to: f32,
    /// Signed center displacement at full progress (positive is down).
    pub bounce: f32,
    pub start_ms: u64,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub curve: SpringCurve,
}

impl SpringTween {
    pub fn new(
        from: f32,
        to: f32,
        bounce: f32,
        start_ms: u64,
        delay_ms: u64,
        duration_ms: u64,
        curve: SpringCurve,
    ) -> Self {
        Self {
            from,
            to,
            bounce,
            start_ms,
            delay_ms,
            duration_ms: duration_ms.max(1),
            curve,
        }
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms
            .saturating_add(self.delay_ms)
            .saturating_add(self.duration_ms)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    pub fn progress(&self, now_ms: u64) -> f32 {
        let begin = self.start_ms.saturating_add(self.delay_ms);
        let elapsed = now_ms.saturating_sub(begin);
        let t = elapsed as f32 / self.duration_ms as f32;
        self.curve.sample(t)
    }

    pub fn height(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let p = self.progress(now_ms);
        self.from + (self.to - self.from) * p
    }

    pub fn center_offset(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return 0.0;
        }
        self.bounce * self.progress(now_ms)
    }
}
