//! Progress arc easing.

use std::time::{Duration, Instant};

/// Time the arc takes to settle on a new sweep.
///
pub const ARC_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Quadratic ease-in-out over `t` in `[0, 1]`.
///
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Eases the drawn sweep from its previous value toward the latest target.
///
#[derive(Debug, Clone)]
pub struct ArcAnimation {
    from: f64,
    to: f64,
    started: Option<Instant>,
    duration: Duration,
}

impl Default for ArcAnimation {
    fn default() -> Self {
        ArcAnimation::new(ARC_ANIMATION_DURATION)
    }
}

impl ArcAnimation {
    pub fn new(duration: Duration) -> Self {
        ArcAnimation {
            from: 0.0,
            to: 0.0,
            started: None,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Sweep to draw at `now`.
    ///
    pub fn value_at(&self, now: Instant) -> f64 {
        match self.started {
            Some(started) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(started);
                let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                if t >= 1.0 {
                    self.to
                } else {
                    self.from + (self.to - self.from) * ease_in_out_quad(t)
                }
            }
            _ => self.to,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .map_or(false, |started| now.saturating_duration_since(started) < self.duration)
    }

    /// Start easing toward `target` from wherever the arc is at `now`.
    ///
    pub fn retarget(&mut self, target: f64, now: Instant) {
        if (target - self.to).abs() < f64::EPSILON {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started = Some(now);
    }
}
