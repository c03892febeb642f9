use std::time::{Duration, Instant};

/// Smoothstep interpolation of the scroll offset between two points.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollTween {
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * smoothstep(t)
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
