use crate::{config::Config, field::Layout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub x: f32,
    pub y: f32,
    pub ms: u64,
}

impl Press {
    pub const fn new(x: f32, y: f32, ms: u64) -> Self {
        Self { x, y, ms }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub lane: usize,
    pub is_flick: bool,
}

/// Time and travel limits separating a flick from a tap, in pixels/ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlickRule {
    pub max_ms: u64,
    pub min_distance: f32,
}

impl FlickRule {
    pub fn new(config: &Config) -> Self {
        Self {
            max_ms: config.flick_time_ms,
            min_distance: config.dp(config.flick_distance_dp),
        }
    }

    /// Both limits must hold: a slow swipe and a quick short tap are taps.
    pub fn is_flick(&self, down: Press, up: Press) -> bool {
        let dt = up.ms.saturating_sub(down.ms);
        let dist = (up.x - down.x).hypot(up.y - down.y);

        dt <= self.max_ms && dist >= self.min_distance
    }

    pub fn classify(&self, layout: &Layout, down: Press, up: Press) -> Gesture {
        Gesture {
            lane: layout.lane_at(up.x),
            is_flick: self.is_flick(down, up),
        }
    }
}

/// Pairs press-down with its release. Only a completed pair yields a gesture.
#[derive(Debug, Default)]
pub struct PressTracker {
    pending: Option<Press>,
}

impl PressTracker {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub const fn is_down(&self) -> bool {
        self.pending.is_some()
    }

    pub fn press(&mut self, press: Press) {
        self.pending = Some(press);
    }

    /// Release or cancel. Returns the press it closes, if any.
    pub fn release(&mut self) -> Option<Press> {
        self.pending.take()
    }

    pub fn abandon(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> FlickRule {
        FlickRule::new(&Config::default())
    }

    fn swipe(dx: f32, dt: u64) -> (Press, Press) {
        (Press::new(100.0, 500.0, 1000), Press::new(100.0 + dx, 500.0, 1000 + dt))
    }

    #[test]
    fn flick_boundary() {
        let (down, up) = swipe(80.0, 220);
        assert!(rule().is_flick(down, up));

        let (down, up) = swipe(80.0, 221);
        assert!(!rule().is_flick(down, up));

        let (down, up) = swipe(79.9, 220);
        assert!(!rule().is_flick(down, up));
    }

    #[test]
    fn distance_is_euclidean() {
        let down = Press::new(0.0, 0.0, 0);
        let up = Press::new(60.0, 80.0, 100);
        assert!(rule().is_flick(down, up));
    }

    #[test]
    fn slow_swipe_and_quick_tap_are_taps() {
        let (down, up) = swipe(300.0, 800);
        assert!(!rule().is_flick(down, up));

        let (down, up) = swipe(3.0, 40);
        assert!(!rule().is_flick(down, up));
    }

    #[test]
    fn release_before_press_counts_as_instant() {
        let down = Press::new(0.0, 0.0, 500);
        let up = Press::new(0.0, 90.0, 400);
        assert!(rule().is_flick(down, up));
    }

    #[test]
    fn lane_follows_release_point() {
        let layout = Layout::new(&Config::default(), (400.0, 800.0)).unwrap();
        let down = Press::new(50.0, 600.0, 0);
        let up = Press::new(250.0, 600.0, 100);

        let gesture = rule().classify(&layout, down, up);
        assert_eq!(gesture, Gesture { lane: 2, is_flick: true });

        let up = Press::new(-20.0, 600.0, 500);
        assert_eq!(rule().classify(&layout, down, up).lane, 0);
    }

    #[test]
    fn tracker_pairs_presses() {
        let mut tracker = PressTracker::new();
        assert_eq!(tracker.release(), None);

        tracker.press(Press::new(1.0, 2.0, 3));
        assert!(tracker.is_down());
        assert_eq!(tracker.release(), Some(Press::new(1.0, 2.0, 3)));
        assert_eq!(tracker.release(), None);

        tracker.press(Press::new(1.0, 2.0, 3));
        tracker.abandon();
        assert_eq!(tracker.release(), None);
    }
}
