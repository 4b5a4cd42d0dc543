#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Normal,
    Critical,
    Flick,
}

impl NoteKind {
    /// Size of the roll space [`NoteKind::from_roll`] maps from.
    pub const ROLLS: u32 = 100;

    /// `[0, 10)` flick, `[10, 30)` critical, the rest normal.
    pub const fn from_roll(roll: u32) -> Self {
        match roll {
            0..10 => Self::Flick,
            10..30 => Self::Critical,
            _ => Self::Normal,
        }
    }

    pub const fn score_value(self) -> u32 {
        match self {
            Self::Critical => 2000,
            Self::Normal | Self::Flick => 1000,
        }
    }

    pub const fn needs_flick(self) -> bool {
        matches!(self, Self::Flick)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    lane: usize,
    y: f32,
    speed: f32,
    kind: NoteKind,
    width: f32,
    height: f32,
}

impl Note {
    pub const fn new(lane: usize, y: f32, speed: f32, kind: NoteKind, (width, height): (f32, f32)) -> Self {
        Self {
            lane,
            y,
            speed,
            kind,
            width,
            height,
        }
    }

    pub const fn lane(&self) -> usize {
        self.lane
    }

    pub const fn y(&self) -> f32 {
        self.y
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    pub const fn kind(&self) -> NoteKind {
        self.kind
    }

    pub const fn width(&self) -> f32 {
        self.width
    }

    pub const fn height(&self) -> f32 {
        self.height
    }

    pub const fn score_value(&self) -> u32 {
        self.kind.score_value()
    }

    pub const fn center(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn distance_to(&self, line_y: f32) -> f32 {
        (self.center() - line_y).abs()
    }

    pub fn is_hittable(&self, hit_line_y: f32, window: f32) -> bool {
        self.distance_to(hit_line_y) <= window
    }

    pub const fn update(&mut self) {
        self.y += self.speed;
    }

    /// Fractional tick; `step` is in ticks and assumed positive.
    pub const fn update_by(&mut self, step: f32) {
        self.y += self.speed * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(y: f32, kind: NoteKind) -> Note {
        Note::new(0, y, 4.0, kind, (60.0, 26.0))
    }

    #[test]
    fn critical_is_worth_double() {
        assert_eq!(NoteKind::Critical.score_value(), 2 * NoteKind::Normal.score_value());
        assert_eq!(NoteKind::Critical.score_value(), 2 * NoteKind::Flick.score_value());
        assert_eq!(NoteKind::Normal.score_value(), 1000);
    }

    #[test]
    fn roll_thresholds() {
        assert_eq!(NoteKind::from_roll(0), NoteKind::Flick);
        assert_eq!(NoteKind::from_roll(9), NoteKind::Flick);
        assert_eq!(NoteKind::from_roll(10), NoteKind::Critical);
        assert_eq!(NoteKind::from_roll(29), NoteKind::Critical);
        assert_eq!(NoteKind::from_roll(30), NoteKind::Normal);
        assert_eq!(NoteKind::from_roll(99), NoteKind::Normal);

        let flicks = (0..NoteKind::ROLLS)
            .filter(|&r| NoteKind::from_roll(r) == NoteKind::Flick)
            .count();
        let criticals = (0..NoteKind::ROLLS)
            .filter(|&r| NoteKind::from_roll(r) == NoteKind::Critical)
            .count();
        assert_eq!((flicks, criticals), (10, 20));
    }

    #[test]
    fn hittable_uses_center() {
        // center = 87 + 13 = 100
        let n = note(87.0, NoteKind::Normal);
        assert!(n.is_hittable(100.0, 0.0));
        assert!(n.is_hittable(142.0, 42.0));
        assert!(!n.is_hittable(142.5, 42.0));
        assert!(n.is_hittable(58.0, 42.0));
    }

    #[test]
    fn update_falls_by_speed() {
        let mut n = note(-10.0, NoteKind::Flick);
        n.update();
        assert_eq!(n.y(), -6.0);
        n.update_by(0.5);
        assert_eq!(n.y(), -4.0);
    }
}
