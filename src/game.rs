use crate::{
    config::Config,
    field::{Field, Layout},
    gesture::{FlickRule, Gesture, Press, PressTracker},
    judge::{Judge, Judgment},
    ledger::Ledger,
    log::{Log, log},
    note::Note,
    spawner::Spawner,
};
use rand::{SeedableRng, rngs::StdRng};

/// One play session: the host calls `advance` every frame and feeds presses
/// and releases in between. Everything happens on the caller's thread.
pub struct Game {
    config: Config,
    layout: Option<Layout>,
    field: Field,
    ledger: Ledger,
    spawner: Spawner,
    flick: FlickRule,
    tracker: PressTracker,
    rng: StdRng,
    seeded: bool,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, String> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self, String> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Result<Self, String> {
        let config = config.validate()?;

        Ok(Self {
            spawner: Spawner::new(&config),
            flick: FlickRule::new(&config),
            config,
            layout: None,
            field: Field::new(),
            ledger: Ledger::new(),
            tracker: PressTracker::new(),
            rng,
            seeded: false,
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn notes(&self) -> &[Note] {
        self.field.notes()
    }

    pub const fn score(&self) -> u64 {
        self.ledger.score()
    }

    pub const fn miss_count(&self) -> u64 {
        self.ledger.miss()
    }

    /// Derives geometry from the surface size. The first usable size also
    /// fills the field; later ones only resize.
    pub fn on_dimensions_known(&mut self, width: f32, height: f32) {
        let Some(layout) = Layout::new(&self.config, (width, height)) else {
            log(Log::Warning, format!("ignoring unusable surface size {width}x{height}"));
            return;
        };

        if self.layout == Some(layout) {
            return;
        }

        self.layout = Some(layout);

        if self.seeded {
            log(Log::Debug, format!("resized to {width}x{height}"));
            return;
        }

        self.spawner.seed(&mut self.field, &layout, &mut self.rng);
        self.seeded = true;

        log(
            Log::Info,
            format!(
                "{}x{height}: {} lanes, hit line at {}, {} notes seeded",
                width,
                layout.lane_count,
                layout.hit_line_y,
                self.field.len()
            ),
        );
    }

    /// One tick, or `step` ticks' worth of fall when the host measures its
    /// own frame time. Retired notes count as misses before the refill.
    pub fn advance(&mut self, step: Option<f32>) {
        let Some(layout) = self.layout else {
            return;
        };

        let fallen = self.field.advance(step, layout.bottom());
        if fallen > 0 {
            self.ledger.add_miss(fallen);
        }

        self.spawner.replenish(&mut self.field, &layout, &mut self.rng);
    }

    pub fn press(&mut self, x: f32, y: f32, ms: u64) {
        self.tracker.press(Press::new(x, y, ms));
    }

    /// Release or cancel. Judges only if a press is pending.
    pub fn release(&mut self, x: f32, y: f32, ms: u64) -> Option<Judgment> {
        let down = self.tracker.release()?;
        let layout = self.layout?;
        let gesture = self.flick.classify(&layout, down, Press::new(x, y, ms));

        Some(self.resolve(gesture))
    }

    /// Pointer left the surface; the pending press is dropped unjudged.
    pub fn abandon(&mut self) {
        self.tracker.abandon();
    }

    pub fn on_gesture(&mut self, down: (f32, f32, u64), up: (f32, f32, u64)) -> Option<Judgment> {
        self.press(down.0, down.1, down.2);
        self.release(up.0, up.1, up.2)
    }

    pub fn resolve(&mut self, gesture: Gesture) -> Judgment {
        let judge = match self.layout {
            Some(layout) => Judge {
                hit_line_y: layout.hit_line_y,
                window: self.config.dp(self.config.hit_window_dp),
            },
            None => {
                self.ledger.add_miss(1);
                return Judgment::Empty;
            }
        };

        let judgment = judge.resolve(&mut self.field, &mut self.ledger, gesture);
        log(Log::Debug, format!("lane {} -> {judgment:?}", gesture.lane));
        judgment
    }

    /// Puts a note straight into the field, bypassing the spawner. Meant for
    /// building exact scenarios in tests and demos, not for normal play.
    #[doc(hidden)]
    pub fn insert(&mut self, note: Note) {
        self.field.push(note);
    }

    /// Empties the field; the next `advance` refills it. Scenario setup only.
    #[doc(hidden)]
    pub fn clear_notes(&mut self) {
        self.field = Field::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteKind;

    fn game() -> Game {
        let mut game = Game::with_seed(Config::default(), 5).unwrap();
        game.on_dimensions_known(400.0, 800.0);
        game
    }

    #[test]
    fn nothing_before_layout() {
        let mut game = Game::with_seed(Config::default(), 5).unwrap();
        game.advance(None);
        assert!(game.notes().is_empty());
        assert_eq!(game.miss_count(), 0);

        game.on_dimensions_known(0.0, 800.0);
        game.advance(None);
        assert!(game.notes().is_empty());
    }

    #[test]
    fn seeds_once() {
        let mut game = game();
        assert_eq!(game.notes().len(), 24);

        game.on_dimensions_known(400.0, 800.0);
        game.on_dimensions_known(600.0, 1000.0);
        assert_eq!(game.notes().len(), 24);
        assert_eq!(game.layout().unwrap().lane_width, 150.0);
    }

    #[test]
    fn floor_holds_after_ticks() {
        let mut game = game();
        for _ in 0..2000 {
            game.advance(None);
            assert!(game.notes().len() >= 24);
        }
        assert!(game.miss_count() > 0);
    }

    #[test]
    fn retired_note_is_one_miss() {
        let mut game = game();
        game.clear_notes();
        let layout = *game.layout().unwrap();
        game.insert(Note::new(
            0,
            layout.visible_height + layout.note_height + 1.0,
            4.0,
            NoteKind::Normal,
            (layout.note_width, layout.note_height),
        ));

        game.advance(None);

        assert_eq!((game.score(), game.miss_count()), (0, 1));
        assert_eq!(game.notes().len(), 24);
        assert!(game.notes().iter().all(|n| n.y() < 0.0));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut game = game();
        assert_eq!(game.release(100.0, 600.0, 10), None);
        assert_eq!(game.miss_count(), 0);
    }

    #[test]
    fn abandoned_press_is_not_judged() {
        let mut game = game();
        game.press(100.0, 600.0, 0);
        game.abandon();
        assert_eq!(game.release(100.0, 600.0, 50), None);
        assert_eq!(game.miss_count(), 0);
    }

    #[test]
    fn empty_lane_tap_is_miss() {
        let mut game = game();
        game.clear_notes();
        let judgment = game.on_gesture((150.0, 600.0, 0), (150.0, 600.0, 30));
        assert_eq!(judgment, Some(Judgment::Empty));
        assert_eq!(game.miss_count(), 1);
    }

    #[test]
    fn window_scales_with_density() {
        let mut game = Game::with_seed(Config::with_density(2.0), 1).unwrap();
        game.on_dimensions_known(800.0, 1600.0);
        game.clear_notes();
        let layout = *game.layout().unwrap();
        // 80px below the line: outside 42, inside 84
        game.insert(Note::new(
            1,
            layout.hit_line_y - layout.note_height / 2.0 + 80.0,
            4.0,
            NoteKind::Normal,
            (layout.note_width, layout.note_height),
        ));

        let judgment = game.on_gesture((250.0, 0.0, 0), (250.0, 0.0, 10));
        assert!(judgment.is_some_and(|j| j.is_hit()));
    }

    #[test]
    fn bad_config_is_rejected() {
        let config = Config {
            floor_count: 0,
            ..Config::default()
        };
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn overflowing_density_is_rejected() {
        assert!(Game::with_seed(Config::with_density(1e38), 1).is_err());
    }

    #[test]
    fn negligible_speed_spread_still_seeds() {
        let config = Config {
            speed_spread_dp: 1e-9,
            ..Config::default()
        };
        let mut game = Game::with_seed(config, 1).unwrap();
        game.on_dimensions_known(400.0, 800.0);
        game.advance(None);
        assert_eq!(game.notes().len(), 24);
    }
}
