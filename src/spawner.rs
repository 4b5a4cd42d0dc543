use crate::{
    config::Config,
    field::{Field, Layout},
    note::{Note, NoteKind},
};
use rand::Rng;

/// Decides lane, kind, speed and start height of new notes. Holds only
/// pixel-space values, so it is rebuilt whenever the config changes.
#[derive(Debug, Clone)]
pub struct Spawner {
    floor: usize,
    seed_gap: f32,
    speed_base: f32,
    speed_spread: f32,
    refill_top: f32,
    refill_band: f32,
}

impl Spawner {
    pub fn new(config: &Config) -> Self {
        Self {
            floor: config.floor_count,
            seed_gap: config.dp(config.seed_gap_dp),
            speed_base: config.dp(config.speed_base_dp),
            speed_spread: config.dp(config.speed_spread_dp),
            refill_top: config.dp(config.refill_top_dp),
            refill_band: config.dp(config.refill_band_dp),
        }
    }

    pub const fn floor(&self) -> usize {
        self.floor
    }

    pub fn roll_kind(rng: &mut impl Rng) -> NoteKind {
        NoteKind::from_roll(rng.random_range(0..NoteKind::ROLLS))
    }

    /// Falls back to the base speed when the spread vanishes next to it.
    pub fn roll_speed(&self, rng: &mut impl Rng) -> f32 {
        let top = self.speed_base + self.speed_spread;
        if top > self.speed_base {
            rng.random_range(self.speed_base..top)
        } else {
            self.speed_base
        }
    }

    pub fn spawn(&self, layout: &Layout, y: f32, rng: &mut impl Rng) -> Note {
        let lane = rng.random_range(0..layout.lane_count);
        let kind = Self::roll_kind(rng);
        let speed = self.roll_speed(rng);

        Note::new(lane, y, speed, kind, (layout.note_width, layout.note_height))
    }

    /// Initial batch, stacked one gap apart above the top edge.
    pub fn seed(&self, field: &mut Field, layout: &Layout, rng: &mut impl Rng) {
        for i in 0..self.floor {
            let y = -self.seed_gap * (i + 1) as f32;
            field.push(self.spawn(layout, y, rng));
        }
    }

    /// Tops the field back up to the floor. Start heights are spread over a
    /// band so refills don't line up into a visible row.
    pub fn replenish(&self, field: &mut Field, layout: &Layout, rng: &mut impl Rng) -> usize {
        let missing = self.floor.saturating_sub(field.len());

        for _ in 0..missing {
            let y = -self.refill_top - rng.random::<f32>() * self.refill_band;
            field.push(self.spawn(layout, y, rng));
        }

        missing
    }
}
