/// Tunables of a session. Lengths ending in `_dp` are density-independent and
/// go through [`Config::dp`] before touching pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub lane_count: usize,
    pub density: f32,
    pub hit_window_dp: f32,
    pub flick_distance_dp: f32,
    pub flick_time_ms: u64,
    pub note_height_dp: f32,
    pub note_width_ratio: f32,
    pub hit_line_offset_dp: f32,
    pub floor_count: usize,
    pub seed_gap_dp: f32,
    pub speed_base_dp: f32,
    pub speed_spread_dp: f32,
    pub refill_top_dp: f32,
    pub refill_band_dp: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lane_count: 4,
            density: 1.0,
            hit_window_dp: 42.0,
            flick_distance_dp: 80.0,
            flick_time_ms: 220,
            note_height_dp: 26.0,
            note_width_ratio: 0.65,
            hit_line_offset_dp: 120.0,
            floor_count: 24,
            seed_gap_dp: 80.0,
            speed_base_dp: 3.5,
            speed_spread_dp: 1.5,
            refill_top_dp: 200.0,
            refill_band_dp: 500.0,
        }
    }
}

impl Config {
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    pub const fn dp(&self, value: f32) -> f32 {
        value * self.density
    }

    pub fn validate(self) -> Result<Self, String> {
        let non_negative = [
            ("hit window", self.hit_window_dp),
            ("flick distance", self.flick_distance_dp),
            ("seed gap", self.seed_gap_dp),
            ("speed spread", self.speed_spread_dp),
            ("refill top", self.refill_top_dp),
            ("refill band", self.refill_band_dp),
            ("hit line offset", self.hit_line_offset_dp),
        ];

        if self.lane_count == 0 {
            return Err("lane count must be at least 1".into());
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(format!("density must be positive, got {}", self.density));
        }
        if let Some((name, value)) = non_negative
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(format!("{name} must be non-negative, got {value}"));
        }
        if !(self.note_height_dp > 0.0) {
            return Err(format!("note height must be positive, got {}", self.note_height_dp));
        }
        if !(self.note_width_ratio > 0.0 && self.note_width_ratio <= 1.0) {
            return Err(format!(
                "note width ratio must be in (0, 1], got {}",
                self.note_width_ratio
            ));
        }
        if self.floor_count == 0 {
            return Err("floor count must be at least 1".into());
        }
        if !self.speed_base_dp.is_finite() || self.speed_base_dp <= 0.0 {
            return Err(format!("base speed must be positive, got {}", self.speed_base_dp));
        }

        let scaled = [
            ("hit window", self.hit_window_dp),
            ("flick distance", self.flick_distance_dp),
            ("note height", self.note_height_dp),
            ("hit line offset", self.hit_line_offset_dp),
            ("seed gap", self.seed_gap_dp * self.floor_count as f32),
            ("speed", self.speed_base_dp + self.speed_spread_dp),
            ("refill", self.refill_top_dp + self.refill_band_dp),
        ];
        if let Some((name, _)) = scaled
            .iter()
            .find(|(_, value)| !self.dp(*value).is_finite())
        {
            return Err(format!("{name} overflows at density {}", self.density));
        }

        Ok(self)
    }
}
