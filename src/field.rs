use crate::{config::Config, note::Note};

/// Pixel geometry derived from the surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub lane_count: usize,
    pub lane_width: f32,
    pub note_width: f32,
    pub note_height: f32,
    pub hit_line_y: f32,
    pub visible_height: f32,
}

impl Layout {
    /// `None` until both dimensions are usable; a zero lane width would make
    /// every lane collapse onto x = 0.
    pub fn new(config: &Config, (width, height): (f32, f32)) -> Option<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return None;
        }

        let lane_width = width / config.lane_count as f32;

        Some(Self {
            lane_count: config.lane_count,
            lane_width,
            note_width: lane_width * config.note_width_ratio,
            note_height: config.dp(config.note_height_dp),
            hit_line_y: height - config.dp(config.hit_line_offset_dp),
            visible_height: height,
        })
    }

    pub fn note_left(&self, lane: usize) -> f32 {
        self.centered_left(lane, self.note_width)
    }

    /// Left edge centring something `width` wide in `lane`. Notes spawned
    /// before a resize keep their old width, so the renderer passes it here.
    pub fn centered_left(&self, lane: usize, width: f32) -> f32 {
        lane as f32 * self.lane_width + (self.lane_width - width) / 2.0
    }

    /// Lane under `x`; anything left or right of the surface lands on the edge lanes.
    pub fn lane_at(&self, x: f32) -> usize {
        let lane = (x / self.lane_width).floor();
        if lane.is_nan() || lane < 0.0 {
            0
        } else {
            (lane as usize).min(self.lane_count - 1)
        }
    }

    pub const fn bottom(&self) -> f32 {
        self.visible_height + self.note_height
    }
}

/// The live notes. Order carries no meaning, which lets removal swap.
#[derive(Debug, Default)]
pub struct Field {
    notes: Vec<Note>,
}

impl Field {
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn remove(&mut self, index: usize) -> Note {
        self.notes.swap_remove(index)
    }

    /// Moves every note down by `step` ticks and drops the ones that fell past
    /// `bottom`. Returns how many were dropped.
    pub fn advance(&mut self, step: Option<f32>, bottom: f32) -> u32 {
        if let Some(step) = step {
            if !(step.is_finite() && step > 0.0) {
                return 0;
            }
        }

        let before = self.notes.len();

        self.notes.retain_mut(|note| {
            match step {
                Some(step) => note.update_by(step),
                None => note.update(),
            }
            note.y() <= bottom
        });

        (before - self.notes.len()) as u32
    }
}
