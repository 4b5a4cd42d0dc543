use crate::{
    field::Field,
    gesture::Gesture,
    ledger::Ledger,
    note::{Note, NoteKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Hit { kind: NoteKind, points: u32 },
    /// Nothing in the lane was inside the window.
    Empty,
    /// A flick note met a tap. The note stays live.
    WrongGesture,
}

impl Judgment {
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Judge {
    pub hit_line_y: f32,
    pub window: f32,
}

impl Judge {
    /// Index of the hittable note in `lane` closest to the hit line.
    pub fn target(&self, notes: &[Note], lane: usize) -> Option<usize> {
        notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.lane() == lane && note.is_hittable(self.hit_line_y, self.window))
            .min_by(|(_, a), (_, b)| {
                a.distance_to(self.hit_line_y)
                    .total_cmp(&b.distance_to(self.hit_line_y))
            })
            .map(|(index, _)| index)
    }

    pub fn resolve(&self, field: &mut Field, ledger: &mut Ledger, gesture: Gesture) -> Judgment {
        let Some(index) = self.target(field.notes(), gesture.lane) else {
            ledger.add_miss(1);
            return Judgment::Empty;
        };

        let kind = field.notes()[index].kind();

        if kind.needs_flick() && !gesture.is_flick {
            ledger.add_miss(1);
            return Judgment::WrongGesture;
        }

        let points = field.remove(index).score_value();
        ledger.add_score(points);

        Judgment::Hit { kind, points }
    }
}
