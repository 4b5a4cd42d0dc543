/// Running totals. Both only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ledger {
    score: u64,
    miss: u64,
}

impl Ledger {
    pub const fn new() -> Self {
        Self { score: 0, miss: 0 }
    }

    pub const fn score(&self) -> u64 {
        self.score
    }

    pub const fn miss(&self) -> u64 {
        self.miss
    }

    pub const fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points as u64);
    }

    pub const fn add_miss(&mut self, count: u32) {
        self.miss = self.miss.saturating_add(count as u64);
    }
}
