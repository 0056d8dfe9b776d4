use std::collections::BTreeMap;

/// Lanes claimed per day within one week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneOccupancy {
    days: BTreeMap<u32, Vec<bool>>,
}

impl LaneOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_free(&self, day: u32, lane: usize) -> bool {
        self.days
            .get(&day)
            .and_then(|lanes| lanes.get(lane))
            .map_or(true, |claimed| !claimed)
    }

    /// Lowest unclaimed lane on `day`, probing from lane 0.
    pub fn lowest_free(&self, day: u32) -> usize {
        match self.days.get(&day) {
            Some(lanes) => lanes.iter().position(|claimed| !claimed).unwrap_or(lanes.len()),
            None => 0,
        }
    }

    pub fn claim(&mut self, day: u32, lane: usize) {
        let lanes = self.days.entry(day).or_default();
        if lanes.len() <= lane {
            lanes.resize(lane + 1, false);
        }
        lanes[lane] = true;
    }

    pub fn claim_range(&mut self, days: std::ops::RangeInclusive<u32>, lane: usize) {
        for day in days {
            self.claim(day, lane);
        }
    }

    /// Claimed lanes on `day`, ascending.
    pub fn claimed(&self, day: u32) -> Vec<usize> {
        self.days
            .get(&day)
            .map(|lanes| {
                lanes
                    .iter()
                    .enumerate()
                    .filter_map(|(lane, claimed)| claimed.then_some(lane))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Per-day count of segment-days that could not be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowCounter {
    counts: BTreeMap<u32, usize>,
}

impl OverflowCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, day: u32) {
        *self.counts.entry(day).or_insert(0) += 1;
    }

    pub fn get(&self, day: u32) -> usize {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Days with a non-zero count, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&day, &count)| (day, count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
