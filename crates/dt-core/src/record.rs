//! Per-speaker turn accumulator.

use std::time::Duration;

/// Every closed turn for one speaker, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerRecord {
    times: Vec<Duration>,
    total: Duration,
}

impl SpeakerRecord {
    /// Creates a record holding a single turn.
    pub fn with_turn(turn: Duration) -> Self {
        let mut record = Self::default();
        record.append(turn);
        record
    }

    /// Records one more turn.
    pub fn append(&mut self, turn: Duration) {
        self.times.push(turn);
        self.total += turn;
    }

    /// Turn durations in recording order.
    pub fn times(&self) -> &[Duration] {
        &self.times
    }

    /// Sum of all turns.
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Number of turns.
    pub fn count(&self) -> usize {
        self.times.len()
    }

    /// Mean turn length, truncated to the nanosecond.
    ///
    /// Returns zero for a record with no turns.
    pub fn mean(&self) -> Duration {
        let Some(count) = u128::try_from(self.times.len()).ok().filter(|&n| n > 0) else {
            return Duration::ZERO;
        };
        let nanos = self.total.as_nanos() / count;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Median turn length.
    ///
    /// Even-length samples yield the upper of the two middle turns. Odd-length
    /// samples (above one) yield the mean of the middle turn and the one after
    /// it. Existing reports depend on both rules.
    pub fn median(&self) -> Duration {
        match self.times.len() {
            0 => Duration::ZERO,
            1 => self.times[0],
            len => {
                let mut sorted = self.times.clone();
                sorted.sort_unstable();
                let middle = len / 2;
                if len % 2 == 0 {
                    sorted[middle]
                } else {
                    (sorted[middle] + sorted[middle + 1]) / 2
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn record_of(turns: &[u64]) -> SpeakerRecord {
        let mut record = SpeakerRecord::default();
        for &turn in turns {
            record.append(secs(turn));
        }
        record
    }

    #[test]
    fn append_keeps_total_in_sync() {
        let record = record_of(&[4, 3, 9]);
        assert_eq!(record.total(), secs(16));
        assert_eq!(record.total(), record.times().iter().sum::<Duration>());
        assert_eq!(record.count(), 3);
        assert_eq!(record.times(), &[secs(4), secs(3), secs(9)]);
    }

    #[test]
    fn mean_truncates_to_nanoseconds() {
        let mut record = SpeakerRecord::default();
        record.append(Duration::from_nanos(1));
        record.append(Duration::from_nanos(2));
        assert_eq!(record.mean(), Duration::from_nanos(1));
    }

    #[test]
    fn mean_of_pause_resume_turns() {
        assert_eq!(record_of(&[4, 3]).mean(), Duration::from_millis(3500));
    }

    #[test]
    fn mean_of_empty_record_is_zero() {
        assert_eq!(SpeakerRecord::default().mean(), Duration::ZERO);
    }

    #[test]
    fn median_of_empty_record_is_zero() {
        assert_eq!(SpeakerRecord::default().median(), Duration::ZERO);
    }

    #[test]
    fn median_of_single_turn_is_that_turn() {
        assert_eq!(record_of(&[5]).median(), secs(5));
    }

    #[test]
    fn median_of_even_count_is_upper_middle() {
        assert_eq!(record_of(&[4, 3]).median(), secs(4));
        assert_eq!(record_of(&[10, 1, 7, 2]).median(), secs(7));
    }

    #[test]
    fn median_of_odd_count_averages_middle_and_next() {
        assert_eq!(record_of(&[11, 2, 5]).median(), secs(8));
        assert_eq!(record_of(&[1, 2, 3, 4, 100]).median(), Duration::from_millis(3500));
    }

    #[test]
    fn median_does_not_reorder_recorded_turns() {
        let record = record_of(&[9, 1, 5]);
        let _ = record.median();
        assert_eq!(record.times(), &[secs(9), secs(1), secs(5)]);
    }

    #[test]
    fn with_turn_starts_a_record() {
        let record = SpeakerRecord::with_turn(secs(2));
        assert_eq!(record.count(), 1);
        assert_eq!(record.total(), secs(2));
    }
}
