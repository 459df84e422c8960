use std::fmt;

use super::tier::{Rating, Tier};

/// Left edge of the progress bar, in SVG user units.
const BAR_OFFSET_HUNDREDTHS: u32 = 3500;
/// Bar growth per percentage point (2.55 units).
const BAR_SCALE_HUNDREDTHS: u32 = 255;

/// Width of the filled progress bar, stored exactly in hundredths of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarWidth(u32);

impl BarWidth {
    pub const EMPTY: BarWidth = BarWidth(BAR_OFFSET_HUNDREDTHS);

    pub const fn for_percentage(percentage: u8) -> Self {
        Self(BAR_OFFSET_HUNDREDTHS + BAR_SCALE_HUNDREDTHS * percentage as u32)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        match self.0 % 100 {
            0 => write!(f, "{whole}"),
            frac if frac % 10 == 0 => write!(f, "{whole}.{}", frac / 10),
            frac => write!(f, "{whole}.{frac:02}"),
        }
    }
}

/// Progress from the current tier's threshold toward the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percentage: u8,
    pub bar_width: BarWidth,
    /// Rating that must be reached to leave the current tier.
    /// For Master this is Master's own threshold.
    pub next_threshold: u32,
}

impl Progress {
    /// Computes progress for a rating already classified into `tier`.
    ///
    /// Percentages are rounded half to even.
    pub fn compute(rating: Rating, tier: Tier) -> Self {
        let (percentage, next_threshold) = match tier.next() {
            None => (100, tier.threshold()),
            Some(next) => {
                let prev = tier.threshold();
                let next = next.threshold();
                let gained = u64::from(rating.value().saturating_sub(prev)) * 100;
                let span = u64::from(next - prev);
                let percentage = round_half_even(gained, span).min(100);
                (percentage as u8, next)
            }
        };

        Self {
            percentage,
            bar_width: BarWidth::for_percentage(percentage),
            next_threshold,
        }
    }
}

/// `num / den` rounded to the nearest integer, ties to even.
fn round_half_even(num: u64, den: u64) -> u64 {
    let quotient = num / den;
    let twice_rem = (num % den) * 2;
    if twice_rem > den || (twice_rem == den && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(r: u32) -> Progress {
        let rating = Rating::new(r);
        Progress::compute(rating, Tier::from_rating(rating))
    }

    #[test]
    fn test_master_is_always_full() {
        for r in [3000, 3001, 3500, 10_000] {
            let p = progress(r);
            assert_eq!(p.percentage, 100);
            assert_eq!(p.bar_width, BarWidth::for_percentage(100));
            assert_eq!(p.next_threshold, 3000);
        }
    }

    #[test]
    fn test_unrated_midpoint() {
        assert_eq!(progress(15).percentage, 50);
        assert_eq!(progress(0).percentage, 0);
        assert_eq!(progress(15).next_threshold, 30);
    }

    #[test]
    fn test_tier_start_is_zero_percent() {
        assert_eq!(progress(1400).percentage, 0);
        assert_eq!(progress(2800).percentage, 0);
    }

    #[test]
    fn test_rounds_half_to_even() {
        // Gold 1 spans 1400..1600, so every odd step lands on a .5
        assert_eq!(progress(1401).percentage, 0); // 0.5
        assert_eq!(progress(1403).percentage, 2); // 1.5
        assert_eq!(progress(1405).percentage, 2); // 2.5
        assert_eq!(progress(1407).percentage, 4); // 3.5
        assert_eq!(progress(1599).percentage, 100); // 99.5
    }

    #[test]
    fn test_rounds_to_nearest_off_ties() {
        // Silver 2 spans 500..650
        assert_eq!(progress(501).percentage, 1); // 0.67
        assert_eq!(progress(649).percentage, 99); // 99.33
    }

    #[test]
    fn test_round_half_even_helper() {
        assert_eq!(round_half_even(1, 2), 0);
        assert_eq!(round_half_even(3, 2), 2);
        assert_eq!(round_half_even(5, 2), 2);
        assert_eq!(round_half_even(7, 3), 2);
        assert_eq!(round_half_even(8, 3), 3);
    }

    #[test]
    fn test_bar_width_display() {
        assert_eq!(BarWidth::EMPTY.to_string(), "35");
        assert_eq!(BarWidth::for_percentage(0).to_string(), "35");
        assert_eq!(BarWidth::for_percentage(3).to_string(), "42.65");
        assert_eq!(BarWidth::for_percentage(50).to_string(), "162.5");
        assert_eq!(BarWidth::for_percentage(100).to_string(), "290");
    }

    #[test]
    fn test_percentage_stays_in_range() {
        for r in 0..3100 {
            assert!(progress(r).percentage <= 100, "rating {r}");
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        assert_eq!(progress(1234), progress(1234));
    }
}
