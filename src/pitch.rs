//! Pitch adjustment calculation.
//!
//! Converts the tempo difference between a track and the set's base BPM into
//! the signed percentage a DJ dials into the pitch fader.

/// Adjustment returned when the track already plays at the base tempo.
pub const NO_ADJUSTMENT: &str = "0";

/// Computes the pitch adjustment needed to play `track_bpm` at `base_bpm`.
///
/// The result is `"0"` when both tempos are equal. Otherwise it is the
/// percentage `(base - track) / track * 100`, rounded to two decimal places
/// and written with the shortest fraction that still carries at least one
/// digit (`"+4.0"`, `"-7.14"`, `"+1.56"`). Positive values get a leading `+`.
///
/// Both inputs must be positive and finite; validating that is the caller's
/// job.
///
/// # Examples
///
/// ```
/// use beatmatch_encoder::pitch_adjustment;
///
/// assert_eq!(pitch_adjustment(128.0, 128.0), "0");
/// assert_eq!(pitch_adjustment(125.0, 130.0), "+4.0");
/// assert_eq!(pitch_adjustment(140.0, 130.0), "-7.14");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn pitch_adjustment(track_bpm: f64, base_bpm: f64) -> String {
    if track_bpm == base_bpm {
        return NO_ADJUSTMENT.to_string();
    }

    let percentage = ((base_bpm - track_bpm) / track_bpm) * 100.0;
    let rounded = round_to_hundredths(percentage);

    if percentage > 0.0 {
        format!("+{rounded}")
    } else {
        rounded
    }
}

/// Rounds to two decimals (ties to even) and trims redundant trailing zeros.
fn round_to_hundredths(value: f64) -> String {
    // Only multiples of 1/8 can land exactly on a hundredths tie, and for
    // those the scaled product is exact.
    let fixed = if (value * 8.0).fract() == 0.0 {
        format!("{:.2}", (value * 100.0).round_ties_even() / 100.0)
    } else {
        format!("{value:.2}")
    };

    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_bpm_returns_zero() {
        assert_eq!(pitch_adjustment(128.0, 128.0), "0");
        assert_eq!(pitch_adjustment(99.5, 99.5), "0");
    }

    #[test]
    fn test_track_slower_than_base_is_positive() {
        assert_eq!(pitch_adjustment(125.0, 130.0), "+4.0");
    }

    #[test]
    fn test_track_faster_than_base_is_negative() {
        assert_eq!(pitch_adjustment(140.0, 130.0), "-7.14");
    }

    #[test]
    fn test_small_adjustment() {
        // 2 / 128 * 100 == 1.5625 exactly
        assert_eq!(pitch_adjustment(128.0, 130.0), "+1.56");
        assert_eq!(pitch_adjustment(128.0, 126.0), "-1.56");
    }

    #[test]
    fn test_large_adjustment() {
        assert_eq!(pitch_adjustment(100.0, 130.0), "+30.0");
    }

    #[test]
    fn test_single_trailing_zero_is_trimmed() {
        // 5 / 200 * 100 == 2.5
        assert_eq!(pitch_adjustment(200.0, 205.0), "+2.5");
        assert_eq!(pitch_adjustment(200.0, 195.0), "-2.5");
    }

    #[test]
    fn test_rounds_up_above_half() {
        // 2 / 120 * 100 == 1.6666...
        assert_eq!(pitch_adjustment(120.0, 122.0), "+1.67");
    }

    #[test]
    fn test_tiny_difference_keeps_sign() {
        assert_eq!(pitch_adjustment(128.0, 128.001), "+0.0");
        assert_eq!(pitch_adjustment(128.0, 127.999), "-0.0");
    }

    #[test]
    fn test_round_to_hundredths() {
        // exact ties go to the even neighbour
        assert_eq!(round_to_hundredths(4.000_000_000_000_001), "4.0");
        assert_eq!(round_to_hundredths(0.125), "0.12");
        assert_eq!(round_to_hundredths(0.375), "0.38");
        assert_eq!(round_to_hundredths(-7.142_857), "-7.14");
        assert_eq!(round_to_hundredths(12.3), "12.3");
    }
}
