/// Rounds a raw step up to the nearest "nice" step: 1, 2, 5 or 10 times a
/// power of ten.
///
/// Returns 0.0 for non-finite or non-positive input.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 0.0;
    }

    let exponent = raw_step.log10().floor() as i32;
    let magnitude = 10_f64.powi(exponent);
    let fraction = raw_step / magnitude;

    let nice_fraction = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * magnitude
}

/// Builds human-friendly axis tick values covering `[min, max]`.
///
/// Ticks are aligned to multiples of the nice step chosen for roughly
/// `target_count` divisions, so labels read as round numbers regardless of
/// the underlying data extent.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    if target_count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if low == high || target_count == 1 {
        return vec![low];
    }

    let step = nice_step((high - low) / (target_count - 1) as f64);
    if step == 0.0 {
        return vec![low];
    }

    let first = (low / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut index = 0_usize;
    loop {
        let tick = first + step * index as f64;
        // Absorb accumulated rounding at the upper bound.
        if tick > high + step * 1e-9 {
            break;
        }
        ticks.push(tick);
        index += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::{nice_step, nice_ticks};

    #[test]
    fn nice_step_snaps_to_one_two_five_ladder() {
        assert_eq!(nice_step(0.013), 0.02);
        assert_eq!(nice_step(0.4), 0.5);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(10.0), 10.0);
        assert_eq!(nice_step(130.0), 200.0);
    }

    #[test]
    fn nice_step_rejects_non_positive_and_non_finite_input() {
        assert_eq!(nice_step(0.0), 0.0);
        assert_eq!(nice_step(-1.0), 0.0);
        assert_eq!(nice_step(f64::NAN), 0.0);
    }

    #[test]
    fn nice_ticks_are_step_aligned_and_inside_bounds() {
        let ticks = nice_ticks(3.0, 47.0, 6);
        assert_eq!(ticks, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn nice_ticks_handles_flat_domain() {
        assert_eq!(nice_ticks(42.0, 42.0, 5), vec![42.0]);
    }
}
