//! Estimated one-rep max from a submaximal set, and its inverse.
//!
//! Both directions read the same percentage-of-max curve: a set of `reps`
//! repetitions is taken to be `WATHAN_PERCENTAGES[reps - 1]` of the lifter's
//! true single.

/// Highest rep count the curve covers. Longer sets are treated as this many.
pub const MAX_MODELED_REPS: i32 = 50;

/// Fraction of one-rep max represented by a set of N reps (index N - 1).
/// Strictly decreasing.
pub const WATHAN_PERCENTAGES: [f64; MAX_MODELED_REPS as usize] = [
    1.000000, 0.952381, 0.912135, 0.876482, 0.850995,
    0.834235, 0.820551, 0.809199, 0.799436, 0.790516,
    0.781775, 0.773051, 0.764354, 0.755693, 0.747079,
    0.738521, 0.730030, 0.721616, 0.713289, 0.705058,
    0.696933, 0.688926, 0.681045, 0.673300, 0.665703,
    0.658262, 0.650987, 0.643889, 0.636978, 0.630264,
    0.623756, 0.617465, 0.611400, 0.605573, 0.599991,
    0.594667, 0.589609, 0.584828, 0.580333, 0.576135,
    0.572244, 0.568669, 0.565421, 0.562510, 0.559945,
    0.557737, 0.555896, 0.554431, 0.553353, 0.552672,
];

/// One performed set: a weight lifted for a number of reps.
///
/// Weight is in whatever unit the caller uses; estimates come back in the
/// same unit. Negative weight is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub weight: f64,
    pub reps: i32,
}

impl Set {
    pub fn new(weight: f64, reps: i32) -> Self {
        Self { weight, reps }
    }
}

/// Estimates the one-rep max a set demonstrates.
///
/// Returns 0 for `reps <= 0`. Reps above [`MAX_MODELED_REPS`] are clamped.
pub fn estimate_max(set: Set) -> f64 {
    if set.reps <= 0 {
        return 0.0;
    }

    let reps = set.reps.min(MAX_MODELED_REPS) as usize;
    set.weight / WATHAN_PERCENTAGES[reps - 1]
}

/// Minimum reps at `weight` whose estimate reaches `max`.
///
/// A tie with `max` counts as reaching it. `None` means no modeled rep count
/// gets there: either `weight` is already above `max`, or it is lighter than
/// the 50-rep intensity (`max * WATHAN_PERCENTAGES[49]`). That intensity itself
/// is inclusive and maps to 50 reps.
///
/// # Arguments
/// * `max` - A previously estimated one-rep max
/// * `weight` - The weight the lifter intends to use
pub fn reps_from_estimated_max(max: f64, weight: f64) -> Option<u32> {
    if weight > max {
        return None;
    }

    // Compare through estimate_max itself so the answer agrees with it
    // exactly, float rounding included.
    if let Some(reps) = (1..=MAX_MODELED_REPS)
        .find(|&reps| estimate_max(Set::new(weight, reps)) >= max)
    {
        return Some(reps as u32);
    }

    // weight / p can land one ulp below max when weight == max * p
    let lightest = WATHAN_PERCENTAGES[WATHAN_PERCENTAGES.len() - 1];
    if weight >= max * lightest {
        return Some(MAX_MODELED_REPS as u32);
    }

    None
}
