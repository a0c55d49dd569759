use failure::{bail, Error};
use std::time::Duration;

const MAX_SECS: f64 = std::u64::MAX as f64;

/// Converts whole or fractional seconds, as given on the
/// command line, into a duration.
///
/// Negative, `NaN` and infinite inputs return an error, as
/// do values too large to fit a `Duration`.
pub fn to_duration(secs: f64) -> Result<Duration, Error> {
    if !secs.is_finite() {
        bail!("Seconds must be a finite number, instead got: {}", secs)
    } else if secs < 0.0 {
        bail!("Seconds may not be negative: {}", secs)
    } else if secs >= MAX_SECS {
        bail!("Seconds value is too high, numeric overflow: {}", secs)
    } else {
        Ok(Duration::from_secs_f64(secs))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fraction_of_a_second() {
        assert_eq!(Duration::from_millis(750), to_duration(0.75).unwrap())
    }

    #[test]
    fn nan_errs() {
        assert!(to_duration(std::f64::NAN).is_err())
    }

    #[test]
    fn negative_errs() {
        assert!(to_duration(-0.1).is_err())
    }

    #[test]
    fn overflowing_whole_seconds_err() {
        assert!(to_duration(MAX_SECS * 2.0).is_err())
    }
}
