/// A closed range of real numbers.
///
/// Used as the acceptance window for hit distances and for clamping color
/// channels before quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds_excludes_endpoints() {
        let interval = Interval::new(0.001, f64::INFINITY);

        assert!(!interval.surrounds(0.001));
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(f64::INFINITY));
        assert!(interval.surrounds(0.0011));
        assert!(interval.surrounds(1e300));
    }

    #[test]
    fn test_interval_clamp() {
        let intensity = Interval::new(0.0, 0.999);

        assert_eq!(intensity.clamp(-5.0), 0.0);
        assert_eq!(intensity.clamp(0.5), 0.5);
        assert_eq!(intensity.clamp(1.0), 0.999);
        assert_eq!(intensity.clamp(42.0), 0.999);
    }
}
