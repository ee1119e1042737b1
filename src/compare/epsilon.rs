use super::Equivalence;

/// Absolute tolerance for comparing floats.
///
/// Two floats `a` and `b` are equal when `|a - b| <= epsilon`. `Epsilon(0.0)`
/// compares by subtraction, so infinities and NaN never equal anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Epsilon(pub f64);

impl Epsilon {
    pub const fn new(epsilon: f64) -> Self {
        Self(epsilon)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Epsilon {
    fn from(epsilon: f64) -> Self {
        Self(epsilon)
    }
}

impl Equivalence<f64> for Epsilon {
    fn equivalent(&self, a: &f64, b: &f64) -> bool {
        (a - b).abs() <= self.0
    }
}

impl Equivalence<f32> for Epsilon {
    fn equivalent(&self, a: &f32, b: &f32) -> bool {
        (f64::from(*a) - f64::from(*b)).abs() <= self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_tolerance() {
        let eps = Epsilon(0.001);
        assert!(eps.equivalent(&0.5, &0.5005));
        assert!(eps.equivalent(&0.5005, &0.5));
        assert!(!eps.equivalent(&0.5, &0.502));
    }

    #[test]
    fn zero_is_exact() {
        let eps = Epsilon::new(0.0);
        assert!(eps.equivalent(&1.25, &1.25));
        assert!(!eps.equivalent(&1.25, &1.2500001));
        assert!(!eps.equivalent(&f64::INFINITY, &f64::INFINITY));
    }

    #[test]
    fn single_precision() {
        assert!(Epsilon(0.01).equivalent(&1.0f32, &1.005f32));
        assert!(!Epsilon(0.001).equivalent(&1.0f32, &1.005f32));
    }

    #[test]
    fn from_f64() {
        assert_eq!(Epsilon::from(0.25).value(), 0.25);
    }
}
