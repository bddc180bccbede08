use std::f64::consts::PI;

use serde::Deserialize;

use crate::error::Error;

/// Admissible range for interval borders. Defaults to one half-period of sine.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Domain {
    pub lower: f64,
    pub upper: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            lower: 0.,
            upper: PI,
        }
    }
}

impl Domain {
    pub fn new(lower: f64, upper: f64) -> Result<Self, Error> {
        let domain = Self { lower, upper };
        domain.validate()?;
        Ok(domain)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(Error::NonFiniteDomain {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.lower > self.upper {
            return Err(Error::InvertedDomain {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    pub fn check_left(&self, left: f64) -> Result<f64, Error> {
        if !(left >= self.lower) {
            return Err(Error::LeftBelowDomain {
                left,
                lower: self.lower,
            });
        }
        Ok(left)
    }

    pub fn check_right(&self, right: f64) -> Result<f64, Error> {
        if !(right <= self.upper) {
            return Err(Error::RightAboveDomain {
                right,
                upper: self.upper,
            });
        }
        Ok(right)
    }

    /// Checks the domain itself, then the left border, then the right one, then
    /// their order.
    pub fn interval(&self, left: f64, right: f64) -> Result<Interval, Error> {
        self.validate()?;
        let left = self.check_left(left)?;
        let right = self.check_right(right)?;
        if left > right {
            return Err(Error::InvertedInterval { left, right });
        }
        Ok(Interval { left, right })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left: f64,
    right: f64,
}

impl Interval {
    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn support(&self) -> (f64, f64) {
        (self.left, self.right)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn exact_sine_integral(&self) -> f64 {
        self.left.cos() - self.right.cos()
    }
}
