use std::fmt;

use peroxide::numerical::integral::newton_cotes_quadrature;

use crate::error::Error;

pub trait Integral {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> f64
    where
        F: Fn(f64) -> f64;
}

/// Area estimate over a single panel `[a, b]`.
pub trait PanelRule {
    fn panel_area<F>(&self, f: &F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64;
}

fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.
}

/// Height of the rectangle is taken at the panel midpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleRule;

impl PanelRule for RectangleRule {
    fn panel_area<F>(&self, f: &F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        f(midpoint(a, b)) * (b - a)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpsonsRule;

impl PanelRule for SimpsonsRule {
    fn panel_area<F>(&self, f: &F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        (b - a) / 6. * (f(a) + 4. * f(midpoint(a, b)) + f(b))
    }
}

impl Integral for RectangleRule {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let (a, b) = support;
        self.panel_area(&f, a, b)
    }
}

impl Integral for SimpsonsRule {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let (a, b) = support;
        self.panel_area(&f, a, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Rectangle,
    Simpson,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::Rectangle, Rule::Simpson];

    /// Composite application of this rule with `n` partitions.
    pub fn composite<F>(self, f: F, support: (f64, f64), n: usize) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        Ok(match self {
            Rule::Rectangle => Composite::new(RectangleRule, n)?.integrate(f, support),
            Rule::Simpson => Composite::new(SimpsonsRule, n)?.integrate(f, support),
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Rectangle => write!(f, "rectangle"),
            Rule::Simpson => write!(f, "simpson"),
        }
    }
}

/// A panel rule applied to `n` equal-width partitions of the support and summed
/// left to right.
#[derive(Debug, Clone, Copy)]
pub struct Composite<R> {
    rule: R,
    n: usize,
}

impl<R> Composite<R>
where
    R: PanelRule,
{
    pub fn new(rule: R, n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::ZeroPartitions);
        }
        Ok(Self { rule, n })
    }
}

impl<R> Integral for Composite<R>
where
    R: PanelRule,
{
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let (a, b) = support;
        let h = (b - a) / self.n as f64;
        let mut sum = 0f64;
        for i in 0..self.n {
            let left = a + h * (i as f64);
            let right = a + h * ((i + 1) as f64);
            sum += self.rule.panel_area(&f, left, right);
        }
        sum
    }
}

pub struct NewtonCotesQuadrature {
    pub n: usize,
}

impl Integral for NewtonCotesQuadrature {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> f64
    where
        F: Fn(f64) -> f64,
    {
        newton_cotes_quadrature(f, self.n, support)
    }
}
