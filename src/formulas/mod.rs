// src/formulas/mod.rs

//! Defines the closed-form expressions evaluated against the two angle inputs.
//!
//! Every prediction is a small expression tree whose leaves are literals,
//! trigonometric functions of one of the angles, or one of the derived
//! sine ratios. Trees are immutable once built and are evaluated by
//! `evaluation::EvaluationEngine`.

use crate::core::{AngleRef, RatioKind};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A closed-form expression of the deficit and torsion angles.
///
/// Build trees with the constructor helpers and the arithmetic operators:
///
/// ```
/// use anglefit::{AngleRef, RatioKind, Term};
///
/// // 100 · cos(δ) · cos(τ)
/// let w_mass = Term::constant(100.0) * Term::cos(AngleRef::Deficit) * Term::cos(AngleRef::Torsion);
/// assert_eq!(w_mass.to_string(), "100 · cos(δ) · cos(τ)");
///
/// // exp(ρ)
/// let e_rho = Term::ratio(RatioKind::Sine).exp();
/// assert_eq!(e_rho.to_string(), "exp(ρ)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A literal scalar.
    Constant(f64),
    /// π
    Pi,
    /// Euler's number e.
    Euler,
    /// The golden ratio φ.
    Phi,
    /// One of the ratios derived from the two sines.
    Ratio(RatioKind),
    /// Sine of an input angle.
    Sin(AngleRef),
    /// Cosine of an input angle.
    Cos(AngleRef),
    /// Tangent of an input angle. Singular at odd multiples of 90°.
    Tan(AngleRef),
    Add(Box<Term>, Box<Term>),
    Sub(Box<Term>, Box<Term>),
    Mul(Box<Term>, Box<Term>),
    /// Division. Singular when the denominator evaluates to zero.
    Div(Box<Term>, Box<Term>),
    /// Real power `base^exponent`.
    Pow(Box<Term>, Box<Term>),
    Neg(Box<Term>),
    /// Natural exponential.
    Exp(Box<Term>),
    /// Natural logarithm. Only defined for positive arguments.
    Ln(Box<Term>),
}

impl Term {
    pub fn constant(value: f64) -> Self {
        Term::Constant(value)
    }

    pub fn ratio(kind: RatioKind) -> Self {
        Term::Ratio(kind)
    }

    pub fn sin(angle: AngleRef) -> Self {
        Term::Sin(angle)
    }

    pub fn cos(angle: AngleRef) -> Self {
        Term::Cos(angle)
    }

    pub fn tan(angle: AngleRef) -> Self {
        Term::Tan(angle)
    }

    /// `self^exponent`
    pub fn pow(self, exponent: Term) -> Self {
        Term::Pow(Box::new(self), Box::new(exponent))
    }

    /// `self^n` for a literal exponent.
    pub fn powi(self, n: i32) -> Self {
        self.pow(Term::Constant(f64::from(n)))
    }

    pub fn exp(self) -> Self {
        Term::Exp(Box::new(self))
    }

    pub fn ln(self) -> Self {
        Term::Ln(Box::new(self))
    }

    /// Returns the set of input angles this expression reads, directly or
    /// through a derived ratio (ratios read both angles).
    pub fn angles_used(&self) -> BTreeSet<AngleRef> {
        let mut used = BTreeSet::new();
        self.collect_angles(&mut used);
        used
    }

    fn collect_angles(&self, used: &mut BTreeSet<AngleRef>) {
        match self {
            Term::Constant(_) | Term::Pi | Term::Euler | Term::Phi => {}
            Term::Ratio(_) => {
                used.insert(AngleRef::Deficit);
                used.insert(AngleRef::Torsion);
            }
            Term::Sin(a) | Term::Cos(a) | Term::Tan(a) => {
                used.insert(*a);
            }
            Term::Add(l, r) | Term::Sub(l, r) | Term::Mul(l, r) | Term::Div(l, r) | Term::Pow(l, r) => {
                l.collect_angles(used);
                r.collect_angles(used);
            }
            Term::Neg(t) | Term::Exp(t) | Term::Ln(t) => t.collect_angles(used),
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Term::Constant(_)
            | Term::Pi
            | Term::Euler
            | Term::Phi
            | Term::Ratio(_)
            | Term::Sin(_)
            | Term::Cos(_)
            | Term::Tan(_) => 1,
            Term::Add(l, r) | Term::Sub(l, r) | Term::Mul(l, r) | Term::Div(l, r) | Term::Pow(l, r) => {
                1 + l.node_count() + r.node_count()
            }
            Term::Neg(t) | Term::Exp(t) | Term::Ln(t) => 1 + t.node_count(),
        }
    }

    // Binding strength used to decide where the printer needs parentheses.
    fn precedence(&self) -> u8 {
        match self {
            Term::Add(..) | Term::Sub(..) => 1,
            Term::Mul(..) | Term::Div(..) => 2,
            Term::Neg(_) => 3,
            Term::Constant(v) if *v < 0.0 => 3,
            Term::Pow(..) => 4,
            _ => 5,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(v) => write!(f, "{}", v),
            Term::Pi => write!(f, "π"),
            Term::Euler => write!(f, "e"),
            Term::Phi => write!(f, "φ"),
            Term::Ratio(kind) => write!(f, "{}", kind),
            Term::Sin(a) => write!(f, "sin({})", a),
            Term::Cos(a) => write!(f, "cos({})", a),
            Term::Tan(a) => write!(f, "tan({})", a),
            Term::Add(l, r) => {
                l.fmt_operand(f, 1)?;
                write!(f, " + ")?;
                r.fmt_operand(f, 2)
            }
            Term::Sub(l, r) => {
                l.fmt_operand(f, 1)?;
                write!(f, " - ")?;
                r.fmt_operand(f, 2)
            }
            Term::Mul(l, r) => {
                l.fmt_operand(f, 2)?;
                write!(f, " · ")?;
                r.fmt_operand(f, 3)
            }
            Term::Div(l, r) => {
                l.fmt_operand(f, 2)?;
                write!(f, " / ")?;
                r.fmt_operand(f, 3)
            }
            Term::Pow(base, exponent) => {
                base.fmt_operand(f, 5)?;
                write!(f, "^")?;
                exponent.fmt_operand(f, 5)
            }
            Term::Neg(t) => {
                write!(f, "-")?;
                t.fmt_operand(f, 4)
            }
            Term::Exp(t) => write!(f, "exp({})", t),
            Term::Ln(t) => write!(f, "ln({})", t),
        }
    }
}

impl Add for Term {
    type Output = Term;
    fn add(self, rhs: Term) -> Term {
        Term::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Term {
    type Output = Term;
    fn sub(self, rhs: Term) -> Term {
        Term::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Term {
    type Output = Term;
    fn mul(self, rhs: Term) -> Term {
        Term::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Div for Term {
    type Output = Term;
    fn div(self, rhs: Term) -> Term {
        Term::Div(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Term {
    type Output = Term;
    fn neg(self) -> Term {
        Term::Neg(Box::new(self))
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Constant(value)
    }
}
