//! Exact univariate polynomial arithmetic over the rationals.
//!
//! This crate provides the symbolic layer the quiz engine is built on:
//!
//! - [`Polynomial`] - Dense univariate polynomial with `BigRational` coefficients
//! - [`div_rem`], [`gcd`] - Polynomial division and greatest common divisor
//! - [`real_roots`] - Exact real-root extraction ([`RealRoot`])
//!
//! Coefficient arithmetic is exact throughout; `f64` only appears when a
//! caller asks for an approximation of a root or an evaluation.

pub use self::{
    gcd::{div_rem, gcd, make_monic},
    polynomial::Polynomial,
    roots::{RealRoot, ZeroPolynomialError, real_roots},
};

mod gcd;
mod polynomial;
mod roots;
