//! Equation catalogs: per entity type, the ordered candidate formulas for each target.
//!
//! A catalog is plain static data. Each [Candidate] names the exact inputs it
//! needs; the resolver walks a target's candidates in the order written here and
//! evaluates the first one whose inputs are all known.

mod multi_vector;
mod single_acc;
mod vector;

pub use multi_vector::MULTI_VECTOR_EQUATIONS;
pub use single_acc::SINGLE_ACC_EQUATIONS;
pub use vector::VECTOR_EQUATIONS;

use crate::error::FormulaError;
use crate::value::{Contribution, ParamValue, Resolved};
use std::collections::BTreeMap;

/// A pure formula over the known inputs of one candidate.
pub type Formula = fn(&Inputs<'_>) -> Result<Resolved, FormulaError>;

/// One alternative way of computing a target.
pub struct Candidate {
    pub requires: &'static [&'static str],
    pub formula: Formula,
}

impl Candidate {
    /// True when every required input is known.
    pub fn is_satisfied_by(&self, is_known: impl Fn(&str) -> bool) -> bool {
        self.requires.iter().all(|name| is_known(*name))
    }
}

/// All candidates for one target, in resolution order.
pub struct Equations {
    pub target: &'static str,
    pub candidates: &'static [Candidate],
}

/// Find the equations for `target` in a catalog.
pub fn lookup(catalog: &'static [Equations], target: &str) -> Option<&'static Equations> {
    catalog.iter().find(|e| e.target == target)
}

/// The known values handed to a formula, restricted to the candidate's inputs.
pub struct Inputs<'a> {
    values: BTreeMap<&'static str, &'a ParamValue>,
}

impl<'a> Inputs<'a> {
    pub fn new(values: impl IntoIterator<Item = (&'static str, &'a ParamValue)>) -> Self {
        Inputs {
            values: values.into_iter().collect(),
        }
    }

    pub fn scalar(&self, name: &'static str) -> Result<f64, FormulaError> {
        self.values
            .get(name)
            .and_then(|v| v.as_scalar())
            .ok_or(FormulaError::NotScalar(name))
    }

    pub fn contributions(&self, name: &'static str) -> Result<&'a [Contribution], FormulaError> {
        self.values
            .get(name)
            .copied()
            .and_then(ParamValue::as_list)
            .ok_or(FormulaError::NotList(name))
    }

    /// Sum of an accumulated parameter. Every contribution must be known.
    pub fn sum(&self, name: &'static str) -> Result<f64, FormulaError> {
        self.contributions(name)?
            .iter()
            .map(|c| c.value.ok_or(FormulaError::MissingContribution(name)))
            .sum()
    }
}

pub(crate) fn sqrt(x: f64) -> Result<f64, FormulaError> {
    if x < 0.0 {
        Err(FormulaError::NegativeRadicand(x))
    } else {
        Ok(x.sqrt())
    }
}

pub(crate) fn div(numerator: f64, denominator: f64) -> Result<f64, FormulaError> {
    if denominator == 0.0 {
        Err(FormulaError::DivisionByZero)
    } else {
        Ok(numerator / denominator)
    }
}

fn unit_interval(function: &'static str, value: f64) -> Result<f64, FormulaError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FormulaError::OutOfDomain { function, value })
    }
}

pub(crate) fn asin_deg(x: f64) -> Result<f64, FormulaError> {
    Ok(unit_interval("asin", x)?.asin().to_degrees())
}

pub(crate) fn acos_deg(x: f64) -> Result<f64, FormulaError> {
    Ok(unit_interval("acos", x)?.acos().to_degrees())
}

pub(crate) fn number(x: f64) -> Result<Resolved, FormulaError> {
    if x.is_finite() {
        Ok(Resolved::Number(x))
    } else {
        Err(FormulaError::NonFinite)
    }
}

pub(crate) fn pair(a: f64, b: f64) -> Result<Resolved, FormulaError> {
    if a.is_finite() && b.is_finite() {
        Ok(Resolved::Pair(a, b))
    } else {
        Err(FormulaError::NonFinite)
    }
}
