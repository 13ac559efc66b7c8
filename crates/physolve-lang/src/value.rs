//! Stored parameter values and resolver results.
//!
//! A parameter normally holds a single number. Combination turns it into a list
//! of per-source contributions so the accumulated values can be summed later.

use crate::entity::Entity;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an entity, used to attribute accumulated contributions.
/// Every entity, clones included, gets a fresh id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EntityId(u64);

impl EntityId {
    pub(crate) fn next() -> Self {
        EntityId(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// One source's value for an accumulated parameter. `None` when the source
/// could not resolve it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Contribution {
    pub source: EntityId,
    pub value: Option<f64>,
}

/// What the parameter store holds for a canonical name.
#[derive(Clone, PartialEq, Debug)]
pub enum ParamValue {
    Scalar(f64),
    List(Vec<Contribution>),
}

impl ParamValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ParamValue::Scalar(v) => Some(*v),
            ParamValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Contribution]> {
        match self {
            ParamValue::Scalar(_) => None,
            ParamValue::List(cs) => Some(cs),
        }
    }
}

impl From<ParamValue> for Resolved {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Scalar(v) => Resolved::Number(v),
            ParamValue::List(cs) => Resolved::List(cs),
        }
    }
}

/// Result of resolving a parameter.
///
/// Most formulas produce a number. Solving kinematic time from a displacement
/// gives both quadratic roots; an accumulated parameter comes back as its list;
/// a combined vector's resultant is a whole new entity.
#[derive(Clone, PartialEq, Debug)]
pub enum Resolved {
    Number(f64),
    Pair(f64, f64),
    List(Vec<Contribution>),
    Entity(Box<Entity>),
}

impl Resolved {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Resolved::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            Resolved::Pair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    /// Take the nested entity, for resolving one of its own parameters.
    pub fn into_entity(self) -> Option<Entity> {
        match self {
            Resolved::Entity(e) => Some(*e),
            _ => None,
        }
    }
}

fn write_contributions(f: &mut fmt::Formatter<'_>, cs: &[Contribution]) -> fmt::Result {
    write!(f, "[")?;
    for (i, c) in cs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match c.value {
            Some(v) => write!(f, "{v}")?,
            None => write!(f, "None")?,
        }
    }
    write!(f, "]")
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(v) => write!(f, "{v}"),
            ParamValue::List(cs) => write_contributions(f, cs),
        }
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Number(v) => write!(f, "{v}"),
            Resolved::Pair(a, b) => write!(f, "({a}, {b})"),
            Resolved::List(cs) => write_contributions(f, cs),
            Resolved::Entity(e) => write!(f, "{e}"),
        }
    }
}

struct ContributionValues<'a>(&'a [Contribution]);

impl Serialize for ContributionValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for c in self.0 {
            seq.serialize_element(&c.value)?;
        }
        seq.end()
    }
}

impl Serialize for Resolved {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Resolved::Number(v) => serializer.serialize_f64(*v),
            Resolved::Pair(a, b) => (a, b).serialize(serializer),
            Resolved::List(cs) => ContributionValues(cs).serialize(serializer),
            Resolved::Entity(e) => e.serialize(serializer),
        }
    }
}
