//! Vector accumulator: the resultant of every vector combined into it.

use super::{Candidate, Equations, Inputs};
use crate::entity::Entity;
use crate::error::FormulaError;
use crate::schema::EntityKind;
use crate::value::Resolved;

fn resultant(i: &Inputs<'_>) -> Result<Resolved, FormulaError> {
    let x = i.sum("x")?;
    let y = i.sum("y")?;
    let vector = Entity::with_args(EntityKind::Vector, [("x", x), ("y", y)]);
    Ok(Resolved::Entity(Box::new(vector)))
}

pub const MULTI_VECTOR_EQUATIONS: &[Equations] = &[Equations {
    target: "res",
    candidates: &[Candidate { requires: &["x", "y"], formula: resultant }],
}];
