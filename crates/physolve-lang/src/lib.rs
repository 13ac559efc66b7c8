//! physolve: resolve unknown physical quantities from partially known ones.
//!
//! An [Entity] (2-D vector, constant-acceleration state, or vector accumulator)
//! is fed free-text tokens such as `3x -4y hyp`. Numbers adjacent to names are
//! stored as known values; a bare name becomes the target. Resolving the target
//! walks the entity type's candidate formulas in order and evaluates the first
//! one whose inputs are all known. Entities can be combined so that their
//! components accumulate before being solved again.

pub mod catalog;
pub mod combine;
pub mod entity;
pub mod error;
pub mod lexer;
pub mod resolve;
pub mod schema;
pub mod value;

pub use combine::Combination;
pub use entity::{Entity, Snapshot};
pub use error::{FormulaError, Result, SolveError};
pub use lexer::{tokenize, Assignment, Assignments};
pub use schema::{CombineRule, EntityKind, Schema};
pub use value::{Contribution, EntityId, ParamValue, Resolved};

/// Create an entity from a type tag (`vector`, `single_acc`, ...) and feed it tokens.
pub fn new_entity<S: AsRef<str>>(tag: &str, tokens: &[S]) -> Result<Entity> {
    let kind = EntityKind::from_tag(tag)?;
    let mut entity = Entity::new(kind);
    entity.assign_tokens(tokens);
    Ok(entity)
}

/// An entity built from one line, and its target's value if a target was given.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub entity: Entity,
    pub result: Option<Resolved>,
}

/// Build an entity of type `tag` from `input` and resolve its target, if any.
///
/// `run("vector", "3x 4y hyp")` yields `Some(Number(5.0))`.
pub fn run(tag: &str, input: &str) -> Result<Evaluation> {
    let entity = new_entity(tag, &[input])?;
    let result = match entity.target() {
        Some(_) => Some(entity.resolve()?),
        None => None,
    };
    Ok(Evaluation { entity, result })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(tag: &str, input: &str) -> f64 {
        run(tag, input)
            .unwrap()
            .result
            .and_then(|r| r.as_number())
            .unwrap()
    }

    #[test]
    fn run_vector_magnitude() {
        assert!((number("vector", "3x 4y hyp") - 5.0).abs() < 1e-12);
        assert!((number("vector", "3x 4y h") - 5.0).abs() < 1e-12);
        assert!((number("vector", "3x 4y mag") - 5.0).abs() < 1e-12);
    }

    #[test]
    fn run_without_target_has_no_result() {
        let eval = run("vector", "3x 4y").unwrap();
        assert!(eval.result.is_none());
        assert_eq!(eval.entity.known_params(), vec!["x", "y"]);
    }

    #[test]
    fn run_kinematics() {
        assert!((number("single", "0start 2acc 3time finish") - 6.0).abs() < 1e-12);
        assert!((number("single_acc", "0u 2a 3t s") - 9.0).abs() < 1e-12);
    }

    #[test]
    fn run_unknown_type() {
        assert_eq!(
            run("matrix", "1x"),
            Err(SolveError::UnknownEntityType("matrix".to_string()))
        );
    }

    #[test]
    fn run_reports_missing_knowns() {
        let e = run("vector", "3x mag").unwrap_err();
        assert!(matches!(e, SolveError::NoSolutionForKnowns { .. }));
        assert_eq!(
            e.to_string(),
            "Vector was unable to find a solution for mag with knowns: {x}"
        );
    }

    #[test]
    fn run_unknown_parameter_message() {
        let e = run("vector", "3x speed").unwrap_err();
        assert_eq!(e.to_string(), "target speed was not recognised by Vector");
    }

    #[test]
    fn new_entity_from_words() {
        let v = new_entity("vector", &["3x", "-4y", "dr"]).unwrap();
        assert_eq!(v.target(), Some("dr"));
        let dr = v.resolve().unwrap().as_number().unwrap();
        assert!((dr - (-4f64).atan2(3.0).to_degrees()).abs() < 1e-12);
    }

    #[test]
    fn later_tokens_update_entity() {
        let mut v = new_entity("vector", &["3x", "hyp"]).unwrap();
        assert!(v.resolve().is_err());
        v.assign_tokens(&["-4y"]);
        assert_eq!(v.target(), Some("hyp"));
        assert!((v.resolve().unwrap().as_number().unwrap() - 5.0).abs() < 1e-12);
    }
}
