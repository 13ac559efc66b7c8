//! Errors raised while resolving parameters or combining entities.
//!
//! None of these are fatal: the resolver reports [`FormulaError`]s and moves on
//! to the next candidate, and every [`SolveError`] carries enough context
//! (entity type, target, knowns) for the caller to render a diagnostic.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolveError>;

/// Failure of a resolve or combine request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("no target was specified for {entity}")]
    NoTarget { entity: &'static str },

    #[error("target {name} was not recognised by {entity}")]
    UnknownParameter { entity: &'static str, name: String },

    /// A public parameter with no catalog entry. The built-in schemas give every
    /// public parameter equations, so this only guards against a schema/catalog
    /// mismatch.
    #[error("target {target} is not a solvable parameter for {entity}")]
    NoEquations {
        entity: &'static str,
        target: &'static str,
    },

    #[error("{entity} was unable to find a solution for {target} with knowns: {{{}}}", knowns.join(", "))]
    NoSolutionForKnowns {
        entity: &'static str,
        target: &'static str,
        knowns: Vec<&'static str>,
    },

    /// One candidate failed numerically; the resolver falls back to the next one.
    #[error("{entity}: solving {target} from ({}) failed: {source}", inputs.join(", "))]
    NumericDomain {
        entity: &'static str,
        target: &'static str,
        inputs: &'static [&'static str],
        #[source]
        source: FormulaError,
    },

    #[error("member {partner} is not compatible with {entity}")]
    IncompatibleCombination {
        entity: &'static str,
        partner: &'static str,
    },

    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),
}

/// Numeric failure inside a single formula.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("square root of negative number {0}")]
    NegativeRadicand(f64),

    #[error("division by zero")]
    DivisionByZero,

    #[error("{function} argument {value} is outside [-1, 1]")]
    OutOfDomain { function: &'static str, value: f64 },

    #[error("result is not finite")]
    NonFinite,

    #[error("{0} is not a single value")]
    NotScalar(&'static str),

    #[error("{0} is not an accumulated list")]
    NotList(&'static str),

    #[error("{0} has a contribution that could not be resolved")]
    MissingContribution(&'static str),
}
