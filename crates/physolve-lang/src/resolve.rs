//! Resolver: find a value for a target from what the entity already knows.
//!
//! A stored value is returned verbatim. Otherwise the target's candidates are
//! tried in catalog order; the first one whose inputs are all known and whose
//! formula succeeds wins. Numeric failures fall through to the next candidate.

use crate::catalog::Inputs;
use crate::entity::Entity;
use crate::error::{Result, SolveError};
use crate::value::Resolved;
use log::{debug, trace, warn};

impl Entity {
    /// Resolve the current target.
    pub fn resolve(&self) -> Result<Resolved> {
        let target = self.target().ok_or(SolveError::NoTarget {
            entity: self.kind().name(),
        })?;
        self.resolve_name(target, false)
    }

    /// Resolve `name` without changing the current target.
    pub fn resolve_param(&self, name: &str) -> Result<Resolved> {
        self.resolve_name(name, false)
    }

    /// `quiet` demotes candidate failures from warnings to debug records.
    pub(crate) fn resolve_name(&self, name: &str, quiet: bool) -> Result<Resolved> {
        let schema = self.schema();
        let name = self.de_alias(name);

        if let Some(value) = self.get(name) {
            return Ok(value.clone().into());
        }
        let target = match schema.declared(name) {
            Some(target) if schema.is_public(target) => target,
            _ => {
                return Err(SolveError::UnknownParameter {
                    entity: schema.name,
                    name: name.to_string(),
                })
            }
        };
        let equations = schema.equations_for(target).ok_or(SolveError::NoEquations {
            entity: schema.name,
            target,
        })?;

        for candidate in equations.candidates {
            if !candidate.is_satisfied_by(|n| self.is_known(n)) {
                continue;
            }
            let inputs = Inputs::new(
                candidate
                    .requires
                    .iter()
                    .filter_map(|n| self.matched_entry(n)),
            );
            match (candidate.formula)(&inputs) {
                Ok(value) => {
                    trace!("{}: {target} from {:?}", schema.name, candidate.requires);
                    return Ok(value);
                }
                Err(source) => {
                    let err = SolveError::NumericDomain {
                        entity: schema.name,
                        target,
                        inputs: candidate.requires,
                        source,
                    };
                    if quiet {
                        debug!("{err}");
                    } else {
                        warn!("{err}");
                    }
                }
            }
        }

        Err(SolveError::NoSolutionForKnowns {
            entity: schema.name,
            target,
            knowns: self.known_params(),
        })
    }
}
