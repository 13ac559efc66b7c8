//! Entity types: declared parameters, aliases, equation catalog and combination rules.
//!
//! Each [EntityKind] maps to one static [Schema]; there is no runtime registration.

use crate::catalog::{self, Equations};
use crate::error::SolveError;
use std::fmt;

/// Discriminant of the declared entity types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Vector,
    SingleAcc,
    MultiVector,
}

/// What combining with a partner of a given kind does.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CombineRule {
    /// Build a new entity of this kind seeded from both operands.
    Construct(EntityKind),
    /// Fold both operands' private parameters into the receiver.
    Absorb,
}

/// Static description of an entity type.
pub struct Schema {
    pub name: &'static str,
    /// Names a caller may target.
    pub parameters: &'static [&'static str],
    /// Names that may be stored and accumulated but are not solved for.
    pub private_params: &'static [&'static str],
    /// Synonym → canonical name. Lookup is a single step.
    pub aliases: &'static [(&'static str, &'static str)],
    pub equations: &'static [Equations],
    pub combine_pairs: &'static [(EntityKind, CombineRule)],
}

static VECTOR: Schema = Schema {
    name: "Vector",
    parameters: &["x", "y", "mag", "dr"],
    private_params: &[],
    aliases: &[
        ("rise", "y"),
        ("run", "x"),
        ("h", "mag"),
        ("hyp", "mag"),
        ("deg", "dr"),
        ("d", "dr"),
    ],
    equations: catalog::VECTOR_EQUATIONS,
    combine_pairs: &[(
        EntityKind::Vector,
        CombineRule::Construct(EntityKind::MultiVector),
    )],
};

static SINGLE_ACC: Schema = Schema {
    name: "SingleAcc",
    parameters: &["u", "v", "a", "t", "s"],
    private_params: &[],
    aliases: &[
        ("start", "u"),
        ("finish", "v"),
        ("acc", "a"),
        ("time", "t"),
        ("dist", "s"),
    ],
    equations: catalog::SINGLE_ACC_EQUATIONS,
    combine_pairs: &[],
};

static MULTI_VECTOR: Schema = Schema {
    name: "MultiVector",
    parameters: &["res"],
    private_params: &["x", "y", "mag", "dr"],
    aliases: &[("resultant", "res")],
    equations: catalog::MULTI_VECTOR_EQUATIONS,
    combine_pairs: &[
        (EntityKind::Vector, CombineRule::Absorb),
        (EntityKind::MultiVector, CombineRule::Absorb),
    ],
};

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Vector,
        EntityKind::SingleAcc,
        EntityKind::MultiVector,
    ];

    pub fn schema(self) -> &'static Schema {
        match self {
            EntityKind::Vector => &VECTOR,
            EntityKind::SingleAcc => &SINGLE_ACC,
            EntityKind::MultiVector => &MULTI_VECTOR,
        }
    }

    pub fn name(self) -> &'static str {
        self.schema().name
    }

    /// Parse a user-facing type tag (`vector`, `single_acc`, `single`, ...).
    pub fn from_tag(tag: &str) -> Result<Self, SolveError> {
        match tag.to_ascii_lowercase().as_str() {
            "vector" => Ok(EntityKind::Vector),
            "single_acc" | "singleacc" | "single" => Ok(EntityKind::SingleAcc),
            "multi_vector" | "multivector" => Ok(EntityKind::MultiVector),
            _ => Err(SolveError::UnknownEntityType(tag.to_string())),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Schema {
    /// Canonical name for `name`; unknown names are returned unchanged.
    pub fn de_alias<'a>(&self, name: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(name)
    }

    pub fn is_public(&self, name: &str) -> bool {
        self.parameters.contains(&name)
    }

    /// The static name for `name` if it is declared, public or private.
    pub fn declared(&self, name: &str) -> Option<&'static str> {
        self.parameters
            .iter()
            .chain(self.private_params)
            .find(|p| **p == name)
            .copied()
    }

    /// Public then private parameters, in declaration order.
    pub fn all_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parameters
            .iter()
            .chain(self.private_params)
            .copied()
    }

    pub fn equations_for(&self, target: &str) -> Option<&'static Equations> {
        catalog::lookup(self.equations, target)
    }

    pub fn combine_rule(&self, partner: EntityKind) -> Option<CombineRule> {
        self.combine_pairs
            .iter()
            .find(|(kind, _)| *kind == partner)
            .map(|(_, rule)| *rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(EntityKind::from_tag("vector").unwrap(), EntityKind::Vector);
        assert_eq!(EntityKind::from_tag("Single").unwrap(), EntityKind::SingleAcc);
        assert_eq!(EntityKind::from_tag("single_acc").unwrap(), EntityKind::SingleAcc);
        assert_eq!(EntityKind::from_tag("multivector").unwrap(), EntityKind::MultiVector);
        assert_eq!(
            EntityKind::from_tag("matrix"),
            Err(SolveError::UnknownEntityType("matrix".to_string()))
        );
    }

    #[test]
    fn de_alias_is_idempotent() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            for (alias, _) in schema.aliases {
                let once = schema.de_alias(alias);
                assert_eq!(schema.de_alias(once), once);
            }
            assert_eq!(schema.de_alias("nonsense"), "nonsense");
        }
    }

    #[test]
    fn vector_aliases() {
        let s = EntityKind::Vector.schema();
        assert_eq!(s.de_alias("hyp"), "mag");
        assert_eq!(s.de_alias("h"), "mag");
        assert_eq!(s.de_alias("rise"), "y");
        assert_eq!(s.de_alias("d"), "dr");
    }

    #[test]
    fn canonical_names_unique_and_catalog_targets_public() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            let names: Vec<_> = schema.all_params().collect();
            for (i, n) in names.iter().enumerate() {
                assert!(!names[i + 1..].contains(n), "{kind}: duplicate {n}");
            }
            for eq in schema.equations {
                assert!(schema.is_public(eq.target), "{kind}: {} not public", eq.target);
                for input in eq.candidates.iter().flat_map(|c| c.requires) {
                    assert!(schema.declared(input).is_some(), "{kind}: {input} undeclared");
                }
            }
        }
    }

    #[test]
    fn every_public_param_has_equations() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            for name in schema.parameters {
                let eq = schema.equations_for(name);
                assert!(eq.is_some(), "{kind}: no equations for {name}");
                assert!(!eq.unwrap().candidates.is_empty(), "{kind}: {name} has no candidates");
            }
            assert!(schema.equations_for("nonsense").is_none());
        }
    }

    #[test]
    fn private_params_are_declared_but_not_public() {
        let s = EntityKind::MultiVector.schema();
        assert_eq!(s.declared("x"), Some("x"));
        assert!(!s.is_public("x"));
        assert!(s.is_public("res"));
    }

    #[test]
    fn combine_rules() {
        let v = EntityKind::Vector.schema();
        assert_eq!(
            v.combine_rule(EntityKind::Vector),
            Some(CombineRule::Construct(EntityKind::MultiVector))
        );
        assert_eq!(v.combine_rule(EntityKind::SingleAcc), None);
        let m = EntityKind::MultiVector.schema();
        assert_eq!(m.combine_rule(EntityKind::MultiVector), Some(CombineRule::Absorb));
        assert!(EntityKind::SingleAcc.schema().combine_pairs.is_empty());
    }
}
