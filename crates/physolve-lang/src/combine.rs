//! Combination: merge other entities' snapshots into an entity.
//!
//! The receiver's combine table decides what happens for the partner's type:
//! either a new entity is constructed from both operands, or the receiver absorbs
//! both operands' private parameters in place. Merging three or more entities is
//! a sequence of pairwise combinations.

use crate::entity::{Entity, Snapshot};
use crate::error::{Result, SolveError};
use crate::schema::CombineRule;
use crate::value::EntityId;
use log::debug;

/// Outcome of [Entity::combine].
#[derive(Clone, Debug, PartialEq)]
pub enum Combination {
    /// A new entity built from both operands; the receiver is unchanged.
    Constructed(Entity),
    /// The receiver accumulated the operands.
    Absorbed,
}

impl Entity {
    /// Combine `other` into this entity according to this entity's combine table.
    pub fn combine(&mut self, other: &Entity) -> Result<Combination> {
        let rule = self
            .schema()
            .combine_rule(other.kind())
            .ok_or(SolveError::IncompatibleCombination {
                entity: self.kind().name(),
                partner: other.kind().name(),
            })?;
        debug!("combining {} into {} ({rule:?})", other.kind(), self.kind());
        match rule {
            CombineRule::Construct(kind) => Ok(Combination::Constructed(Entity::from_parents(
                kind,
                &[&*self, other],
            ))),
            CombineRule::Absorb => {
                self.absorb(&[other]);
                Ok(Combination::Absorbed)
            }
        }
    }

    /// Owning form of [Entity::combine]: the constructed entity, or `self` after absorbing.
    pub fn combined_with(mut self, other: &Entity) -> Result<Entity> {
        match self.combine(other)? {
            Combination::Constructed(entity) => Ok(entity),
            Combination::Absorbed => Ok(self),
        }
    }

    /// Accumulate the private parameters of this entity and of `others`.
    ///
    /// This entity's own stored values are attributed to itself; parameters it
    /// cannot resolve are not recorded as its contributions.
    pub fn absorb(&mut self, others: &[&Entity]) {
        if others.is_empty() {
            debug!("{}: nothing to absorb", self.kind());
        }
        let mut digests: Vec<(EntityId, bool, Snapshot)> = Vec::with_capacity(others.len() + 1);
        digests.push((self.id(), true, self.snapshot()));
        digests.extend(others.iter().map(|o| (o.id(), false, o.snapshot())));

        let private = self.schema().private_params;
        for (source, is_self, digest) in &digests {
            for name in private {
                let value = digest.get(name);
                if *is_self && value.is_none() {
                    continue;
                }
                self.accumulate(*source, name, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EntityKind;
    use crate::value::{ParamValue, Resolved};

    fn vector(x: f64, y: f64) -> Entity {
        Entity::with_args(EntityKind::Vector, [("x", x), ("y", y)])
    }

    fn resultant(m: &Entity) -> Entity {
        m.resolve_param("res").unwrap().into_entity().unwrap()
    }

    #[test]
    fn vector_plus_vector_constructs_multivector() {
        let mut a = vector(1.0, 1.0);
        let b = vector(-1.0, 1.0);
        let m = match a.combine(&b).unwrap() {
            Combination::Constructed(m) => m,
            Combination::Absorbed => panic!("expected a new entity"),
        };
        assert_eq!(m.kind(), EntityKind::MultiVector);
        assert_eq!(a.kind(), EntityKind::Vector);
        assert_eq!(a.known_params(), vec!["x", "y"]);
        let r = resultant(&m);
        assert_eq!(r.kind(), EntityKind::Vector);
        assert_eq!(r.resolve_param("x"), Ok(Resolved::Number(0.0)));
        assert_eq!(r.resolve_param("y"), Ok(Resolved::Number(2.0)));
    }

    #[test]
    fn multivector_absorbs_vectors() {
        let m = vector(1.0, 1.0).combined_with(&vector(-1.0, 1.0)).unwrap();
        let m = m.combined_with(&vector(1.0, -1.0)).unwrap();
        assert_eq!(m.kind(), EntityKind::MultiVector);
        assert_eq!(m.get("x").unwrap().as_list().unwrap().len(), 3);
        let r = resultant(&m);
        assert_eq!(r.resolve_param("x"), Ok(Resolved::Number(1.0)));
        assert_eq!(r.resolve_param("y"), Ok(Resolved::Number(1.0)));
    }

    #[test]
    fn multivector_absorbs_multivector() {
        let m1 = vector(1.0, 0.0).combined_with(&vector(2.0, 0.0)).unwrap();
        let m2 = vector(0.0, 3.0).combined_with(&vector(0.0, 4.0)).unwrap();
        let m = m1.combined_with(&m2).unwrap();
        let r = resultant(&m);
        assert_eq!(r.resolve_param("x"), Ok(Resolved::Number(3.0)));
        assert_eq!(r.resolve_param("y"), Ok(Resolved::Number(7.0)));
        assert!((r.resolve_param("mag").unwrap().as_number().unwrap() - 58f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn same_source_counts_once() {
        let v = vector(2.0, 2.0);
        let m = vector(1.0, 0.0).combined_with(&v).unwrap();
        let m = m.combined_with(&v).unwrap();
        assert_eq!(m.get("x").unwrap().as_list().unwrap().len(), 2);
        assert_eq!(resultant(&m).resolve_param("x"), Ok(Resolved::Number(3.0)));
    }

    #[test]
    fn empty_multivector_absorbs_without_self_placeholders() {
        let mut m = Entity::new(EntityKind::MultiVector);
        let v = vector(3.0, 4.0);
        assert_eq!(m.combine(&v).unwrap(), Combination::Absorbed);
        let xs = m.get("x").unwrap().as_list().unwrap();
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].source, v.id());
        assert_eq!(resultant(&m).resolve_param("y"), Ok(Resolved::Number(4.0)));
    }

    #[test]
    fn unresolved_component_blocks_resultant() {
        let partial = Entity::with_args(EntityKind::Vector, [("x", 1.0)]);
        let m = vector(1.0, 1.0).combined_with(&partial).unwrap();
        assert!(matches!(
            m.resolve_param("res"),
            Err(SolveError::NoSolutionForKnowns { target: "res", .. })
        ));
    }

    #[test]
    fn stored_scalar_becomes_own_contribution() {
        let mut m = Entity::new(EntityKind::MultiVector);
        m.assign("x", 5.0);
        m.assign("y", 0.0);
        m.absorb(&[&vector(1.0, 1.0)]);
        match m.get("x").unwrap() {
            ParamValue::List(xs) => {
                assert_eq!(xs.len(), 2);
                assert_eq!(xs[0].source, m.id());
            }
            other => panic!("expected list, got {other:?}"),
        }
        assert_eq!(resultant(&m).resolve_param("x"), Ok(Resolved::Number(6.0)));
    }

    #[test]
    fn modified_clone_contributes_its_own_values() {
        let a = vector(1.0, 1.0);
        let mut b = a.clone();
        b.assign("x", 5.0);
        b.assign("y", -3.0);
        let m = a.combined_with(&b).unwrap();
        let values: Vec<_> = m.get("x").unwrap().as_list().unwrap().iter().map(|c| c.value).collect();
        assert_eq!(values, vec![Some(1.0), Some(5.0)]);
        let r = resultant(&m);
        assert_eq!(r.resolve_param("x"), Ok(Resolved::Number(6.0)));
        assert_eq!(r.resolve_param("y"), Ok(Resolved::Number(-2.0)));
    }

    #[test]
    fn vector_plus_own_clone_counts_twice() {
        let a = vector(1.0, 2.0);
        let m = a.clone().combined_with(&a).unwrap();
        let r = resultant(&m);
        assert_eq!(r.resolve_param("x"), Ok(Resolved::Number(2.0)));
        assert_eq!(r.resolve_param("y"), Ok(Resolved::Number(4.0)));
    }

    #[test]
    fn incompatible_combination() {
        let mut s = Entity::new(EntityKind::SingleAcc);
        let v = vector(1.0, 1.0);
        assert_eq!(
            s.combine(&v),
            Err(SolveError::IncompatibleCombination {
                entity: "SingleAcc",
                partner: "Vector"
            })
        );
        let mut v2 = vector(0.0, 1.0);
        assert!(v2.combine(&Entity::new(EntityKind::MultiVector)).is_err());
    }
}
