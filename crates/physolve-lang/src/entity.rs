//! Entity: one physical-quantity record and its parameter store.
//!
//! Known values live in `matched` under their canonical names. Tokens that are not
//! declared for the entity type are kept aside in `unknown` for diagnostics and
//! never raise.

use crate::lexer::tokenize;
use crate::schema::{EntityKind, Schema};
use crate::value::{Contribution, EntityId, ParamValue, Resolved};
use log::{debug, warn};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    matched: BTreeMap<&'static str, ParamValue>,
    unknown: BTreeMap<String, ParamValue>,
    target: Option<String>,
}

/// A clone is a new source: it gets its own id, so combining it with the
/// original counts both.
impl Clone for Entity {
    fn clone(&self) -> Self {
        Entity {
            id: EntityId::next(),
            kind: self.kind,
            matched: self.matched.clone(),
            unknown: self.unknown.clone(),
            target: self.target.clone(),
        }
    }
}

/// Equality compares stored values and target, not identity.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.matched == other.matched
            && self.unknown == other.unknown
            && self.target == other.target
    }
}

impl Entity {
    pub fn new(kind: EntityKind) -> Self {
        Entity {
            id: EntityId::next(),
            kind,
            matched: BTreeMap::new(),
            unknown: BTreeMap::new(),
            target: None,
        }
    }

    /// Build an entity from explicit name/value pairs (aliases allowed).
    pub fn with_args<'a>(kind: EntityKind, args: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut entity = Self::new(kind);
        for (name, value) in args {
            entity.assign(name, value);
        }
        entity
    }

    /// Build an entity seeded from the snapshots of `parents`: every parameter
    /// becomes a list holding one contribution per parent.
    pub fn from_parents(kind: EntityKind, parents: &[&Entity]) -> Self {
        let mut entity = Self::new(kind);
        for parent in parents {
            let snapshot = parent.snapshot();
            for (name, value) in snapshot.iter() {
                entity.accumulate(parent.id, name, value);
            }
        }
        entity
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn schema(&self) -> &'static Schema {
        self.kind.schema()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
    }

    pub fn de_alias<'a>(&self, name: &'a str) -> &'a str {
        self.schema().de_alias(name)
    }

    /// Stored value for a canonical or aliased name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.matched.get(self.de_alias(name))
    }

    /// Names with a stored value, sorted.
    pub fn known_params(&self) -> Vec<&'static str> {
        self.matched.keys().copied().collect()
    }

    pub(crate) fn is_known(&self, name: &str) -> bool {
        self.matched.contains_key(name)
    }

    pub(crate) fn matched_entry(&self, name: &str) -> Option<(&'static str, &ParamValue)> {
        self.matched.get_key_value(name).map(|(k, v)| (*k, v))
    }

    /// Tokens that were assigned but are not parameters of this entity type.
    pub fn unknown_params(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.unknown.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Set a parameter, overwriting any previous value. Undeclared names go to
    /// the unknown bucket.
    pub fn assign(&mut self, token: &str, value: f64) {
        let name = self.de_alias(token);
        match self.schema().declared(name) {
            Some(name) => {
                self.matched.insert(name, ParamValue::Scalar(value));
            }
            None => {
                debug!("{}: unknown parameter {name} = {value}", self.kind);
                self.unknown.insert(name.to_string(), ParamValue::Scalar(value));
            }
        }
    }

    /// Append `source`'s value for `token` to the accumulated list.
    ///
    /// A stored scalar first becomes a one-element list attributed to this entity.
    /// A list value is merged contribution by contribution. Each source contributes
    /// at most once per parameter; repeats are skipped.
    pub fn accumulate(&mut self, source: EntityId, token: &str, value: Option<&Resolved>) {
        let incoming = match value {
            None => vec![Contribution { source, value: None }],
            Some(Resolved::Number(v)) => vec![Contribution { source, value: Some(*v) }],
            Some(Resolved::List(cs)) => cs.clone(),
            Some(other) => {
                warn!("{}: cannot accumulate {other} into {token}", self.kind);
                vec![Contribution { source, value: None }]
            }
        };
        let own = self.id;
        let name = self.de_alias(token);
        let empty = || ParamValue::List(Vec::new());
        let slot = match self.kind.schema().declared(name) {
            Some(name) => self.matched.entry(name).or_insert_with(empty),
            None => {
                debug!("{}: accumulating unknown parameter {name}", self.kind);
                self.unknown.entry(name.to_string()).or_insert_with(empty)
            }
        };
        merge_contributions(slot, own, incoming);
    }

    /// Apply a sequence of words: numbers adjacent to names are assigned, a bare
    /// name becomes the target.
    pub fn assign_tokens<S: AsRef<str>>(&mut self, words: &[S]) {
        let line = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        self.assign_line(&line);
    }

    /// Like [Entity::assign_tokens], for an already joined line.
    pub fn assign_line(&mut self, line: &str) {
        for assignment in tokenize(line) {
            match assignment.value() {
                Some(value) => self.assign(&assignment.key, value),
                None => self.set_target(assignment.key),
            }
        }
    }

    /// Resolve every public then private parameter without reporting failures.
    /// The current target is left untouched.
    pub fn snapshot(&self) -> Snapshot {
        let entries = self
            .schema()
            .all_params()
            .map(|name| (name, self.resolve_name(name, true).ok()))
            .collect();
        Snapshot { entries }
    }
}

fn merge_contributions(slot: &mut ParamValue, own: EntityId, incoming: Vec<Contribution>) {
    if let ParamValue::Scalar(v) = *slot {
        *slot = ParamValue::List(vec![Contribution {
            source: own,
            value: Some(v),
        }]);
    }
    if let ParamValue::List(list) = slot {
        for c in incoming {
            if !list.iter().any(|existing| existing.source == c.source) {
                list.push(c);
            }
        }
    }
}

/// Every declared parameter of an entity resolved at one point in time
/// (`None` where it could not be resolved).
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    entries: Vec<(&'static str, Option<Resolved>)>,
}

impl Snapshot {
    pub fn get(&self, name: &str) -> Option<&Resolved> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Resolved::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&Resolved>)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{name}: {v}")?,
                None => write!(f, "{name}: None")?,
            }
        }
        write!(f, "}}")
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        if let Some(target) = &self.target {
            write!(f, "target={target}, ")?;
        }
        write!(f, "args={})", self.snapshot())
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Entity", 3)?;
        s.serialize_field("type", self.kind.name())?;
        s.serialize_field("target", &self.target)?;
        s.serialize_field("values", &self.snapshot())?;
        s.end()
    }
}
