use serde::Serialize;

use super::{Component, ComponentKind};

/// Ordered components produced by a single parse.
///
/// Sequences are only built by the parser and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    components: Vec<Component>,
}

impl Sequence {
    pub(crate) fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(|c| c.kind).collect()
    }

    pub fn unknown_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_unknown()).count()
    }

    /// No parallel structure and no unknown: a plain series chain.
    pub fn is_simple(&self) -> bool {
        !self
            .components
            .iter()
            .any(|c| c.kind.is_parallel_delimiter() || c.is_unknown())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{BRANCH_DEPTH, MAIN_DEPTH};

    fn sample() -> Sequence {
        Sequence::new(vec![
            Component::generator_lead(0, MAIN_DEPTH, 10.0),
            Component::marker(ComponentKind::ParallelGroupStart, 1, MAIN_DEPTH),
            Component::unknown(2, MAIN_DEPTH),
            Component::marker(ComponentKind::ParallelBranchStart, 3, BRANCH_DEPTH),
            Component::known(4, BRANCH_DEPTH, 20.0),
            Component::marker(ComponentKind::ParallelBranchEnd, 5, BRANCH_DEPTH),
            Component::marker(ComponentKind::ParallelGroupEnd, 6, MAIN_DEPTH),
            Component::marker(ComponentKind::Terminator, 7, MAIN_DEPTH),
        ])
    }

    #[test]
    fn test_unknown_count() {
        assert_eq!(sample().unknown_count(), 1);
    }

    #[test]
    fn test_is_simple() {
        assert!(!sample().is_simple());

        let series = Sequence::new(vec![
            Component::generator_lead(0, MAIN_DEPTH, 10.0),
            Component::marker(ComponentKind::SeriesConnector, 1, MAIN_DEPTH),
            Component::known(2, MAIN_DEPTH, 20.0),
            Component::marker(ComponentKind::Terminator, 3, MAIN_DEPTH),
        ]);
        assert!(series.is_simple());
    }

    #[test]
    fn test_serializes_as_list() {
        let seq = Sequence::new(vec![Component::unknown(0, MAIN_DEPTH)]);
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "kind": "unknown_resistor", "sequence_index": 0, "depth": 0 }])
        );
    }
}
