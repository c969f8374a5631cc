//! Recognizes the one parallel shape the symbolic solver can invert:
//!
//! ```text
//! S0 * (Su + Rx) || Sk = * S3
//! ```
//!
//! Known series resistance before the group (`S0`) and after it (`S3`), one
//! branch holding the unknown plus known resistance `Su`, and one fully
//! known branch `Sk`.

use serde::Serialize;
use tracing::trace;

use crate::circuit::{Component, ComponentKind, Sequence};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParallelStructure {
    pub s0: f64,
    pub s3: f64,
    pub su: f64,
    pub sk: f64,
}

impl ParallelStructure {
    /// Total resistance of the network for a given `Rx`.
    pub fn equivalent(&self, rx: f64) -> f64 {
        let unknown_branch = self.su + rx;
        self.s0 + self.s3 + unknown_branch * self.sk / (unknown_branch + self.sk)
    }
}

#[derive(Debug, Default)]
struct BranchScan {
    known: f64,
    has_unknown: bool,
}

/// Returns the decomposition, or `None` when the circuit has another shape.
pub fn extract(sequence: &Sequence) -> Option<ParallelStructure> {
    let components = sequence.components();
    let mut pos = 0;

    let before = scan_until(components, &mut pos, &[ComponentKind::ParallelGroupStart]);
    if pos >= components.len() {
        trace!("no parallel group");
        return None;
    }
    pos += 1;

    let first = scan_until(
        components,
        &mut pos,
        &[ComponentKind::ParallelBranchStart, ComponentKind::ParallelGroupEnd],
    );
    if !kind_at(components, pos, ComponentKind::ParallelBranchStart) {
        trace!("parallel group has a single branch");
        return None;
    }
    pos += 1;

    let second = scan_until(
        components,
        &mut pos,
        &[
            ComponentKind::ParallelBranchStart,
            ComponentKind::ParallelBranchEnd,
            ComponentKind::ParallelGroupEnd,
        ],
    );
    if kind_at(components, pos, ComponentKind::ParallelBranchEnd) {
        pos += 1;
    }
    if kind_at(components, pos, ComponentKind::ParallelBranchStart) {
        trace!("parallel group has more than two branches");
        return None;
    }
    if kind_at(components, pos, ComponentKind::ParallelGroupEnd) {
        pos += 1;
    }

    let after = scan_until(components, &mut pos, &[ComponentKind::ParallelGroupStart]);
    if pos < components.len() {
        trace!("second parallel group after the first");
        return None;
    }
    if before.has_unknown || after.has_unknown {
        trace!("unknown resistor outside the parallel group");
        return None;
    }

    let (su, sk) = match (first.has_unknown, second.has_unknown) {
        (true, false) => (first.known, second.known),
        (false, true) => (second.known, first.known),
        _ => {
            trace!("unknown resistor not confined to one branch");
            return None;
        }
    };

    Some(ParallelStructure {
        s0: before.known,
        s3: after.known,
        su,
        sk,
    })
}

fn scan_until(components: &[Component], pos: &mut usize, stops: &[ComponentKind]) -> BranchScan {
    let mut scan = BranchScan::default();
    while let Some(component) = components.get(*pos) {
        if stops.contains(&component.kind) {
            break;
        }
        if let Some(value) = component.known_value() {
            scan.known += value;
        }
        scan.has_unknown |= component.is_unknown();
        *pos += 1;
    }
    scan
}

fn kind_at(components: &[Component], pos: usize, kind: ComponentKind) -> bool {
    components.get(pos).is_some_and(|c| c.kind == kind)
}
