//! Components of a parsed resistor network.
//!
//! A component is either a resistor (known, unknown or the generator lead)
//! or a structural marker. Markers carry no value and only shape how the
//! evaluator walks the sequence or how a renderer lays it out.
use serde::{Deserialize, Serialize};

/// Depth of components on the main path.
pub const MAIN_DEPTH: i32 = 0;

/// Depth of components inside a `||` ... `=` parallel branch.
pub const BRANCH_DEPTH: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    KnownResistor,
    UnknownResistor,
    SeriesConnector,
    /// Single `|`, layout only.
    Bend,
    ParallelGroupStart,
    ParallelGroupEnd,
    ParallelBranchStart,
    ParallelBranchEnd,
    /// First resistor next to the power source. Evaluates like a known resistor.
    GeneratorLead,
    Terminator,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::KnownResistor => "known_resistor",
            ComponentKind::UnknownResistor => "unknown_resistor",
            ComponentKind::SeriesConnector => "series_connector",
            ComponentKind::Bend => "bend",
            ComponentKind::ParallelGroupStart => "parallel_group_start",
            ComponentKind::ParallelGroupEnd => "parallel_group_end",
            ComponentKind::ParallelBranchStart => "parallel_branch_start",
            ComponentKind::ParallelBranchEnd => "parallel_branch_end",
            ComponentKind::GeneratorLead => "generator_lead",
            ComponentKind::Terminator => "terminator",
        }
    }

    pub fn is_parallel_delimiter(&self) -> bool {
        matches!(
            self,
            ComponentKind::ParallelGroupStart
                | ComponentKind::ParallelGroupEnd
                | ComponentKind::ParallelBranchStart
                | ComponentKind::ParallelBranchEnd
        )
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub kind: ComponentKind,
    /// Position in the sequence, used for layout.
    pub sequence_index: usize,
    pub depth: i32,
    /// Resistance in ohms. `None` for markers and for the unknown resistor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Component {
    pub fn known(sequence_index: usize, depth: i32, value: f64) -> Self {
        Self {
            kind: ComponentKind::KnownResistor,
            sequence_index,
            depth,
            value: Some(value),
        }
    }

    pub fn generator_lead(sequence_index: usize, depth: i32, value: f64) -> Self {
        Self {
            kind: ComponentKind::GeneratorLead,
            sequence_index,
            depth,
            value: Some(value),
        }
    }

    pub fn unknown(sequence_index: usize, depth: i32) -> Self {
        Self {
            kind: ComponentKind::UnknownResistor,
            sequence_index,
            depth,
            value: None,
        }
    }

    pub fn marker(kind: ComponentKind, sequence_index: usize, depth: i32) -> Self {
        Self {
            kind,
            sequence_index,
            depth,
            value: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == ComponentKind::UnknownResistor
    }

    /// Resistance contributed to a known-value sum, if any.
    pub fn known_value(&self) -> Option<f64> {
        match self.kind {
            ComponentKind::KnownResistor | ComponentKind::GeneratorLead => self.value,
            _ => None,
        }
    }
}
