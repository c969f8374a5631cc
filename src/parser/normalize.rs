use tracing::debug;

use crate::circuit::{Component, ComponentKind, MAIN_DEPTH};

/// Guarantees the sequence opens with a generator lead.
///
/// When the notation did not start with a resistor, a zero-ohm lead is
/// prepended. Sequence indices are renumbered to match final positions.
pub fn ensure_generator_lead(mut components: Vec<Component>) -> Vec<Component> {
    let has_lead = components
        .first()
        .is_some_and(|c| c.kind == ComponentKind::GeneratorLead);

    if !has_lead {
        debug!("synthesizing zero-ohm generator lead");
        components.insert(0, Component::generator_lead(0, MAIN_DEPTH, 0.0));
        for (index, component) in components.iter_mut().enumerate() {
            component.sequence_index = index;
        }
    }

    components
}
