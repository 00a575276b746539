//! Sign propagation table.
//!
//! | intervention | link     | effect   |
//! |--------------|----------|----------|
//! | increase     | positive | increase |
//! | increase     | negative | decrease |
//! | decrease     | positive | decrease |
//! | decrease     | negative | increase |
//! | anything else           || change   |

use causeway_core::models::{EffectDirection, LinkKind};

/// Direction induced on a link target by an intervention of the given type.
pub fn effect_direction(intervention_type: &str, link_kind: LinkKind) -> EffectDirection {
    EffectDirection::from_intervention(intervention_type).through(link_kind)
}

/// Same table keyed by raw labels. An unknown link label yields `Change`.
pub fn effect_direction_from_labels(intervention_type: &str, link_kind: &str) -> EffectDirection {
    match LinkKind::from_str_name(link_kind) {
        Some(kind) => effect_direction(intervention_type, kind),
        None => EffectDirection::Change,
    }
}
