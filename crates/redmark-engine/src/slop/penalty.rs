//! Converts a combined slop score into a raw score penalty. Per-type
//! scaling and capping happen in the penalty policy, not here.

use redmark_core::constants::{
    SEVERITY_HEAVY_MIN, SEVERITY_LIGHT_MIN, SEVERITY_MODERATE_MIN, SEVERITY_SEVERE_MIN,
};

/// Pattern-hit floor before a light slop score draws any penalty.
const LIGHT_HIT_FLOOR: u32 = 5;

pub fn raw_penalty(score: u32, pattern_hits: u32) -> u32 {
    if score >= SEVERITY_SEVERE_MIN {
        8
    } else if score >= SEVERITY_HEAVY_MIN {
        6
    } else if score >= SEVERITY_MODERATE_MIN {
        4
    } else if score >= SEVERITY_LIGHT_MIN && pattern_hits >= LIGHT_HIT_FLOOR {
        2
    } else {
        0
    }
}
