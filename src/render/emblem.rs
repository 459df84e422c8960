//! Division emblems compiled into the binary and inlined into the
//! alternate badge, so the markup references no external image.

use crate::domain::Division;

/// Standalone `<svg>` element for the division, `None` for unknown profiles.
pub(super) fn emblem(division: Option<Division>) -> &'static str {
    match division {
        None => include_str!("../../assets/tiers/unknown.svg"),
        Some(Division::Unrated) => include_str!("../../assets/tiers/unrated.svg"),
        Some(Division::Bronze) => include_str!("../../assets/tiers/bronze.svg"),
        Some(Division::Silver) => include_str!("../../assets/tiers/silver.svg"),
        Some(Division::Gold) => include_str!("../../assets/tiers/gold.svg"),
        Some(Division::Platinum) => include_str!("../../assets/tiers/platinum.svg"),
        Some(Division::Diamond) => include_str!("../../assets/tiers/diamond.svg"),
        Some(Division::Ruby) => include_str!("../../assets/tiers/ruby.svg"),
        Some(Division::Master) => include_str!("../../assets/tiers/master.svg"),
    }
}
