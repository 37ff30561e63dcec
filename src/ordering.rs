//! Priority resolver.
//!
//! Merges jobs and special projects into one total allocation order. The
//! sort is stable, so demands that compare equal on every criterion keep
//! their input order — but the final ID criterion makes the order total
//! whenever IDs are unique, which validation guarantees.
//!
//! # Ordering criteria
//!
//! 1. Urgent special projects before everything else
//! 2. Explicit rank from [`PriorityEntry::DemandRank`], ascending; ranked
//!    demands before unranked ones
//! 3. Declared weight, descending
//! 4. Demand ID, ascending

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::constraints::DemandConstraint;
use crate::models::PriorityEntry;

/// Returns demand indices in allocation order (first = served first).
///
/// Duplicate rank entries for one demand collapse to the lowest rank.
pub fn order_demands(demands: &[DemandConstraint], priorities: &[PriorityEntry]) -> Vec<usize> {
    let ranks = rank_map(priorities);

    let mut indices: Vec<usize> = (0..demands.len()).collect();
    indices.sort_by(|&a, &b| compare_demands(&demands[a], &demands[b], &ranks));
    indices
}

fn rank_map(priorities: &[PriorityEntry]) -> HashMap<&str, u32> {
    let mut ranks: HashMap<&str, u32> = HashMap::new();
    for entry in priorities {
        if let PriorityEntry::DemandRank { demand_id, rank } = entry {
            ranks
                .entry(demand_id.as_str())
                .and_modify(|r| *r = (*r).min(*rank))
                .or_insert(*rank);
        }
    }
    ranks
}

fn compare_demands(
    a: &DemandConstraint,
    b: &DemandConstraint,
    ranks: &HashMap<&str, u32>,
) -> Ordering {
    // Urgent first
    b.urgent
        .cmp(&a.urgent)
        // Explicit rank ascending, ranked before unranked
        .then_with(|| {
            let ra = ranks.get(a.demand_id.as_str());
            let rb = ranks.get(b.demand_id.as_str());
            match (ra, rb) {
                (Some(ra), Some(rb)) => ra.cmp(rb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        })
        // Weight descending
        .then_with(|| b.weight.total_cmp(&a.weight))
        // Deterministic final tiebreak
        .then_with(|| a.demand_id.cmp(&b.demand_id))
}
