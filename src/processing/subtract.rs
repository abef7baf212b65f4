//! Coverage subtraction.
//!
//! Computes which parts of a target prefix are left uncovered by a set of
//! more specific prefixes.

use crate::models::Prefix;
use crate::processing::aggregate_prefixes;
use std::cmp::Reverse;

/// Return the parts of `target` not covered by any prefix in `covers`.
///
/// Only covers inside `target` count; prefixes outside it or larger than it
/// subtract nothing. Those covers are aggregated first, so nested, duplicate
/// or overlapping covers behave like their union. The aggregated covers are
/// then applied most specific first (longest prefix, then highest base
/// address): a cover inside an uncovered block splits that block by
/// bisection, and a cover equal to the block removes it.
///
/// With no covers the result is `[target]`.
pub fn subtract_prefixes(target: Prefix, covers: &[Prefix]) -> Vec<Prefix> {
    let mut order = aggregate_prefixes(covers.iter().filter(|c| c.subnet_of(&target)));
    order.sort_by_key(|c| Reverse((c.prefix_len(), c.bits())));

    let mut uncovered = vec![target];
    for cover in &order {
        if uncovered.is_empty() {
            break;
        }
        uncovered = uncovered
            .into_iter()
            .flat_map(|block| block.exclude(cover).unwrap_or_else(|| vec![block]))
            .collect();
    }

    log::trace!(
        "subtract_prefixes({target}) with {} covers ({} after aggregation) -> {} uncovered",
        covers.len(),
        order.len(),
        uncovered.len()
    );
    uncovered
}
