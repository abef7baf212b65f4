//! Prefix aggregation (CIDR collapse).
//!
//! Reduces a list of possibly overlapping prefixes to the smallest sorted set
//! covering exactly the same addresses.

use crate::models::Prefix;
use itertools::Itertools;

/// Collapse `prefixes` into the minimal covering set.
///
/// Nested prefixes are dropped and sibling pairs are merged into their parent
/// until nothing changes. The result is sorted by base address and contains
/// no overlapping or mergeable entries, so aggregating it again returns it
/// unchanged.
pub fn aggregate_prefixes<'a, I>(prefixes: I) -> Vec<Prefix>
where
    I: IntoIterator<Item = &'a Prefix>,
{
    let mut current: Vec<Prefix> = prefixes.into_iter().copied().sorted().dedup().collect();
    let input_count = current.len();

    loop {
        let (collapsed, changed) = collapse_pass(&current);
        current = collapsed;
        if !changed {
            break;
        }
    }

    log::trace!(
        "aggregate_prefixes() {input_count} -> {} prefixes",
        current.len()
    );
    current
}

/// One sweep over a sorted list. Returns the new list and whether anything
/// was dropped or merged.
fn collapse_pass(sorted: &[Prefix]) -> (Vec<Prefix>, bool) {
    let mut out: Vec<Prefix> = Vec::with_capacity(sorted.len());
    let mut changed = false;

    for net in sorted {
        if let Some(last) = out.last().copied() {
            if net.subnet_of(&last) {
                changed = true;
                continue;
            }
            if let Some(parent) = last.merge_sibling(net) {
                out.pop();
                out.push(parent);
                changed = true;
                continue;
            }
        }
        out.push(*net);
    }

    (out, changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(list: &[&str]) -> Vec<Prefix> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_aggregate_siblings() {
        let input = nets(&["10.0.0.128/25", "10.0.0.0/25"]);
        assert_eq!(aggregate_prefixes(&input), nets(&["10.0.0.0/24"]));
    }

    #[test]
    fn test_aggregate_cascading_merge() {
        let input = nets(&[
            "10.0.0.0/26",
            "10.0.0.64/26",
            "10.0.0.128/26",
            "10.0.0.192/26",
            "10.0.1.0/24",
        ]);
        assert_eq!(aggregate_prefixes(&input), nets(&["10.0.0.0/23"]));
    }

    #[test]
    fn test_aggregate_drops_nested_and_duplicates() {
        let input = nets(&[
            "10.1.2.0/24",
            "10.0.0.0/8",
            "10.1.2.0/24",
            "192.168.0.0/24",
            "10.255.255.255/32",
        ]);
        assert_eq!(
            aggregate_prefixes(&input),
            nets(&["10.0.0.0/8", "192.168.0.0/24"])
        );
    }

    #[test]
    fn test_aggregate_keeps_non_siblings_apart() {
        // Adjacent but not siblings: 10.0.1.0/24 + 10.0.2.0/24 is not a /23
        let input = nets(&["10.0.2.0/24", "10.0.1.0/24"]);
        assert_eq!(
            aggregate_prefixes(&input),
            nets(&["10.0.1.0/24", "10.0.2.0/24"])
        );
    }

    #[test]
    fn test_aggregate_whole_space() {
        let input = nets(&["128.0.0.0/1", "0.0.0.0/1"]);
        assert_eq!(aggregate_prefixes(&input), nets(&["0.0.0.0/0"]));
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_prefixes(&Vec::new()).is_empty());
    }

    #[test]
    fn test_aggregate_idempotent() {
        let input = nets(&[
            "172.16.4.0/24",
            "172.16.5.0/24",
            "172.16.6.0/23",
            "172.16.9.0/24",
            "10.10.0.0/16",
            "10.10.128.0/17",
            "192.168.100.16/28",
        ]);
        let once = aggregate_prefixes(&input);
        assert_eq!(
            once,
            nets(&[
                "10.10.0.0/16",
                "172.16.4.0/22",
                "172.16.9.0/24",
                "192.168.100.16/28"
            ])
        );
        let twice = aggregate_prefixes(&once);
        assert_eq!(once, twice, "Aggregating an aggregated set must not change it");
    }
}
