use std::collections::BTreeMap;

use super::super::domain::{Role, RoleAssignment};
use super::RoleStanding;

/// Build the descending ranking. Stable sort over [`Role::ALL`] order with
/// total score as the primary key and strong-signal count as the tie-breaker;
/// roles equal on both keys keep the fixed iteration order, which doubles as
/// the deterministic final tie-break. Rank numbers use competition semantics:
/// tied entries share a rank and the next distinct entry skips past them
/// (1, 1, 3, ...).
pub(crate) fn rank_roles(
    totals: &BTreeMap<Role, i32>,
    strong_signal_counts: &BTreeMap<Role, u32>,
) -> Vec<RoleStanding> {
    let mut standings: Vec<RoleStanding> = Role::ALL
        .into_iter()
        .map(|role| RoleStanding {
            role,
            total: totals.get(&role).copied().unwrap_or(0),
            strong_signals: strong_signal_counts.get(&role).copied().unwrap_or(0),
            rank: 0,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then(b.strong_signals.cmp(&a.strong_signals))
    });

    for position in 0..standings.len() {
        let rank = if position > 0
            && standings[position].total == standings[position - 1].total
            && standings[position].strong_signals == standings[position - 1].strong_signals
        {
            standings[position - 1].rank
        } else {
            position + 1
        };
        standings[position].rank = rank;
    }

    standings
}

/// Resolve the tied-for-first set into a primary/secondary assignment.
pub(crate) fn assign_primary(
    ranked: &[RoleStanding],
) -> (RoleAssignment, Option<Role>, bool) {
    let leaders: Vec<Role> = ranked
        .iter()
        .filter(|standing| standing.rank == 1)
        .map(|standing| standing.role)
        .collect();

    match leaders.len() {
        0 => (RoleAssignment::Single(Role::Be), None, false), // unreachable with a fixed role set
        1 => {
            let secondary = ranked.get(1).map(|standing| standing.role);
            (RoleAssignment::Single(leaders[0]), secondary, false)
        }
        2 => (
            // Natural tie order as produced by the stable sort.
            RoleAssignment::Hybrid(leaders[0], leaders[1]),
            Some(leaders[1]),
            true,
        ),
        _ => {
            // Degenerate many-way tie: alphabetically first two of the tied set.
            let mut alphabetical = leaders;
            alphabetical.sort_by(|a, b| a.id().cmp(b.id()));
            (
                RoleAssignment::Hybrid(alphabetical[0], alphabetical[1]),
                Some(alphabetical[1]),
                true,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps(entries: [(Role, i32, u32); 4]) -> (BTreeMap<Role, i32>, BTreeMap<Role, u32>) {
        let mut totals = BTreeMap::new();
        let mut strong = BTreeMap::new();
        for (role, total, signals) in entries {
            totals.insert(role, total);
            strong.insert(role, signals);
        }
        (totals, strong)
    }

    #[test]
    fn strong_signals_break_score_ties_without_a_tie() {
        let (totals, strong) = maps([
            (Role::Be, 8, 1),
            (Role::Fe, 8, 3),
            (Role::Qa, 2, 0),
            (Role::Pm, 0, 0),
        ]);
        let ranked = rank_roles(&totals, &strong);

        assert_eq!(ranked[0].role, Role::Fe);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].role, Role::Be);
        assert_eq!(ranked[1].rank, 2);

        let (primary, secondary, tie) = assign_primary(&ranked);
        assert_eq!(primary, RoleAssignment::Single(Role::Fe));
        assert_eq!(secondary, Some(Role::Be));
        assert!(!tie);
    }

    #[test]
    fn equal_keys_share_rank_and_skip_the_next() {
        let (totals, strong) = maps([
            (Role::Be, 8, 2),
            (Role::Fe, 8, 2),
            (Role::Qa, 4, 0),
            (Role::Pm, 1, 0),
        ]);
        let ranked = rank_roles(&totals, &strong);

        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 1);
        assert_eq!(ranked[2].rank, 3);
        assert_eq!(ranked[3].rank, 4);

        let (primary, secondary, tie) = assign_primary(&ranked);
        assert_eq!(primary, RoleAssignment::Hybrid(Role::Be, Role::Fe));
        assert_eq!(secondary, Some(Role::Fe));
        assert!(tie);
    }

    #[test]
    fn two_way_tie_keeps_natural_order_not_alphabetical() {
        // QA precedes PM in the fixed iteration order even though "pm" sorts
        // before "qa" alphabetically.
        let (totals, strong) = maps([
            (Role::Be, 0, 0),
            (Role::Fe, 1, 0),
            (Role::Qa, 6, 1),
            (Role::Pm, 6, 1),
        ]);
        let ranked = rank_roles(&totals, &strong);
        let (primary, _, tie) = assign_primary(&ranked);

        assert!(tie);
        assert_eq!(primary.label(), "QA + PM");
    }

    #[test]
    fn many_way_tie_falls_back_to_alphabetical_pair() {
        let (totals, strong) = maps([
            (Role::Be, 0, 0),
            (Role::Fe, 0, 0),
            (Role::Qa, 0, 0),
            (Role::Pm, 0, 0),
        ]);
        let ranked = rank_roles(&totals, &strong);
        assert!(ranked.iter().all(|standing| standing.rank == 1));

        let (primary, secondary, tie) = assign_primary(&ranked);
        assert!(tie);
        assert_eq!(primary.label(), "BE + FE");
        assert_eq!(secondary, Some(Role::Fe));
    }
}
