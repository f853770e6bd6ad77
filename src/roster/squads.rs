// Squad partition transform: split the top of the roster into two
// power-balanced squads plus alternating reserve pools.
//
// The balancing pass is a greedy online heuristic carried over verbatim
// from the alliance's established deployment rule: one forward pass in
// score order, no backtracking, hard 20-member cap per squad, with the
// Alpha-cap check taking precedence over the Bravo-full overflow check.
// Treat it as a fixed contract, not a partition to optimize.

use crate::model::PlayerRecord;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Tunable knobs of the squad split. Defaults reproduce the observed
/// 55/45 deployment behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquadPolicy {
    /// Target share of active-pool power assigned to Alpha.
    pub target_ratio: f64,
    /// Acceptable overshoot above the target before a player spills to Bravo.
    pub tolerance: f64,
    /// Hard member cap per squad.
    pub squad_size: usize,
    /// Number of top scorers eligible for main squad assignment.
    pub active_pool: usize,
    /// Number of players after the active pool eligible as alternates.
    pub reserve_pool: usize,
}

impl Default for SquadPolicy {
    fn default() -> Self {
        SquadPolicy {
            target_ratio: 0.55,
            tolerance: 0.05,
            squad_size: 20,
            active_pool: 40,
            reserve_pool: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// Assignment result
// ---------------------------------------------------------------------------

/// Full output of one partition pass. Derived data only: recomputed from
/// the snapshot on every invocation, never cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SquadAssignment {
    pub alpha: Vec<PlayerRecord>,
    pub bravo: Vec<PlayerRecord>,
    pub alpha_reserve: Vec<PlayerRecord>,
    pub bravo_reserve: Vec<PlayerRecord>,
    /// Cumulative power per squad.
    pub alpha_power: u64,
    pub bravo_power: u64,
    /// Squad power as a percentage of the active-pool total (not the
    /// grand roster total). 0.0 when the active pool has no power.
    pub alpha_percent: f64,
    pub bravo_percent: f64,
}

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------

/// Split the roster into Alpha/Bravo squads and their reserve pools.
///
/// 1. Sort descending by final score; the first `active_pool` players form
///    the active pool, the next `reserve_pool` the reserve pool. Short
///    rosters simply yield shorter pools.
/// 2. Greedy forward pass over the active pool: a player joins Alpha when
///    the hypothetical Alpha share stays within `target_ratio + tolerance`
///    and Alpha has room, or unconditionally once Bravo is full.
/// 3. Reserves alternate Alpha/Bravo by position in score order.
pub fn partition_squads(players: &[PlayerRecord], policy: &SquadPolicy) -> SquadAssignment {
    let mut by_score = players.to_vec();
    by_score.sort_by(|a, b| {
        b.score_final
            .partial_cmp(&a.score_final)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let active_end = policy.active_pool.min(by_score.len());
    let reserve_end = (policy.active_pool + policy.reserve_pool).min(by_score.len());
    let active = &by_score[..active_end];
    let reserves = &by_score[active_end..reserve_end];

    let total_active_power: u64 = active.iter().map(|p| p.power).sum();

    let mut alpha = Vec::new();
    let mut bravo = Vec::new();
    let mut alpha_power: u64 = 0;
    let mut processed_power: u64 = 0;

    for player in active {
        processed_power += player.power;

        // Share Alpha would hold if this player joined it. With an
        // all-zero-power prefix this is NaN, which fails the comparison
        // and sends the player to Bravo, matching the original pass.
        let hypothetical = (alpha_power + player.power) as f64 / processed_power as f64;
        let fits_target = hypothetical <= policy.target_ratio + policy.tolerance;

        if (fits_target && alpha.len() < policy.squad_size) || bravo.len() >= policy.squad_size {
            alpha_power += player.power;
            alpha.push(player.clone());
        } else {
            bravo.push(player.clone());
        }
    }

    let mut alpha_reserve = Vec::new();
    let mut bravo_reserve = Vec::new();
    for (i, player) in reserves.iter().enumerate() {
        if i % 2 == 0 {
            alpha_reserve.push(player.clone());
        } else {
            bravo_reserve.push(player.clone());
        }
    }

    let bravo_power: u64 = bravo.iter().map(|p| p.power).sum();

    SquadAssignment {
        alpha_percent: percent_of(alpha_power, total_active_power),
        bravo_percent: percent_of(bravo_power, total_active_power),
        alpha,
        bravo,
        alpha_reserve,
        bravo_reserve,
        alpha_power,
        bravo_power,
    }
}

/// Share of `part` in `total` as a percentage; 0.0 when `total` is zero
/// (empty or all-zero-power active pool) so no NaN reaches the display.
fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn player(rank: u32, power: u64, score: f64) -> PlayerRecord {
        PlayerRecord {
            rank,
            name: format!("Player{rank:03}"),
            donations: 0,
            vs: 0,
            power,
            note_donations: 0.0,
            note_vs: 0.0,
            note_force: 0.0,
            score_final: score,
        }
    }

    /// Roster of `n` players with descending scores and varied power.
    fn roster(n: u32) -> Vec<PlayerRecord> {
        (1..=n)
            .map(|i| {
                let power = 10_000_000 + (i as u64 % 7) * 3_500_000;
                player(i, power, 300.0 - i as f64)
            })
            .collect()
    }

    fn names(players: &[PlayerRecord]) -> Vec<&str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn partition_covers_active_pool_exactly() {
        let players = roster(62);
        let a = partition_squads(&players, &SquadPolicy::default());

        assert_eq!(a.alpha.len() + a.bravo.len(), 40);
        assert!(a.alpha.len() <= 20);
        assert!(a.bravo.len() <= 20);

        // Disjoint and equal to the top 40 by score.
        let mut assigned = names(&a.alpha);
        assigned.extend(names(&a.bravo));
        assigned.sort_unstable();
        assigned.dedup();
        assert_eq!(assigned.len(), 40, "no player dropped or duplicated");

        let mut by_score = players.clone();
        by_score.sort_by(|x, y| y.score_final.partial_cmp(&x.score_final).unwrap());
        let mut expected = names(&by_score[..40]);
        expected.sort_unstable();
        assert_eq!(assigned, expected);
    }

    #[test]
    fn powers_sum_to_active_pool_total() {
        let players = roster(62);
        let a = partition_squads(&players, &SquadPolicy::default());

        let mut by_score = players.clone();
        by_score.sort_by(|x, y| y.score_final.partial_cmp(&x.score_final).unwrap());
        let total: u64 = by_score[..40].iter().map(|p| p.power).sum();

        assert_eq!(a.alpha_power + a.bravo_power, total);
        assert!((a.alpha_percent + a.bravo_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn alpha_share_lands_near_target() {
        let players = roster(62);
        let a = partition_squads(&players, &SquadPolicy::default());
        // Greedy pass is approximate; it should still land in a sane band
        // around the 55% target for a well-mixed power distribution.
        assert!(a.alpha_percent > 40.0 && a.alpha_percent < 65.0,
            "alpha share {} out of band", a.alpha_percent);
    }

    #[test]
    fn reserve_pool_alternates_by_score_order() {
        let players = roster(60);
        let a = partition_squads(&players, &SquadPolicy::default());

        assert_eq!(a.alpha_reserve.len(), 10);
        assert_eq!(a.bravo_reserve.len(), 10);

        // Ranks 41-60 alternate alpha, bravo, alpha, ...
        assert_eq!(a.alpha_reserve[0].rank, 41);
        assert_eq!(a.bravo_reserve[0].rank, 42);
        assert_eq!(a.alpha_reserve[9].rank, 59);
        assert_eq!(a.bravo_reserve[9].rank, 60);
    }

    #[test]
    fn short_roster_shrinks_pools_without_error() {
        let players = roster(47);
        let a = partition_squads(&players, &SquadPolicy::default());
        assert_eq!(a.alpha.len() + a.bravo.len(), 40);
        assert_eq!(a.alpha_reserve.len() + a.bravo_reserve.len(), 7);
        assert_eq!(a.alpha_reserve.len(), 4);
        assert_eq!(a.bravo_reserve.len(), 3);
    }

    #[test]
    fn tiny_roster_fits_entirely_in_active_pool() {
        let players = roster(5);
        let a = partition_squads(&players, &SquadPolicy::default());
        assert_eq!(a.alpha.len() + a.bravo.len(), 5);
        assert!(a.alpha_reserve.is_empty());
        assert!(a.bravo_reserve.is_empty());
    }

    #[test]
    fn empty_roster_yields_empty_assignment_and_zero_percent() {
        let a = partition_squads(&[], &SquadPolicy::default());
        assert!(a.alpha.is_empty());
        assert!(a.bravo.is_empty());
        assert!(a.alpha_reserve.is_empty());
        assert!(a.bravo_reserve.is_empty());
        assert_eq!(a.alpha_power, 0);
        assert_eq!(a.bravo_power, 0);
        assert_eq!(a.alpha_percent, 0.0);
        assert_eq!(a.bravo_percent, 0.0);
    }

    #[test]
    fn zero_power_pool_guards_division() {
        let players: Vec<PlayerRecord> =
            (1..=40).map(|i| player(i, 0, 300.0 - i as f64)).collect();
        let a = partition_squads(&players, &SquadPolicy::default());
        assert_eq!(a.alpha_percent, 0.0);
        assert_eq!(a.bravo_percent, 0.0);
        assert!(a.alpha_percent.is_finite());
        assert!(a.bravo_percent.is_finite());
        // Every player still gets assigned somewhere.
        assert_eq!(a.alpha.len() + a.bravo.len(), 40);
    }

    #[test]
    fn identical_power_pool_respects_caps() {
        // 40 identical-power players: the ratio check oscillates, the caps
        // keep both squads at exactly 20, and nobody is dropped.
        let players: Vec<PlayerRecord> =
            (1..=40).map(|i| player(i, 5_000_000, 300.0 - i as f64)).collect();
        let a = partition_squads(&players, &SquadPolicy::default());
        assert_eq!(a.alpha.len(), 20);
        assert_eq!(a.bravo.len(), 20);
        assert_eq!(a.alpha_power, a.bravo_power);
        assert!((a.alpha_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn first_player_always_opens_in_bravo() {
        // The first hypothetical ratio is exactly 1.0 (the player would be
        // all of the processed power), which always exceeds the target band.
        let players = roster(40);
        let a = partition_squads(&players, &SquadPolicy::default());
        assert_eq!(a.bravo[0].rank, 1);
    }

    #[test]
    fn bravo_full_overflows_to_alpha_even_over_target() {
        // Tripling powers keep each new player above 60% of the cumulative
        // power, so the ratio check fails for all of the first 21 players.
        // The first 20 fill Bravo; player 21 still fails the check but must
        // overflow into Alpha because Bravo is at its cap.
        let players: Vec<PlayerRecord> = (1..=40)
            .map(|i| {
                let power = if i <= 21 { 3u64.pow(i) } else { 1 };
                player(i, power, 400.0 - i as f64)
            })
            .collect();
        let a = partition_squads(&players, &SquadPolicy::default());

        assert_eq!(a.bravo.len(), 20);
        assert!(a.bravo.iter().all(|p| p.rank <= 20));
        assert_eq!(a.alpha.len(), 20);
        // The overflow player lands in Alpha first, ahead of the small fry.
        assert_eq!(a.alpha[0].rank, 21);
    }

    #[test]
    fn greedy_pass_is_order_dependent_not_optimal() {
        // The heuristic is path-dependent on score order: permuting input
        // order must not change the result because assignment happens on
        // the score-sorted pool.
        let players = roster(60);
        let mut shuffled = players.clone();
        shuffled.reverse();
        let a = partition_squads(&players, &SquadPolicy::default());
        let b = partition_squads(&shuffled, &SquadPolicy::default());
        assert_eq!(names(&a.alpha), names(&b.alpha));
        assert_eq!(names(&a.bravo), names(&b.bravo));
    }

    #[test]
    fn custom_policy_sizes_are_honored() {
        let players = roster(30);
        let policy = SquadPolicy {
            squad_size: 5,
            active_pool: 10,
            reserve_pool: 6,
            ..SquadPolicy::default()
        };
        let a = partition_squads(&players, &policy);
        assert_eq!(a.alpha.len() + a.bravo.len(), 10);
        assert!(a.alpha.len() <= 5 && a.bravo.len() <= 5);
        assert_eq!(a.alpha_reserve.len(), 3);
        assert_eq!(a.bravo_reserve.len(), 3);
    }
}
