//! Outcome tables for ball resolution.
//!
//! All resolution functions are pure over an injected RNG - they draw from
//! the generator passed in and touch no other state, so they can be unit
//! tested without a full `MatchEngine`.
//!
//! Tables are a fixed mapping from action enum to an ordered list of
//! (outcome, cumulative-threshold) pairs, computed once per difficulty at
//! first use rather than re-derived per ball.

use once_cell::sync::Lazy;
use rand::Rng;

use crate::models::{BallOutcome, DeliveryType, Difficulty, ShotType};

/// Runs credited per batting outcome, in resolution order. The cumulative
/// walk visits outcomes in exactly this order.
pub const BATTING_OUTCOMES: [u8; 5] = [0, 1, 2, 4, 6];

/// Base probability mass per shot, row-aligned with `ShotType::ALL` and
/// column-aligned with `BATTING_OUTCOMES`.
const BASE_SHOT_MASS: [[f64; 5]; 5] = [
    [0.40, 0.30, 0.20, 0.08, 0.02], // Defensive
    [0.20, 0.30, 0.25, 0.20, 0.05], // Drive
    [0.15, 0.25, 0.30, 0.25, 0.05], // Pull
    [0.30, 0.25, 0.25, 0.15, 0.05], // Sweep
    [0.10, 0.20, 0.25, 0.30, 0.15], // Aggressive
];

/// Per-delivery (wicket, dot) mass, row-aligned with `DeliveryType::ALL`.
/// The remaining mass is the runs band, split uniformly across 1-6.
const DELIVERY_MASS: [(f64, f64); 4] = [
    (0.15, 0.30), // Fast
    (0.20, 0.25), // Spin
    (0.25, 0.40), // Yorker
    (0.30, 0.20), // Bouncer
];

/// Cumulative thresholds for one shot, aligned with `BATTING_OUTCOMES`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotTable {
    pub cumulative: [f64; 5],
}

/// Cumulative band edges for one delivery: a draw below `wicket` dismisses
/// the batter, below `dot` scores nothing, anything above lands in the runs
/// band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryTable {
    pub wicket: f64,
    pub dot: f64,
}

/// All resolution tables for one difficulty setting.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeTables {
    difficulty: Difficulty,
    shots: [ShotTable; 5],
    deliveries: [DeliveryTable; 4],
}

static EASY_TABLES: Lazy<OutcomeTables> = Lazy::new(|| OutcomeTables::build(Difficulty::Easy));
static NORMAL_TABLES: Lazy<OutcomeTables> = Lazy::new(|| OutcomeTables::build(Difficulty::Normal));
static HARD_TABLES: Lazy<OutcomeTables> = Lazy::new(|| OutcomeTables::build(Difficulty::Hard));

/// Shared tables for a difficulty, built on first access.
pub fn tables_for(difficulty: Difficulty) -> &'static OutcomeTables {
    match difficulty {
        Difficulty::Easy => &EASY_TABLES,
        Difficulty::Normal => &NORMAL_TABLES,
        Difficulty::Hard => &HARD_TABLES,
    }
}

/// Additive difficulty perturbation of one shot's mass. Easy shifts mass
/// from dots to boundaries, hard the other way. The adjusted masses are
/// deliberately NOT clamped or renormalized: on hard, Defensive's six-mass
/// goes slightly negative and the cumulative walk simply never reaches it,
/// matching the resolution semantics the tables were calibrated against.
fn adjust_mass(mass: [f64; 5], difficulty: Difficulty) -> [f64; 5] {
    let [dot, one, two, four, six] = mass;
    match difficulty {
        Difficulty::Normal => mass,
        Difficulty::Easy => [dot - 0.15, one, two, four + 0.10, six + 0.05],
        Difficulty::Hard => [dot + 0.10, one, two, four - 0.05, six - 0.05],
    }
}

impl OutcomeTables {
    fn build(difficulty: Difficulty) -> Self {
        let mut shots = [ShotTable { cumulative: [0.0; 5] }; 5];
        for (i, base) in BASE_SHOT_MASS.iter().enumerate() {
            let mass = adjust_mass(*base, difficulty);
            let mut cumulative = [0.0; 5];
            let mut acc = 0.0;
            for (j, m) in mass.iter().enumerate() {
                acc += m;
                cumulative[j] = acc;
            }
            shots[i] = ShotTable { cumulative };
        }

        let mut deliveries = [DeliveryTable { wicket: 0.0, dot: 0.0 }; 4];
        for (i, (wicket, dot)) in DELIVERY_MASS.iter().enumerate() {
            deliveries[i] = DeliveryTable { wicket: *wicket, dot: wicket + dot };
        }

        Self { difficulty, shots, deliveries }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn shot(&self, shot: ShotType) -> &ShotTable {
        &self.shots[shot as usize]
    }

    pub fn delivery(&self, delivery: DeliveryType) -> &DeliveryTable {
        &self.deliveries[delivery as usize]
    }

    /// Resolve one batting ball: uniform draw in [0,1), walked through the
    /// cumulative thresholds in declared outcome order. The first threshold
    /// meeting or exceeding the draw wins. If modifier drift leaves the
    /// final threshold below the draw, the result falls back to 0 runs;
    /// that fallback is load-bearing for reproducibility and must stay.
    pub fn resolve_shot(&self, shot: ShotType, rng: &mut impl Rng) -> u8 {
        let draw = rng.gen::<f64>();
        let table = self.shot(shot);
        for (i, threshold) in table.cumulative.iter().enumerate() {
            if draw <= *threshold {
                return BATTING_OUTCOMES[i];
            }
        }
        0
    }

    /// Resolve one bowling ball: wicket band, then dot band, then a uniform
    /// run value in 1-6 from a second draw.
    pub fn resolve_delivery(&self, delivery: DeliveryType, rng: &mut impl Rng) -> BallOutcome {
        let bands = self.delivery(delivery);
        let draw = rng.gen::<f64>();
        if draw < bands.wicket {
            BallOutcome::Wicket
        } else if draw < bands.dot {
            BallOutcome::Runs(0)
        } else {
            BallOutcome::Runs(rng.gen_range(1..=6))
        }
    }
}

/// Uniform pick from the shot set, used when the caller supplies no action.
pub fn random_shot(rng: &mut impl Rng) -> ShotType {
    ShotType::ALL[rng.gen_range(0..ShotType::ALL.len())]
}

/// Uniform pick from the delivery set, used when the caller supplies no
/// action.
pub fn random_delivery(rng: &mut impl Rng) -> DeliveryType {
    DeliveryType::ALL[rng.gen_range(0..DeliveryType::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_normal_mass_sums_to_one() {
        let tables = tables_for(Difficulty::Normal);
        for shot in ShotType::ALL {
            let last = tables.shot(shot).cumulative[4];
            assert!((last - 1.0).abs() < 1e-9, "{:?} mass sums to {}", shot, last);
        }
    }

    #[test]
    fn test_modifier_preserves_total_mass() {
        // Easy moves -0.15 / +0.10 / +0.05, hard +0.10 / -0.05 / -0.05;
        // either way the total is unchanged.
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let tables = tables_for(difficulty);
            for shot in ShotType::ALL {
                let last = tables.shot(shot).cumulative[4];
                assert!((last - 1.0).abs() < 1e-9, "{:?}/{:?}: {}", difficulty, shot, last);
            }
        }
    }

    #[test]
    fn test_easy_fattens_boundaries() {
        let normal = tables_for(Difficulty::Normal);
        let easy = tables_for(Difficulty::Easy);
        for shot in ShotType::ALL {
            // Dot threshold drops by 0.15 on easy.
            let delta = normal.shot(shot).cumulative[0] - easy.shot(shot).cumulative[0];
            assert!((delta - 0.15).abs() < 1e-9);
        }
    }

    #[test]
    fn test_delivery_bands_ordered() {
        let tables = tables_for(Difficulty::Normal);
        for delivery in DeliveryType::ALL {
            let bands = tables.delivery(delivery);
            assert!(bands.wicket > 0.0);
            assert!(bands.dot > bands.wicket);
            assert!(bands.dot < 1.0);
        }
    }

    #[test]
    fn test_bowling_untouched_by_difficulty() {
        let normal = tables_for(Difficulty::Normal);
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let other = tables_for(difficulty);
            for delivery in DeliveryType::ALL {
                assert_eq!(normal.delivery(delivery), other.delivery(delivery));
            }
        }
    }

    #[test]
    fn test_resolve_shot_band_edges() {
        let tables = tables_for(Difficulty::Normal);
        // Defensive cumulative: 0.40, 0.70, 0.90, 0.98, 1.00.
        let mut rng = ScriptedRng::from_uniform_draws(&[0.10, 0.40, 0.55, 0.89, 0.95, 0.99]);
        assert_eq!(tables.resolve_shot(ShotType::Defensive, &mut rng), 0);
        assert_eq!(tables.resolve_shot(ShotType::Defensive, &mut rng), 0); // draw == threshold
        assert_eq!(tables.resolve_shot(ShotType::Defensive, &mut rng), 1);
        assert_eq!(tables.resolve_shot(ShotType::Defensive, &mut rng), 2);
        assert_eq!(tables.resolve_shot(ShotType::Defensive, &mut rng), 4);
        assert_eq!(tables.resolve_shot(ShotType::Defensive, &mut rng), 6);
    }

    #[test]
    fn test_resolve_delivery_bands() {
        let tables = tables_for(Difficulty::Normal);
        // Fast: wicket < 0.15, dot < 0.45, runs otherwise.
        let mut rng = ScriptedRng::from_uniform_draws(&[0.10]);
        assert_eq!(tables.resolve_delivery(DeliveryType::Fast, &mut rng), BallOutcome::Wicket);

        let mut rng = ScriptedRng::from_uniform_draws(&[0.30]);
        assert_eq!(tables.resolve_delivery(DeliveryType::Fast, &mut rng), BallOutcome::Runs(0));

        let mut rng = ScriptedRng::from_uniform_draws(&[0.90]);
        match tables.resolve_delivery(DeliveryType::Fast, &mut rng) {
            BallOutcome::Runs(r) => assert!((1..=6).contains(&r)),
            BallOutcome::Wicket => panic!("draw in runs band produced a wicket"),
        }
    }

    #[test]
    fn test_hard_defensive_never_hits_six() {
        // Hard shifts six-mass on Defensive to -0.03; the four-threshold
        // already covers the whole unit interval so a six is unreachable.
        let tables = tables_for(Difficulty::Hard);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50_000 {
            assert_ne!(tables.resolve_shot(ShotType::Defensive, &mut rng), 6);
        }
    }

    /// Probability each outcome actually receives under the first-match
    /// cumulative walk: thresholds clamp to [0,1] and a later band shadowed
    /// by an earlier overflow gets nothing; mass above the final threshold
    /// falls back to 0 runs.
    fn effective_mass(cumulative: [f64; 5]) -> [f64; 5] {
        let mut out = [0.0; 5];
        let mut prev = 0.0f64;
        for (i, threshold) in cumulative.iter().enumerate() {
            let cur = threshold.min(1.0).max(prev);
            out[i] = cur - prev;
            prev = cur;
        }
        out[0] += 1.0 - prev;
        out
    }

    #[test]
    fn test_shot_distribution_convergence() {
        // 10k trials per shot x difficulty must sit within sampling
        // tolerance of the (modifier-adjusted) distribution.
        let trials = 10_000u32;
        for difficulty in Difficulty::ALL {
            let tables = tables_for(difficulty);
            for (s, shot) in ShotType::ALL.iter().enumerate() {
                let expected = effective_mass(tables.shot(*shot).cumulative);

                let mut rng = ChaCha8Rng::seed_from_u64(1000 + s as u64);
                let mut counts = [0u32; 5];
                for _ in 0..trials {
                    let runs = tables.resolve_shot(*shot, &mut rng);
                    let idx = BATTING_OUTCOMES.iter().position(|r| *r == runs).unwrap();
                    counts[idx] += 1;
                }

                for (idx, count) in counts.iter().enumerate() {
                    let freq = *count as f64 / trials as f64;
                    assert!(
                        (freq - expected[idx]).abs() < 0.02,
                        "{:?}/{:?} outcome {} freq {} expected {}",
                        difficulty,
                        shot,
                        BATTING_OUTCOMES[idx],
                        freq,
                        expected[idx]
                    );
                }
            }
        }
    }

    #[test]
    fn test_delivery_distribution_convergence() {
        let trials = 10_000u32;
        let tables = tables_for(Difficulty::Normal);
        for (d, delivery) in DeliveryType::ALL.iter().enumerate() {
            let (wicket_mass, dot_mass) = DELIVERY_MASS[d];
            let mut rng = ChaCha8Rng::seed_from_u64(2000 + d as u64);
            let mut wickets = 0u32;
            let mut dots = 0u32;
            for _ in 0..trials {
                match tables.resolve_delivery(*delivery, &mut rng) {
                    BallOutcome::Wicket => wickets += 1,
                    BallOutcome::Runs(0) => dots += 1,
                    BallOutcome::Runs(r) => assert!((1..=6).contains(&r)),
                }
            }
            let wicket_freq = wickets as f64 / trials as f64;
            let dot_freq = dots as f64 / trials as f64;
            assert!((wicket_freq - wicket_mass).abs() < 0.02, "{:?}: {}", delivery, wicket_freq);
            assert!((dot_freq - dot_mass).abs() < 0.02, "{:?}: {}", delivery, dot_freq);
        }
    }

    #[test]
    fn test_random_pickers_cover_full_sets() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut shots_seen = std::collections::HashSet::new();
        let mut deliveries_seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            shots_seen.insert(random_shot(&mut rng));
            deliveries_seen.insert(random_delivery(&mut rng));
        }
        assert_eq!(shots_seen.len(), ShotType::ALL.len());
        assert_eq!(deliveries_seen.len(), DeliveryType::ALL.len());
    }
}
