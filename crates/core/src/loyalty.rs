//! Loyalty level engine: maps accumulated points to a named tier, computes
//! progress toward the next tier, and lists the rewards a tier unlocks.

use serde::Serialize;

/// An ordered loyalty tier. Tiers partition the non-negative point totals
/// into contiguous ranges; the highest tier has no ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Level {
    pub level: u8,
    pub name: &'static str,
    pub min_points: i64,
    pub next_level_points: Option<i64>,
}

/// Ascending by `min_points`; each tier's ceiling equals the next tier's
/// floor.
pub const LEVELS: &[Level] = &[
    Level { level: 1, name: "Principiante del Bienestar", min_points: 0, next_level_points: Some(100) },
    Level { level: 2, name: "Entusiasta del Bienestar", min_points: 100, next_level_points: Some(300) },
    Level { level: 3, name: "Experto del Bienestar", min_points: 300, next_level_points: Some(700) },
    Level { level: 4, name: "Maestro del Bienestar", min_points: 700, next_level_points: Some(1500) },
    Level { level: 5, name: "Gurú del Bienestar", min_points: 1500, next_level_points: None },
];

/// Resolves the tier for a point total: the highest tier whose floor is at
/// or below the total. Falls back to the lowest tier, which also absorbs
/// negative totals without validating them.
pub fn level_for_points(points: i64) -> &'static Level {
    LEVELS
        .iter()
        .rev()
        .find(|level| points >= level.min_points)
        .unwrap_or(&LEVELS[0])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub progress: i64,
    pub points_to_next: Option<i64>,
}

/// Progress toward the next tier, as a floored percentage capped at 100.
/// The caller supplies the tier previously resolved for `points`; the pair
/// is not re-validated here.
pub fn progress_to_next(points: i64, level: &Level) -> LevelProgress {
    let Some(next) = level.next_level_points else {
        return LevelProgress { progress: 100, points_to_next: None };
    };

    let span = next - level.min_points;
    let earned = points - level.min_points;
    let progress = (100 * earned).div_euclid(span).min(100);

    LevelProgress { progress, points_to_next: Some(next - points) }
}

/// A benefit unlocked at a given tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub id: &'static str,
    pub level: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const REWARDS: &[Reward] = &[
    Reward {
        id: "rew-001",
        level: 1,
        title: "Bienvenida a Caliope",
        description: "Acceso completo a nuestro catálogo de servicios y productos curados.",
    },
    Reward {
        id: "rew-002",
        level: 2,
        title: "Descuento del 5% en Productos",
        description: "Obtén un 5% de descuento permanente en todos los productos de nuestra tienda.",
    },
    Reward {
        id: "rew-003",
        level: 2,
        title: "Acceso a Meditaciones Guiadas",
        description: "Desbloquea una sección exclusiva con meditaciones guiadas para tu bienestar diario.",
    },
    Reward {
        id: "rew-004",
        level: 3,
        title: "Prioridad en Reservas",
        description: "Obtén acceso anticipado a la agenda de nuestros profesionales más solicitados.",
    },
    Reward {
        id: "rew-005",
        level: 3,
        title: "Descuento del 10% en Servicios",
        description: "Disfruta de un 10% de descuento en tu próximo servicio de masaje o facial.",
    },
    Reward {
        id: "rew-006",
        level: 4,
        title: "Consulta de Bienestar Gratuita",
        description: "Agenda una consulta gratuita de 30 minutos con uno de nuestros coaches de bienestar.",
    },
    Reward {
        id: "rew-007",
        level: 4,
        title: "Regalo Sorpresa",
        description: "Recibe un producto de nuestra tienda como regalo en tu próximo pedido superior a COP 150.000.",
    },
    Reward {
        id: "rew-008",
        level: 5,
        title: "Acceso VIP a Eventos",
        description: "Obtén invitaciones exclusivas a nuestros eventos y talleres de bienestar online y presenciales.",
    },
    Reward {
        id: "rew-009",
        level: 5,
        title: "Concierge Personalizado",
        description: "Un asistente personal te ayudará a planificar tu próxima experiencia de bienestar de lujo.",
    },
];

/// Rewards unlocked at or below the given tier.
pub fn unlocked_rewards(level: u8) -> impl Iterator<Item = &'static Reward> {
    REWARDS.iter().filter(move |reward| reward.level <= level)
}

/// Everything the profile summary renders for a point total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoyaltySummary {
    pub points: i64,
    pub level: &'static Level,
    pub progress: LevelProgress,
    pub unlocked_rewards: Vec<&'static Reward>,
}

pub fn loyalty_summary(points: i64) -> LoyaltySummary {
    let level = level_for_points(points);
    let progress = progress_to_next(points, level);
    let unlocked = unlocked_rewards(level.level).collect();

    LoyaltySummary { points, level, progress, unlocked_rewards: unlocked }
}

#[cfg(test)]
mod tests {
    use super::{level_for_points, loyalty_summary, progress_to_next, unlocked_rewards, LEVELS};

    #[test]
    fn tier_ranges_are_contiguous_and_ascending() {
        assert_eq!(LEVELS[0].min_points, 0);
        for pair in LEVELS.windows(2) {
            assert_eq!(pair[0].next_level_points, Some(pair[1].min_points));
            assert!(pair[0].min_points < pair[1].min_points);
        }
        assert_eq!(LEVELS.last().and_then(|level| level.next_level_points), None);
    }

    #[test]
    fn every_point_total_resolves_to_exactly_one_tier() {
        for points in 0..2000 {
            let level = level_for_points(points);
            assert!(level.min_points <= points);
            if let Some(next) = level.next_level_points {
                assert!(points < next);
            }
        }
    }

    #[test]
    fn boundary_totals_resolve_to_the_higher_tier() {
        assert_eq!(level_for_points(99).level, 1);
        assert_eq!(level_for_points(100).name, "Entusiasta del Bienestar");
        assert_eq!(level_for_points(300).level, 3);
        assert_eq!(level_for_points(1500).level, 5);
    }

    #[test]
    fn negative_points_fall_back_to_the_lowest_tier() {
        assert_eq!(level_for_points(-50).level, 1);
    }

    #[test]
    fn progress_uses_floor_semantics() {
        let level = level_for_points(150);
        let progress = progress_to_next(150, level);
        // 100 * 50 / 200 = 25 exactly; 151 points floors to 25 as well.
        assert_eq!(progress.progress, 25);
        assert_eq!(progress.points_to_next, Some(150));

        let progress = progress_to_next(151, level);
        assert_eq!(progress.progress, 25);
    }

    #[test]
    fn progress_is_monotonic_within_a_tier() {
        let level = level_for_points(100);
        let mut previous = i64::MIN;
        for points in 100..=300 {
            let progress = progress_to_next(points, level).progress;
            assert!(progress >= previous);
            previous = progress;
        }
    }

    #[test]
    fn progress_reaches_exactly_one_hundred_at_the_ceiling() {
        let level = level_for_points(100);
        assert_eq!(progress_to_next(300, level).progress, 100);
    }

    #[test]
    fn top_tier_reports_full_progress_with_no_ceiling() {
        let level = level_for_points(1500);
        let progress = progress_to_next(1500, level);
        assert_eq!(progress.progress, 100);
        assert_eq!(progress.points_to_next, None);

        let progress = progress_to_next(9_999, level_for_points(9_999));
        assert_eq!(progress.points_to_next, None);
    }

    #[test]
    fn rewards_unlock_cumulatively() {
        let level_one: Vec<_> = unlocked_rewards(1).collect();
        assert_eq!(level_one.len(), 1);

        let level_three: Vec<_> = unlocked_rewards(3).collect();
        assert_eq!(level_three.len(), 5);
        assert!(level_three.iter().all(|reward| reward.level <= 3));
    }

    #[test]
    fn summary_combines_level_progress_and_rewards() {
        let summary = loyalty_summary(325);
        assert_eq!(summary.level.level, 3);
        assert_eq!(summary.progress.progress, 6);
        assert_eq!(summary.progress.points_to_next, Some(375));
        assert_eq!(summary.unlocked_rewards.len(), 5);
    }
}
