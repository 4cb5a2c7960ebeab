use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Streak,
    Rate,
}

#[derive(Debug, Serialize)]
pub struct Badge {
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: u32,
    #[serde(skip)]
    pub kind: BadgeKind,
}

/// Catalog order is also the order earned badges are reported in.
pub static CATALOG: [Badge; 5] = [
    Badge {
        id: "streak-3",
        name: "Getting Started",
        description: "3 day streak",
        icon: "🌱",
        requirement: 3,
        kind: BadgeKind::Streak,
    },
    Badge {
        id: "streak-7",
        name: "Week Warrior",
        description: "7 day streak",
        icon: "🔥",
        requirement: 7,
        kind: BadgeKind::Streak,
    },
    Badge {
        id: "streak-30",
        name: "Month Master",
        description: "30 day streak",
        icon: "💪",
        requirement: 30,
        kind: BadgeKind::Streak,
    },
    Badge {
        id: "streak-100",
        name: "Century Club",
        description: "100 day streak",
        icon: "💯",
        requirement: 100,
        kind: BadgeKind::Streak,
    },
    Badge {
        id: "consistent",
        name: "Consistency King",
        description: "90% completion rate",
        icon: "👑",
        requirement: 90,
        kind: BadgeKind::Rate,
    },
];

/// Streak badges unlock on the best streak and the rate badge on the
/// completion percentage. The current streak rides along in the stats
/// surface but gates nothing here.
pub fn earned_badges(_current_streak: u32, best_streak: u32, completion_rate: u32) -> Vec<String> {
    CATALOG
        .iter()
        .filter(|badge| match badge.kind {
            BadgeKind::Streak => best_streak >= badge.requirement,
            BadgeKind::Rate => completion_rate >= badge.requirement,
        })
        .map(|badge| badge.id.to_string())
        .collect()
}
