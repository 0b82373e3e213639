//! Gamification View Models
//!
//! Points, levels, streaks, achievements and leaderboard, each slice
//! independently fetched and independently defaulted.

use std::collections::HashMap;

/// Per-subject study time and progress
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct SubjectStats {
    pub progress: u32,
    #[serde(default)]
    pub time_spent: u32,
}

/// Streak counters
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct StreakInfo {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_study_days: u32,
}

/// Points and level block
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct PointsInfo {
    pub total_points: u32,
    pub points_this_week: u32,
    pub points_this_month: u32,
    pub level: u32,
    pub level_progress: u32,
    pub points_to_next_level: u32,
}

/// The student's full gamification progress slice
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct GamificationProgress {
    pub overall_progress: u32,
    pub total_time_minutes: u32,
    pub total_exercises: u32,
    pub total_correct: u32,
    pub accuracy: f64,
    #[serde(default)]
    pub subject_progress: HashMap<String, SubjectStats>,
    #[serde(default)]
    pub streak: StreakInfo,
    #[serde(default)]
    pub points: PointsInfo,
}

impl GamificationProgress {
    /// Fallback when the progress call fails
    pub fn mock() -> Self {
        let subject_progress = [
            ("mathematics", 45, 180),
            ("science", 30, 120),
            ("history", 25, 90),
            ("portuguese", 40, 90),
        ]
        .into_iter()
        .map(|(name, progress, time_spent)| {
            (
                name.to_string(),
                SubjectStats {
                    progress,
                    time_spent,
                },
            )
        })
        .collect();

        Self {
            overall_progress: 35,
            total_time_minutes: 480,
            total_exercises: 45,
            total_correct: 38,
            accuracy: 84.4,
            subject_progress,
            streak: StreakInfo {
                current_streak: 7,
                longest_streak: 12,
                total_study_days: 28,
            },
            points: PointsInfo {
                total_points: 1250,
                points_this_week: 180,
                points_this_month: 720,
                level: 13,
                level_progress: 50,
                points_to_next_level: 150,
            },
        }
    }
}

/// Achievement definition from the backend catalog
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct AchievementDef {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default = "default_rarity")]
    pub rarity: String,
}

fn default_rarity() -> String {
    "common".to_string()
}

/// An achievement the student earned or is working towards
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct StudentAchievement {
    pub achievement: AchievementDef,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub earned_at: Option<String>,
}

/// Achievements slice, partitioned by state
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct AchievementSet {
    #[serde(default)]
    pub earned: Vec<StudentAchievement>,
    #[serde(default)]
    pub in_progress: Vec<StudentAchievement>,
    #[serde(default)]
    pub available: Vec<AchievementDef>,
}

impl AchievementSet {
    /// Fallback when the achievements call fails
    pub fn mock() -> Self {
        Self {
            earned: vec![
                StudentAchievement {
                    achievement: AchievementDef {
                        id: 1,
                        name: "Primeiro Passo".to_string(),
                        description: "Complete seu primeiro exercício".to_string(),
                        icon: "▶️".to_string(),
                        category: "progress".to_string(),
                        points: 10,
                        rarity: "common".to_string(),
                    },
                    progress: 100,
                    earned_at: None,
                },
                StudentAchievement {
                    achievement: AchievementDef {
                        id: 2,
                        name: "Dedicado".to_string(),
                        description: "Estude por 3 dias consecutivos".to_string(),
                        icon: "📅".to_string(),
                        category: "streak".to_string(),
                        points: 25,
                        rarity: "common".to_string(),
                    },
                    progress: 100,
                    earned_at: None,
                },
            ],
            in_progress: vec![StudentAchievement {
                achievement: AchievementDef {
                    id: 3,
                    name: "Persistente".to_string(),
                    description: "Estude por 7 dias consecutivos".to_string(),
                    icon: "🎯".to_string(),
                    category: "streak".to_string(),
                    points: 50,
                    rarity: "rare".to_string(),
                },
                progress: 85,
                earned_at: None,
            }],
            available: vec![AchievementDef {
                id: 4,
                name: "Maratonista".to_string(),
                description: "Estude por 30 dias consecutivos".to_string(),
                icon: "🏆".to_string(),
                category: "streak".to_string(),
                points: 200,
                rarity: "legendary".to_string(),
            }],
        }
    }
}

/// One leaderboard row
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct LeaderboardEntry {
    pub position: u32,
    pub name: String,
    pub points: u32,
    #[serde(default)]
    pub level: u32,
}

/// CSS classes for an achievement rarity badge
pub fn rarity_color(rarity: &str) -> &'static str {
    match rarity {
        "rare" => "text-blue-600 bg-blue-100",
        "epic" => "text-purple-600 bg-purple-100",
        "legendary" => "text-yellow-600 bg-yellow-100",
        _ => "text-gray-600 bg-gray-100",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_progress_is_consistent() {
        let progress = GamificationProgress::mock();
        assert!(progress.total_correct <= progress.total_exercises);
        assert_eq!(progress.subject_progress.len(), 4);
        assert_eq!(progress.streak.current_streak, 7);
    }

    #[test]
    fn test_mock_achievements_partitioned() {
        let set = AchievementSet::mock();
        assert!(set.earned.iter().all(|a| a.progress == 100));
        assert!(set.in_progress.iter().all(|a| a.progress < 100));
        assert!(!set.available.is_empty());
    }

    #[test]
    fn test_rarity_color_falls_back_to_common() {
        assert_eq!(rarity_color("unknown"), rarity_color("common"));
        assert_ne!(rarity_color("legendary"), rarity_color("common"));
    }
}
