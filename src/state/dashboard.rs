//! Dashboard View Models
//!
//! Read-only snapshot types assembled from several independent backend
//! calls. Every slice has its own hardcoded default so a failed call
//! degrades only that slice, never the whole page.

use std::collections::HashMap;

/// Student profile slice
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub total_study_time: u32,
    #[serde(default)]
    pub streak_days: u32,
}

impl Student {
    /// Fallback shown when the profile call fails
    pub fn default_student() -> Self {
        Self {
            id: 1,
            name: "Estudante Curió".to_string(),
            grade: "Ensino Fundamental".to_string(),
            total_study_time: 0,
            streak_days: 0,
        }
    }
}

/// Per-subject progress slice
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct SubjectProgress {
    pub progress: u32,
    #[serde(default)]
    pub last_activity: Option<String>,
}

/// Aggregated progress slice
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ProgressSummary {
    pub overall_progress: u32,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
    #[serde(default)]
    pub subjects: HashMap<String, SubjectProgress>,
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub total_time_minutes: u32,
}

impl ProgressSummary {
    /// Fallback shown when the progress call fails
    pub fn default_progress() -> Self {
        let subjects = [
            ("mathematics", 20),
            ("science", 15),
            ("history", 10),
            ("portuguese", 18),
            ("geography", 12),
        ]
        .into_iter()
        .map(|(name, progress)| {
            (
                name.to_string(),
                SubjectProgress {
                    progress,
                    last_activity: None,
                },
            )
        })
        .collect();

        Self {
            overall_progress: 15,
            weekly_goal: 100,
            weekly_progress: 25,
            subjects,
            total_sessions: 0,
            total_time_minutes: 0,
        }
    }

    /// Subjects sorted by name for stable rendering
    pub fn subjects_sorted(&self) -> Vec<(String, SubjectProgress)> {
        let mut entries: Vec<_> = self
            .subjects
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// One recent-activity entry
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub subject: String,
    pub topic: String,
    pub progress: u32,
    #[serde(default)]
    pub time_spent: u32,
    pub status: String,
    #[serde(default)]
    pub ai_recommendation: Option<String>,
}

/// Fallback recent-activity list
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            subject: "Matemática".to_string(),
            topic: "Explorando o Método de Singapura".to_string(),
            progress: 25,
            time_spent: 15,
            status: "in_progress".to_string(),
            ai_recommendation: Some("Continue praticando! Você está indo muito bem.".to_string()),
        },
        Activity {
            id: 2,
            subject: "Tutor de IA".to_string(),
            topic: "Conversa sobre ciências".to_string(),
            progress: 100,
            time_spent: 10,
            status: "completed".to_string(),
            ai_recommendation: Some("Ótimas perguntas! Continue curioso.".to_string()),
        },
    ]
}

/// The daily problem slice. Has no local default: a failed call simply
/// hides the widget.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct DailyProblem {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Achievement derived locally from the student and progress slices
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedAchievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

/// Compute the dashboard's achievement list from whatever data the
/// aggregation produced. Unearned entries double as upcoming goals.
pub fn derive_achievements(student: &Student, progress: &ProgressSummary) -> Vec<DerivedAchievement> {
    let mut achievements = Vec::new();

    if progress.total_sessions > 0 {
        achievements.push(DerivedAchievement {
            title: "Primeiro Passo",
            description: "Completou sua primeira atividade",
            icon: "▶️",
            earned: true,
        });
    }

    if student.streak_days >= 3 {
        achievements.push(DerivedAchievement {
            title: "Dedicação",
            description: "3 dias consecutivos de estudo",
            icon: "📅",
            earned: true,
        });
    }

    if progress
        .subjects
        .get("mathematics")
        .map(|s| s.progress >= 20)
        .unwrap_or(false)
    {
        achievements.push(DerivedAchievement {
            title: "Explorador da Matemática",
            description: "20% de progresso em matemática",
            icon: "🏆",
            earned: true,
        });
    }

    achievements.push(DerivedAchievement {
        title: "Pensador Crítico",
        description: "Complete 10 problemas do dia",
        icon: "🧠",
        earned: false,
    });

    achievements
}

/// Format minutes as "Xmin" or "Xh Ymin"
pub fn format_time_spent(minutes: u32) -> String {
    if minutes < 60 {
        format!("{}min", minutes)
    } else {
        format!("{}h {}min", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_student_has_zero_streak() {
        let student = Student::default_student();
        assert_eq!(student.streak_days, 0);
        assert_eq!(student.name, "Estudante Curió");
    }

    #[test]
    fn test_default_progress_has_all_subjects() {
        let progress = ProgressSummary::default_progress();
        assert_eq!(progress.subjects.len(), 5);
        assert_eq!(progress.subjects["mathematics"].progress, 20);
        assert_eq!(progress.overall_progress, 15);
    }

    #[test]
    fn test_subjects_sorted_is_stable() {
        let progress = ProgressSummary::default_progress();
        let sorted = progress.subjects_sorted();
        let names: Vec<_> = sorted.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["geography", "history", "mathematics", "portuguese", "science"]
        );
    }

    #[test]
    fn test_derived_achievements_from_defaults() {
        // Defaults: no sessions, zero streak, mathematics at 20%
        let student = Student::default_student();
        let progress = ProgressSummary::default_progress();
        let achievements = derive_achievements(&student, &progress);

        let earned: Vec<_> = achievements.iter().filter(|a| a.earned).collect();
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].title, "Explorador da Matemática");
        // The upcoming goal is always present
        assert!(achievements.iter().any(|a| a.title == "Pensador Crítico" && !a.earned));
    }

    #[test]
    fn test_derived_achievements_with_activity() {
        let mut student = Student::default_student();
        student.streak_days = 5;
        let mut progress = ProgressSummary::default_progress();
        progress.total_sessions = 3;

        let achievements = derive_achievements(&student, &progress);
        assert!(achievements.iter().any(|a| a.title == "Primeiro Passo" && a.earned));
        assert!(achievements.iter().any(|a| a.title == "Dedicação" && a.earned));
    }

    #[test]
    fn test_format_time_spent() {
        assert_eq!(format_time_spent(45), "45min");
        assert_eq!(format_time_spent(60), "1h 0min");
        assert_eq!(format_time_spent(135), "2h 15min");
    }
}
