//! Dashboard Page
//!
//! Best-effort aggregation of several independent backend resources:
//! student profile, progress, today's problem and recent activities.
//! Each slice is fetched concurrently and falls back to its own default
//! on failure, so one dead endpoint never takes down the page.

use leptos::*;

use crate::api;
use crate::components::loading::DashboardSkeleton;
use crate::components::ProgressBar;
use crate::components::StatCard;
use crate::state::dashboard::{
    default_activities, derive_achievements, format_time_spent, Activity, ProgressSummary, Student,
};
use crate::state::{GlobalState, Section};

/// Number of independent slices the aggregation fetches
const SLICE_COUNT: u32 = 4;

/// Resolve one slice fetch: the payload on success, the fallback plus
/// the error to log on failure. Keeps the degradation rule in one place
/// so a failed slice never reaches past its own default.
fn slice_or<T>(
    result: Result<T, String>,
    fallback: impl FnOnce() -> T,
) -> (T, Option<String>) {
    match result {
        Ok(value) => (value, None),
        Err(e) => (fallback(), Some(e)),
    }
}

/// The activities slice additionally treats an empty success as missing
/// data, so a fresh account still sees the starter entries.
fn activities_slice(result: Result<Vec<Activity>, String>) -> (Vec<Activity>, Option<String>) {
    match result {
        Ok(activities) if !activities.is_empty() => (activities, None),
        Ok(_) => (default_activities(), None),
        Err(e) => (default_activities(), Some(e)),
    }
}

fn log_slice_error(slice: &str, error: Option<String>) {
    if let Some(e) = error {
        web_sys::console::error_1(&format!("Failed to fetch {}: {}", slice, e).into());
    }
}

/// Issue the four slice fetches concurrently. Every completion writes
/// its own signal with `try_set`, so a response arriving after the page
/// unmounted is a no-op instead of a stale write.
fn load_dashboard(state: GlobalState, pending: RwSignal<u32>) {
    let student_id = state.auth.user.get_untracked().map(|u| u.id).unwrap_or(1);

    pending.set(SLICE_COUNT);

    spawn_local(async move {
        let (student, error) =
            slice_or(api::fetch_student(student_id).await, Student::default_student);
        log_slice_error("student", error);
        let _ = state.student.try_set(Some(student));
        let _ = pending.try_update(|p| *p = p.saturating_sub(1));
    });

    spawn_local(async move {
        let (progress, error) = slice_or(
            api::fetch_progress(student_id).await,
            ProgressSummary::default_progress,
        );
        log_slice_error("progress", error);
        let _ = state.progress.try_set(Some(progress));
        let _ = pending.try_update(|p| *p = p.saturating_sub(1));
    });

    spawn_local(async move {
        let (activities, error) = activities_slice(api::fetch_activities(student_id).await);
        log_slice_error("activities", error);
        let _ = state.activities.try_set(activities);
        let _ = pending.try_update(|p| *p = p.saturating_sub(1));
    });

    // The daily problem has no default: a failed call hides the widget
    spawn_local(async move {
        let problem = api::fetch_daily_problem().await.ok();
        let _ = state.today_problem.try_set(problem);
        let _ = pending.try_update(|p| *p = p.saturating_sub(1));
    });
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let pending = create_rw_signal(SLICE_COUNT);
    let loading = move || pending.get() > 0;

    // Fetch all slices on mount
    create_effect(move |_| {
        load_dashboard(state, pending);
    });

    let refresh = move |_| load_dashboard(state, pending);

    view! {
        {move || {
            if loading() {
                view! { <DashboardSkeleton /> }.into_view()
            } else {
                view! {
                    <div class="space-y-6">
                        // Header with refresh
                        <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                            <div>
                                <h1 class="text-3xl font-bold text-gray-900">
                                    {move || {
                                        let name = state.student.get()
                                            .map(|s| s.name)
                                            .unwrap_or_else(|| "Estudante".to_string());
                                        format!("Olá, {}! 👋", name)
                                    }}
                                </h1>
                                <p class="text-gray-600 mt-1">
                                    "Bem-vindo de volta à sua jornada de aprendizado"
                                </p>
                            </div>

                            <button
                                on:click=refresh
                                class="px-4 py-2 border rounded-lg text-sm font-medium
                                       hover:bg-gray-100 transition-colors"
                            >
                                "🔄 Atualizar"
                            </button>
                        </div>

                        <StatsRow />

                        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                            <RecentActivities />

                            <div class="space-y-6">
                                <TodayProblemCard />
                                <AchievementsCard />
                                <SubjectProgressCard />
                            </div>
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Top row of stat cards
#[component]
fn StatsRow() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let overall = Signal::derive(move || {
        state.progress.get().map(|p| p.overall_progress).unwrap_or(0)
    });
    let weekly = Signal::derive(move || {
        state.progress.get().map(|p| p.weekly_progress).unwrap_or(0)
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard
                title="Progresso Geral"
                icon="📈"
                value=Signal::derive(move || format!("{}%", overall.get()))
                progress=overall
            />
            <StatCard
                title="Meta Semanal"
                icon="🎯"
                value=Signal::derive(move || format!("{}%", weekly.get()))
                progress=weekly
                caption=Signal::derive(move || {
                    let goal = state.progress.get().map(|p| p.weekly_goal).unwrap_or(100);
                    format!("Meta: {}% por semana", goal)
                })
            />
            <StatCard
                title="Sequência"
                icon="📅"
                value=Signal::derive(move || {
                    state.student.get()
                        .map(|s| s.streak_days.to_string())
                        .unwrap_or_else(|| "0".to_string())
                })
                caption=Signal::derive(|| "dias consecutivos".to_string())
            />
            <StatCard
                title="Tempo Total"
                icon="⏱️"
                value=Signal::derive(move || {
                    let minutes = state.progress.get().map(|p| p.total_time_minutes).unwrap_or(0);
                    format_time_spent(minutes)
                })
                caption=Signal::derive(|| "tempo de estudo".to_string())
            />
        </div>
    }
}

/// Recent activity list
#[component]
fn RecentActivities() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="lg:col-span-2 bg-white border rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"📖 Atividades Recentes"</h2>
            <p class="text-sm text-gray-500 mb-4">"Suas últimas interações com a plataforma"</p>

            <div class="space-y-4">
                {move || {
                    let activities = state.activities.get();
                    if activities.is_empty() {
                        view! {
                            <div class="text-center py-8 text-gray-500">
                                <p>"Nenhuma atividade recente"</p>
                                <p class="text-sm">"Comece explorando a plataforma!"</p>
                            </div>
                        }.into_view()
                    } else {
                        activities.into_iter().map(|activity| view! {
                            <ActivityRow activity=activity />
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    let progress = activity.progress;
    let (status_label, status_class) = match activity.status.as_str() {
        "completed" => ("Concluído", "bg-green-100 text-green-800"),
        "in_progress" => ("Em Progresso", "bg-blue-100 text-blue-800"),
        _ => ("Não Iniciado", "bg-gray-100 text-gray-800"),
    };

    view! {
        <div class="flex items-start space-x-4 p-4 rounded-lg border">
            <span class="text-2xl">{subject_icon(&activity.subject)}</span>
            <div class="flex-1 min-w-0">
                <div class="flex items-center justify-between">
                    <p class="text-sm font-medium text-gray-900">{activity.subject.clone()}</p>
                    <span class=format!("px-2 py-1 rounded text-xs {}", status_class)>
                        {status_label}
                    </span>
                </div>
                <p class="text-sm text-gray-600 mt-1">{activity.topic.clone()}</p>
                <div class="flex items-center space-x-4 mt-2">
                    <div class="w-24">
                        <ProgressBar value=Signal::derive(move || progress) />
                    </div>
                    <span class="text-xs text-gray-500">{format!("{}%", activity.progress)}</span>
                    <span class="text-xs text-gray-500">
                        {format_time_spent(activity.time_spent)}
                    </span>
                </div>
                {activity.ai_recommendation.clone().map(|rec| view! {
                    <div class="mt-2 p-2 bg-blue-50 rounded text-xs text-blue-800">
                        {format!("💡 {}", rec)}
                    </div>
                })}
            </div>
        </div>
    }
}

/// Today's problem teaser, hidden when the slice failed to load
#[component]
fn TodayProblemCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.today_problem.get().map(|problem| {
                let teaser: String = problem.description.chars().take(100).collect();
                view! {
                    <section class="bg-white border rounded-xl p-6">
                        <h2 class="text-lg font-semibold mb-2">"🧠 Problema do Dia"</h2>
                        <h4 class="font-medium mb-2">{problem.title}</h4>
                        <p class="text-sm text-gray-600 mb-4">{format!("{}...", teaser)}</p>
                        <button
                            on:click=move |_| state.navigate(Section::Problem)
                            class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white
                                   rounded-lg text-sm font-medium transition-colors"
                        >
                            "▶ Resolver Agora"
                        </button>
                    </section>
                }
            })
        }}
    }
}

/// Achievements derived from the loaded slices
#[component]
fn AchievementsCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-white border rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">"🏆 Conquistas"</h2>

            <div class="space-y-3">
                {move || {
                    let student = state.student.get().unwrap_or_else(Student::default_student);
                    let progress = state.progress.get()
                        .unwrap_or_else(ProgressSummary::default_progress);

                    derive_achievements(&student, &progress).into_iter().map(|a| {
                        let row_class = if a.earned { "bg-yellow-50" } else { "bg-gray-50" };
                        let title_class = if a.earned { "text-gray-900" } else { "text-gray-500" };
                        view! {
                            <div class=format!("flex items-center space-x-3 p-2 rounded {}", row_class)>
                                <span class="text-xl">{a.icon}</span>
                                <div class="flex-1">
                                    <p class=format!("text-sm font-medium {}", title_class)>
                                        {a.title}
                                    </p>
                                    <p class="text-xs text-gray-500">{a.description}</p>
                                </div>
                                {a.earned.then(|| view! {
                                    <span class="text-green-500">"✓"</span>
                                })}
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// Per-subject progress bars
#[component]
fn SubjectProgressCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-white border rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">"📚 Progresso por Matéria"</h2>

            <div class="space-y-4">
                {move || {
                    let progress = state.progress.get()
                        .unwrap_or_else(ProgressSummary::default_progress);

                    progress.subjects_sorted().into_iter().map(|(subject, data)| {
                        let value = data.progress;
                        view! {
                            <div class="space-y-2">
                                <div class="flex justify-between text-sm">
                                    <span class="capitalize">{subject_label(&subject)}</span>
                                    <span>{format!("{}%", value)}</span>
                                </div>
                                <ProgressBar value=Signal::derive(move || value) />
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// Icon for a subject name
fn subject_icon(subject: &str) -> &'static str {
    match subject {
        "Matemática" => "📐",
        "Ciências" => "🔬",
        "História" => "🏛️",
        "Português" => "📖",
        "Geografia" => "🌎",
        "Tutor de IA" => "⚡",
        _ => "📚",
    }
}

/// Display label for a subject key from the API
fn subject_label(subject: &str) -> String {
    match subject {
        "mathematics" => "Matemática".to_string(),
        "science" => "Ciências".to_string(),
        "history" => "História".to_string(),
        "portuguese" => "Português".to_string(),
        "geography" => "Geografia".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_passes_payload_through_on_success() {
        let student = Student {
            id: 7,
            name: "Ana".to_string(),
            grade: "7º Ano".to_string(),
            total_study_time: 30,
            streak_days: 4,
        };
        let (resolved, error) = slice_or(Ok(student.clone()), Student::default_student);
        assert_eq!(resolved, student);
        assert!(error.is_none());
    }

    #[test]
    fn test_failed_slice_falls_back_to_its_default() {
        let (resolved, error) = slice_or(
            Err::<Student, _>("connection refused".to_string()),
            Student::default_student,
        );
        assert_eq!(resolved, Student::default_student());
        assert_eq!(error, Some("connection refused".to_string()));
    }

    #[test]
    fn test_one_failed_slice_leaves_the_others_intact() {
        // Progress fails, the student slice succeeded: each resolves on
        // its own, the failure never reaches the other payload.
        let student = Student::default_student();
        let (resolved_student, student_error) =
            slice_or(Ok(student.clone()), Student::default_student);
        let (resolved_progress, progress_error) = slice_or(
            Err::<ProgressSummary, _>("500".to_string()),
            ProgressSummary::default_progress,
        );

        assert_eq!(resolved_student, student);
        assert!(student_error.is_none());
        assert_eq!(resolved_progress, ProgressSummary::default_progress());
        assert!(progress_error.is_some());
    }

    #[test]
    fn test_empty_activities_get_starter_entries() {
        let (resolved, error) = activities_slice(Ok(Vec::new()));
        assert_eq!(resolved, default_activities());
        assert!(error.is_none());

        let (resolved, error) = activities_slice(Err("timeout".to_string()));
        assert_eq!(resolved, default_activities());
        assert!(error.is_some());
    }
}
