//! Gamification Page
//!
//! Points, level, streaks, achievements and the leaderboard, aggregated
//! from independent backend calls with per-slice mock fallbacks.

use leptos::*;

use crate::api;
use crate::components::loading::ListSkeleton;
use crate::components::ProgressBar;
use crate::components::StatCard;
use crate::state::dashboard::{format_time_spent, Activity};
use crate::state::gamification::{
    rarity_color, AchievementDef, AchievementSet, GamificationProgress, LeaderboardEntry,
    StudentAchievement,
};
use crate::state::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum GamificationTab {
    Overview,
    Achievements,
    Leaderboard,
}

/// Gamification section component
#[component]
pub fn Gamification() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (tab, set_tab) = create_signal(GamificationTab::Overview);
    let (progress, set_progress) = create_signal(None::<GamificationProgress>);
    let (achievements, set_achievements) = create_signal(None::<AchievementSet>);
    let (activities, set_activities) = create_signal(Vec::<Activity>::new());
    let (leaderboard, set_leaderboard) = create_signal(Vec::<LeaderboardEntry>::new());

    // Four independent fetches; each slice degrades on its own
    create_effect(move |_| {
        let student_id = state.auth.user.get_untracked().map(|u| u.id).unwrap_or(1);

        spawn_local(async move {
            let data = match api::fetch_gamification_progress(student_id).await {
                Ok(data) => data,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch gamification progress: {}", e).into(),
                    );
                    GamificationProgress::mock()
                }
            };
            let _ = set_progress.try_set(Some(data));
        });

        spawn_local(async move {
            let data = match api::fetch_achievements(student_id).await {
                Ok(data) => data,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch achievements: {}", e).into(),
                    );
                    AchievementSet::mock()
                }
            };
            let _ = set_achievements.try_set(Some(data));
        });

        spawn_local(async move {
            if let Ok(data) = api::fetch_gamification_activities(student_id, 10).await {
                let _ = set_activities.try_set(data);
            }
        });

        spawn_local(async move {
            if let Ok(data) = api::fetch_leaderboard(10).await {
                let _ = set_leaderboard.try_set(data);
            }
        });
    });

    view! {
        <div class="max-w-5xl mx-auto py-4 space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"⭐ Conquistas e Progresso"</h1>

            // Tab bar
            <div class="flex space-x-1 bg-gray-100 rounded-lg p-1 max-w-md">
                <GamificationTabButton label="Visão Geral" current=tab target=GamificationTab::Overview set_tab=set_tab />
                <GamificationTabButton label="Conquistas" current=tab target=GamificationTab::Achievements set_tab=set_tab />
                <GamificationTabButton label="Ranking" current=tab target=GamificationTab::Leaderboard set_tab=set_tab />
            </div>

            {move || {
                match tab.get() {
                    GamificationTab::Overview => view! {
                        <Overview progress=progress activities=activities />
                    }.into_view(),
                    GamificationTab::Achievements => view! {
                        <Achievements achievements=achievements />
                    }.into_view(),
                    GamificationTab::Leaderboard => view! {
                        <Leaderboard leaderboard=leaderboard />
                    }.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn GamificationTabButton(
    label: &'static str,
    current: ReadSignal<GamificationTab>,
    target: GamificationTab,
    set_tab: WriteSignal<GamificationTab>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_tab.set(target)
            class=move || {
                let base = "flex-1 py-2 px-3 rounded-md text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-white shadow", base)
                } else {
                    format!("{} text-gray-500 hover:text-gray-900", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Overview tab: level, points, streak, accuracy, subject breakdown
#[component]
fn Overview(
    progress: ReadSignal<Option<GamificationProgress>>,
    activities: ReadSignal<Vec<Activity>>,
) -> impl IntoView {
    view! {
        {move || {
            match progress.get() {
                None => view! { <ListSkeleton count=4 /> }.into_view(),
                Some(data) => {
                    let level = data.points.level;
                    let level_progress = data.points.level_progress;
                    let points_to_next = data.points.points_to_next_level;
                    let total_points = data.points.total_points;
                    let points_this_week = data.points.points_this_week;
                    let current_streak = data.streak.current_streak;
                    let longest_streak = data.streak.longest_streak;
                    let accuracy = data.accuracy;
                    let total_correct = data.total_correct;
                    let total_exercises = data.total_exercises;
                    view! {
                        <div class="space-y-6">
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                                <StatCard
                                    title="Nível"
                                    icon="👑"
                                    value=Signal::derive(move || level.to_string())
                                    progress=Signal::derive(move || level_progress)
                                    caption=Signal::derive(move || {
                                        format!("{} pontos para o próximo nível", points_to_next)
                                    })
                                />
                                <StatCard
                                    title="Pontos Totais"
                                    icon="⚡"
                                    value=Signal::derive(move || total_points.to_string())
                                    caption=Signal::derive(move || {
                                        format!("+{} esta semana", points_this_week)
                                    })
                                />
                                <StatCard
                                    title="Sequência Atual"
                                    icon="🔥"
                                    value=Signal::derive(move || {
                                        format!("{} dias", current_streak)
                                    })
                                    caption=Signal::derive(move || {
                                        format!("Recorde: {} dias", longest_streak)
                                    })
                                />
                                <StatCard
                                    title="Precisão"
                                    icon="🎯"
                                    value=Signal::derive(move || format!("{:.1}%", accuracy))
                                    caption=Signal::derive(move || {
                                        format!("{} de {} exercícios", total_correct, total_exercises)
                                    })
                                />
                            </div>

                            <SubjectBreakdown progress=data.clone() />
                            <ActivityFeed activities=activities />
                        </div>
                    }.into_view()
                }
            }
        }}
    }
}

/// Study time and progress per subject
#[component]
fn SubjectBreakdown(progress: GamificationProgress) -> impl IntoView {
    let mut subjects: Vec<_> = progress.subject_progress.into_iter().collect();
    subjects.sort_by(|a, b| a.0.cmp(&b.0));

    view! {
        <section class="bg-white border rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">"📚 Desempenho por Matéria"</h2>
            <div class="space-y-4">
                {subjects.into_iter().map(|(subject, stats)| {
                    let value = stats.progress;
                    view! {
                        <div class="space-y-2">
                            <div class="flex justify-between text-sm">
                                <span class="capitalize">{subject}</span>
                                <span class="text-gray-500">
                                    {format!("{}% · {}", value, format_time_spent(stats.time_spent))}
                                </span>
                            </div>
                            <ProgressBar value=Signal::derive(move || value) />
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

/// Recent gamification activity feed
#[component]
fn ActivityFeed(activities: ReadSignal<Vec<Activity>>) -> impl IntoView {
    view! {
        <section class="bg-white border rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">"🕘 Atividades Recentes"</h2>
            {move || {
                let items = activities.get();
                if items.is_empty() {
                    view! {
                        <p class="text-gray-500 text-sm">"Nenhuma atividade registrada ainda."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-2">
                            {items.into_iter().map(|activity| view! {
                                <div class="flex items-center justify-between py-2 border-b last:border-0">
                                    <div>
                                        <span class="text-sm font-medium">{activity.subject}</span>
                                        <span class="text-sm text-gray-500 ml-2">{activity.topic}</span>
                                    </div>
                                    <span class="text-xs text-gray-500">
                                        {format_time_spent(activity.time_spent)}
                                    </span>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// Achievements tab: earned, in progress and still locked
#[component]
fn Achievements(achievements: ReadSignal<Option<AchievementSet>>) -> impl IntoView {
    view! {
        {move || {
            match achievements.get() {
                None => view! { <ListSkeleton count=4 /> }.into_view(),
                Some(set) => view! {
                    <div class="space-y-6">
                        <section>
                            <h2 class="text-lg font-semibold mb-3">"Conquistadas"</h2>
                            <div class="grid md:grid-cols-2 gap-4">
                                {set.earned.iter().map(|entry| view! {
                                    <AchievementCard entry=entry.clone() earned=true />
                                }).collect_view()}
                            </div>
                        </section>

                        <section>
                            <h2 class="text-lg font-semibold mb-3">"Em Progresso"</h2>
                            <div class="grid md:grid-cols-2 gap-4">
                                {set.in_progress.iter().map(|entry| view! {
                                    <AchievementCard entry=entry.clone() earned=false />
                                }).collect_view()}
                            </div>
                        </section>

                        <section>
                            <h2 class="text-lg font-semibold mb-3">"Disponíveis"</h2>
                            <div class="grid md:grid-cols-2 gap-4">
                                {set.available.iter().map(|def| view! {
                                    <LockedAchievementCard def=def.clone() />
                                }).collect_view()}
                            </div>
                        </section>
                    </div>
                }.into_view(),
            }
        }}
    }
}

#[component]
fn AchievementCard(entry: StudentAchievement, earned: bool) -> impl IntoView {
    let def = entry.achievement;
    let progress = entry.progress;

    view! {
        <div class="bg-white border rounded-lg p-4 flex items-start space-x-3">
            <span class="text-2xl">{def.icon.clone()}</span>
            <div class="flex-1">
                <div class="flex items-center justify-between">
                    <p class="font-medium">{def.name.clone()}</p>
                    <span class=format!("px-2 py-0.5 rounded-full text-xs {}", rarity_color(&def.rarity))>
                        {def.rarity.clone()}
                    </span>
                </div>
                <p class="text-sm text-gray-600">{def.description.clone()}</p>
                <div class="flex items-center justify-between mt-2">
                    <span class="text-xs text-gray-500">{format!("{} pontos", def.points)}</span>
                    {if earned {
                        view! { <span class="text-green-500 text-sm">"✓"</span> }.into_view()
                    } else {
                        view! {
                            <div class="w-24">
                                <ProgressBar value=Signal::derive(move || progress) />
                            </div>
                        }.into_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn LockedAchievementCard(def: AchievementDef) -> impl IntoView {
    view! {
        <div class="bg-gray-50 border rounded-lg p-4 flex items-start space-x-3 opacity-75">
            <span class="text-2xl grayscale">{def.icon.clone()}</span>
            <div class="flex-1">
                <div class="flex items-center justify-between">
                    <p class="font-medium text-gray-600">{def.name.clone()}</p>
                    <span class=format!("px-2 py-0.5 rounded-full text-xs {}", rarity_color(&def.rarity))>
                        {def.rarity.clone()}
                    </span>
                </div>
                <p class="text-sm text-gray-500">{def.description.clone()}</p>
                <span class="text-xs text-gray-400">{format!("{} pontos", def.points)}</span>
            </div>
        </div>
    }
}

/// Leaderboard tab
#[component]
fn Leaderboard(leaderboard: ReadSignal<Vec<LeaderboardEntry>>) -> impl IntoView {
    view! {
        <section class="bg-white border rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">"🏅 Ranking de Pontos"</h2>
            {move || {
                let entries = leaderboard.get();
                if entries.is_empty() {
                    view! {
                        <p class="text-gray-500 text-sm">
                            "O ranking ainda não está disponível."
                        </p>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-2">
                            {entries.into_iter().map(|entry| {
                                let medal = match entry.position {
                                    1 => "🥇",
                                    2 => "🥈",
                                    3 => "🥉",
                                    _ => "",
                                };
                                view! {
                                    <div class="flex items-center justify-between p-3 rounded-lg border">
                                        <div class="flex items-center space-x-3">
                                            <span class="w-8 text-center font-semibold">
                                                {if medal.is_empty() {
                                                    entry.position.to_string()
                                                } else {
                                                    medal.to_string()
                                                }}
                                            </span>
                                            <span>{entry.name}</span>
                                        </div>
                                        <div class="text-sm text-gray-600">
                                            {format!("{} pts · nível {}", entry.points, entry.level)}
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}
