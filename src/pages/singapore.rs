//! Singapore Method Page
//!
//! Walks the learner through the Concrete-Pictorial-Abstract progression.
//! All stage logic lives in [`StageSession`]; this page only renders it.

use leptos::*;

use crate::state::stage::{Stage, StageSession};
use crate::state::{GlobalState, Section};

/// Singapore Method section component
#[component]
pub fn Singapore() -> impl IntoView {
    let session = create_rw_signal(StageSession::default());

    view! {
        <div class="max-w-6xl mx-auto space-y-8 py-4">
            // Heading
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Método de Singapura"</h1>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                    "Aprenda matemática através da progressão Concreto-Pictórico-Abstrato (CPA), \
                     uma metodologia comprovada que desenvolve compreensão profunda dos conceitos."
                </p>
            </div>

            <StageTabs session=session />

            // Current stage card
            <div class="bg-white border rounded-xl">
                <div class="p-6 border-b">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-3">
                            <h2 class="text-2xl font-semibold">
                                {move || format!("Estágio {}", session.get().current().content().title)}
                            </h2>
                            <span class="px-2 py-1 rounded text-xs bg-green-100 text-green-800">
                                "Ativo"
                            </span>
                        </div>
                        <button
                            on:click=move |_| session.update(|s| s.reset())
                            class="px-3 py-1 border rounded-lg text-sm hover:bg-gray-100 transition-colors"
                        >
                            "↺ Reiniciar"
                        </button>
                    </div>
                    <p class="text-lg text-gray-600 mt-2">
                        {move || session.get().current().content().description}
                    </p>
                </div>

                <div class="p-6">
                    {move || {
                        match session.get().current() {
                            Stage::Concrete => view! { <ConcreteStage session=session /> }.into_view(),
                            Stage::Pictorial => view! { <PictorialStage session=session /> }.into_view(),
                            Stage::Abstract => view! { <AbstractStage session=session /> }.into_view(),
                        }
                    }}
                </div>
            </div>

            <BenefitCards />
            <NextSteps session=session />
        </div>
    }
}

/// Stage navigation tabs. Jumping stages in any order is allowed.
#[component]
fn StageTabs(session: RwSignal<StageSession>) -> impl IntoView {
    view! {
        <div class="flex justify-center">
            <div class="flex items-center space-x-4 bg-white p-2 rounded-lg shadow-sm border">
                {Stage::ALL.into_iter().enumerate().map(|(i, stage)| {
                    view! {
                        <div class="flex items-center">
                            <button
                                on:click=move |_| session.update(|s| s.select_stage(stage))
                                class=move || {
                                    let base = "flex items-center space-x-2 px-4 py-2 rounded-lg transition-colors";
                                    if session.get().current() == stage {
                                        format!("{} bg-blue-600 text-white", base)
                                    } else {
                                        format!("{} hover:bg-gray-100", base)
                                    }
                                }
                            >
                                <span>{stage.content().title}</span>
                            </button>
                            {(i < Stage::ALL.len() - 1).then(|| view! {
                                <span class="text-gray-400 mx-2">"→"</span>
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Concrete stage: interactive apple blocks. The answer stays hidden
/// until the learner has clicked the manipulatives.
#[component]
fn ConcreteStage(session: RwSignal<StageSession>) -> impl IntoView {
    let content = Stage::Concrete.content();

    view! {
        <div class="bg-green-50 p-6 rounded-lg border border-green-200 space-y-4">
            <h3 class="text-lg font-semibold text-green-800">
                {format!("Problema: {}", content.problem)}
            </h3>
            <p class="text-green-700">{content.solution}</p>

            // 8 apples; the last 3 fade to show the ones given away
            <div class="grid grid-cols-4 gap-2">
                {(0..8).map(|i| {
                    let block_class = if i < 5 {
                        "bg-green-200"
                    } else {
                        "bg-red-200 opacity-50"
                    };
                    view! {
                        <button
                            on:click=move |_| session.update(|s| s.mark_interaction())
                            class=format!(
                                "w-12 h-12 rounded-lg border-2 border-green-300 flex items-center \
                                 justify-center cursor-pointer transition-all {}",
                                block_class
                            )
                        >
                            "🍎"
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="flex items-center justify-between">
                <div class="text-sm text-green-700">
                    "Clique nos blocos para \u{201c}dar\u{201d} as maçãs para João"
                </div>
                <RevealControl session=session badge_class="bg-green-100 text-green-800" />
            </div>
        </div>
    }
}

/// Pictorial stage: bar model
#[component]
fn PictorialStage(session: RwSignal<StageSession>) -> impl IntoView {
    let content = Stage::Pictorial.content();

    view! {
        <div class="bg-blue-50 p-6 rounded-lg border border-blue-200 space-y-4">
            <h3 class="text-lg font-semibold text-blue-800">
                {format!("Problema: {}", content.problem)}
            </h3>
            <p class="text-blue-700">{content.solution}</p>

            <div class="text-sm text-blue-700 font-medium">"Modelo de Barras:"</div>
            <div class="bg-white p-4 rounded border space-y-2">
                <div class="flex items-center">
                    <span class="text-sm mr-2">"Total de alunos:"</span>
                    <div class="w-60 h-8 bg-blue-200 rounded flex items-center justify-center text-sm font-medium">
                        "24 alunos"
                    </div>
                </div>
                <div class="flex items-center">
                    <span class="text-sm mr-2">"Meninas (1/3):"</span>
                    <div class="w-20 h-8 bg-pink-200 rounded flex items-center justify-center text-sm font-medium">
                        "8"
                    </div>
                    <span class="mx-2 text-xs">"+"</span>
                    <div class="w-20 h-8 bg-gray-200 rounded flex items-center justify-center text-sm">
                        "16"
                    </div>
                </div>
            </div>

            <RevealControl session=session badge_class="bg-blue-100 text-blue-800" />
        </div>
    }
}

/// Abstract stage: equation steps
#[component]
fn AbstractStage(session: RwSignal<StageSession>) -> impl IntoView {
    let content = Stage::Abstract.content();

    view! {
        <div class="bg-purple-50 p-6 rounded-lg border border-purple-200 space-y-4">
            <h3 class="text-lg font-semibold text-purple-800">
                {format!("Problema: {}", content.problem)}
            </h3>
            <p class="text-purple-700">{content.solution}</p>

            <div class="bg-white p-4 rounded border space-y-2">
                <div class="text-sm font-mono">"3x + 7 = 22"</div>
                <div class="text-sm font-mono">"3x + 7 - 7 = 22 - 7"</div>
                <div class="text-sm font-mono">"3x = 15"</div>
                <div class="text-sm font-mono">"3x ÷ 3 = 15 ÷ 3"</div>
                <div class="text-sm font-mono font-bold">"x = 5"</div>
            </div>

            <RevealControl session=session badge_class="bg-purple-100 text-purple-800" />
        </div>
    }
}

/// Reveal-answer button, or the revealed answer badge
#[component]
fn RevealControl(
    session: RwSignal<StageSession>,
    badge_class: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            let current = session.get();
            if current.answer_revealed() {
                view! {
                    <span class=format!("inline-flex items-center px-3 py-1 rounded text-sm {}", badge_class)>
                        "✓ Resposta: "
                        {current.current().content().answer}
                    </span>
                }.into_view()
            } else if current.can_reveal() {
                view! {
                    <button
                        on:click=move |_| session.update(|s| s.reveal_answer())
                        class="px-3 py-1 border rounded-lg text-sm hover:bg-white transition-colors"
                    >
                        "Ver Resposta"
                    </button>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Methodology benefit cards
#[component]
fn BenefitCards() -> impl IntoView {
    let benefits = [
        (
            "Compreensão Profunda",
            "A progressão CPA garante que os alunos desenvolvam uma compreensão sólida dos \
             conceitos antes de avançar para abstrações.",
        ),
        (
            "Resolução de Problemas",
            "Enfatiza o pensamento crítico e múltiplas estratégias para resolver problemas \
             matemáticos complexos.",
        ),
        (
            "Confiança Matemática",
            "Constrói confiança gradualmente, permitindo que todos os alunos vejam a matemática \
             como acessível e compreensível.",
        ),
    ];

    view! {
        <div class="grid md:grid-cols-3 gap-6">
            {benefits.into_iter().map(|(title, text)| view! {
                <div class="bg-white border rounded-xl p-6">
                    <h3 class="text-lg font-semibold mb-2">{title}</h3>
                    <p class="text-gray-600">{text}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Call-to-action card at the bottom of the flow
#[component]
fn NextSteps(session: RwSignal<StageSession>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-white border rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-1">"Pronto para Praticar?"</h3>
            <p class="text-gray-600 mb-4">
                "Continue sua jornada com exercícios personalizados baseados no Método de Singapura"
            </p>
            <div class="flex flex-col sm:flex-row gap-4">
                <button
                    on:click=move |_| state.navigate(Section::Problem)
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg
                           font-medium transition-colors"
                >
                    "▶ Começar Exercícios"
                </button>
                <button
                    on:click=move |_| session.update(|s| s.select_stage(crate::state::stage::Stage::Pictorial))
                    class="px-6 py-3 border rounded-lg font-medium hover:bg-gray-50 transition-colors"
                >
                    "Ver Mais Exemplos"
                </button>
            </div>
        </div>
    }
}
