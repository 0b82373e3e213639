//! Mathematics Section
//!
//! Topic catalog for the math track: progress by CPA phase plus a set
//! of guided exercises feeding into the Singapore flow and the daily
//! problem.

use leptos::*;

use crate::components::ProgressBar;
use crate::state::{GlobalState, Section};

struct MathExercise {
    title: &'static str,
    phase: &'static str,
    difficulty: &'static str,
    description: &'static str,
    problem: &'static str,
    visual_aid: &'static str,
}

const EXERCISES: [MathExercise; 3] = [
    MathExercise {
        title: "Adição com Objetos Concretos",
        phase: "Concreto",
        difficulty: "Fácil",
        description: "Use blocos ou objetos para somar números",
        problem: "Maria tem 3 maçãs. João deu mais 2 maçãs para ela. \
                  Quantas maçãs Maria tem agora?",
        visual_aid: "🍎🍎🍎 + 🍎🍎 = ?",
    },
    MathExercise {
        title: "Subtração com Desenhos",
        phase: "Pictórico",
        difficulty: "Fácil",
        description: "Use desenhos para resolver problemas de subtração",
        problem: "Havia 8 pássaros no galho. 3 voaram. Quantos pássaros ficaram?",
        visual_aid: "🐦🐦🐦🐦🐦🐦🐦🐦 - 🐦🐦🐦 = ?",
    },
    MathExercise {
        title: "Multiplicação Abstrata",
        phase: "Abstrato",
        difficulty: "Intermediário",
        description: "Resolva multiplicação usando números",
        problem: "Se cada caixa tem 4 lápis e você tem 3 caixas, \
                  quantos lápis você tem no total?",
        visual_aid: "3 × 4 = ?",
    },
];

const PHASE_PROGRESS: [(&str, u32); 4] = [
    ("Concreto", 25),
    ("Pictórico", 15),
    ("Abstrato", 5),
    ("Geral", 15),
];

/// Mathematics section component
#[component]
pub fn Mathematics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="max-w-5xl mx-auto py-4 space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"🧮 Matemática"</h1>
                <p class="text-gray-600 mt-1">
                    "Trilha de matemática baseada no Método de Singapura"
                </p>
            </div>

            // Progress by CPA phase
            <section class="bg-white border rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-4">"Seu Progresso"</h2>
                <div class="grid md:grid-cols-2 gap-x-8 gap-y-4">
                    {PHASE_PROGRESS.into_iter().map(|(phase, value)| view! {
                        <div class="space-y-2">
                            <div class="flex justify-between text-sm">
                                <span>{phase}</span>
                                <span class="text-gray-500">{format!("{}%", value)}</span>
                            </div>
                            <ProgressBar value=Signal::derive(move || value) />
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Exercise catalog
            <section class="space-y-4">
                <h2 class="text-lg font-semibold">"Exercícios Guiados"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    {EXERCISES.into_iter().map(|ex| view! {
                        <div class="bg-white border rounded-xl p-5 flex flex-col">
                            <div class="flex items-center justify-between mb-2">
                                <span class="px-2 py-0.5 rounded bg-blue-100 text-blue-800 text-xs">
                                    {ex.phase}
                                </span>
                                <span class="text-xs text-gray-500">{ex.difficulty}</span>
                            </div>
                            <h3 class="font-semibold mb-1">{ex.title}</h3>
                            <p class="text-sm text-gray-600 mb-2">{ex.description}</p>
                            <p class="text-sm text-gray-800 mb-2">{ex.problem}</p>
                            <div class="text-lg mb-4">{ex.visual_aid}</div>
                            <button
                                on:click=move |_| state.navigate(Section::Singapore)
                                class="mt-auto px-3 py-2 bg-blue-600 hover:bg-blue-700 text-white
                                       rounded-lg text-sm font-medium transition-colors"
                            >
                                "▶ Praticar"
                            </button>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Entry points into the other math flows
            <section class="bg-white border rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-1">"Continue Aprendendo"</h2>
                <p class="text-gray-600 mb-4">
                    "Aprofunde-se na metodologia ou teste seus conhecimentos com o desafio de hoje"
                </p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <button
                        on:click=move |_| state.navigate(Section::Singapore)
                        class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg
                               font-medium transition-colors"
                    >
                        "Método de Singapura"
                    </button>
                    <button
                        on:click=move |_| state.navigate(Section::Problem)
                        class="px-6 py-3 border rounded-lg font-medium hover:bg-gray-50
                               transition-colors"
                    >
                        "Problema do Dia"
                    </button>
                </div>
            </section>
        </div>
    }
}
