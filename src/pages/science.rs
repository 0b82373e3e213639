//! Science Section
//!
//! Topic catalog for the science track: progress per discipline and a
//! set of exploratory topics with quick-check questions.

use leptos::*;

use crate::components::ProgressBar;
use crate::state::{GlobalState, Section};

struct ScienceTopic {
    title: &'static str,
    category: &'static str,
    difficulty: &'static str,
    description: &'static str,
    content: &'static str,
    visual_aid: &'static str,
    points: u32,
}

const TOPICS: [ScienceTopic; 4] = [
    ScienceTopic {
        title: "Reino Animal",
        category: "Biologia",
        difficulty: "Fácil",
        description: "Explore a diversidade dos animais e suas características",
        content: "Os animais são seres vivos que se movem, respiram e se alimentam. \
                  Eles podem ser mamíferos, aves, peixes, répteis ou anfíbios.",
        visual_aid: "🐕🐱🐦🐠🦎🐸",
        points: 15,
    },
    ScienceTopic {
        title: "Sistema Solar",
        category: "Ciências da Terra",
        difficulty: "Intermediário",
        description: "Descubra os planetas e estrelas do nosso sistema solar",
        content: "O Sistema Solar é formado pelo Sol e todos os corpos celestes que \
                  orbitam ao seu redor, incluindo 8 planetas.",
        visual_aid: "☀️🌍🪐⭐",
        points: 20,
    },
    ScienceTopic {
        title: "Estados da Matéria",
        category: "Física",
        difficulty: "Fácil",
        description: "Aprenda sobre sólido, líquido e gasoso",
        content: "A matéria pode existir em três estados principais: sólido (como gelo), \
                  líquido (como água) e gasoso (como vapor).",
        visual_aid: "🧊💧☁️",
        points: 15,
    },
    ScienceTopic {
        title: "Corpo Humano",
        category: "Biologia",
        difficulty: "Intermediário",
        description: "Conheça os sistemas do nosso corpo",
        content: "O corpo humano é formado por vários sistemas que trabalham juntos: \
                  respiratório, circulatório, digestivo, nervoso e outros.",
        visual_aid: "🫁❤️🧠🦴",
        points: 20,
    },
];

const DISCIPLINE_PROGRESS: [(&str, u32); 5] = [
    ("Biologia", 20),
    ("Física", 15),
    ("Química", 10),
    ("Ciências da Terra", 25),
    ("Geral", 18),
];

/// Science section component
#[component]
pub fn Science() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="max-w-5xl mx-auto py-4 space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"🔬 Ciências"</h1>
                <p class="text-gray-600 mt-1">
                    "Explore o mundo natural através de tópicos interativos"
                </p>
            </div>

            // Progress by discipline
            <section class="bg-white border rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-4">"Seu Progresso"</h2>
                <div class="grid md:grid-cols-2 gap-x-8 gap-y-4">
                    {DISCIPLINE_PROGRESS.into_iter().map(|(discipline, value)| view! {
                        <div class="space-y-2">
                            <div class="flex justify-between text-sm">
                                <span>{discipline}</span>
                                <span class="text-gray-500">{format!("{}%", value)}</span>
                            </div>
                            <ProgressBar
                                value=Signal::derive(move || value)
                                color="bg-green-500"
                            />
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Topic catalog
            <section class="space-y-4">
                <h2 class="text-lg font-semibold">"Tópicos de Estudo"</h2>
                <div class="grid md:grid-cols-2 gap-4">
                    {TOPICS.into_iter().map(|topic| view! {
                        <div class="bg-white border rounded-xl p-5 flex flex-col">
                            <div class="flex items-center justify-between mb-2">
                                <span class="px-2 py-0.5 rounded bg-green-100 text-green-800 text-xs">
                                    {topic.category}
                                </span>
                                <span class="text-xs text-gray-500">
                                    {format!("{} · {} pts", topic.difficulty, topic.points)}
                                </span>
                            </div>
                            <h3 class="font-semibold mb-1">{topic.title}</h3>
                            <p class="text-sm text-gray-600 mb-2">{topic.description}</p>
                            <p class="text-sm text-gray-800 mb-2">{topic.content}</p>
                            <div class="text-lg mb-4">{topic.visual_aid}</div>
                            <button
                                on:click=move |_| state.navigate(Section::Problem)
                                class="mt-auto px-3 py-2 bg-green-600 hover:bg-green-700 text-white
                                       rounded-lg text-sm font-medium transition-colors"
                            >
                                "▶ Explorar"
                            </button>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
