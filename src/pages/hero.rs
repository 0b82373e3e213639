//! Landing Page

use leptos::*;

use crate::state::{GlobalState, Section};

/// Landing section with calls-to-action into the learning flows
#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let features = [
        (
            "🧠",
            "bg-blue-100",
            "IA Personalizada",
            "Algoritmos avançados adaptam o conteúdo, ritmo e estilo de aprendizagem \
             para cada estudante individualmente.",
        ),
        (
            "🎯",
            "bg-green-100",
            "Método de Singapura",
            "Ensino de matemática através da progressão Concreto-Pictórico-Abstrato, \
             comprovadamente eficaz.",
        ),
        (
            "⚡",
            "bg-purple-100",
            "Autonomia & Metacognição",
            "Desenvolve pensamento crítico e habilidades de \u{201c}aprender a aprender\u{201d}, \
             inspirado no sistema holandês.",
        ),
    ];

    view! {
        <section class="bg-gradient-to-br from-blue-50 to-indigo-100 rounded-xl py-20">
            <div class="max-w-7xl mx-auto px-4 text-center">
                <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                    "Educação Adaptativa"
                    <span class="text-blue-600 block">"Powered by AI"</span>
                </h1>
                <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">
                    "Plataforma educacional revolucionária que combina as melhores práticas da \
                     Holanda, Estônia e Singapura com inteligência artificial para personalizar \
                     o aprendizado de cada estudante."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <button
                        on:click=move |_| state.navigate(Section::Dashboard)
                        class="text-lg px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white
                               rounded-lg font-medium transition-colors"
                    >
                        "Começar Agora →"
                    </button>
                    <button
                        on:click=move |_| state.navigate(Section::Singapore)
                        class="text-lg px-8 py-3 border rounded-lg font-medium bg-white
                               hover:bg-gray-50 transition-colors"
                    >
                        "Ver Demo"
                    </button>
                </div>

                <div class="grid md:grid-cols-3 gap-8 mt-16">
                    {features.into_iter().map(|(icon, icon_bg, title, text)| view! {
                        <div class="bg-white rounded-lg p-6 shadow-sm border border-gray-200
                                    hover:shadow-md transition-shadow">
                            <div class=format!(
                                "w-12 h-12 {} rounded-lg flex items-center justify-center mx-auto mb-4",
                                icon_bg
                            )>
                                <span class="text-2xl">{icon}</span>
                            </div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
                            <p class="text-gray-600">{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
