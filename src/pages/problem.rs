//! Problem of the Day Page
//!
//! Fetches today's problem, takes a free-text answer and shows the
//! backend's verdict and feedback. A hint can be requested once.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::dashboard::DailyProblem;
use crate::state::GlobalState;

/// Toast for a graded submission. Incorrect verdicts only render inline.
fn success_toast(verdict: &api::SubmissionResult) -> Option<&'static str> {
    verdict
        .is_correct
        .then_some("Resposta correta! Excelente trabalho.")
}

/// Daily problem section component
#[component]
pub fn Problem() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (problem, set_problem) = create_signal(None::<DailyProblem>);
    let (loading, set_loading) = create_signal(true);
    let (answer, set_answer) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (result, set_result) = create_signal(None::<api::SubmissionResult>);
    let (hint, set_hint) = create_signal(None::<String>);
    let (hint_requested, set_hint_requested) = create_signal(false);

    let fetch_problem = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_daily_problem().await {
                Ok(p) => {
                    let _ = set_problem.try_set(Some(p));
                    let _ = set_answer.try_set(String::new());
                    let _ = set_result.try_set(None);
                    let _ = set_hint.try_set(None);
                    let _ = set_hint_requested.try_set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch problem: {}", e).into());
                    let _ = set_problem.try_set(None);
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    // Fetch on mount
    create_effect(move |_| fetch_problem());

    let submit = move |_| {
        let Some(p) = problem.get() else { return };
        let text = answer.get();
        if text.trim().is_empty() {
            return;
        }

        let student_id = state.auth.user.get_untracked().map(|u| u.id).unwrap_or(1);

        set_submitting.set(true);
        spawn_local(async move {
            match api::submit_answer(p.id, student_id, &text, 0).await {
                Ok(verdict) => {
                    if let Some(msg) = success_toast(&verdict) {
                        state.show_success(msg);
                    }
                    let _ = set_result.try_set(Some(verdict));
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    let request_hint = move |_| {
        let Some(p) = problem.get() else { return };
        set_hint_requested.set(true);
        spawn_local(async move {
            match api::fetch_hint(p.id).await {
                Ok(text) => {
                    let _ = set_hint.try_set(Some(text));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch hint: {}", e).into());
                }
            }
        });
    };

    let solved = move || result.get().map(|r| r.is_correct).unwrap_or(false);

    view! {
        {move || {
            if loading.get() {
                view! { <Loading label="Carregando problema do dia..." /> }.into_view()
            } else if problem.get().is_none() {
                view! {
                    <div class="flex flex-col justify-center items-center py-16 text-red-600">
                        <span class="text-4xl mb-4">"✕"</span>
                        <p class="text-lg">
                            "Não foi possível carregar o problema do dia. Tente novamente mais tarde."
                        </p>
                        <button
                            on:click=move |_| fetch_problem()
                            class="mt-4 px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white
                                   rounded-lg font-medium transition-colors"
                        >
                            "Tentar Novamente"
                        </button>
                    </div>
                }.into_view()
            } else {
                let Some(p) = problem.get() else {
                    return view! {}.into_view();
                };
                view! {
                    <div class="max-w-4xl mx-auto py-4">
                        <div class="bg-white border rounded-xl p-6 space-y-4">
                            <div>
                                <h1 class="text-3xl font-bold text-gray-900 mb-2">
                                    {format!("Problema do Dia: {}", p.title)}
                                </h1>
                                <div class="space-x-2">
                                    <span class="px-2 py-1 rounded bg-gray-100 text-sm">{p.category.clone()}</span>
                                    <span class="px-2 py-1 rounded border text-sm">
                                        {format!("Dificuldade: {}", p.difficulty)}
                                    </span>
                                </div>
                            </div>

                            <p class="text-gray-800 whitespace-pre-line leading-relaxed">
                                {p.description.clone()}
                            </p>

                            {(!p.resources.is_empty()).then(|| view! {
                                <div>
                                    <h4 class="font-semibold text-gray-700">"Recursos Sugeridos:"</h4>
                                    <ul class="list-disc list-inside text-gray-600">
                                        {p.resources.iter().map(|r| view! {
                                            <li>{r.clone()}</li>
                                        }).collect_view()}
                                    </ul>
                                </div>
                            })}

                            <div>
                                <h4 class="font-semibold text-gray-700 mb-2">"Sua Resposta:"</h4>
                                <textarea
                                    placeholder="Digite sua solução aqui..."
                                    prop:value=move || answer.get()
                                    on:input=move |ev| set_answer.set(event_target_value(&ev))
                                    rows=8
                                    disabled=move || submitting.get() || solved()
                                    class="w-full border rounded-lg p-3
                                           focus:border-blue-500 focus:outline-none disabled:bg-gray-100"
                                />
                                <div class="flex justify-between items-center mt-4">
                                    <button
                                        on:click=submit
                                        disabled=move || {
                                            submitting.get() || answer.get().trim().is_empty() || solved()
                                        }
                                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                                               text-white rounded-lg font-medium transition-colors"
                                    >
                                        {move || if submitting.get() { "Enviando..." } else { "Enviar Resposta" }}
                                    </button>
                                    <button
                                        on:click=request_hint
                                        disabled=move || hint_requested.get() || solved()
                                        class="px-4 py-2 border rounded-lg font-medium
                                               hover:bg-gray-50 disabled:text-gray-400 transition-colors"
                                    >
                                        {move || if hint_requested.get() { "💡 Dica Carregada" } else { "💡 Pedir Dica" }}
                                    </button>
                                </div>
                            </div>

                            // Hint banner
                            {move || hint.get().map(|text| view! {
                                <div class="p-4 bg-yellow-50 border border-yellow-200 rounded-lg">
                                    <h4 class="font-semibold text-yellow-800">"💡 Dica:"</h4>
                                    <p class="text-yellow-700 mt-2">{text}</p>
                                </div>
                            })}

                            // Verdict
                            {move || result.get().map(|verdict| {
                                let (box_class, headline) = if verdict.is_correct {
                                    ("bg-green-50 border border-green-200", "✓ Sua resposta está correta!")
                                } else {
                                    ("bg-red-50 border border-red-200", "✕ Sua resposta está incorreta.")
                                };
                                view! {
                                    <div class=format!("p-4 rounded-lg {}", box_class)>
                                        <h4 class="font-semibold mb-2">{headline}</h4>
                                        <p class="text-gray-800">{verdict.feedback}</p>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_toast_only_for_correct_verdicts() {
        let correct = api::SubmissionResult {
            is_correct: true,
            feedback: "Muito bem!".to_string(),
        };
        assert!(success_toast(&correct).is_some());

        let incorrect = api::SubmissionResult {
            is_correct: false,
            feedback: "Revise o cálculo.".to_string(),
        };
        assert_eq!(success_toast(&incorrect), None);
    }
}
