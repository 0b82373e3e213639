//! AI Tutor Chat Page
//!
//! One chat session per page visit. The transcript lives in
//! [`ChatTranscript`]; student messages are appended optimistically and
//! rolled back by local id if the backend rejects the send.

use leptos::html::Div;
use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::chat::{ChatTranscript, Sender};
use crate::state::GlobalState;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Tutor chat section component
#[component]
pub fn TutorChat() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (session_id, set_session_id) = create_signal(None::<u32>);
    let transcript = create_rw_signal(ChatTranscript::default());
    let (input, set_input) = create_signal(String::new());
    let (loading, set_loading) = create_signal(true);
    let (sending, set_sending) = create_signal(false);

    let bottom_ref = create_node_ref::<Div>();

    // Start the session on mount. On failure the page stays in its
    // loading state; the backend start call is never retried.
    create_effect(move |_| {
        let student_id = state.auth.user.get_untracked().map(|u| u.id).unwrap_or(1);
        spawn_local(async move {
            match api::start_chat(student_id, 1).await {
                Ok((id, welcome)) => {
                    let _ = set_session_id.try_set(Some(id));
                    let _ = transcript.try_update(|t| {
                        t.push_tutor(welcome.message, now_ms());
                    });
                    let _ = set_loading.try_set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to start chat: {}", e).into());
                }
            }
        });
    });

    // Keep the newest message in view
    create_effect(move |_| {
        transcript.track();
        if let Some(el) = bottom_ref.get() {
            el.scroll_into_view();
        }
    });

    let send = move || {
        let Some(session) = session_id.get() else { return };
        let text = input.get();
        if text.trim().is_empty() || sending.get() {
            return;
        }
        set_input.set(String::new());
        set_sending.set(true);

        // Optimistic append; keep the id for the failure compensation
        let local_id = transcript
            .try_update(|t| t.push_student(text.clone(), now_ms()))
            .unwrap_or(0);

        spawn_local(async move {
            match api::send_chat_message(session, &text).await {
                Ok(reply) => {
                    let _ = transcript.try_update(|t| {
                        t.push_tutor(reply.message, now_ms());
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to send message: {}", e).into());
                    let _ = transcript.try_update(|t| t.rollback(local_id));
                }
            }
            let _ = set_sending.try_set(false);
        });
    };

    view! {
        {move || {
            if loading.get() {
                view! { <Loading label="Iniciando chat com o tutor..." /> }.into_view()
            } else {
                view! {
                    <div class="max-w-3xl mx-auto py-4">
                        <div class="bg-white border rounded-xl p-6">
                            <h1 class="text-2xl font-bold text-gray-900 mb-4">"💬 Tutor de IA"</h1>

                            // Transcript
                            <div class="h-96 overflow-y-auto border rounded-lg p-4 mb-4 bg-gray-50 flex flex-col space-y-4">
                                {move || {
                                    transcript.get().messages().iter().map(|msg| {
                                        let from_student = msg.sender == Sender::Student;
                                        let align = if from_student { "justify-end" } else { "justify-start" };
                                        let bubble = if from_student {
                                            "bg-blue-500 text-white"
                                        } else {
                                            "bg-gray-200 text-gray-800"
                                        };
                                        view! {
                                            <div class=format!("flex {}", align)>
                                                <div class=format!(
                                                    "flex items-start max-w-[70%] p-3 rounded-lg {}",
                                                    bubble
                                                )>
                                                    {(!from_student).then(|| view! {
                                                        <span class="mr-2">"🤖"</span>
                                                    })}
                                                    <p class="break-words">{msg.message.clone()}</p>
                                                    {from_student.then(|| view! {
                                                        <span class="ml-2">"🧑"</span>
                                                    })}
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()
                                }}
                                <div node_ref=bottom_ref />
                            </div>

                            // Composer
                            <div class="flex space-x-2">
                                <textarea
                                    placeholder="Digite sua mensagem..."
                                    prop:value=move || input.get()
                                    on:input=move |ev| set_input.set(event_target_value(&ev))
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        if ev.key() == "Enter" && !ev.shift_key() {
                                            ev.prevent_default();
                                            send();
                                        }
                                    }
                                    rows=1
                                    disabled=move || sending.get()
                                    class="flex-grow border rounded-lg p-3
                                           focus:border-blue-500 focus:outline-none disabled:bg-gray-100"
                                />
                                <button
                                    on:click=move |_| send()
                                    disabled=move || sending.get() || input.get().trim().is_empty()
                                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                                           text-white rounded-lg font-medium transition-colors"
                                >
                                    {move || if sending.get() { "..." } else { "➤" }}
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}
