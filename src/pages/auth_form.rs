//! Auth Form Page
//!
//! Login and registration tabs plus the demo account shortcut. Rendered
//! whenever the auth gate is down.

use leptos::*;

use crate::state::auth::{validate_login_form, validate_register_form};
use crate::state::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

/// Login / registration page
#[component]
pub fn AuthForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (tab, set_tab) = create_signal(AuthTab::Login);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let demo_login = move |_| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            if let Err(e) = state.auth.demo_login().await {
                set_error.set(Some(e));
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 p-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">"Bem-vindo ao Curió! 🐦"</h1>
                    <p class="text-gray-600">"Sua plataforma de aprendizado inteligente"</p>
                </div>

                <div class="bg-white rounded-xl shadow p-6">
                    // Tab switcher
                    <div class="grid grid-cols-2 gap-1 bg-gray-100 rounded-lg p-1 mb-4">
                        <TabButton label="Entrar" current=tab target=AuthTab::Login set_tab=set_tab />
                        <TabButton label="Criar Conta" current=tab target=AuthTab::Register set_tab=set_tab />
                    </div>

                    // Error alert
                    {move || error.get().map(|msg| view! {
                        <div class="mb-4 p-3 bg-red-50 border border-red-200 rounded-lg text-sm text-red-700">
                            {msg}
                        </div>
                    })}

                    {move || {
                        match tab.get() {
                            AuthTab::Login => view! {
                                <LoginForm set_error=set_error loading=loading set_loading=set_loading />
                            }.into_view(),
                            AuthTab::Register => view! {
                                <RegisterForm set_error=set_error loading=loading set_loading=set_loading />
                            }.into_view(),
                        }
                    }}

                    // Demo account
                    <div class="mt-6 pt-6 border-t">
                        <button
                            on:click=demo_login
                            disabled=move || loading.get()
                            class="w-full px-4 py-2 border rounded-lg font-medium
                                   hover:bg-gray-50 disabled:text-gray-400 transition-colors"
                        >
                            "Experimentar com Conta Demo"
                        </button>
                        <p class="text-xs text-gray-500 text-center mt-2">
                            "Teste a plataforma sem criar uma conta"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<AuthTab>,
    target: AuthTab,
    set_tab: WriteSignal<AuthTab>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_tab.set(target)
            class=move || {
                let base = "py-2 rounded-md text-sm font-medium transition-colors";
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

#[component]
fn LoginForm(
    set_error: WriteSignal<Option<String>>,
    loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let email = email.get();
        let password = password.get();

        if let Err(e) = validate_login_form(&email, &password) {
            set_error.set(Some(e));
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            if let Err(e) = state.auth.login(&email, &password).await {
                set_error.set(Some(e));
            }
            set_loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <FormField
                label="Email"
                input_type="email"
                placeholder="seu@email.com"
                value=email
                set_value=set_email
                disabled=loading
            />
            <FormField
                label="Senha"
                input_type="password"
                placeholder="Sua senha"
                value=password
                set_value=set_password
                disabled=loading
            />

            <button
                type="submit"
                disabled=move || loading.get()
                class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                       text-white rounded-lg font-medium transition-colors"
            >
                {move || if loading.get() { "Entrando..." } else { "Entrar" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm(
    set_error: WriteSignal<Option<String>>,
    loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (grade, set_grade) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let name = name.get();
        let email = email.get();
        let grade = grade.get();
        let password = password.get();
        let confirm = confirm.get();

        if let Err(e) = validate_register_form(&name, &email, &password, &confirm, &grade) {
            set_error.set(Some(e));
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            if let Err(e) = state.auth.register(&name, &email, &password, &grade).await {
                set_error.set(Some(e));
            }
            set_loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <FormField
                label="Nome Completo"
                input_type="text"
                placeholder="Seu nome completo"
                value=name
                set_value=set_name
                disabled=loading
            />
            <FormField
                label="Email"
                input_type="email"
                placeholder="seu@email.com"
                value=email
                set_value=set_email
                disabled=loading
            />
            <FormField
                label="Série/Ano"
                input_type="text"
                placeholder="Ex: 7º Ano, 2º Ano EM"
                value=grade
                set_value=set_grade
                disabled=loading
            />
            <FormField
                label="Senha"
                input_type="password"
                placeholder="Mínimo 6 caracteres"
                value=password
                set_value=set_password
                disabled=loading
            />
            <FormField
                label="Confirmar Senha"
                input_type="password"
                placeholder="Confirme sua senha"
                value=confirm
                set_value=set_confirm
                disabled=loading
            />

            <button
                type="submit"
                disabled=move || loading.get()
                class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                       text-white rounded-lg font-medium transition-colors"
            >
                {move || if loading.get() { "Criando conta..." } else { "Criar Conta" }}
            </button>
        </form>
    }
}

/// Labeled text input bound to a signal pair
#[component]
fn FormField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                disabled=move || disabled.get()
                class="w-full px-4 py-2 border rounded-lg
                       focus:border-blue-500 focus:outline-none disabled:bg-gray-100"
            />
        </div>
    }
}
