//! Auth Form Component
//!
//! Login / register form. On success the issued credential and the
//! entered identity land in the session service and the caller's
//! completion callback fires.

use leptos::*;

use crate::api;
use crate::components::loading::InlineLoading;
use crate::state::use_session;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Login,
    Register,
}

/// Auth form component
#[component]
pub fn AuthForm(
    /// Called after a successful login or register
    #[prop(into)]
    on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let (mode, set_mode) = create_signal(Mode::Login);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current_mode = mode.get();
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();

        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let outcome = match current_mode {
                Mode::Register => {
                    api::register_user(&name_value, &email_value, &password_value)
                        .await
                        .map(|_| ())
                }
                Mode::Login => api::login_user(&email_value, &password_value)
                    .await
                    .map(|_| ()),
            };

            match outcome {
                Ok(()) => {
                    session.set_email(&email_value);
                    if current_mode == Mode::Register {
                        session.set_name(&name_value);
                    }
                    on_success.call(());
                }
                Err(e) => {
                    set_error.set(Some(e.message));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto p-8 bg-gray-800 rounded-xl border border-gray-700">
            <div class="text-center mb-8">
                <h2 class="text-2xl font-bold">
                    {move || match mode.get() {
                        Mode::Login => "Welcome Back",
                        Mode::Register => "Create Account",
                    }}
                </h2>
                <p class="text-gray-400 mt-2">
                    {move || match mode.get() {
                        Mode::Login => "Login to access your account",
                        Mode::Register => "Get started with your account",
                    }}
                </p>
            </div>

            <form on:submit=on_submit class="space-y-5">
                {move || {
                    (mode.get() == Mode::Register).then(|| view! {
                        <div class="space-y-1">
                            <label class="block text-sm font-medium text-gray-300">"Name"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                placeholder="John Doe"
                                required
                                class="w-full bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    })
                }}

                <div class="space-y-1">
                    <label class="block text-sm font-medium text-gray-300">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        placeholder="you@example.com"
                        required
                        class="w-full bg-gray-700 rounded-lg px-3 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="space-y-1">
                    <label class="block text-sm font-medium text-gray-300">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        placeholder="••••••••"
                        required
                        class="w-full bg-gray-700 rounded-lg px-3 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                {move || {
                    error.get().map(|message| view! {
                        <div class="p-3 bg-red-900/40 text-red-200 rounded-lg text-sm">{message}</div>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-2.5 px-4 rounded-lg font-medium bg-primary-600
                           hover:bg-primary-700 disabled:bg-gray-600 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {move || {
                        if submitting.get() {
                            view! { <InlineLoading /> " Please wait..." }.into_view()
                        } else {
                            match mode.get() {
                                Mode::Login => "Login",
                                Mode::Register => "Register",
                            }
                            .into_view()
                        }
                    }}
                </button>
            </form>

            <div class="mt-6 text-center text-sm">
                {move || match mode.get() {
                    Mode::Login => view! {
                        <button
                            on:click=move |_| set_mode.set(Mode::Register)
                            class="underline underline-offset-2 font-medium text-gray-300 hover:text-white"
                        >
                            "Don't have an account? Sign up"
                        </button>
                    },
                    Mode::Register => view! {
                        <button
                            on:click=move |_| set_mode.set(Mode::Login)
                            class="underline underline-offset-2 font-medium text-gray-300 hover:text-white"
                        >
                            "Already have an account? Sign in"
                        </button>
                    },
                }}
            </div>
        </div>
    }
}
