//! Auth Page
//!
//! Login / register entry point. Already-authenticated visitors are
//! sent straight to the dashboard.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::api;
use crate::components::AuthForm;
use crate::state::use_session;

/// Auth page component
#[component]
pub fn Auth() -> impl IntoView {
    let session = use_session();

    let navigate = use_navigate();
    create_effect(move |_| {
        if session.is_authenticated() {
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    // Service info line under the form
    let (info, set_info) = create_signal(None::<api::ApiInfo>);
    create_effect(move |_| {
        spawn_local(async move {
            match api::get_api_info().await {
                Ok(service_info) => set_info.set(Some(service_info)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch service info: {}", e).into(),
                    );
                }
            }
        });
    });

    let navigate_home = use_navigate();
    let on_success = Callback::new(move |_| {
        navigate_home(
            "/",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-6 bg-gray-900 text-white">
            <AuthForm on_success=on_success />

            {move || {
                info.get().map(|service_info| {
                    let line = match (service_info.name, service_info.version) {
                        (Some(name), Some(version)) => format!("{} v{}", name, version),
                        (Some(name), None) => name,
                        _ => match service_info.description {
                            Some(description) => description,
                            None => return ().into_view(),
                        },
                    };
                    view! {
                        <p class="mt-6 text-xs text-gray-500">{line}</p>
                    }
                    .into_view()
                })
            }}
        </div>
    }
}
