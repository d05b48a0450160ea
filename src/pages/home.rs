//! Home Page
//!
//! The authenticated shell: uploader, history sidebar, and results
//! panel. Owns the page state and is the single owner of history
//! fetching; the sidebar only renders what it is given.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::api;
use crate::api::{HistoryItem, PredictionResult};
use crate::components::{MobileDrawer, ResultsPanel, Sidebar, Uploader};
use crate::config;
use crate::state::use_session;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let session = use_session();

    // Gate on the session token. Runs again whenever the session
    // service notifies, so logout falls through to /auth on its own.
    let navigate = use_navigate();
    create_effect(move |_| {
        if !session.is_authenticated() {
            navigate(
                "/auth",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let (result, set_result) = create_signal(None::<PredictionResult>);
    let (selected, set_selected) = create_signal(None::<HistoryItem>);
    let (drawer_open, set_drawer_open) = create_signal(false);
    let (history_reload, set_history_reload) = create_signal(0u32);
    let (predictions, set_predictions) = create_signal(Vec::<HistoryItem>::new());
    let (history_loading, set_history_loading) = create_signal(false);

    // Fetch history on mount and after every successful upload
    create_effect(move |_| {
        let _ = history_reload.get();
        let Some(email) = session.get().and_then(|s| s.user_email) else {
            return;
        };

        set_history_loading.set(true);
        spawn_local(async move {
            match api::get_user_predictions(&email, 0, 50).await {
                Ok(items) => set_predictions.set(items),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load predictions: {}", e).into(),
                    );
                }
            }
            set_history_loading.set(false);
        });
    });

    // Selecting a history item rehydrates the results panel from the
    // embedded payload. No network call.
    let on_select = Callback::new(move |item: HistoryItem| {
        if item.has_full_payload() {
            set_result.set(Some(item.to_result()));
        }
        set_selected.set(Some(item));
        set_drawer_open.set(false);
    });

    let on_result = Callback::new(move |prediction: PredictionResult| {
        set_result.set(Some(prediction));
        set_history_reload.update(|v| *v += 1);
    });

    // Drawer stays shut; navigation back to /auth is handled by the
    // session gate above
    let on_logout = Callback::new(move |_| {
        set_drawer_open.set(false);
    });

    let external_image_url = Signal::derive(move || {
        selected.get().map(|item| {
            item.image_url
                .clone()
                .unwrap_or_else(|| config::prediction_image_url(&item.prediction_id))
        })
    });

    view! {
        {move || {
            if !session.is_authenticated() {
                return ().into_view();
            }

            view! {
                <div class="min-h-screen grid grid-rows-[auto_1fr] md:grid-cols-[256px_1fr_420px]
                            bg-gray-900 text-white pb-12">
                    // Mobile top bar
                    <div class="md:hidden col-span-full border-b border-gray-700 p-3
                                flex items-center justify-between">
                        <button
                            class="p-2 rounded hover:bg-gray-700"
                            on:click=move |_| set_drawer_open.set(true)
                        >
                            "☰"
                        </button>
                        <div class="font-medium">"Chest X-ray Diagnosis"</div>
                        <div class="w-9" />
                    </div>

                    // Sidebar persistent on md+
                    <div class="hidden md:block md:row-span-2">
                        <Sidebar
                            items=predictions
                            loading=history_loading
                            on_select=on_select
                            on_logout=on_logout
                        />
                    </div>

                    // Mobile drawer
                    <MobileDrawer
                        open=drawer_open
                        on_close=Callback::new(move |_| set_drawer_open.set(false))
                    >
                        <Sidebar
                            items=predictions
                            loading=history_loading
                            on_select=on_select
                            on_logout=on_logout
                        />
                    </MobileDrawer>

                    // Main content
                    <main class="p-4 md:p-6">
                        <h1 class="hidden md:block text-2xl font-semibold mb-4">
                            "Chest X-ray Diagnosis"
                        </h1>
                        <Uploader on_result=on_result external_image_url=external_image_url />

                        // Mobile results below the uploader
                        <div class="md:hidden mt-6 border-t border-gray-700 pt-4">
                            <ResultsPanel result=result />
                        </div>
                    </main>

                    <aside class="hidden md:block p-6 border-l border-gray-700">
                        <ResultsPanel result=result />
                    </aside>
                </div>
            }
            .into_view()
        }}
    }
}
