//! App Root Component
//!
//! Routing, the session provider, and the status footer.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::pages::{Auth, Home};
use crate::state::{provide_session_state, use_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Session service for every view below
    provide_session_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/auth" view=Auth />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with backend status
                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing backend health and service totals
#[component]
fn Footer() -> impl IntoView {
    let session = use_session();

    let (health, set_health) = create_signal(None::<api::HealthResponse>);
    let (total_predictions, set_total_predictions) = create_signal(None::<u64>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::get_health().await {
                Ok(response) => set_health.set(Some(response)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Health check failed: {}", e).into());
                    set_health.set(None);
                }
            }
        });
    });

    // Service-wide totals need the bearer credential
    create_effect(move |_| {
        if !session.is_authenticated() {
            set_total_predictions.set(None);
            return;
        }
        spawn_local(async move {
            match api::get_stats().await {
                Ok(stats) => set_total_predictions.set(Some(stats.total_predictions)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stats: {}", e).into());
                }
            }
        });
    });

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-2 px-4">
            <div class="container mx-auto flex items-center justify-between text-xs">
                // Backend status
                <div class="flex items-center space-x-2">
                    {move || {
                        match health.get() {
                            Some(response) if response.is_ok() => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>"Service online"</span>
                                </span>
                            }
                            .into_view(),
                            Some(_) => view! {
                                <span class="flex items-center space-x-1 text-yellow-400">
                                    <span class="w-2 h-2 bg-yellow-400 rounded-full" />
                                    <span>"Service degraded"</span>
                                </span>
                            }
                            .into_view(),
                            None => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"Checking..."</span>
                                </span>
                            }
                            .into_view(),
                        }
                    }}
                </div>

                // Service totals
                <div class="text-gray-400">
                    {move || {
                        total_predictions
                            .get()
                            .map(|count| format!("{} predictions served", count))
                            .unwrap_or_default()
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to the dashboard"
            </A>
        </div>
    }
}
