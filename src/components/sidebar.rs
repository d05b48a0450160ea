//! History Sidebar Component
//!
//! Identity block, per-user stats, the prediction history list, and
//! logout. Purely presentational: the history list is owned and
//! fetched by the home page and passed in as a prop.

use leptos::*;

use crate::api;
use crate::api::{HistoryItem, UserStatsResponse};
use crate::components::loading::Loading;
use crate::state::use_session;

/// Up-to-two-letter monogram for the avatar circle
fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Short local timestamp for list rows
fn format_row_time(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// History sidebar component
#[component]
pub fn Sidebar(
    /// History items fetched by the page
    #[prop(into)]
    items: Signal<Vec<HistoryItem>>,
    /// Whether the history fetch is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Called with the full item when one is selected
    #[prop(into)]
    on_select: Callback<HistoryItem>,
    /// Called after the session has been cleared
    #[prop(into)]
    on_logout: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let name = move || session.get().and_then(|s| s.user_name);
    let email = move || session.get().and_then(|s| s.user_email);

    // Per-user stats are this view's own concern; one fetch on mount
    let (stats, set_stats) = create_signal(None::<UserStatsResponse>);
    create_effect(move |_| {
        let Some(email) = email() else {
            return;
        };
        spawn_local(async move {
            match api::get_user_stats(&email).await {
                Ok(user_stats) => set_stats.set(Some(user_stats)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch user stats: {}", e).into(),
                    );
                }
            }
        });
    });

    let handle_logout = move |_| {
        api::logout_user();
        session.refresh();
        on_logout.call(());
    };

    view! {
        <aside class="w-full md:w-64 border-r border-gray-700 h-full flex flex-col bg-gray-800">
            // Identity block
            <div class="p-4 border-b border-gray-700 flex items-center gap-3">
                <div class="w-10 h-10 rounded-full bg-primary-600 text-white flex items-center
                            justify-center font-semibold select-none">
                    {move || initials(&name().unwrap_or_default())}
                </div>
                <div class="truncate">
                    <div class="font-medium truncate">
                        {move || name().unwrap_or_else(|| "User".to_string())}
                    </div>
                    <div class="text-xs text-gray-400 truncate">
                        {move || email().unwrap_or_else(|| "—".to_string())}
                    </div>
                </div>
            </div>

            // Per-user stats
            {move || {
                stats.get().map(|s| view! {
                    <div class="px-4 py-3 border-b border-gray-700 text-xs text-gray-400 space-y-1">
                        <div>{format!("{} predictions", s.total_predictions)}</div>
                        {s.most_common_prediction.map(|label| view! {
                            <div>"Most common: " {label}</div>
                        })}
                        <div>{format!("Avg confidence: {:.1}%", s.average_confidence * 100.0)}</div>
                    </div>
                })
            }}

            <div class="p-3 text-xs uppercase tracking-wide text-gray-400">"History"</div>

            // History list
            <div class="flex-1 overflow-y-auto">
                {move || {
                    if loading.get() {
                        return view! { <Loading /> }.into_view();
                    }

                    let list = items.get();
                    if list.is_empty() {
                        view! {
                            <div class="text-sm text-gray-400 px-4">"No predictions yet"</div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <ul class="space-y-1 px-2">
                                {list
                                    .into_iter()
                                    .map(|item| {
                                        let label = item.predicted_class.clone();
                                        let meta = format!(
                                            "{:.1}% • {}",
                                            item.confidence_score * 100.0,
                                            format_row_time(&item.created_at)
                                        );
                                        view! {
                                            <li>
                                                <button
                                                    class="w-full text-left px-2 py-1 rounded hover:bg-gray-700
                                                           transition-colors"
                                                    on:click=move |_| on_select.call(item.clone())
                                                >
                                                    <div class="text-sm font-medium truncate">{label}</div>
                                                    <div class="text-xs text-gray-400">{meta}</div>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </div>

            // Logout
            <div class="p-4 border-t border-gray-700">
                <button
                    on:click=handle_logout
                    class="w-full border border-gray-600 rounded px-3 py-2 hover:bg-gray-700
                           transition-colors"
                >
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("John Doe"), "JD");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("alice"), "A");
    }

    #[test]
    fn test_initials_truncates_to_two() {
        assert_eq!(initials("Anna Maria del Rio"), "AM");
    }

    #[test]
    fn test_initials_empty() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_format_row_time_fallback() {
        assert_eq!(format_row_time("not a timestamp"), "not a timestamp");
    }
}
