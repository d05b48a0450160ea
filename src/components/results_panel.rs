//! Results Panel Component
//!
//! Renders a prediction: predicted class, confidence, and the top
//! ranked class probabilities as proportional bars.

use leptos::*;
use std::collections::HashMap;

use crate::api::PredictionResult;

/// How many ranked classes the panel shows
const TOP_N: usize = 5;

/// Rank the per-class probabilities, highest first, keeping at most
/// `TOP_N` entries. Ties keep the stable sort's input order.
fn top_predictions(all: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = all.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(TOP_N);
    entries
}

/// Confidence as a percentage with two decimals ("84.21%")
fn format_confidence(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Per-class probability as a percentage with one decimal ("12.0%").
/// Doubles as the bar width.
fn format_probability(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Processing time with three decimals
fn format_processing_time(seconds: f64) -> String {
    format!("{:.3}s", seconds)
}

/// `created_at` in the viewer's local timezone; the raw string is kept
/// when it does not parse as RFC 3339
fn format_created_at(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

/// Results panel component
#[component]
pub fn ResultsPanel(
    /// Prediction to render; `None` shows the placeholder
    #[prop(into)]
    result: Signal<Option<PredictionResult>>,
) -> impl IntoView {
    view! {
        {move || match result.get() {
            None => view! {
                <div class="text-sm text-gray-400">
                    "No prediction yet. Upload an image to see results."
                </div>
            }
            .into_view(),
            Some(result) => {
                let top = top_predictions(&result.all_predictions);
                view! {
                    <div class="space-y-4">
                        <div>
                            <div class="text-xs uppercase text-gray-400">"Predicted class"</div>
                            <div class="text-lg md:text-xl font-semibold break-words">
                                {result.predicted_class.clone()}
                            </div>
                            <div class="text-sm text-gray-400">
                                "Confidence: " {format_confidence(result.confidence_score)}
                            </div>
                        </div>

                        <div>
                            <div class="text-xs uppercase text-gray-400 mb-2">"Top probabilities"</div>
                            <ul class="space-y-1">
                                {top
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <li class="flex items-center gap-3">
                                                <div class="w-32 md:w-40 truncate" title=label.clone()>
                                                    {label.clone()}
                                                </div>
                                                <div class="flex-1 h-2 bg-gray-700 rounded">
                                                    <div
                                                        class="h-2 bg-primary-500 rounded"
                                                        style=format!("width: {}", format_probability(value))
                                                    />
                                                </div>
                                                <div class="w-14 text-right text-sm">
                                                    {format_probability(value)}
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="text-xs text-gray-400">
                            "Prediction ID: " {result.prediction_id.clone()} " • "
                            {format_created_at(&result.created_at)} " • "
                            {format_processing_time(result.processing_time)}
                        </div>
                    </div>
                }
                .into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_top_predictions_ranked_descending() {
        let all = distribution(&[
            ("Pneumonia", 0.8421),
            ("Normal", 0.1204),
            ("COVID", 0.0375),
        ]);
        let top = top_predictions(&all);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].0, "Pneumonia");
        assert_eq!(top[1].0, "Normal");
        assert_eq!(top[2].0, "COVID");
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_top_predictions_truncates_to_five() {
        let all = distribution(&[
            ("a", 0.30),
            ("b", 0.25),
            ("c", 0.20),
            ("d", 0.12),
            ("e", 0.08),
            ("f", 0.04),
            ("g", 0.01),
        ]);
        let top = top_predictions(&all);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].0, "a");
        assert_eq!(top[4].0, "e");
    }

    #[test]
    fn test_top_predictions_empty() {
        let top = top_predictions(&HashMap::new());
        assert!(top.is_empty());
    }

    #[test]
    fn test_format_confidence_two_decimals() {
        assert_eq!(format_confidence(0.8421), "84.21%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
    }

    #[test]
    fn test_format_probability_one_decimal() {
        assert_eq!(format_probability(0.8421), "84.2%");
        assert_eq!(format_probability(0.0375), "3.8%");
    }

    #[test]
    fn test_format_processing_time_three_decimals() {
        assert_eq!(format_processing_time(0.153), "0.153s");
        assert_eq!(format_processing_time(2.0), "2.000s");
    }

    #[test]
    fn test_format_created_at() {
        // Local-timezone formatting keeps the documented shape
        let formatted = format_created_at("2024-05-01T12:00:00Z");
        assert_eq!(formatted.len(), "2024-05-01 12:00:00".len());

        // Unparseable timestamps pass through untouched
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }
}
