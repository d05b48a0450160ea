//! Mobile Drawer Component
//!
//! Slide-in overlay panel hosting the sidebar on small screens.

use leptos::*;

/// Mobile drawer component
#[component]
pub fn MobileDrawer(
    /// Whether the drawer is shown
    #[prop(into)]
    open: Signal<bool>,
    /// Called when the backdrop or close button is used
    #[prop(into)]
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || {
            let base = "fixed inset-0 z-50 md:hidden";
            if open.get() {
                format!("{} pointer-events-auto", base)
            } else {
                format!("{} pointer-events-none", base)
            }
        }>
            // Backdrop
            <div
                class=move || {
                    let base = "absolute inset-0 bg-black/50 transition-opacity";
                    if open.get() {
                        format!("{} opacity-100", base)
                    } else {
                        format!("{} opacity-0", base)
                    }
                }
                on:click=move |_| on_close.call(())
            />

            // Panel
            <div class=move || {
                let base = "absolute left-0 top-0 h-full w-4/5 max-w-xs bg-gray-800 \
                            border-r border-gray-700 transform transition-transform";
                if open.get() {
                    format!("{} translate-x-0", base)
                } else {
                    format!("{} -translate-x-full", base)
                }
            }>
                <div class="p-3 border-b border-gray-700 flex items-center justify-between">
                    <span class="font-medium">"Menu"</span>
                    <button
                        on:click=move |_| on_close.call(())
                        class="p-1 hover:bg-gray-700 rounded"
                    >
                        "✕"
                    </button>
                </div>
                <div class="h-[calc(100%-49px)] overflow-y-auto">{children()}</div>
            </div>
        </div>
    }
}
