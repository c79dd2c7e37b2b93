use std::time::Duration;

use leptos::prelude::*;

const TOAST_MS: u64 = 4000;

/// Transient confirmation pinned to the bottom of the viewport. Hides itself
/// after a few seconds; the timer is cancelled if the toast goes away first.
#[component]
pub fn Toast(#[prop(into)] message: String, visible: RwSignal<bool>) -> impl IntoView {
    let timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        if let Some(handle) = timer.get_value() {
            handle.clear();
            timer.set_value(None);
        }
        if visible.get() {
            let handle = set_timeout_with_handle(
                move || visible.set(false),
                Duration::from_millis(TOAST_MS),
            )
            .ok();
            timer.set_value(handle);
        }
    });
    on_cleanup(move || {
        if let Some(handle) = timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <Show when=move || visible.get()>
            <div
                role="status"
                class="fixed bottom-10 left-1/2 -translate-x-1/2 z-[200] flex items-center gap-3 px-6 py-4 bg-[#0d0f14] border border-emerald-500/30 rounded-2xl shadow-2xl backdrop-blur-xl"
            >
                <span class="text-emerald-500">"✔"</span>
                <p class="text-sm font-medium">{message.clone()}</p>
                <button
                    type="button"
                    class="ml-4 p-1 hover:bg-white/5 rounded-lg text-slate-500 hover:text-white transition-colors"
                    aria-label="Dismiss"
                    on:click=move |_| visible.set(false)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
