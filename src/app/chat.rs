use leptos::{ev::KeyboardEvent, html, prelude::*, task::spawn_local};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::chat::{prepare_input, ChatMessage, Role, ASSISTANT_NAME, MAX_INPUT_CHARS};

#[server]
pub async fn ask_assistant(message: String) -> Result<String, ServerFnError> {
    use crate::chat::{ask, ChatConfig};

    let config = ChatConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "assistant is not configured");
        ServerFnError::new("Assistant is unavailable")
    })?;
    ask(&config, &message).await.map_err(|e| {
        tracing::warn!(error = %e, "assistant request failed");
        ServerFnError::new("Assistant is unavailable")
    })
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (is_typing, set_is_typing) = signal(false);
    let messages = RwSignal::new(vec![ChatMessage::greeting()]);
    let input_ref = NodeRef::<html::Input>::new();
    let scroll_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) =
        use_local_storage::<Vec<ChatMessage>, JsonSerdeWasmCodec>("chat_transcript");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let saved = stored.get_untracked();
            if !saved.is_empty() {
                messages.set(saved);
            }
        },
        true,
    );

    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || messages.get(),
        move |transcript, _, _| set_stored.set(transcript.clone()),
        false,
    );

    // keep the newest message in view
    Effect::new(move |_| {
        messages.track();
        is_typing.track();
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let send = move || {
        if is_typing.get_untracked() {
            return;
        }
        let Some(el) = input_ref.get_untracked() else {
            return;
        };
        let Some(text) = prepare_input(&el.value()) else {
            return;
        };
        el.set_value("");
        messages.update(|m| m.push(ChatMessage::user(text.clone())));
        set_is_typing.set(true);
        spawn_local(async move {
            let reply = match ask_assistant(text).await {
                Ok(answer) => ChatMessage::assistant(answer),
                Err(e) => {
                    log::warn!("assistant request failed: {e}");
                    ChatMessage::failure()
                }
            };
            messages.update(|m| m.push(reply));
            set_is_typing.set(false);
        });
    };

    let reset = move |_| messages.set(vec![ChatMessage::greeting()]);

    view! {
        <button
            type="button"
            class="fixed bottom-8 right-8 z-[150] p-4 bg-indigo-600 rounded-full shadow-2xl hover:bg-indigo-500 transition-all"
            aria-label=move || if is_open.get() { "Close chat" } else { "Open chat" }
            on:click=move |_| set_is_open.update(|o| *o = !*o)
        >
            "💬"
        </button>
        <Show when=move || is_open.get()>
            <div class="fixed bottom-24 right-8 z-[200] w-[380px] h-[500px] bg-[#0d0f14] border border-white/10 rounded-3xl shadow-2xl flex flex-col overflow-hidden">
                <div class="p-6 bg-white/5 border-b border-white/10 flex justify-between items-center">
                    <div>
                        <h3 class="text-sm font-bold">
                            {ASSISTANT_NAME}
                            <span class="text-[10px] text-indigo-400 font-mono ml-1 uppercase">
                                "Secure"
                            </span>
                        </h3>
                        <p class="text-[10px] text-white/40">"Portfolio Assistant"</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="text-[10px] uppercase tracking-widest text-white/40 hover:text-white transition-colors"
                            on:click=reset
                        >
                            "Clear"
                        </button>
                        <button
                            type="button"
                            class="text-white/40 hover:text-white transition-colors"
                            aria-label="Close chat"
                            on:click=move |_| set_is_open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                </div>

                <div node_ref=scroll_ref class="flex-1 overflow-y-auto p-6 space-y-4">
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|m| view! { <Bubble message=m /> })
                            .collect_view()
                    }}
                    <Show when=move || is_typing.get()>
                        <div class="text-[10px] text-indigo-400 animate-pulse font-mono">
                            {format!("{ASSISTANT_NAME} is thinking...")}
                        </div>
                    </Show>
                </div>

                <form
                    class="p-4 bg-white/5 border-t border-white/10"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }
                >
                    <div class="relative flex items-center">
                        <input
                            node_ref=input_ref
                            type="text"
                            maxlength=MAX_INPUT_CHARS.to_string()
                            placeholder="Ask about Ticonna's work..."
                            class="w-full bg-white/5 border border-white/10 rounded-xl py-3 pl-4 pr-12 text-xs focus:outline-none focus:border-indigo-500 transition-all"
                            on:keydown=move |ev: KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    set_is_open.set(false);
                                }
                            }
                        />
                        <button
                            type="submit"
                            class="absolute right-2 p-2 text-indigo-400 hover:text-indigo-300 transition-colors disabled:opacity-30"
                            aria-label="Send"
                            disabled=move || is_typing.get()
                        >
                            "➤"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[component]
fn Bubble(message: ChatMessage) -> impl IntoView {
    let (row, bubble) = match (message.role, message.is_error) {
        (Role::User, _) => ("flex justify-end", "bg-indigo-600 text-white rounded-tr-none"),
        (Role::Assistant, false) => (
            "flex justify-start",
            "bg-white/5 text-white/80 border border-white/5 rounded-tl-none",
        ),
        (Role::Assistant, true) => (
            "flex justify-start",
            "bg-red-500/10 text-red-200 border border-red-500/20 rounded-tl-none",
        ),
    };
    view! {
        <div class=row>
            <div class=format!("max-w-[80%] p-3 rounded-2xl text-xs leading-relaxed {bubble}")>
                {message.text}
            </div>
        </div>
    }
}
