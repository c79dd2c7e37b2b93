use std::time::Duration;

use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::contact::{ContactError, ContactForm, CONFIRMATION_MS, MAX_MESSAGE_CHARS};

use super::hero::EMAIL;

#[component]
pub fn Contact() -> impl IntoView {
    let (submitted, set_submitted) = signal(false);
    let (error, set_error) = signal(None::<ContactError>);
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let form = ContactForm {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };
        if let Err(e) = form.validate() {
            log::debug!("contact form rejected: {e}");
            set_error.set(Some(e));
            return;
        }
        // no mail backend; the visitor just gets the confirmation
        log::info!("contact form submitted");
        set_error.set(None);
        set_submitted.set(true);
        set_timeout(
            move || set_submitted.set(false),
            Duration::from_millis(CONFIRMATION_MS),
        );
    };

    view! {
        <div class="py-32 relative bg-[#0a0c10] overflow-hidden">
            <div class="container mx-auto px-6 max-w-6xl relative z-10">
                <div class="flex flex-col lg:flex-row gap-20 items-center">
                    <div class="lg:w-1/2 section-content">
                        <span class="text-indigo-400 font-mono text-sm tracking-widest uppercase mb-4 block">
                            "Get In Touch"
                        </span>
                        <h2 class="text-5xl md:text-6xl font-serif font-bold mb-8 leading-tight">
                            "Let's build something "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-purple-400">
                                "meaningful."
                            </span>
                        </h2>
                        <p class="text-slate-400 text-lg mb-12 max-w-md font-light leading-relaxed">
                            "I'm currently seeking Junior UX Designer roles and internships. If you're looking for a designer who prioritizes accessibility and user empathy, I'd love to connect."
                        </p>
                        <div class="space-y-6">
                            <div>
                                <p class="text-[10px] text-slate-500 font-bold uppercase tracking-widest">
                                    "Email"
                                </p>
                                <a
                                    href=format!("mailto:{EMAIL}")
                                    class="hover:text-indigo-400 transition-colors"
                                >
                                    {EMAIL}
                                </a>
                            </div>
                            <div>
                                <p class="text-[10px] text-slate-500 font-bold uppercase tracking-widest">
                                    "Location"
                                </p>
                                <p>"Oak Park, IL (Remote Friendly)"</p>
                            </div>
                        </div>
                    </div>

                    <div class="lg:w-5/12 w-full">
                        <div class="bg-[#0d0f14] p-10 rounded-[2.5rem] border border-white/10">
                            <Show
                                when=move || !submitted.get()
                                fallback=|| {
                                    view! {
                                        <div class="py-20 text-center" role="status">
                                            <div class="text-emerald-500 text-5xl mb-6">"✔"</div>
                                            <h3 class="text-2xl font-bold mb-2">"Message Sent!"</h3>
                                            <p class="text-slate-400">
                                                "Thank you for reaching out. Ticonna will respond shortly."
                                            </p>
                                        </div>
                                    }
                                }
                            >
                                <form class="space-y-6" novalidate=true on:submit=on_submit>
                                    <div class="space-y-2">
                                        <label
                                            for="contact_name"
                                            class="text-[10px] font-bold text-slate-500 uppercase tracking-widest ml-1"
                                        >
                                            "Full Name"
                                        </label>
                                        <input
                                            id="contact_name"
                                            node_ref=name_ref
                                            type="text"
                                            placeholder="Enter your name"
                                            class="w-full bg-white/5 border border-white/10 rounded-2xl p-4 outline-none focus:border-indigo-500/50 transition-all"
                                        />
                                    </div>
                                    <div class="space-y-2">
                                        <label
                                            for="contact_email"
                                            class="text-[10px] font-bold text-slate-500 uppercase tracking-widest ml-1"
                                        >
                                            "Email Address"
                                        </label>
                                        <input
                                            id="contact_email"
                                            node_ref=email_ref
                                            type="email"
                                            placeholder="email@company.com"
                                            class="w-full bg-white/5 border border-white/10 rounded-2xl p-4 outline-none focus:border-indigo-500/50 transition-all"
                                        />
                                    </div>
                                    <div class="space-y-2">
                                        <label
                                            for="contact_message"
                                            class="text-[10px] font-bold text-slate-500 uppercase tracking-widest ml-1"
                                        >
                                            "Your Message"
                                        </label>
                                        <textarea
                                            id="contact_message"
                                            node_ref=message_ref
                                            rows="4"
                                            maxlength=MAX_MESSAGE_CHARS.to_string()
                                            placeholder="Let's talk about a project..."
                                            class="w-full bg-white/5 border border-white/10 rounded-2xl p-4 outline-none focus:border-indigo-500/50 transition-all resize-none"
                                        ></textarea>
                                    </div>
                                    {move || {
                                        error
                                            .get()
                                            .map(|e| {
                                                view! {
                                                    <p class="text-sm text-red-400" role="alert">
                                                        {e.to_string()}
                                                    </p>
                                                }
                                            })
                                    }}
                                    <button
                                        type="submit"
                                        class="w-full bg-indigo-600 hover:bg-indigo-500 py-4 rounded-2xl font-bold flex items-center justify-center gap-2 transition-all shadow-lg shadow-indigo-500/20"
                                    >
                                        "Send Message ➤"
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
