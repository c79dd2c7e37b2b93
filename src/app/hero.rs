use leptos::prelude::*;

pub const LINKEDIN_URL: &str = "https://linkedin.com/in/ticonna-mckinney-8580a6263";
pub const GITHUB_URL: &str = "https://github.com/ticonnam";
pub const EMAIL: &str = "ticonnam@gmail.com";
pub const EMAIL_HREF: &str = "mailto:ticonnam@gmail.com";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="relative min-h-screen flex items-center justify-center pt-20">
            <div class="container mx-auto px-6 max-w-6xl relative z-10">
                <div class="flex flex-col-reverse lg:flex-row items-center justify-between gap-12 lg:gap-24">
                    <div class="flex-1 text-center lg:text-left section-content">
                        <div class="mb-6 inline-block">
                            <span class="py-1 px-3 rounded-full bg-white/5 border border-white/10 text-[10px] font-bold text-indigo-300 uppercase tracking-widest">
                                "Available for Junior UX Designer roles"
                            </span>
                        </div>
                        <h1 class="text-5xl md:text-7xl font-serif font-bold mb-6 leading-tight">
                            "Designing for " <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-purple-400">
                                "People."
                            </span>
                        </h1>
                        <p class="text-lg text-slate-400 max-w-xl mx-auto lg:mx-0 mb-10 font-light">
                            "Hi, I'm Ticonna. A Junior UX Designer transforming complex problems into intuitive, user-friendly designs through research and empathy."
                        </p>
                        <div class="flex justify-center lg:justify-start gap-4">
                            <a
                                href="#projects"
                                class="px-8 py-4 bg-indigo-600 rounded-full font-bold shadow-lg shadow-indigo-500/25 flex items-center gap-2 hover:bg-indigo-500 transition-all"
                            >
                                "View My Work →"
                            </a>
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn Profile"
                                class="p-4 rounded-full bg-white/5 border border-white/10 text-slate-400 hover:text-white transition-all"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href=format!("mailto:{EMAIL}")
                                aria-label="Email"
                                class="p-4 rounded-full bg-white/5 border border-white/10 text-slate-400 hover:text-white transition-all"
                            >
                                "✉"
                            </a>
                        </div>
                    </div>
                    <div class="flex-1 flex justify-center lg:justify-end">
                        <div class="relative w-64 h-64 md:w-80 md:h-80 lg:w-[450px] lg:h-[450px]">
                            <div class="absolute inset-0 bg-indigo-500/20 blur-[80px] rounded-full animate-pulse" />
                            <div class="relative w-full h-full rounded-[3rem] overflow-hidden border border-white/10 shadow-2xl rotate-3">
                                <img
                                    src="/the_beautiful_ticonna.jpg"
                                    alt="Ticonna Mckinney"
                                    class="w-full h-full object-cover object-top"
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
