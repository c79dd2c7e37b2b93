use chrono::{DateTime, Datelike, FixedOffset};
use leptos::prelude::*;

use super::hero::{EMAIL, GITHUB_URL, LINKEDIN_URL};

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_time() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(BUILD_TIME).ok()
}

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_time();
    let year = built.map(|t| t.year()).unwrap_or(2025);
    let built_label = built.map(|t| format!("Built {}", t.format("%b %e, %Y")));

    view! {
        <footer class="bg-[#0a0c10] border-t border-white/5 pt-20 pb-10">
            <div class="container mx-auto px-6 max-w-6xl">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-16 items-start">
                    <div class="space-y-6">
                        <a href="#hero" class="text-3xl font-serif font-bold tracking-tighter">
                            "TM"
                            <span class="text-indigo-500">"."</span>
                        </a>
                        <p class="text-slate-500 text-sm leading-relaxed max-w-xs font-light italic">
                            "\"Inclusive design for all users, building digital spaces where everyone belongs.\""
                        </p>
                    </div>

                    <div class="flex flex-col gap-4">
                        <p class="text-xs font-bold uppercase tracking-widest mb-2">"Explore"</p>
                        {["Projects", "About", "Contact"]
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=format!("#{}", item.to_lowercase())
                                        class="text-slate-500 hover:text-white transition-colors text-sm w-fit"
                                    >
                                        {item}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex flex-col items-start md:items-end gap-6">
                        <div class="flex items-center gap-3 px-4 py-2 bg-white/5 border border-white/10 rounded-full">
                            <div class="w-2 h-2 rounded-full bg-emerald-500 animate-pulse" />
                            <span class="text-[10px] text-slate-300 font-bold uppercase tracking-widest">
                                "UXPeak UX/UI Design Mastery Certificate"
                            </span>
                        </div>
                        <div class="flex gap-6 text-xl">
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn Profile"
                                class="text-slate-500 hover:text-white transition-all"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href=GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub Profile"
                                class="text-slate-500 hover:text-white transition-all"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href=format!("mailto:{EMAIL}")
                                aria-label="Email"
                                class="text-slate-500 hover:text-white transition-all"
                            >
                                "✉"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="pt-10 border-t border-white/5 flex flex-col md:flex-row justify-between items-center gap-6">
                    <p class="text-slate-700 text-[10px] uppercase tracking-[0.4em] font-medium">
                        {format!("© {year} Ticonna Mckinney • Designed in Oak Park, IL")}
                    </p>
                    {built_label
                        .map(|label| {
                            view! { <p class="text-slate-700 text-[10px] font-mono">{label}</p> }
                        })}
                    <a
                        href="#hero"
                        class="text-slate-500 hover:text-indigo-400 text-[10px] font-bold uppercase tracking-widest transition-colors"
                    >
                        "Back to Top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_parses() {
        let built = build_time().expect("build.rs should emit an RFC 3339 timestamp");
        assert!(built.year() >= 2024);
    }
}
