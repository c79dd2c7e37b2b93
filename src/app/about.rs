use leptos::prelude::*;

use super::toast::Toast;

pub const RESUME_PATH: &str = "/ticonna-mckinney-resume.pdf";

struct Credential {
    role: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
}

const CREDENTIALS: &[Credential] = &[Credential {
    role: "UX/UI Design Mastery Certificate",
    company: "UX Peak",
    period: "2024 - 2025",
    description: "Rigorous training on industry-standard tools and visual design principles, resulting in 3 comprehensive case studies.",
}];

// (skill, level out of 100)
const SKILLS: &[(&str, u8)] = &[
    ("User Empathy", 95),
    ("Accessibility", 95),
    ("Figma", 90),
    ("User Research", 85),
    ("Prototyping", 85),
    ("Visual Design", 80),
];

const PROCESS: &[(&str, &str)] = &[
    ("Understand", "Personas & Empathy Maps"),
    ("Ideate", "User Flows & Wireframing"),
    ("Refine", "High-Fidelity Prototyping"),
];

const EXPERTISE: &[&str] = &[
    "Figma",
    "UX Research",
    "Accessibility",
    "Mobile First",
    "Information Architecture",
];

#[component]
pub fn About() -> impl IntoView {
    let show_toast = RwSignal::new(false);

    view! {
        <div class="py-32 relative bg-[#0a0c10] overflow-hidden">
            <div class="container mx-auto px-6 max-w-6xl relative z-10">
                <div class="mb-20 section-content">
                    <span class="text-indigo-400 font-mono text-sm tracking-widest uppercase mb-4 block">
                        "The Designer's Journey"
                    </span>
                    <h2 class="text-4xl md:text-5xl font-serif font-bold mb-6">
                        "Empathy-Led "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-purple-400">
                            "Design."
                        </span>
                    </h2>
                    <p class="text-slate-400 max-w-2xl text-lg font-light leading-relaxed">
                        "I solve real-world problems by observing human behavior and understanding frustrations. My goal is to build digital solutions that remove friction and feel invisible to the user."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-12 gap-12">
                    <div class="lg:col-span-7 space-y-10">
                        <h3 class="text-xl font-bold mb-8">"Education & Credentials"</h3>
                        <div class="relative border-l border-white/10 ml-3 pl-8 space-y-12">
                            {CREDENTIALS
                                .iter()
                                .map(|c| {
                                    view! {
                                        <div class="relative">
                                            <div class="absolute -left-[41px] top-1 w-5 h-5 rounded-full bg-[#0a0c10] border-2 border-indigo-500" />
                                            <div class="mb-2 flex flex-col sm:flex-row sm:justify-between sm:items-center gap-1">
                                                <h4 class="text-xl font-bold leading-tight">{c.role}</h4>
                                                <span class="text-indigo-400 font-serif italic text-sm shrink-0">
                                                    {c.period}
                                                </span>
                                            </div>
                                            <p class="text-indigo-300/80 text-sm font-semibold mb-4 uppercase tracking-wider">
                                                {c.company}
                                            </p>
                                            <p class="text-slate-400 font-light leading-relaxed text-sm max-w-xl">
                                                {c.description}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <h3 class="text-xl font-bold mb-6">"Skills"</h3>
                        <ul class="space-y-4 max-w-xl">
                            {SKILLS
                                .iter()
                                .map(|(skill, level)| {
                                    view! {
                                        <li>
                                            <div class="flex justify-between text-sm mb-1">
                                                <span>{*skill}</span>
                                                <span class="text-slate-500 font-mono">{format!("{level}%")}</span>
                                            </div>
                                            <div class="h-1.5 rounded-full bg-white/5">
                                                <div
                                                    class="h-1.5 rounded-full bg-gradient-to-r from-indigo-500 to-purple-500"
                                                    style=format!("width: {level}%")
                                                />
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="lg:col-span-5 flex flex-col gap-8">
                        <div class="bg-white/5 border border-white/10 rounded-[2.5rem] p-10 backdrop-blur-xl">
                            <h3 class="text-xl font-bold mb-10">"My UX Process"</h3>
                            <div class="space-y-8">
                                {PROCESS
                                    .iter()
                                    .map(|(label, desc)| {
                                        view! {
                                            <div>
                                                <p class="font-bold text-sm tracking-wide">{*label}</p>
                                                <p class="text-slate-500 text-xs font-light">{*desc}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="mt-12 pt-10 border-t border-white/10">
                                <p class="text-[10px] font-black text-slate-500 uppercase tracking-[0.25em] mb-6">
                                    "Expertise"
                                </p>
                                <div class="flex flex-wrap gap-2.5">
                                    {EXPERTISE
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <span class="px-3.5 py-1.5 bg-indigo-500/5 border border-indigo-500/20 rounded-full text-[10px] text-indigo-300 font-bold uppercase tracking-widest">
                                                    {*skill}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <a
                            href=RESUME_PATH
                            download="ticonna-mckinney-resume.pdf"
                            target="_blank"
                            class="w-full py-5 bg-indigo-600 hover:bg-indigo-500 rounded-2xl font-bold flex items-center justify-center gap-3 transition-all shadow-lg shadow-indigo-500/25"
                            on:click=move |_| show_toast.set(true)
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
            <Toast message="Resume downloaded successfully!" visible=show_toast />
        </div>
    }
}
