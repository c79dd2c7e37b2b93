use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#hero"),
    ("Projects", "#projects"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-[100] px-6 py-8 bg-gradient-to-b from-[#030303] to-transparent">
            <nav class="max-w-7xl mx-auto flex justify-between items-center">
                <a href="#hero" class="text-xl font-serif tracking-tighter italic">
                    "TM"
                    <span class="text-indigo-500">"."</span>
                </a>
                <ul class="flex gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(name, href)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="relative text-sm font-bold uppercase tracking-widest text-slate-400 hover:text-white transition-colors duration-200 group"
                                    >
                                        {name}
                                        <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-indigo-500 transition-all duration-300 group-hover:w-full" />
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
