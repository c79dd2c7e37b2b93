use leptos::prelude::*;

use super::hero::{EMAIL, EMAIL_HREF, GITHUB_URL, LINKEDIN_URL};

struct SocialLink {
    label: &'static str,
    glyph: &'static str,
    href: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Github",
        glyph: "GH",
        href: GITHUB_URL,
    },
    SocialLink {
        label: "LinkedIn",
        glyph: "in",
        href: LINKEDIN_URL,
    },
    SocialLink {
        label: "Email",
        glyph: "@",
        href: EMAIL_HREF,
    },
];

/// Fixed icon column on the left edge, large screens only.
#[component]
pub fn SocialSidebar() -> impl IntoView {
    view! {
        <div class="fixed left-6 bottom-0 z-[100] hidden lg:flex flex-col items-center gap-6">
            <div class="flex flex-col gap-6">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                                class="text-slate-500 hover:text-indigo-400 transition-all duration-300 group relative font-mono text-xs"
                            >
                                {link.glyph}
                                <span class="absolute left-10 top-1/2 -translate-y-1/2 bg-indigo-600 text-white text-[10px] font-bold px-2 py-1 rounded opacity-0 group-hover:opacity-100 transition-opacity whitespace-nowrap uppercase tracking-widest">
                                    {link.label}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="w-px h-[120px] bg-gradient-to-t from-transparent via-indigo-500/50 to-indigo-500/50"></div>
        </div>
    }
}

/// Vertical email address pinned to the right edge.
#[component]
pub fn EmailRail() -> impl IntoView {
    view! {
        <div class="fixed right-6 bottom-0 z-[100] hidden lg:flex flex-col items-center gap-6">
            <a
                href=EMAIL_HREF
                class="text-slate-500 hover:text-indigo-400 transition-all duration-300 text-[10px] font-mono tracking-[0.3em] [writing-mode:vertical-rl] mb-4"
            >
                {EMAIL}
            </a>
            <div class="w-px h-[120px] bg-gradient-to-t from-transparent via-indigo-500/50 to-indigo-500/50"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_link_matches_contact_address() {
        let email = SOCIAL_LINKS
            .iter()
            .find(|l| l.label == "Email")
            .expect("email link present");
        assert_eq!(email.href, format!("mailto:{EMAIL}"));
    }
}
