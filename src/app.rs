mod about;
mod chat;
mod contact;
mod footer;
mod gallery;
mod header;
mod hero;
mod projects;
mod sidebar;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use chat::ChatWidget;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use sidebar::{EmailRail, SocialSidebar};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Ticonna Mckinney - Junior UX Designer. Case studies in research, accessibility and inclusive design."
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#030303] text-white font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Ticonna Mckinney - {title}") />

        <Router>
            <div class="relative min-h-screen overflow-x-hidden">
                <Header />
                <SocialSidebar />
                <EmailRail />
                <main class="relative z-10">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                    <Footer />
                </main>
                <ChatWidget />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="UX Portfolio" />
        <Hero />
        <section id="projects">
            <Projects />
        </section>
        <section id="about">
            <About />
        </section>
        <section id="contact">
            <Contact />
        </section>
    }
}
