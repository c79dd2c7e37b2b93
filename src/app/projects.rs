use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::projects::get_projects;
use crate::{
    gallery::Gallery,
    projects::{Project, ALL_PROJECTS, GLOBAL_PROJECT_CACHE},
};

use super::gallery::GalleryViewer;

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    Ok(get_projects().await)
}

#[component]
pub fn Projects() -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new());
    // card whose artifacts are in the viewer, cleared by the viewer's close event
    let selected = RwSignal::new(None::<String>);
    let expanded = RwSignal::new(None::<String>);

    let projects = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(p) = cache.get(ALL_PROJECTS) {
                return (*p).clone();
            }
            let projects = match get_projects_server().await {
                Ok(p) => p,
                Err(e) => {
                    log::error!("couldn't load case studies: {e}");
                    Vec::new()
                }
            };
            #[cfg(feature = "hydrate")]
            cache.insert(ALL_PROJECTS.to_string(), projects.clone());
            projects
        },
    );

    view! {
        <div class="py-24 px-6 max-w-7xl mx-auto">
            <h2 class="text-5xl font-serif mb-14">
                "Case " <span class="text-indigo-400 italic">"Studies"</span>
            </h2>
            <Transition fallback=move || {
                view! {
                    <div class="flex gap-8">
                        <div class="loading-skeleton min-w-[340px] h-72 rounded-[2.5rem]"></div>
                        <div class="loading-skeleton min-w-[340px] h-72 rounded-[2.5rem]"></div>
                        <div class="loading-skeleton min-w-[340px] h-72 rounded-[2.5rem]"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let projects = projects.await;
                    view! {
                        <div class="flex gap-8 overflow-x-auto pb-4 section-content">
                            {projects
                                .into_iter()
                                .map(|project| {
                                    view! { <ProjectCard project gallery selected expanded /> }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
            <GalleryViewer gallery on_close=Callback::new(move |_: ()| selected.set(None)) />
        </div>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    gallery: RwSignal<Gallery>,
    selected: RwSignal<Option<String>>,
    expanded: RwSignal<Option<String>>,
) -> impl IntoView {
    let Project {
        id,
        title,
        description,
        problem,
        thumbnail,
        case_study,
        gallery: images,
        tags,
        stats,
        body,
        ..
    } = project;

    let open_at = {
        let id = id.clone();
        let images = images.clone();
        move |index: usize| {
            let images = images.clone();
            gallery.update(|g| {
                g.open(images);
                g.jump_to(index);
            });
            selected.set(Some(id.clone()));
        }
    };

    let is_selected = {
        let id = id.clone();
        Memo::new(move |_| selected.with(|s| s.as_deref() == Some(id.as_str())))
    };
    let is_expanded = {
        let id = id.clone();
        Memo::new(move |_| expanded.with(|e| e.as_deref() == Some(id.as_str())))
    };
    let toggle_expanded = {
        let id = id.clone();
        move |_| {
            expanded.update(|e| {
                *e = if e.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id.clone())
                };
            })
        }
    };

    let open_thumbnail = open_at.clone();
    let thumbnail_label = format!("Open {title} case study");
    let thumbnail_alt = title.clone();
    let heading = title.clone();

    view! {
        <article class=move || {
            format!(
                "min-w-[340px] max-w-[340px] bg-white/5 border rounded-[2.5rem] overflow-hidden transition-colors {}",
                if is_selected.get() { "border-indigo-500/60" } else { "border-white/10" },
            )
        }>
            <button
                type="button"
                class="relative w-full aspect-video overflow-hidden group"
                aria-label=thumbnail_label
                on:click=move |_| open_thumbnail(0)
            >
                <img
                    src=thumbnail
                    alt=thumbnail_alt
                    class="w-full h-full object-cover opacity-80 group-hover:opacity-100 transition"
                />
                <div class="absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 flex items-center justify-center">
                    "🔍"
                </div>
            </button>

            <div class="p-6">
                <h3 class="text-xl mb-2">{heading}</h3>
                <p class="text-slate-400 text-sm font-light mb-4">{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 bg-indigo-500/5 border border-indigo-500/20 rounded-full text-[10px] text-indigo-300 uppercase tracking-widest">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    class="flex items-center gap-2 text-indigo-400 text-sm font-semibold"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=toggle_expanded
                >
                    "View Case Study "
                    {move || if is_expanded.get() { "▴" } else { "▾" }}
                </button>
            </div>

            {move || {
                is_expanded.get()
                    .then(|| {
                        let open_at = open_at.clone();
                        view! {
                            <div class="px-6 pb-6 text-white/70 border-t border-white/10 bg-black/40">
                                <div class="text-indigo-400 uppercase text-[10px] mt-4 mb-2 font-bold">
                                    "Problem"
                                </div>
                                <p class="mb-4">{problem.clone()}</p>
                                <div class="flex flex-wrap gap-4 mb-4">
                                    {stats
                                        .iter()
                                        .map(|stat| {
                                            view! {
                                                <div>
                                                    <p class="text-[10px] uppercase tracking-widest text-white/30">
                                                        {stat.label.clone()}
                                                    </p>
                                                    <p class="text-sm text-white font-semibold">
                                                        {stat.value.clone()}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <article class="prose prose-invert prose-sm mb-4">
                                    <div inner_html=body.clone()></div>
                                </article>
                                <p class="text-[10px] uppercase tracking-widest text-white/30 mb-3 font-bold">
                                    "Click to zoom artifacts"
                                </p>
                                <div class="flex gap-3 mb-4">
                                    {images
                                        .iter()
                                        .enumerate()
                                        .map(|(idx, img)| {
                                            let open_at = open_at.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class="relative w-28 h-16 rounded-lg overflow-hidden border border-white/10"
                                                    aria-label=format!("Open artifact {}", idx + 1)
                                                    on:click=move |_| open_at(idx)
                                                >
                                                    <img
                                                        src=img.as_str().to_string()
                                                        class="w-full h-full object-cover"
                                                        alt=format!("{title} artifact {}", idx + 1)
                                                    />
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                {case_study
                                    .clone()
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                download=""
                                                target="_blank"
                                                class="inline-block text-sm text-indigo-400 hover:text-indigo-300"
                                            >
                                                "Download full case study (PDF)"
                                            </a>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </article>
    }
}
