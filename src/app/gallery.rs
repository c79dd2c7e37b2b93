use leptos::{ev, prelude::*};

use crate::gallery::{Gallery, Key, KeyOutcome};

/// Scale applied to the current image while zoomed.
const ZOOM_SCALE: f64 = 1.85;

/// Pointer travel (px) after which a press counts as a drag, not a click.
const DRAG_THRESHOLD: i32 = 4;

#[derive(Debug, Clone, Copy)]
struct DragState {
    last: (i32, i32),
    travelled: i32,
}

/// Full-viewport lightbox. The caller owns the [`Gallery`] state and opens it;
/// the viewer handles everything until it is dismissed, then fires `on_close`.
#[component]
pub fn GalleryViewer(
    gallery: RwSignal<Gallery>,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || gallery.with(Gallery::is_open)>
            <GalleryOverlay gallery on_close />
        </Show>
    }
}

// Mounted only while the gallery is open, so anything it acquires is released
// on every way out: close button, Escape, or the caller closing/unmounting.
#[component]
fn GalleryOverlay(gallery: RwSignal<Gallery>, on_close: Option<Callback<()>>) -> impl IntoView {
    let notify_close = move || {
        if let Some(cb) = on_close {
            cb.run(());
        }
    };
    let close = move || {
        gallery.update(Gallery::close);
        notify_close();
    };

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        let key = Key::from(ev.key().as_str());
        let outcome = gallery
            .try_update(|g| g.handle_key(key))
            .unwrap_or(KeyOutcome::Ignored);
        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::Handled => ev.prevent_default(),
            KeyOutcome::Closed => {
                ev.prevent_default();
                notify_close();
            }
        }
    });
    on_cleanup(move || key_listener.remove());

    let drag = StoredValue::new(None::<DragState>);
    let suppress_click = StoredValue::new(false);

    let is_zoomed = move || gallery.with(Gallery::is_zoomed);
    let image_src = move || {
        gallery.with(|g| {
            g.current_image()
                .map(|img| img.as_str().to_string())
                .unwrap_or_default()
        })
    };
    let image_style = move || {
        let (zoomed, pan) = gallery.with(|g| (g.is_zoomed(), g.pan()));
        let scale = if zoomed { ZOOM_SCALE } else { 1.0 };
        format!(
            "transform: translate3d({}px, {}px, 0) scale({scale});",
            pan.x, pan.y
        )
    };

    view! {
        <div
            role="dialog"
            aria-modal="true"
            aria-label="Case study gallery"
            class=move || {
                let background = if gallery.with(Gallery::is_high_contrast) {
                    "bg-black"
                } else {
                    "bg-[#030303]/95 backdrop-blur-md"
                };
                format!(
                    "fixed inset-0 z-[600] flex flex-col items-center justify-center overflow-hidden transition-colors duration-300 {background}",
                )
            }
        >
            <div class="absolute top-0 left-0 right-0 p-8 flex justify-between items-center z-[700]">
                <div class="text-white/40 text-xs font-mono">
                    {move || gallery.with(|g| format!("{} / {}", g.current_index() + 1, g.len()))}
                </div>
                <div class="flex items-center gap-4">
                    <button
                        type="button"
                        class="text-indigo-400 p-2"
                        aria-label="Toggle high contrast"
                        aria-pressed=move || gallery.with(Gallery::is_high_contrast).to_string()
                        on:click=move |_| gallery.update(Gallery::toggle_high_contrast)
                    >
                        "◐"
                    </button>
                    <button
                        type="button"
                        class="text-indigo-400 p-2"
                        aria-label=move || if is_zoomed() { "Zoom out" } else { "Zoom in" }
                        on:click=move |_| gallery.update(Gallery::toggle_zoom)
                    >
                        {move || if is_zoomed() { "−" } else { "+" }}
                    </button>
                    <button
                        type="button"
                        class="p-2 hover:bg-white/10 rounded-full transition-colors"
                        aria-label="Close gallery"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                </div>
            </div>

            <Show when=move || gallery.with(Gallery::can_navigate)>
                <div class="absolute inset-0 flex items-center justify-between px-8 pointer-events-none z-[650]">
                    <button
                        type="button"
                        class="pointer-events-auto p-4 text-6xl text-white/20 hover:text-white transition-colors"
                        aria-label="Previous image"
                        on:click=move |_| gallery.update(Gallery::previous)
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="pointer-events-auto p-4 text-6xl text-white/20 hover:text-white transition-colors"
                        aria-label="Next image"
                        on:click=move |_| gallery.update(Gallery::next)
                    >
                        "›"
                    </button>
                </div>
            </Show>

            <div class=move || {
                format!(
                    "relative z-10 w-full h-full flex items-center justify-center overflow-hidden {}",
                    if is_zoomed() { "cursor-grab" } else { "cursor-zoom-in" },
                )
            }>
                <img
                    src=image_src
                    alt=move || gallery.with(|g| format!("Case study artifact {}", g.current_index() + 1))
                    draggable="false"
                    style=image_style
                    class=move || {
                        if is_zoomed() {
                            "select-none rounded-xl shadow-2xl max-w-none transition-transform duration-300"
                        } else {
                            "select-none rounded-xl shadow-2xl max-h-[75vh] w-auto object-contain transition-transform duration-300"
                        }
                    }
                    on:click=move |_| {
                        if suppress_click.get_value() {
                            suppress_click.set_value(false);
                            return;
                        }
                        gallery.update(Gallery::toggle_zoom);
                    }
                    on:pointerdown=move |ev| {
                        if is_zoomed() {
                            drag.set_value(
                                Some(DragState {
                                    last: (ev.client_x(), ev.client_y()),
                                    travelled: 0,
                                }),
                            );
                        }
                    }
                    on:pointermove=move |ev| {
                        let Some(state) = drag.get_value() else {
                            return;
                        };
                        let (x, y) = (ev.client_x(), ev.client_y());
                        let (dx, dy) = (x - state.last.0, y - state.last.1);
                        gallery.update(|g| g.pan_by(f64::from(dx), f64::from(dy)));
                        drag.set_value(
                            Some(DragState {
                                last: (x, y),
                                travelled: state.travelled + dx.abs() + dy.abs(),
                            }),
                        );
                    }
                    on:pointerup=move |_| {
                        if let Some(state) = drag.get_value() {
                            suppress_click.set_value(state.travelled > DRAG_THRESHOLD);
                        }
                        drag.set_value(None);
                    }
                    on:pointerleave=move |_| drag.set_value(None)
                />
            </div>

            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 text-white/30 text-[10px] font-mono z-30 pointer-events-none">
                {move || {
                    if is_zoomed() {
                        "Drag to pan • Click to zoom out • Esc to close"
                    } else {
                        "← → to browse • Click to zoom • Esc to close"
                    }
                }}
            </div>
        </div>
    }
}
