use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;
use yew::suspense::use_future;

use crate::components::error_boundary::PanelFailure;
use crate::panel::{self, TrustContent};

/// Fraction of the viewport the panel top has to cross before it fades in.
const REVEAL_RATIO: f64 = 0.9;

fn in_view(element: &Element) -> bool {
    let viewport = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    element.get_bounding_client_rect().top() < viewport * REVEAL_RATIO
}

#[function_component(TrustSignals)]
pub fn trust_signals() -> HtmlResult {
    let container = use_node_ref();
    let revealed = use_state(|| false);
    let failure = use_context::<PanelFailure>();

    {
        let already_revealed = *revealed;
        let container = container.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |already| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if !*already {
                    if let Some(window) = window() {
                        let check = {
                            let container = container.clone();
                            let revealed = revealed.clone();
                            move || {
                                if let Some(element) = container.cast::<Element>() {
                                    if in_view(&element) {
                                        revealed.set(true);
                                    }
                                }
                            }
                        };
                        check();
                        let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            error!("Failed to watch scroll for trust panel: {:?}", e);
                        }
                        cleanup = Some(Box::new(move || {
                            if let Err(e) = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            ) {
                                error!("Failed to remove trust panel scroll listener: {:?}", e);
                            }
                        }));
                    }
                }
                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            already_revealed,
        );
    }

    let content = use_future(|| panel::load::<TrustContent>(panel::TRUST_SOURCE))?;
    let content = match &*content {
        Ok(content) => content.clone(),
        Err(e) => {
            if let Some(failure) = failure {
                failure.report(e.clone());
            }
            return Ok(html! {});
        }
    };

    let visible = (*revealed).then(|| "visible");

    Ok(html! {
        <div class="trust-signals" ref={container}>
            <div class="trust-stats">
                { for content.stats.iter().enumerate().map(|(index, stat)| html! {
                    <div
                        class={classes!("trust-stat", "reveal", visible)}
                        style={format!("transition-delay: {:.1}s;", index as f64 * 0.1)}
                    >
                        <div class="trust-stat-icon">{&stat.icon}</div>
                        <div class="trust-stat-value">{&stat.value}</div>
                        <div class="trust-stat-label">{&stat.label}</div>
                    </div>
                }) }
            </div>
            <div class="trust-testimonials">
                { for content.testimonials.iter().enumerate().map(|(index, testimonial)| {
                    let side = if index % 2 == 0 { "from-left" } else { "from-right" };
                    html! {
                        <div
                            class={classes!("trust-testimonial", "reveal", side, visible)}
                            style={format!("transition-delay: {:.1}s;", 0.3 + index as f64 * 0.1)}
                        >
                            <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
                            <div class="trust-author">{&testimonial.author}</div>
                            <div class="trust-role">{format!("{} at {}", testimonial.role, testimonial.company)}</div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .trust-signals {
                        padding: 4rem 1rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .trust-stats {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .trust-testimonials {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .trust-stats {
                            grid-template-columns: repeat(4, 1fr);
                        }
                        .trust-testimonials {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .trust-stat, .trust-testimonial {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        backdrop-filter: blur(12px);
                    }
                    .trust-stat {
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .trust-stat-icon {
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .trust-stat-value {
                        color: #fff;
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .trust-stat-label, .trust-role {
                        color: #94a3b8;
                        font-size: 0.875rem;
                    }
                    .trust-testimonial {
                        padding: 2rem;
                    }
                    .trust-testimonial blockquote {
                        color: #cbd5e1;
                        font-size: 1.125rem;
                        margin-bottom: 1rem;
                    }
                    .trust-author {
                        color: #fff;
                        font-weight: 600;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .reveal.from-left {
                        transform: translateX(-20px);
                    }
                    .reveal.from-right {
                        transform: translateX(20px);
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }
                "#}
            </style>
        </div>
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::components::lazy_panel::LazyPanel;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    #[function_component(Harness)]
    fn harness() -> Html {
        html! {
            <LazyPanel name="trust signals">
                <TrustSignals />
            </LazyPanel>
        }
    }

    #[wasm_bindgen_test]
    async fn loads_stats_and_testimonials() {
        let document = window().and_then(|w| w.document()).expect("document");
        let root = document.create_element("div").expect("div");
        document.body().expect("body").append_child(&root).expect("append");

        yew::Renderer::<Harness>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;

        let rendered = root.inner_html();
        assert!(rendered.contains("Carbon Neutral"));
        assert!(rendered.contains("Sarah Chen"));
        assert!(!rendered.contains("Something went wrong"));
    }
}
