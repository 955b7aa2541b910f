use log::error;
use yew::prelude::*;

use crate::dom;
use crate::panel::PanelError;

/// Handed to everything rendered inside an [`ErrorBoundary`] through context.
#[derive(Clone, PartialEq)]
pub struct PanelFailure(Callback<PanelError>);

impl PanelFailure {
    pub fn report(&self, error: PanelError) {
        self.0.emit(error);
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

pub enum ErrorBoundaryMsg {
    Failed(PanelError),
    Reload,
}

/// Swaps its children for a static fallback after the first reported
/// failure. Stays failed until the page is reloaded.
pub struct ErrorBoundary {
    failure: Option<PanelError>,
    reporter: PanelFailure,
}

impl Component for ErrorBoundary {
    type Message = ErrorBoundaryMsg;
    type Properties = ErrorBoundaryProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            failure: None,
            reporter: PanelFailure(ctx.link().callback(ErrorBoundaryMsg::Failed)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ErrorBoundaryMsg::Failed(failure) => {
                if self.failure.is_some() {
                    return false;
                }
                error!("Panel '{}' failed to render: {}", ctx.props().name, failure);
                self.failure = Some(failure);
                true
            }
            ErrorBoundaryMsg::Reload => {
                dom::reload_page();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.failure.is_some() {
            let reload = ctx.link().callback(|_: MouseEvent| ErrorBoundaryMsg::Reload);
            return html! {
                <div class="panel-error">
                    <div class="panel-error-card">
                        <h2>{"Something went wrong"}</h2>
                        <p>{"We're sorry for the inconvenience. Please try refreshing the page."}</p>
                        <button class="panel-error-reload" onclick={reload}>
                            {"⟳ Refresh Page"}
                        </button>
                    </div>
                    <style>
                        {r#"
                            .panel-error {
                                display: flex;
                                align-items: center;
                                justify-content: center;
                                padding: 3rem 1rem;
                            }
                            .panel-error-card {
                                text-align: center;
                                padding: 2rem;
                                background: rgba(255, 255, 255, 0.05);
                                border: 1px solid rgba(255, 255, 255, 0.1);
                                border-radius: 16px;
                                backdrop-filter: blur(12px);
                            }
                            .panel-error-card h2 {
                                color: #f87171;
                                font-size: 1.5rem;
                                margin-bottom: 1rem;
                            }
                            .panel-error-card p {
                                color: #cbd5e1;
                                margin-bottom: 1.5rem;
                            }
                            .panel-error-reload {
                                padding: 0.75rem 1.5rem;
                                border: none;
                                border-radius: 9999px;
                                background: #34d399;
                                color: #fff;
                                cursor: pointer;
                                transition: background 0.3s ease;
                            }
                            .panel-error-reload:hover {
                                background: #10b981;
                            }
                        "#}
                    </style>
                </div>
            };
        }

        html! {
            <ContextProvider<PanelFailure> context={self.reporter.clone()}>
                { for ctx.props().children.iter() }
            </ContextProvider<PanelFailure>>
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::window;

    #[function_component(Broken)]
    fn broken() -> Html {
        if let Some(failure) = use_context::<PanelFailure>() {
            failure.report(PanelError::Empty { panel: "broken" });
        }
        html! { <p>{"never shown"}</p> }
    }

    #[function_component(Harness)]
    fn harness() -> Html {
        html! {
            <>
                <ErrorBoundary name="broken">
                    <Broken />
                </ErrorBoundary>
                <p>{"sibling still here"}</p>
            </>
        }
    }

    #[wasm_bindgen_test]
    async fn failure_stays_inside_its_boundary() {
        let document = window().and_then(|w| w.document()).expect("document");
        let root = document.create_element("div").expect("div");
        document.body().expect("body").append_child(&root).expect("append");

        yew::Renderer::<Harness>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;

        let rendered = root.inner_html();
        assert!(rendered.contains("Something went wrong"));
        assert!(rendered.contains("sibling still here"));
        assert!(!rendered.contains("never shown"));
    }
}
