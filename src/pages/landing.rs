use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::{
    about::About,
    chat_widget::ChatWidget,
    contact_form::ContactForm,
    footer::Footer,
    hero::Hero,
    lazy_panel::LazyPanel,
    legal_modal::LegalModalView,
    services::ServicesGrid,
    trust_signals::TrustSignals,
};
use crate::dom;
use crate::state::{LegalModal, PageAction, PageState, Section};
use crate::Nav;

fn dispatch_with_scroll(dispatcher: &UseReducerDispatcher<PageState>, action: PageAction) {
    if let Some(section) = action.scroll_target() {
        dom::scroll_to_section(section);
    }
    dispatcher.dispatch(action);
}

/// Composition root of the single-page site. Owns every piece of shared UI
/// state and hands children plain values plus callbacks.
#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(PageState::default);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    dispatcher.dispatch(PageAction::Scrolled(dom::scroll_offset()));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        error!("Failed to add scroll listener: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            error!("Failed to remove scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: Section| {
            dispatch_with_scroll(&dispatcher, PageAction::NavigateTo(section));
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleMenu))
    };

    let on_select_service = {
        let dispatcher = state.dispatcher();
        Callback::from(move |title: String| {
            debug!("Service selected: {}", title);
            dispatch_with_scroll(&dispatcher, PageAction::SelectService(title));
        })
    };

    let on_open_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |modal: LegalModal| dispatcher.dispatch(PageAction::OpenModal(modal)))
    };

    let on_close_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |modal: LegalModal| dispatcher.dispatch(PageAction::CloseModal(modal)))
    };

    let on_read_story = {
        let on_open_modal = on_open_modal.clone();
        Callback::from(move |_: ()| on_open_modal.emit(LegalModal::About))
    };

    html! {
        <div class="landing-page">
            <Nav
                menu_open={state.menu_open}
                scrolled={state.scrolled}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />

            <Hero on_navigate={on_navigate.clone()} />

            <LazyPanel name="trust signals">
                <TrustSignals />
            </LazyPanel>

            <ServicesGrid on_select={on_select_service} />

            <ContactForm selected_service={state.selected_service.clone()} />

            <About {on_read_story} />

            <Footer on_navigate={on_navigate} on_open_modal={on_open_modal} />

            { for [LegalModal::Privacy, LegalModal::Terms, LegalModal::About].into_iter().map(|modal| html! {
                <LegalModalView
                    {modal}
                    open={state.is_modal_open(modal)}
                    on_close={on_close_modal.clone()}
                />
            }) }

            <ChatWidget />

            <style>
                {r#"
                    .landing-page {
                        color: #f3f4f6;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .gradient-heading {
                        background: linear-gradient(90deg, #fff, #94a3b8);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .section-lead {
                        color: #94a3b8;
                        font-size: 1.125rem;
                        text-align: center;
                        max-width: 42rem;
                        margin: 0 auto 4rem;
                    }
                    .glass-card {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        backdrop-filter: blur(24px);
                        transition: border-color 0.3s ease;
                    }
                    .glass-card:hover {
                        border-color: rgba(52, 211, 153, 0.3);
                    }
                    .muted {
                        color: #94a3b8;
                    }
                    .small {
                        font-size: 0.875rem;
                    }
                    .accent {
                        color: #34d399;
                    }
                    .bullet-list {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .bullet-list li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        text-align: left;
                    }
                    .bullet-list p {
                        color: #94a3b8;
                    }
                    .bullet-title {
                        color: #fff;
                        font-weight: 600;
                    }
                    .bullet-dot {
                        flex-shrink: 0;
                        width: 0.5rem;
                        height: 0.5rem;
                        margin: 0.5rem;
                        border-radius: 50%;
                        background: #34d399;
                        box-shadow: 0 0 0 0.5rem rgba(52, 211, 153, 0.2);
                    }
                    .bullet-dot.small {
                        margin: 0;
                        box-shadow: none;
                    }
                    .fade-up {
                        animation: fadeUp 0.5s ease-out both;
                    }
                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: none; }
                    }
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(12px);
                    }
                    .modal-content {
                        width: 100%;
                        max-width: 48rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        border-radius: 16px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(135deg, #1e293b, #0f172a);
                    }
                    .modal-header {
                        position: sticky;
                        top: 0;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem;
                        background: linear-gradient(90deg, #34d399, #3b82f6);
                    }
                    .modal-header h2 {
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        opacity: 0.7;
                    }
                    .modal-body {
                        padding: 2rem;
                        color: #cbd5e1;
                        line-height: 1.7;
                    }
                    .modal-body h3 {
                        color: #34d399;
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 2rem 0 1rem;
                    }
                    .modal-body a {
                        color: #34d399;
                    }
                    .effective-date {
                        font-weight: 600;
                    }
                    .modal-closing {
                        margin-top: 2rem;
                        text-align: center;
                        color: #34d399;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                "#}
            </style>
        </div>
    }
}
