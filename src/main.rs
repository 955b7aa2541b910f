use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod catalog;
mod config;
mod dom;
mod mail;
mod motion;
mod panel;
mod roi;
mod state;

mod pages {
    pub mod landing;
    pub mod not_found;
}

mod components {
    pub mod about;
    pub mod chat_widget;
    pub mod contact_form;
    pub mod error_boundary;
    pub mod footer;
    pub mod hero;
    pub mod interactive;
    pub mod lazy_panel;
    pub mod legal_modal;
    pub mod loading_state;
    pub mod roi_calculator;
    pub mod services;
    pub mod trust_signals;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};
use state::Section;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub scrolled: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, scrolled, on_toggle_menu, on_navigate } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let section_button = |section: Section, class: &'static str| {
        let on_navigate = on_navigate.clone();
        html! {
            <button class={class} onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}>
                {section.label()}
            </button>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="/" class="logo">{config::SITE_NAME}</a>

                <div class="nav-links">
                    { for Section::ALL.into_iter().map(|section| section_button(section, "nav-link")) }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for Section::ALL.into_iter().map(|section| section_button(section, "mobile-link")) }
                </div>
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(15, 23, 42, 0.95);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(51, 65, 85, 0.1);
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(15, 23, 42, 0.98);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                        background: linear-gradient(90deg, #34d399, #3b82f6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .nav-links {
                        display: none;
                        gap: 2rem;
                    }
                    .nav-link, .mobile-link {
                        background: none;
                        border: none;
                        color: #e5e7eb;
                        font: inherit;
                        font-weight: 500;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #34d399;
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: rgba(15, 23, 42, 0.98);
                        border-top: 1px solid rgba(30, 41, 59, 0.2);
                    }
                    @media (min-width: 768px) {
                        .nav-links {
                            display: flex;
                        }
                        .burger-menu, .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
