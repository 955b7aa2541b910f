use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted off somewhere greener."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the homepage"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        color: #cbd5e1;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        font-weight: 800;
                        color: #34d399;
                    }
                    .not-found-link {
                        color: #34d399;
                    }
                "#}
            </style>
        </div>
    }
}
