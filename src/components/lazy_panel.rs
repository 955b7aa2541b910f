use yew::prelude::*;

use crate::components::error_boundary::ErrorBoundary;
use crate::components::loading_state::LoadingState;

#[derive(Properties, PartialEq)]
pub struct LazyPanelProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Shows a skeleton while the children suspend and isolates their failures
/// from the rest of the page.
#[function_component(LazyPanel)]
pub fn lazy_panel(props: &LazyPanelProps) -> Html {
    let fallback = html! { <LoadingState /> };
    html! {
        <ErrorBoundary name={props.name.clone()}>
            <Suspense {fallback}>
                { for props.children.iter() }
            </Suspense>
        </ErrorBoundary>
    }
}
