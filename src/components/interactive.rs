use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::{magnetic_offset, tilt_for, Tilt};

fn event_box(e: &MouseEvent) -> Option<web_sys::DomRect> {
    e.current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| element.get_bounding_client_rect())
}

#[derive(Properties, PartialEq)]
pub struct InteractiveCardProps {
    #[prop_or_default]
    pub class: Classes,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Button-card that tilts toward the pointer.
#[function_component(InteractiveCard)]
pub fn interactive_card(props: &InteractiveCardProps) -> Html {
    let tilt = use_state(|| Tilt::REST);

    let onmousemove = {
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(rect) = event_box(&e) {
                let x = e.client_x() as f64 - rect.left();
                let y = e.client_y() as f64 - rect.top();
                tilt.set(tilt_for(x, y, rect.width(), rect.height()));
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::REST))
    };

    html! {
        <button
            class={classes!("interactive-card", props.class.clone(), tilt.is_active().then(|| "tilted"))}
            style={tilt.style()}
            onclick={props.onclick.clone()}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
            <span class="interactive-card-glow"></span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub class: Classes,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Button that leans toward the pointer while hovered.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let offset = use_state(|| (0.0_f64, 0.0_f64));
    let hovered = use_state(|| false);

    let onmousemove = {
        let offset = offset.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(rect) = event_box(&e) {
                offset.set(magnetic_offset(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let offset = offset.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            offset.set((0.0, 0.0));
            hovered.set(false);
        })
    };

    let (x, y) = *offset;
    html! {
        <button
            class={classes!("magnetic-button", props.class.clone(), (*hovered).then(|| "hovered"))}
            style={format!("transform: translate({:.1}px, {:.1}px);", x, y)}
            onclick={props.onclick.clone()}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <span class="magnetic-label">{ for props.children.iter() }</span>
        </button>
    }
}
