use yew::prelude::*;

use crate::catalog::{EXPERTISE, MISSION, VISION};
use crate::config;
use crate::mail::plain_mailto;
use crate::state::LegalModal;

const EFFECTIVE_DATE: &str = "Effective Date: May 27, 2025";

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    pub modal: LegalModal,
    pub open: bool,
    pub on_close: Callback<LegalModal>,
}

/// Overlay with static legal copy. Only the close icon dismisses it.
#[function_component(LegalModalView)]
pub fn legal_modal_view(props: &LegalModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        let modal = props.modal;
        Callback::from(move |_: MouseEvent| on_close.emit(modal))
    };

    let body = match props.modal {
        LegalModal::Privacy => privacy_body(),
        LegalModal::Terms => terms_body(),
        LegalModal::About => about_body(),
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{props.modal.title()}</h2>
                    <button class="modal-close" onclick={close} aria-label="Close">
                        {"✕"}
                    </button>
                </div>
                <div class="modal-body">
                    { body }
                </div>
            </div>
        </div>
    }
}

fn privacy_body() -> Html {
    html! {
        <>
            <p class="effective-date">{EFFECTIVE_DATE}</p>
            <h3>{"1. Information Collection"}</h3>
            <p>{"We collect information you provide directly to us through forms and communications."}</p>
            <h3>{"2. Use of Information"}</h3>
            <p>{"We use collected information to provide and improve our services, communicate with clients, and process payments."}</p>
            <h3>{"3. Contact Information"}</h3>
            <p>
                {"For privacy-related inquiries, please contact us at: "}
                <a href={plain_mailto(config::PRIVACY_CONTACT)}>{config::PRIVACY_CONTACT}</a>
            </p>
            <h3>{"4. Service Delivery"}</h3>
            <p>{"Timeline and deliverables will be specified in individual project agreements. We strive to meet all deadlines but cannot guarantee specific results."}</p>
        </>
    }
}

fn terms_body() -> Html {
    let sections = [
        ("1. Service Agreement", "By engaging our services, you agree to these terms and any project-specific agreements."),
        ("2. Payment Terms", "Payment schedules will be outlined in project proposals. We require a deposit before beginning work."),
        ("3. No Refund Policy", "All sales are final. We do not offer refunds for completed work or work in progress."),
        ("4. Project Timelines", "While we strive to meet all deadlines, exact completion times may vary based on project complexity and client responsiveness."),
        ("5. Intellectual Property", "Rights transfer upon final payment. We retain rights to display work in our portfolio."),
    ];
    html! {
        <>
            <p class="effective-date">{EFFECTIVE_DATE}</p>
            { for sections.iter().map(|(heading, text)| html! {
                <>
                    <h3>{*heading}</h3>
                    <p>{*text}</p>
                </>
            }) }
        </>
    }
}

fn about_body() -> Html {
    html! {
        <>
            <h3>{"Our Vision"}</h3>
            <p>{VISION}</p>
            <h3>{"Our Mission"}</h3>
            <p>{MISSION}</p>
            <h3>{"Our Expertise"}</h3>
            <ul class="bullet-list">
                { for EXPERTISE.iter().map(|(title, text)| html! {
                    <li>
                        <span class="bullet-dot"></span>
                        <div>
                            <span class="bullet-title">{*title}</span>
                            <p>{*text}</p>
                        </div>
                    </li>
                }) }
            </ul>
            <p class="modal-closing">
                {"Let's shape a future where your brand thrives, digitally and sustainably. 🌍🚀"}
            </p>
        </>
    }
}
