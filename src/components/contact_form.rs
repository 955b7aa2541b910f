use log::error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::mail::{self, plain_mailto, ContactDraft, ContactField};
use crate::state::{message_placeholder, Section};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub selected_service: Option<String>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);

    let input_for = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(draft.with_field(field, input.value()));
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(draft.with_field(ContactField::Message, input.value()));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = mail::hand_off(&draft.to_mail()) {
                error!("Contact hand-off failed: {}", e);
            }
        })
    };

    let placeholder = message_placeholder(props.selected_service.as_deref());

    html! {
        <section id={Section::Contact.id()} class="contact">
            <div class="container contact-inner">
                <h2 class="gradient-heading section-title">{"Ready to Transform Your Business?"}</h2>
                <p class="section-lead">
                    {"Let's discuss your project and create a customized solution that drives sustainable growth for your business."}
                </p>

                <div class="glass-card direct-contact">
                    <h3>{"Get In Touch Directly"}</h3>
                    <div class="direct-contact-row">
                        <span class="accent">{"✉"}</span>
                        <a href={plain_mailto(config::CONTACT_RECIPIENT)}>{config::CONTACT_RECIPIENT}</a>
                    </div>
                    <p class="muted small">{"Click to send us an email directly or use the form below"}</p>
                </div>

                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            required=true
                            value={draft.name.clone()}
                            oninput={input_for(ContactField::Name)}
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Email Address"
                            required=true
                            value={draft.email.clone()}
                            oninput={input_for(ContactField::Email)}
                        />
                    </div>
                    <div class="form-row">
                        <input
                            type="text"
                            name="company"
                            placeholder="Company Name"
                            value={draft.company.clone()}
                            oninput={input_for(ContactField::Company)}
                        />
                        <input
                            type="tel"
                            name="phone"
                            placeholder="Phone Number"
                            value={draft.phone.clone()}
                            oninput={input_for(ContactField::Phone)}
                        />
                    </div>
                    <textarea
                        name="message"
                        rows="5"
                        required=true
                        {placeholder}
                        value={draft.message.clone()}
                        oninput={on_message}
                    />
                    <button type="submit" class="submit-button">{"Get Free Consultation"}</button>
                </form>
            </div>
            <style>
                {r#"
                    .contact {
                        padding: 6rem 0;
                        background: linear-gradient(135deg, rgba(52, 211, 153, 0.05), rgba(59, 130, 246, 0.05));
                    }
                    .contact-inner {
                        max-width: 48rem;
                        text-align: center;
                    }
                    .direct-contact {
                        padding: 2rem;
                        margin-bottom: 3rem;
                    }
                    .direct-contact h3 {
                        color: #34d399;
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .direct-contact-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .direct-contact-row a {
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .direct-contact-row a:hover {
                        color: #34d399;
                    }
                    .contact-form {
                        display: grid;
                        gap: 1.5rem;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .form-row {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .contact-form input, .contact-form textarea {
                        padding: 1rem 1.5rem;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        transition: border-color 0.3s ease;
                    }
                    .contact-form textarea {
                        resize: vertical;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        outline: none;
                        border-color: #34d399;
                    }
                    .submit-button {
                        justify-self: center;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #34d399, #3b82f6);
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .submit-button:hover {
                        transform: translateY(-3px);
                    }
                "#}
            </style>
        </section>
    }
}
