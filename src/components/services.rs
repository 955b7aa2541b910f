use yew::prelude::*;

use crate::catalog::SERVICES;
use crate::components::interactive::InteractiveCard;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct ServicesGridProps {
    pub on_select: Callback<String>,
}

#[function_component(ServicesGrid)]
pub fn services_grid(props: &ServicesGridProps) -> Html {
    html! {
        <section id={Section::Services.id()} class="services">
            <div class="container">
                <h2 class="gradient-heading section-title">{"Our Services"}</h2>
                <p class="section-lead">
                    {"Comprehensive digital solutions tailored to accelerate your business growth and establish a powerful online presence."}
                </p>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let title = service.title;
                            Callback::from(move |_: MouseEvent| on_select.emit(title.to_string()))
                        };
                        html! {
                            <InteractiveCard class="service-card" {onclick}>
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </InteractiveCard>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .services {
                        padding: 6rem 0;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        text-align: left;
                        padding: 3rem;
                        border-radius: 24px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        backdrop-filter: blur(12px);
                        color: inherit;
                        cursor: pointer;
                        transition: transform 0.2s ease-out, border-color 0.5s ease, box-shadow 0.5s ease;
                    }
                    .service-card.tilted {
                        border-color: rgba(52, 211, 153, 0.3);
                        box-shadow: 0 25px 50px rgba(52, 211, 153, 0.1);
                    }
                    .interactive-card-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: inherit;
                        background: linear-gradient(135deg, rgba(52, 211, 153, 0.1), rgba(59, 130, 246, 0.1));
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .interactive-card.tilted .interactive-card-glow {
                        opacity: 1;
                    }
                    .service-icon {
                        width: 5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.25rem;
                        margin-bottom: 1.5rem;
                        border-radius: 16px;
                        background: linear-gradient(135deg, #34d399, #3b82f6);
                    }
                    .service-card h3 {
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .service-card p {
                        color: #94a3b8;
                        line-height: 1.7;
                    }
                "#}
            </style>
        </section>
    }
}
