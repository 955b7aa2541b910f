use yew::prelude::*;

use crate::components::interactive::MagneticButton;
use crate::components::lazy_panel::LazyPanel;
use crate::components::roi_calculator::RoiCalculator;
use crate::config;
use crate::mail::plain_mailto;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-grid">
                <div class="hero-copy fade-up">
                    <h1 class="gradient-heading">{"Turn Your Marketing Green, Turn Your Profits Gold"}</h1>
                    <div class="hero-subtitle">
                        {"Sustainable marketing strategies that grow your business while saving the planet"}
                    </div>
                    <p class="hero-text">
                        {"Join the future of marketing with strategies that deliver exceptional ROI while minimizing environmental impact. Our proven approach combines cutting-edge digital solutions with sustainable practices."}
                    </p>
                    <div class="hero-cta-group">
                        <MagneticButton class="cta-primary" onclick={to_contact}>
                            {"Get Your Free Sustainability Audit"}
                        </MagneticButton>
                        <a href={plain_mailto(config::CONTACT_RECIPIENT)} class="cta-secondary">
                            {"✉ Contact Us"}
                        </a>
                    </div>
                </div>
                <div class="hero-widget">
                    <LazyPanel name="roi calculator">
                        <RoiCalculator />
                    </LazyPanel>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        position: relative;
                        overflow: hidden;
                        background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background:
                            radial-gradient(circle at 20% 50%, rgba(6, 214, 160, 0.1), transparent 50%),
                            radial-gradient(circle at 80% 20%, rgba(17, 138, 178, 0.1), transparent 50%);
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                        padding: 5rem 1rem;
                        position: relative;
                        z-index: 1;
                    }
                    .hero-widget {
                        display: none;
                    }
                    @media (min-width: 768px) {
                        .hero-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .hero-widget {
                            display: block;
                        }
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 800;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        color: #94a3b8;
                        font-size: 1.35rem;
                        font-weight: 300;
                        margin-bottom: 2rem;
                    }
                    .hero-text {
                        color: #cbd5e1;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        margin-bottom: 2.5rem;
                        max-width: 42rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .cta-primary {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #34d399, #3b82f6);
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.15s ease-out, box-shadow 0.3s ease;
                    }
                    .cta-primary.hovered {
                        box-shadow: 0 10px 30px rgba(16, 185, 129, 0.2);
                    }
                    .cta-secondary {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem 2rem;
                        border: 2px solid #34d399;
                        border-radius: 9999px;
                        color: #34d399;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .cta-secondary:hover {
                        background: #34d399;
                        color: #fff;
                    }
                "#}
            </style>
        </section>
    }
}
