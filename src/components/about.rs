use yew::prelude::*;

use crate::catalog::{CORE_SERVICES, MISSION, VISION};
use crate::config::{self, JOURNEY_LINKS};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_read_story: Callback<()>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let read_story = {
        let on_read_story = props.on_read_story.clone();
        Callback::from(move |_: MouseEvent| on_read_story.emit(()))
    };

    html! {
        <section id={Section::About.id()} class="about">
            <div class="container about-inner">
                <div class="about-intro">
                    <div class="portrait">
                        <img src="/me.jpg" alt="Karthikeya Thallapally" loading="lazy" />
                    </div>
                    <a href={config::LINKEDIN_PROFILE} target="_blank" rel="noopener noreferrer" class="pill-link">
                        {"in Get to Know Me"}
                    </a>
                    <p class="about-lead">{VISION}</p>
                    <p class="about-text">{MISSION}</p>
                    <button class="pill-link" onclick={read_story}>{"Read Our Story"}</button>
                </div>

                <div class="about-grid">
                    <div class="glass-card about-card">
                        <h3>{"Our Core Services"}</h3>
                        <ul class="bullet-list">
                            { for CORE_SERVICES.iter().map(|(title, text)| html! {
                                <li>
                                    <span class="bullet-dot"></span>
                                    <div>
                                        <span class="bullet-title">{*title}</span>
                                        <p>{*text}</p>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="glass-card about-card">
                        <h3>{"Follow Our Journey"}</h3>
                        <div class="journey-links">
                            { for JOURNEY_LINKS.iter().map(|link| html! {
                                <a href={link.href} target="_blank" rel="noopener noreferrer">
                                    <span>{link.icon}</span>
                                    <span>{link.label}</span>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about {
                        padding: 6rem 0;
                    }
                    .about-inner {
                        max-width: 56rem;
                    }
                    .about-intro {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .portrait {
                        width: 12rem;
                        height: 12rem;
                        border-radius: 50%;
                        overflow: hidden;
                        margin-bottom: 2rem;
                        border: 4px solid rgba(52, 211, 153, 0.2);
                    }
                    .portrait img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .pill-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        margin-bottom: 2rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #34d399;
                        text-decoration: none;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .pill-link:hover {
                        background: rgba(52, 211, 153, 0.1);
                    }
                    .about-lead {
                        color: #cbd5e1;
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .about-text {
                        color: #94a3b8;
                        font-size: 1.125rem;
                        margin-bottom: 2rem;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .about-card {
                        padding: 2rem;
                    }
                    .about-card h3 {
                        color: #34d399;
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .journey-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .journey-links a {
                        display: flex;
                        gap: 0.75rem;
                        color: #fff;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .journey-links a:hover {
                        color: #34d399;
                    }
                "#}
            </style>
        </section>
    }
}
