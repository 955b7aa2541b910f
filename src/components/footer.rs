use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::mail::plain_mailto;
use crate::state::{LegalModal, Section};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::SITE_NAME)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
    pub on_open_modal: Callback<LegalModal>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let open = |modal: LegalModal| {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(modal))
    };

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <a href="/" class="logo">{config::SITE_NAME}</a>
                        <div class="footer-column">
                            { for Section::ALL.iter().map(|section| {
                                let on_navigate = props.on_navigate.clone();
                                let section = *section;
                                html! {
                                    <button onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}>
                                        {section.label()}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div>
                        <h3>{"Support"}</h3>
                        <div class="footer-column">
                            <a href={plain_mailto(config::SUPPORT_RECIPIENT)}>{"✉ Contact Support"}</a>
                            <button onclick={open(LegalModal::Privacy)}>{"Privacy Policy"}</button>
                            <button onclick={open(LegalModal::Terms)}>{"Terms of Service"}</button>
                        </div>
                    </div>
                    <div>
                        <h3>{"Stay Updated"}</h3>
                        <div class="footer-column">
                            <a href={config::LINKEDIN_NEWSLETTER} target="_blank" rel="noopener noreferrer">
                                {"✒️ Awesome Newsletters"}
                            </a>
                        </div>
                    </div>
                    <div>
                        <h3>{"Our Work"}</h3>
                        <div class="footer-column">
                            <a href={config::OUR_WORK_URL} target="_blank" rel="noopener noreferrer">
                                <span class="bullet-dot small"></span>
                                {"Best Deals India"}
                            </a>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    {copyright_line(Local::now().year())}
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 0 1rem;
                        background: rgba(15, 23, 42, 0.9);
                        border-top: 1px solid rgba(51, 65, 85, 0.1);
                        backdrop-filter: blur(24px);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                    .site-footer h3 {
                        color: #fff;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-column {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .site-footer h3 + .footer-column {
                        margin-top: 0;
                    }
                    .footer-column a, .footer-column button {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        padding: 0;
                        color: #94a3b8;
                        text-decoration: none;
                        cursor: pointer;
                        font: inherit;
                        transition: color 0.3s ease;
                    }
                    .footer-column a:hover, .footer-column button:hover {
                        color: #34d399;
                    }
                    .footer-bottom {
                        color: #64748b;
                        font-size: 0.875rem;
                        text-align: center;
                        padding-top: 1rem;
                        border-top: 1px solid rgba(30, 41, 59, 0.5);
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_site() {
        assert_eq!(
            copyright_line(2025),
            "© 2025 Global Sustainable Initiative. All rights reserved."
        );
    }
}
