use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::suspense::use_future;

use crate::components::error_boundary::PanelFailure;
use crate::panel::{self, RoiCopy};
use crate::roi::{parse_numeric, RoiInputs};

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> HtmlResult {
    let inputs = use_state(RoiInputs::default);
    let failure = use_context::<PanelFailure>();
    let copy = use_future(|| panel::load::<RoiCopy>(panel::ROI_SOURCE))?;

    let copy = match &*copy {
        Ok(copy) => copy.clone(),
        Err(e) => {
            if let Some(failure) = failure {
                failure.report(e.clone());
            }
            return Ok(html! {});
        }
    };

    let on_budget = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            inputs.set(RoiInputs {
                monthly_budget: parse_numeric(&input.value()),
                ..*inputs
            });
        })
    };

    let on_roi = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            inputs.set(RoiInputs {
                current_roi_percent: parse_numeric(&input.value()),
                ..*inputs
            });
        })
    };

    Ok(html! {
        <div class="roi-card fade-up">
            <h3>{copy.title}</h3>
            <div class="roi-fields">
                <label>
                    <span>{copy.budget_label}</span>
                    <input
                        type="number"
                        value={inputs.monthly_budget.to_string()}
                        oninput={on_budget}
                    />
                </label>
                <label>
                    <span>{copy.roi_label}</span>
                    <input
                        type="number"
                        value={inputs.current_roi_percent.to_string()}
                        oninput={on_roi}
                    />
                </label>
            </div>
            <div class="roi-result">
                <div class="roi-result-label">{copy.result_label}</div>
                <div class="roi-result-value">{format!("{}%", inputs.projection())}</div>
                <div class="roi-result-caption">{copy.caption}</div>
            </div>
            <style>
                {r#"
                    .roi-card {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                        backdrop-filter: blur(12px);
                    }
                    .roi-card h3 {
                        color: #34d399;
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .roi-fields {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .roi-fields label span {
                        display: block;
                        color: #cbd5e1;
                        font-size: 0.875rem;
                        margin-bottom: 0.5rem;
                    }
                    .roi-fields input {
                        width: 100%;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        padding: 0.5rem 1rem;
                        color: #fff;
                    }
                    .roi-fields input:focus {
                        outline: none;
                        border-color: #34d399;
                    }
                    .roi-result {
                        margin-top: 1rem;
                        padding-top: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .roi-result-label {
                        color: #cbd5e1;
                        font-size: 0.875rem;
                    }
                    .roi-result-value {
                        color: #34d399;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .roi-result-caption {
                        color: #94a3b8;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                "#}
            </style>
        </div>
    })
}
