use yew::prelude::*;

#[function_component(LoadingState)]
pub fn loading_state() -> Html {
    html! {
        <div class="skeleton-wrapper" aria-busy="true">
            <div class="skeleton" style="height: 40px; width: 60%;"></div>
            <div class="skeleton line"></div>
            <div class="skeleton line"></div>
            <div class="skeleton line"></div>
            <div class="skeleton-grid">
                <div class="skeleton" style="height: 200px;"></div>
                <div class="skeleton" style="height: 200px;"></div>
            </div>
            <style>
                {r#"
                    .skeleton-wrapper {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                    }
                    .skeleton {
                        border-radius: 8px;
                        background: linear-gradient(90deg, rgba(255,255,255,0.05) 25%, rgba(255,255,255,0.12) 50%, rgba(255,255,255,0.05) 75%);
                        background-size: 200% 100%;
                        animation: skeletonShimmer 1.4s ease-in-out infinite;
                    }
                    .skeleton.line {
                        height: 1rem;
                    }
                    .skeleton-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                        margin-top: 1rem;
                    }
                    @media (min-width: 768px) {
                        .skeleton-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @keyframes skeletonShimmer {
                        from { background-position: 200% 0; }
                        to { background-position: -200% 0; }
                    }
                "#}
            </style>
        </div>
    }
}
