//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::COURSE_NAME;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            // Error code
            <h1 class="not-found-code">"404"</h1>

            // Title
            <h2 class="not-found-title">"Página não encontrada"</h2>

            // Description
            <p class="not-found-text">
                "A página que você procura não existe ou foi movida."
            </p>

            <A href="/" attr:class="button">
                {format!("Voltar para {COURSE_NAME}")}
            </A>
        </div>

        <style>
            r#"
            .not-found {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 1rem;
                font-family: "Poppins", system-ui, sans-serif;
            }
            .not-found-code { font-size: 4rem; color: #c2185b; margin: 0 0 1rem; }
            .not-found .button {
                padding: 0.75rem 1.5rem;
                border-radius: 999px;
                background: #c2185b;
                color: white;
                text-decoration: none;
                font-weight: 700;
            }
            "#
        </style>
    }
}
