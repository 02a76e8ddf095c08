//! Landing page component
//!
//! The course sales page, top to bottom:
//! - Fixed countdown bar
//! - Hero with instructor photo and checkout button
//! - Four content sections with photos
//! - Module timeline with scroll progress
//! - Instructor bio
//! - Testimonial carousel
//! - Offer with pricing
//! - FAQ accordion
//! - WhatsApp contact button and guarantee seal
//!
//! Every block below the hero fades in the first time it scrolls into view.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{
    BIO, BIO_IMAGE, CHECKOUT_URL, COURSE_NAME, DESCRIPTION, GUARANTEE_DAYS, GUARANTEE_IMAGE,
    HERO, INSTRUCTOR, OFFER, SECTIONS, SITE_URL, Section, WHATSAPP_ICON, WHATSAPP_URL,
    course_json_ld,
};
use crate::core::reveal::SECTION_THRESHOLD;
use crate::ui::countdown::CountdownTimer;
use crate::ui::faq::FaqSection;
use crate::ui::fade_in::FadeInOnScroll;
use crate::ui::testimonials::Testimonials;
use crate::ui::timeline::Timeline;

/// Course landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        // Fixed bar with the countdown at the top
        <div class="countdown-fixed">
            <CountdownTimer />
        </div>

        <div class="app-container with-fixed-countdown">
            <div class="content-wrapper">
                <div class="text-container">
                    <h1 class="main-title">{COURSE_NAME}</h1>
                    <h2 class="subtitle">{HERO.subtitle}</h2>
                    <p class="description">{HERO.quote}</p>
                    <CtaLink href=CHECKOUT_URL class="button">{HERO.cta}</CtaLink>
                </div>

                <div class="image-container">
                    <img src=HERO.image alt="Instrutora" class="main-image" />
                </div>
            </div>

            {SECTIONS
                .iter()
                .map(|section| view! { <ContentSection section=*section /> })
                .collect_view()}

            <FadeInOnScroll>
                <Timeline />
            </FadeInOnScroll>

            <FadeInOnScroll>
                <BioSection />
            </FadeInOnScroll>

            <FadeInOnScroll>
                <Testimonials />
            </FadeInOnScroll>

            <FadeInOnScroll>
                <OfferSection />
            </FadeInOnScroll>

            <FadeInOnScroll>
                <FaqSection />
            </FadeInOnScroll>

            <FadeInOnScroll>
                <div class="final-button-container">
                    <p class="final-button-hint">"Caso ainda tenha duvidas sobre o curso"</p>
                    <CtaLink href=WHATSAPP_URL class="button final-button">
                        <img src=WHATSAPP_ICON alt="" class="button-icon" aria-hidden="true" />
                        "Entre em contato agora"
                    </CtaLink>
                </div>
            </FadeInOnScroll>

            <FadeInOnScroll>
                <section class="guarantee">
                    <img src=GUARANTEE_IMAGE class="seal" alt="Garantia" />
                    <h2>{format!("Garantia incondicional de {GUARANTEE_DAYS} dias")}</h2>
                    <p>"Se você não amar o conteúdo, devolvemos seu dinheiro sem perguntas."</p>
                </section>
            </FadeInOnScroll>
        </div>

        <LandingStyles />
    }
}

/// Button linking to an external service in a new tab
#[component]
fn CtaLink(href: &'static str, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer">
            <button class=class>{children()}</button>
        </a>
    }
}

/// Content section with two photos, revealed at a slightly higher threshold
#[component]
fn ContentSection(section: Section) -> impl IntoView {
    view! {
        <FadeInOnScroll threshold=SECTION_THRESHOLD>
            <section class="section-container">
                <h2 class="section-title">
                    {section.title}" "<span>{COURSE_NAME}</span>
                </h2>

                <div class="section-card">
                    <div class="image-group">
                        {section
                            .images
                            .into_iter()
                            .map(|src| view! {
                                <img src=src alt=section.title class="section-image" />
                            })
                            .collect_view()}
                    </div>

                    <div class="section-text">
                        <p>{section.text}</p>
                        <p class="section-extra">{section.extra}</p>
                    </div>
                </div>
            </section>
        </FadeInOnScroll>
    }
}

#[component]
fn BioSection() -> impl IntoView {
    view! {
        <section class="bio-section">
            <h2 class="bio-title">"Quem é "<span>{format!("{INSTRUCTOR} ?")}</span></h2>

            <div class="bio-wrapper">
                <div class="bio-image-container">
                    <img src=BIO_IMAGE class="bio-main-img" alt=INSTRUCTOR />
                </div>

                <div class="bio-text">
                    {BIO.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn OfferSection() -> impl IntoView {
    view! {
        <section class="offer">
            <div class="offer-badge">{OFFER.badge}</div>
            <h2 class="offer-title">
                "Acesso completo de"<span class="price-old">{OFFER.old_price}</span>
            </h2>
            <div class="price-wrapper">
                <p>"Por:"</p>
                <p class="price">"R$ "<span>{OFFER.price}</span>",00"</p>
                <p class="price-installments">
                    "ou em até 12x de R$ "<span>{OFFER.installments}</span>
                </p>
            </div>
            <p class="offer-note">{OFFER.note}</p>
            <CtaLink href=CHECKOUT_URL class="button offer-btn">{OFFER.cta}</CtaLink>
        </section>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{COURSE_NAME} | Curso com {INSTRUCTOR}");
    let image = format!("{}{}", SITE_URL.trim_end_matches('/'), HERO.image);

    view! {
        <Title text=title.clone() />

        <Meta name="description" content=DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta property="og:image" content=image />

        <Link rel="canonical" href=SITE_URL />

        // JSON-LD structured data
        <script type="application/ld+json" inner_html=course_json_ld()></script>
    }
}

/// CSS for the page layout and the scroll animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --accent: #c2185b;
                --accent-dark: #8e0038;
                --ink: #2b2b2b;
                --paper: #fff7fa;
                --countdown-height: 4.5rem;
            }

            body {
                margin: 0;
                font-family: "Poppins", system-ui, sans-serif;
                color: var(--ink);
                background: var(--paper);
            }

            /* Fade-in on scroll */
            .fade-on-scroll {
                opacity: 0;
                transform: translateY(40px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }
            .fade-on-scroll.visible {
                opacity: 1;
                transform: none;
            }

            /* Buttons */
            .button {
                padding: 1rem 2rem;
                font-weight: 700;
                font-size: 1.1rem;
                color: white;
                background: var(--accent);
                border: none;
                border-radius: 999px;
                cursor: pointer;
                transition: transform 0.3s, background 0.3s;
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
            }
            .button:hover {
                transform: scale(1.05);
                background: var(--accent-dark);
            }
            .button-icon { width: 1.5rem; height: 1.5rem; }

            /* Countdown bar */
            .countdown-fixed {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                background: var(--ink);
                color: white;
            }
            .with-fixed-countdown { padding-top: var(--countdown-height); }
            .countdown-container { text-align: center; padding: 0.5rem 1rem; }
            .countdown-badge, .countdown-title { display: none; }
            .countdown-timer {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.75rem;
            }
            .countdown-box { display: flex; flex-direction: column; align-items: center; }
            .countdown-number { font-size: 1.6rem; font-weight: 700; }
            .countdown-label { font-size: 0.7rem; text-transform: uppercase; }
            .countdown-expired { margin: 0.25rem 0 0; color: #ffb3c9; }

            /* Hero */
            .content-wrapper {
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                justify-content: center;
                gap: 2rem;
                padding: 3rem 1rem;
            }
            .text-container { max-width: 32rem; text-align: center; }
            .main-title { font-size: 3rem; color: var(--accent); margin-bottom: 0.5rem; }
            .main-image { max-width: 22rem; width: 100%; border-radius: 1.5rem; }

            /* Content sections */
            .section-container { padding: 3rem 1rem; text-align: center; }
            .section-title span, .bio-title span, .timeline-title span { color: var(--accent); }
            .section-card {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                align-items: center;
                gap: 2rem;
            }
            .image-group { display: flex; gap: 1rem; }
            .section-image { width: 12rem; border-radius: 1rem; }
            .section-extra { font-weight: 600; }

            /* Timeline */
            .timeline-wrapper { padding: 3rem 1rem; }
            .timeline-title { text-align: center; }
            .timeline {
                position: relative;
                max-width: 60rem;
                margin: 2rem auto;
            }
            .timeline-line, .timeline-progress {
                position: absolute;
                top: 0;
                left: 50%;
                width: 4px;
                transform: translateX(-50%);
            }
            .timeline-line {
                bottom: 0;
                background: linear-gradient(
                    to bottom,
                    #e0c3cf 0%,
                    #e0c3cf var(--bonus-start),
                    #f5c542 var(--bonus-start),
                    #f5c542 var(--bonus-end),
                    #e0c3cf var(--bonus-end)
                );
            }
            .timeline-progress {
                height: var(--line-progress);
                background: var(--accent);
                transition: height 0.1s linear;
            }
            .timeline-dot {
                position: absolute;
                left: 50%;
                width: 16px;
                height: 16px;
                border-radius: 50%;
                background: var(--accent);
                transform: translateX(-50%);
            }
            .timeline-dot.top { top: -8px; }
            .timeline-dot.bottom { bottom: -8px; }
            .timeline-item {
                width: calc(50% - 3rem);
                margin: 1.5rem 0;
                padding: 1.25rem;
                background: white;
                border-radius: 1rem;
                box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
            }
            .timeline-item.right { margin-left: auto; }
            .timeline-item.bonus { border: 2px solid #f5c542; }

            /* Bio */
            .bio-section { padding: 3rem 1rem; text-align: center; }
            .bio-wrapper {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 2rem;
                text-align: left;
            }
            .bio-main-img { max-width: 18rem; width: 100%; border-radius: 1.5rem; }
            .bio-text { max-width: 36rem; }

            /* Testimonials */
            .testimonials { padding: 3rem 1rem; text-align: center; }
            .testimonial-image { max-width: 22rem; width: 100%; border-radius: 1rem; }

            /* Offer */
            .offer { padding: 3rem 1rem; text-align: center; }
            .offer-badge {
                display: inline-block;
                padding: 0.25rem 1rem;
                border-radius: 999px;
                background: #f5c542;
                font-weight: 700;
            }
            .price-old { display: block; text-decoration: line-through; opacity: 0.6; }
            .price { font-size: 2.5rem; font-weight: 800; color: var(--accent); }

            /* FAQ */
            .faq-section { padding: 3rem 1rem; }
            .faq-container { max-width: 48rem; margin: 0 auto; }
            .faq-item {
                margin-bottom: 1rem;
                border-radius: 1rem;
                background: white;
                cursor: pointer;
                overflow: hidden;
            }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 0 1.25rem;
                border: none;
                background: none;
                font: inherit;
                text-align: left;
                cursor: pointer;
            }
            .faq-item.active .faq-question { color: var(--accent); }
            .faq-question-text { display: block; padding: 1rem 0; font-size: 1.1rem; font-weight: 600; }
            .faq-answer { padding: 0 1.25rem 1rem; }

            /* Closing blocks */
            .final-button-container, .guarantee { padding: 3rem 1rem; text-align: center; }
            .final-button-hint { margin-bottom: 1rem; }
            .seal { width: 8rem; }

            @media (max-width: 720px) {
                .timeline-line, .timeline-progress, .timeline-dot { left: 1rem; }
                .timeline-item { width: auto; margin-left: 2.5rem; }
                .timeline-item.right { margin-left: 2.5rem; }
                .countdown-inline-label { display: none; }
            }
            "#
        </style>
    }
}
