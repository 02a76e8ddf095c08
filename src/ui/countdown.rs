//! Fixed top bar counting down the limited-time offer

use leptos::prelude::*;

use crate::core::Countdown;
use crate::core::countdown::TICK_INTERVAL_MS;
use crate::ui::scroll::use_interval;

#[component]
pub fn CountdownTimer() -> impl IntoView {
    let (countdown, set_countdown) = signal(Countdown::default());

    // Stops at 00:00
    use_interval(TICK_INTERVAL_MS, move || {
        let mut running = false;
        set_countdown.maybe_update(|countdown| {
            running = countdown.tick();
            running
        });
        running
    });

    let minutes = move || countdown.get().display().0;
    let seconds = move || countdown.get().display().1;

    view! {
        <div class="countdown-container" role="status" aria-live="polite">
            <div class="countdown-badge">"Oferta por tempo limitado"</div>
            <h3 class="countdown-title">"Contagem regressiva para o fim da oferta"</h3>
            <div class="countdown-timer" aria-label=move || countdown.get().aria_label()>
                <span class="countdown-inline-label">"Contagem regressiva para o fim da oferta"</span>
                <div class="countdown-box">
                    <span class="countdown-number">{minutes}</span>
                    <span class="countdown-label">"Minutos"</span>
                </div>
                <span class="countdown-separator">":"</span>
                <div class="countdown-box">
                    <span class="countdown-number">{seconds}</span>
                    <span class="countdown-label">"Segundos"</span>
                </div>
            </div>
            <Show when=move || countdown.get().is_expired()>
                <p class="countdown-expired">
                    "Tempo esgotado! Entre em contato para não perder a vaga."
                </p>
            </Show>
        </div>
    }
}
