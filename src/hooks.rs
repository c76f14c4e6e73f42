use gloo_timers::callback::Interval;
use log::debug;
use money_timer::{accrual_rate, config::TICK_PERIOD_MS, utils::parse_wage_input};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Keep exactly one one-second tick source alive while `is_running` is true.
///
/// The effect depends on `(is_running, hourly_wage)`: entering Running or
/// changing the wage while Running drops the old [`Interval`] and creates a
/// new one carrying the current accrual rate; leaving Running or unmounting
/// drops it. Dropping an `Interval` clears it, so no tick outlives its owner.
#[hook]
pub fn use_tick_source(is_running: bool, hourly_wage: f64, on_tick: Callback<f64>) {
    // Compare wages bitwise so a NaN wage does not re-run the effect every render.
    use_effect_with(
        (is_running, hourly_wage.to_bits()),
        move |&(is_running, wage_bits)| {
            let source = is_running.then(|| {
                let rate = accrual_rate(f64::from_bits(wage_bits));
                debug!("Tick source acquired at {} per second", rate);
                Interval::new(TICK_PERIOD_MS, move || on_tick.emit(rate))
            });
            move || {
                if let Some(source) = source {
                    debug!("Tick source released");
                    drop(source);
                }
            }
        },
    );
}

/// State and callback for the wage field.
pub struct WageInput {
    /// What the user typed, kept separately so partial input such as `"12."`
    /// survives re-rendering.
    pub text: String,
    /// `oninput` handler. Every parseable edit is reported immediately.
    pub on_input: Callback<InputEvent>,
}

/// Custom hook binding a number field to the hourly wage.
#[hook]
pub fn use_wage_input(hourly_wage: f64, on_change: Callback<f64>) -> WageInput {
    let text_state_handle: UseStateHandle<String> = use_state(|| hourly_wage.to_string());

    let on_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            if let Some(wage) = parse_wage_input(&text) {
                on_change.emit(wage);
            }
            text_setter.set(text);
        })
    };

    // Resync the text if the wage was changed from elsewhere
    {
        let text_handle = text_state_handle.clone();
        use_effect_with(hourly_wage.to_bits(), move |&wage_bits| {
            let wage = f64::from_bits(wage_bits);
            if parse_wage_input(&text_handle) != Some(wage) {
                text_handle.set(wage.to_string());
            }
            || ()
        });
    }

    WageInput {
        text: (*text_state_handle).clone(),
        on_input,
    }
}
