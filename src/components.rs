//! Pure Yew view components for the Money Timer UI.
//!
//! Everything here renders from props; state lives in the `MoneyTimer`
//! component.

use crate::hooks::use_wage_input;
use money_timer::config::WAGE_INPUT_STEP;
use money_timer::{format_elapsed, format_money};
use yew::prelude::*;

/// Widget heading with the stopwatch glyph.
pub fn render_title() -> Html {
    html! {
        <div class="timer-title">
            <span class="timer-icon" aria-hidden="true">{ "\u{23F1}" }</span>
            <h1>{ "Money Timer" }</h1>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClockProps {
    pub elapsed_seconds: u64,
}

#[function_component(Clock)]
pub fn clock(props: &ClockProps) -> Html {
    html! {
        <p class="clock">{ format_elapsed(props.elapsed_seconds) }</p>
    }
}

#[derive(Properties, PartialEq)]
pub struct EarningsProps {
    pub accrued_money: f64,
}

#[function_component(Earnings)]
pub fn earnings(props: &EarningsProps) -> Html {
    html! {
        <div class="earnings">
            <p>{ format!("Earned: {}", format_money(props.accrued_money)) }</p>
        </div>
    }
}

/// Start/stop and reset buttons.
#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub is_running: bool,
    pub on_start_stop: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let (label, class) = if props.is_running {
        ("Stop", "btn-stop")
    } else {
        ("Start", "btn-start")
    };

    html! {
        <div class="controls">
            <button class={classes!("btn", class)} onclick={props.on_start_stop.clone()}>
                { label }
            </button>
            <button class="btn btn-reset" onclick={props.on_reset.clone()}>
                { "Reset" }
            </button>
        </div>
    }
}

/// Gear button plus the inline wage editor shown under it.
#[derive(Properties, PartialEq)]
pub struct SettingsProps {
    pub visible: bool,
    pub hourly_wage: f64,
    pub on_toggle: Callback<MouseEvent>,
    pub on_wage_change: Callback<f64>,
}

#[function_component(Settings)]
pub fn settings(props: &SettingsProps) -> Html {
    html! {
        <div class="settings">
            <button class="settings-toggle" title="Settings" onclick={props.on_toggle.clone()}>
                { "\u{2699}" }
            </button>
            if props.visible {
                <WagePanel
                    hourly_wage={props.hourly_wage}
                    on_wage_change={props.on_wage_change.clone()}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct WagePanelProps {
    hourly_wage: f64,
    on_wage_change: Callback<f64>,
}

#[function_component(WagePanel)]
fn wage_panel(props: &WagePanelProps) -> Html {
    let wage_input = use_wage_input(props.hourly_wage, props.on_wage_change.clone());

    html! {
        <div class="settings-panel">
            <label for="hourly_wage_input">{ "Hourly Wage:" }</label>
            <input
                type="number"
                id="hourly_wage_input"
                step={WAGE_INPUT_STEP}
                value={wage_input.text}
                oninput={wage_input.on_input}
            />
        </div>
    }
}
