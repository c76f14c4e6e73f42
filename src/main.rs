//! Main module for the Money Timer application using Yew.
//! Wires the timer state machine, the tick source and the view components.

use log::{info, warn};
use money_timer::{
    config::{DEFAULT_HOURLY_WAGE, WAGE_QUERY_KEY},
    utils::{parse_wage_param, ConfigError},
    TimerAction, TimerState,
};
use web_sys::UrlSearchParams;
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_title, Clock, Controls, Earnings, Settings};
use hooks::use_tick_source;

#[derive(Properties, PartialEq)]
pub struct MoneyTimerProps {
    #[prop_or(DEFAULT_HOURLY_WAGE)]
    pub hourly_wage: f64,
}

/// Timer widget: elapsed time, money earned, start/stop/reset and the wage editor.
///
/// The wage prop only seeds the state; later edits come from the settings panel.
#[function_component(MoneyTimer)]
fn money_timer(props: &MoneyTimerProps) -> Html {
    let hourly_wage = props.hourly_wage;
    let state = use_reducer(move || TimerState::new(hourly_wage));

    let on_tick = {
        let state = state.clone();
        Callback::from(move |rate: f64| state.dispatch(TimerAction::Tick(rate)))
    };
    use_tick_source(state.is_running, state.hourly_wage, on_tick);

    let on_start_stop = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(TimerAction::ToggleRunning))
    };
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(TimerAction::Reset))
    };
    let on_settings_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(TimerAction::ToggleSettings))
    };
    let on_wage_change = {
        let state = state.clone();
        Callback::from(move |wage: f64| state.dispatch(TimerAction::SetWage(wage)))
    };

    html! {
        <div class="money-timer">
            <Settings
                visible={state.settings_visible}
                hourly_wage={state.hourly_wage}
                on_toggle={on_settings_toggle}
                {on_wage_change}
            />
            { render_title() }
            <Clock elapsed_seconds={state.elapsed_seconds} />
            <Earnings accrued_money={state.accrued_money} />
            <Controls is_running={state.is_running} {on_start_stop} {on_reset} />
        </div>
    }
}

/// Look up the wage in a query string such as `?wage=22.5`.
///
/// The browser decodes the string, so percent-encoded keys and values work.
/// Returns `Ok(None)` when the parameter is absent; the first occurrence wins.
fn wage_from_search(search: &str) -> Result<Option<f64>, ConfigError> {
    let params = UrlSearchParams::new_with_str(search)
        .map_err(|e| ConfigError::UnreadableUrl(format!("{:?}", e)))?;
    params
        .get(WAGE_QUERY_KEY)
        .map(|raw| parse_wage_param(&raw))
        .transpose()
}

/// Read `?wage=` from the page URL.
fn initial_wage() -> Result<Option<f64>, ConfigError> {
    let search = gloo_utils::window()
        .location()
        .search()
        .map_err(|e| ConfigError::UnreadableUrl(format!("{:?}", e)))?;
    wage_from_search(&search)
}

/// App wrapper seeding the timer from the page URL.
#[function_component]
pub fn App() -> Html {
    let hourly_wage = use_memo((), |_| match initial_wage() {
        Ok(Some(wage)) => {
            info!("Starting with hourly wage {} from URL", wage);
            wage
        }
        Ok(None) => DEFAULT_HOURLY_WAGE,
        Err(e) => {
            warn!("{}; using default wage {}", e, DEFAULT_HOURLY_WAGE);
            DEFAULT_HOURLY_WAGE
        }
    });

    html! {
        <MoneyTimer hourly_wage={*hourly_wage} />
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wage_is_read_from_search() {
        assert_eq!(wage_from_search("?wage=22.5"), Ok(Some(22.5)));
        assert_eq!(wage_from_search("wage=30"), Ok(Some(30.0)));
        assert_eq!(wage_from_search("?theme=dark&wage=-5"), Ok(Some(-5.0)));
        assert_eq!(wage_from_search("?wage=18&wage=99"), Ok(Some(18.0)));
    }

    #[wasm_bindgen_test]
    fn percent_encoded_wage_is_decoded() {
        assert_eq!(wage_from_search("?wage=22%2E5"), Ok(Some(22.5)));
        assert_eq!(wage_from_search("?w%61ge=22.5"), Ok(Some(22.5)));
        assert_eq!(wage_from_search("?wage=%2040%20"), Ok(Some(40.0)));
    }

    #[wasm_bindgen_test]
    fn missing_wage_is_none() {
        assert_eq!(wage_from_search(""), Ok(None));
        assert_eq!(wage_from_search("?"), Ok(None));
        assert_eq!(wage_from_search("?wages=20"), Ok(None));
    }

    #[wasm_bindgen_test]
    fn unparseable_wage_is_an_error() {
        assert_eq!(
            wage_from_search("?wage=lots"),
            Err(ConfigError::InvalidWage("lots".to_string()))
        );
        assert_eq!(
            wage_from_search("?wage"),
            Err(ConfigError::InvalidWage(String::new()))
        );
        assert!(matches!(
            wage_from_search("?wage=Infinity"),
            Err(ConfigError::NonFiniteWage(_))
        ));
    }
}
