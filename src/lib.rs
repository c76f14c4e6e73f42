use log::{debug, info};
use std::rc::Rc;
use yew::Reducible;

pub mod config;
pub mod utils;

use config::{DEFAULT_HOURLY_WAGE, SECONDS_PER_HOUR};

/// Money added per elapsed second at the given hourly wage.
pub fn accrual_rate(hourly_wage: f64) -> f64 {
    hourly_wage / SECONDS_PER_HOUR
}

/// Everything the money timer knows about itself.
///
/// Lives only as long as the mounted widget; nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    /// Whole seconds counted since the last reset.
    pub elapsed_seconds: u64,
    /// Money earned so far, one accrual-rate step per elapsed second.
    pub accrued_money: f64,
    /// Whether a tick source should be active.
    pub is_running: bool,
    /// Wage used for new tick sources. Not validated.
    pub hourly_wage: f64,
    /// Whether the wage editor is shown.
    pub settings_visible: bool,
}

impl TimerState {
    pub fn new(hourly_wage: f64) -> Self {
        Self {
            elapsed_seconds: 0,
            accrued_money: 0.0,
            is_running: false,
            hourly_wage,
            settings_visible: false,
        }
    }

    pub fn accrual_rate(&self) -> f64 {
        accrual_rate(self.hourly_wage)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_HOURLY_WAGE)
    }
}

/// User and tick events understood by [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerAction {
    /// Start/stop control.
    ToggleRunning,
    /// Zero the counters and stop. Wage and settings visibility are kept.
    Reset,
    /// One second elapsed; carries the rate captured when the tick source was created.
    Tick(f64),
    SetWage(f64),
    ToggleSettings,
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TimerAction::ToggleRunning => {
                let is_running = !self.is_running;
                info!(
                    "Timer {} at {}s",
                    if is_running { "started" } else { "stopped" },
                    self.elapsed_seconds
                );
                Rc::new(Self {
                    is_running,
                    ..(*self).clone()
                })
            }
            TimerAction::Reset => {
                info!("Timer reset");
                Rc::new(Self {
                    elapsed_seconds: 0,
                    accrued_money: 0.0,
                    is_running: false,
                    ..(*self).clone()
                })
            }
            // A tick queued just before stop/reset must not count.
            TimerAction::Tick(_) if !self.is_running => {
                debug!("Dropping tick delivered while stopped");
                self
            }
            TimerAction::Tick(rate) => Rc::new(Self {
                elapsed_seconds: self.elapsed_seconds + 1,
                accrued_money: self.accrued_money + rate,
                ..(*self).clone()
            }),
            TimerAction::SetWage(hourly_wage) => {
                debug!("Hourly wage set to {}", hourly_wage);
                Rc::new(Self {
                    hourly_wage,
                    ..(*self).clone()
                })
            }
            TimerAction::ToggleSettings => Rc::new(Self {
                settings_visible: !self.settings_visible,
                ..(*self).clone()
            }),
        }
    }
}

/// Format seconds as `HH:MM:SS`. Hours keep growing past 99.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format money with a dollar sign and exactly two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}
