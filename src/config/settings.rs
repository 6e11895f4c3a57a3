//! User settings for gastos
//!
//! Manages user preferences: display formatting, the monthly income and
//! savings contribution, opening balances, the savings goal, and whether
//! balances survive between sessions.

use serde::{Deserialize, Serialize};

use super::paths::GastosPaths;
use crate::error::GastosError;
use crate::models::account::{DEFAULT_CHECKING, DEFAULT_SAVINGS};
use crate::models::{AccountPair, Money, RolloverPolicy};

/// User settings for gastos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for new expenses (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Income credited to checking by each roll-over
    #[serde(default = "default_monthly_income")]
    pub monthly_income: Money,

    /// Amount moved from the income into savings by each roll-over
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: Money,

    /// Checking balance at the start of a session without persisted balances
    #[serde(default = "default_initial_checking")]
    pub initial_checking: Money,

    /// Savings balance at the start of a session without persisted balances
    #[serde(default = "default_initial_savings")]
    pub initial_savings: Money,

    /// Target the projected savings are compared against
    #[serde(default = "default_savings_goal")]
    pub savings_goal: Money,

    /// Keep balances and the roll-over guard between sessions
    #[serde(default)]
    pub persist_balances: bool,

    /// When the monthly roll-over fires
    #[serde(default)]
    pub rollover_policy: RolloverPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_monthly_income() -> Money {
    Money::from_units(1364)
}

fn default_monthly_contribution() -> Money {
    Money::from_units(400)
}

fn default_initial_checking() -> Money {
    DEFAULT_CHECKING
}

fn default_initial_savings() -> Money {
    DEFAULT_SAVINGS
}

fn default_savings_goal() -> Money {
    Money::from_units(15000)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            monthly_income: default_monthly_income(),
            monthly_contribution: default_monthly_contribution(),
            initial_checking: default_initial_checking(),
            initial_savings: default_initial_savings(),
            savings_goal: default_savings_goal(),
            persist_balances: false,
            rollover_policy: RolloverPolicy::default(),
        }
    }
}

impl Settings {
    /// Balances a session starts from when nothing is persisted
    pub fn initial_accounts(&self) -> AccountPair {
        AccountPair::new(self.initial_checking, self.initial_savings)
    }

    /// Format a money amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Check the settings for values that make no sense
    pub fn validate(&self) -> Result<(), GastosError> {
        if self.monthly_income.is_negative() || self.monthly_contribution.is_negative() {
            return Err(GastosError::Config(
                "monthly_income and monthly_contribution must not be negative".into(),
            ));
        }
        if self.monthly_contribution > self.monthly_income {
            return Err(GastosError::Config(format!(
                "monthly_contribution ({}) exceeds monthly_income ({})",
                self.monthly_contribution, self.monthly_income
            )));
        }
        if self.date_format.trim().is_empty() {
            return Err(GastosError::Config("date_format must not be empty".into()));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GastosPaths) -> Result<Self, GastosError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GastosError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GastosError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GastosPaths) -> Result<(), GastosError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GastosError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GastosError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
