//! Defaults applied when an ingredient leaves its logistics fields empty.

use serde::{Deserialize, Serialize};

use bistro_core::{DomainError, DomainResult, ensure_fraction, ensure_non_negative};

pub const ENV_DEFAULT_ORDER_COST: &str = "BISTRO_DEFAULT_ORDER_COST";
pub const ENV_DEFAULT_HOLDING_COST_PERCENT: &str = "BISTRO_DEFAULT_HOLDING_COST_PERCENT";
pub const ENV_DEFAULT_LEAD_TIME_DAYS: &str = "BISTRO_DEFAULT_LEAD_TIME_DAYS";
pub const ENV_SERVICE_LEVEL: &str = "BISTRO_SERVICE_LEVEL";

/// Replenishment parameters with named defaults.
///
/// | field                          | default |
/// |--------------------------------|---------|
/// | `default_order_cost`           | 25.0    |
/// | `default_holding_cost_percent` | 0.20    |
/// | `default_lead_time_days`       | 2.0     |
/// | `service_level`                | 0.95    |
/// | `days_per_year`                | 365.0   |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplenishmentConfig {
    /// Fixed cost per purchase order when the ingredient has none.
    pub default_order_cost: f64,
    /// Annual holding cost fraction when the ingredient has none.
    pub default_holding_cost_percent: f64,
    /// Supplier lead time when the ingredient has none.
    pub default_lead_time_days: f64,
    /// Probability of not stocking out during lead time; drives the safety-stock z-score.
    pub service_level: f64,
    pub days_per_year: f64,
}

impl Default for ReplenishmentConfig {
    fn default() -> Self {
        Self {
            default_order_cost: 25.0,
            default_holding_cost_percent: 0.20,
            default_lead_time_days: 2.0,
            service_level: 0.95,
            days_per_year: 365.0,
        }
    }
}

impl ReplenishmentConfig {
    /// Build from `BISTRO_*` environment variables, keeping defaults for anything unset.
    ///
    /// Unparsable or out-of-range values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: f64, check: fn(&str, f64) -> DomainResult<()>| -> f64 {
            let Some(raw) = lookup(key) else {
                return fallback;
            };
            match raw.trim().parse::<f64>() {
                Ok(value) => match check(key, value) {
                    Ok(()) => value,
                    Err(err) => {
                        tracing::warn!("{key} rejected ({err}); using default {fallback}");
                        fallback
                    }
                },
                Err(err) => {
                    tracing::warn!(
                        "{key}={raw:?} is not a number ({err}); using default {fallback}"
                    );
                    fallback
                }
            }
        };

        Self {
            default_order_cost: read(
                ENV_DEFAULT_ORDER_COST,
                defaults.default_order_cost,
                ensure_non_negative,
            ),
            default_holding_cost_percent: read(
                ENV_DEFAULT_HOLDING_COST_PERCENT,
                defaults.default_holding_cost_percent,
                ensure_fraction,
            ),
            default_lead_time_days: read(
                ENV_DEFAULT_LEAD_TIME_DAYS,
                defaults.default_lead_time_days,
                ensure_non_negative,
            ),
            service_level: read(ENV_SERVICE_LEVEL, defaults.service_level, ensure_fraction),
            days_per_year: defaults.days_per_year,
        }
    }

    pub fn with_default_order_cost(mut self, order_cost: f64) -> Self {
        self.default_order_cost = order_cost;
        self
    }

    pub fn with_default_holding_cost_percent(mut self, percent: f64) -> Self {
        self.default_holding_cost_percent = percent;
        self
    }

    pub fn with_default_lead_time_days(mut self, days: f64) -> Self {
        self.default_lead_time_days = days;
        self
    }

    pub fn with_service_level(mut self, service_level: f64) -> Self {
        self.service_level = service_level;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("default_order_cost", self.default_order_cost)?;
        ensure_fraction("default_holding_cost_percent", self.default_holding_cost_percent)?;
        ensure_non_negative("default_lead_time_days", self.default_lead_time_days)?;
        ensure_fraction("service_level", self.service_level)?;
        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            return Err(DomainError::validation(format!(
                "days_per_year must be a finite positive number (got {})",
                self.days_per_year
            )));
        }
        Ok(())
    }
}
