use crate::errors::{AppError, AppResult};
use crate::models::Settings;

/// Parses the rate typed into the admin dashboard.
pub fn parse_rate(input: &str) -> AppResult<i64> {
    match input.trim().parse::<i64>() {
        Ok(rate) if rate > 0 => Ok(rate),
        _ => Err(AppError::InvalidRate(input.to_string())),
    }
}

/// Overwrites rate and payment handle. The advance is left as is.
pub fn update_settings(settings: &mut Settings, rate: i64, jazzcash: &str) {
    settings.rate = rate;
    settings.jazzcash = jazzcash.to_string();
    tracing::info!(rate, jazzcash, "settings updated");
}
