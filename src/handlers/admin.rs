use std::fmt;

use super::Screen;
use crate::errors::{AppError, AppResult};
use crate::models::{ApprovedBooking, PendingRequest, Settings};
use crate::services::settings::parse_rate;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    NewBookings(usize),
    AllClear,
}

impl Notification {
    pub fn for_pending(count: usize) -> Self {
        if count > 0 {
            Notification::NewBookings(count)
        } else {
            Notification::AllClear
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::NewBookings(n) => write!(f, "{n} New Bookings"),
            Notification::AllClear => write!(f, "All Clear"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDashboard {
    pub notification: Notification,
    pub settings: Settings,
    pub pending: Vec<PendingRequest>,
    pub history: Vec<ApprovedBooking>,
}

impl fmt::Display for AdminDashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Admin Control")?;
        writeln!(f, "[{}]", self.notification)?;
        writeln!(
            f,
            "Hourly Rate: {} | JazzCash/EasyPaisa: {}",
            self.settings.rate, self.settings.jazzcash
        )?;

        writeln!(f, "Requests:")?;
        for (i, r) in self.pending.iter().enumerate() {
            writeln!(f, "  #{} User: {} | Slot: {} | {}", i + 1, r.user, r.date, r.slot)?;
        }

        writeln!(f, "History:")?;
        for h in &self.history {
            writeln!(f, "  {} - {} (Date: {})", h.user, h.slot, h.date)?;
        }
        write!(f, "approve <n> | reject <n> | settings <rate> <number> | logout")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

pub fn dashboard(state: &AppState) -> AppResult<Screen> {
    match state.session() {
        Some(s) if s.is_admin() => {}
        Some(_) => return Err(AppError::Forbidden),
        None => return Err(AppError::NoSession),
    }

    let pending = state.store.pending_requests().to_vec();
    Ok(Screen::Admin(AdminDashboard {
        notification: Notification::for_pending(pending.len()),
        settings: state.store.settings().clone(),
        pending,
        history: state.store.approved_bookings().to_vec(),
    }))
}

/// Decides the pending request at 1-based `position` in the list.
pub fn decide(state: &mut AppState, position: usize, decision: Decision) -> AppResult<Screen> {
    let req = position
        .checked_sub(1)
        .and_then(|i| state.store.pending_requests().get(i))
        .cloned()
        .ok_or(AppError::NoSuchRequest(position))?;

    match decision {
        Decision::Approve => state.approve(&req)?,
        Decision::Reject => state.reject(&req)?,
    }
    dashboard(state)
}

pub fn save_settings(state: &mut AppState, rate: &str, jazzcash: &str) -> AppResult<Screen> {
    let rate = parse_rate(rate)?;
    state.update_settings(rate, jazzcash.trim())?;
    dashboard(state)
}
