use std::fmt;

use chrono::NaiveDate;

use super::Screen;
use crate::errors::{AppError, AppResult};
use crate::models::slot::date_key;
use crate::models::SlotStatus;
use crate::state::AppState;

const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTile {
    pub slot: String,
    pub status: SlotStatus,
}

impl SlotTile {
    pub fn label(&self) -> &str {
        match self.status {
            SlotStatus::Available => self.slot.as_str(),
            other => other.as_str(),
        }
    }

    pub fn selectable(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserScreen {
    pub user_name: String,
    pub date: String,
    pub rate: i64,
    pub tiles: Vec<SlotTile>,
}

impl fmt::Display for UserScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome, {}", self.user_name)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Ground Rate: Rs. {}/Hour", self.rate)?;
        for row in self.tiles.chunks(GRID_COLUMNS) {
            let cells: Vec<String> = row.iter().map(|t| format!("{:<9}", t.label())).collect();
            writeln!(f, "  {}", cells.join(" ").trim_end())?;
        }
        write!(f, "book <HH:00> | date <YYYY-MM-DD> | logout")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPrompt {
    pub date: String,
    pub slot: String,
    pub advance: i64,
    pub jazzcash: String,
}

impl fmt::Display for PaymentPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking Confirmation")?;
        writeln!(f, "Slot: {} on {}", self.slot, self.date)?;
        writeln!(f, "Advance Required: Rs. {}", self.advance)?;
        writeln!(f, "Transfer to JazzCash/EasyPaisa:")?;
        writeln!(f, "  {}", self.jazzcash)?;
        writeln!(f, "Send screenshot on WhatsApp")?;
        write!(f, "sent | cancel")
    }
}

pub fn slot_grid(state: &mut AppState) -> AppResult<Screen> {
    let session = state.session().ok_or(AppError::NoSession)?;
    let user_name = session.user_name.clone();
    let selected = session.selected_date;

    let tiles = state
        .store
        .view_day(selected)
        .iter()
        .map(|(slot, s)| SlotTile {
            slot: slot.clone(),
            status: s.status,
        })
        .collect();

    Ok(Screen::User(UserScreen {
        user_name,
        date: date_key(selected),
        rate: state.store.settings().rate,
        tiles,
    }))
}

pub fn change_date(state: &mut AppState, date: NaiveDate, today: NaiveDate) -> AppResult<Screen> {
    state.select_date(date, today)?;
    slot_grid(state)
}

/// Shows the advance payment details for an open slot.
pub fn open_payment(state: &mut AppState, slot: &str) -> AppResult<Screen> {
    let session = state.session().ok_or(AppError::NoSession)?;
    let selected = session.selected_date;
    let date = date_key(selected);

    let status = state
        .store
        .view_day(selected)
        .get(slot)
        .map(|s| s.status)
        .ok_or_else(|| AppError::UnknownSlot(slot.to_string()))?;
    if status != SlotStatus::Available {
        return Err(AppError::SlotUnavailable {
            date,
            slot: slot.to_string(),
            status: status.to_string(),
        });
    }

    let settings = state.store.settings();
    Ok(Screen::Payment(PaymentPrompt {
        date,
        slot: slot.to_string(),
        advance: settings.advance,
        jazzcash: settings.jazzcash.clone(),
    }))
}

/// The user says the advance was sent.
pub fn confirm_payment(state: &mut AppState, prompt: &PaymentPrompt) -> AppResult<Screen> {
    let selected = state.session().map(|s| s.selected_date_key());
    if selected.as_deref() != Some(prompt.date.as_str()) {
        return Err(AppError::InvalidCommand(
            "the selected date changed, pick the slot again".to_string(),
        ));
    }
    state.request_slot(&prompt.slot)?;
    slot_grid(state)
}
