use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::slot::{date_key, empty_day, is_date_key, is_slot_key};
use crate::models::{BookingRequest, DaySlots, Document, PendingRequest, SlotStatus};

/// The day's slot table, creating 24 Available slots on first view.
pub fn view_day(doc: &mut Document, date: NaiveDate) -> &DaySlots {
    doc.master_data.entry(date_key(date)).or_insert_with(|| {
        tracing::debug!(%date, "populating slots for first view");
        empty_day()
    })
}

/// Available -> Pending. Checks and sets in one step, so a slot that is
/// already claimed is never handed out twice.
pub fn request(doc: &mut Document, date: &str, slot: &str, user: &str) -> AppResult<PendingRequest> {
    if !is_date_key(date) {
        return Err(AppError::InvalidDate(date.to_string()));
    }
    if !is_slot_key(slot) {
        return Err(AppError::UnknownSlot(slot.to_string()));
    }

    let day = doc
        .master_data
        .entry(date.to_string())
        .or_insert_with(empty_day);
    let entry = day
        .get_mut(slot)
        .ok_or_else(|| AppError::UnknownSlot(slot.to_string()))?;

    if entry.status != SlotStatus::Available {
        return Err(AppError::SlotUnavailable {
            date: date.to_string(),
            slot: slot.to_string(),
            status: entry.status.to_string(),
        });
    }
    entry.status = SlotStatus::Pending;

    let req = BookingRequest::new(user, date, slot);
    doc.pending_requests.push(req.clone());

    tracing::info!(user, date, slot, "slot requested");
    Ok(req)
}

/// Pending -> Booked. Appends the request to the approved history.
pub fn approve(doc: &mut Document, req: &PendingRequest) -> AppResult<()> {
    settle(doc, req, SlotStatus::Booked)?;
    doc.approved_bookings.push(req.clone());

    tracing::info!(user = %req.user, date = %req.date, slot = %req.slot, "booking approved");
    Ok(())
}

/// Pending -> Available. Nothing is kept about the rejection.
pub fn reject(doc: &mut Document, req: &PendingRequest) -> AppResult<()> {
    settle(doc, req, SlotStatus::Available)?;

    tracing::info!(user = %req.user, date = %req.date, slot = %req.slot, "booking rejected");
    Ok(())
}

fn settle(doc: &mut Document, req: &PendingRequest, outcome: SlotStatus) -> AppResult<()> {
    let not_pending = || AppError::NotPending {
        date: req.date.clone(),
        slot: req.slot.clone(),
    };

    let slot = doc
        .master_data
        .get_mut(&req.date)
        .and_then(|day| day.get_mut(&req.slot))
        .ok_or_else(not_pending)?;

    if slot.status != SlotStatus::Pending {
        return Err(not_pending());
    }
    slot.status = outcome;

    // Match on (date, slot) rather than the whole request, clearing any
    // duplicates left behind by older documents.
    doc.pending_requests
        .retain(|r| !r.matches(&req.date, &req.slot));
    Ok(())
}
