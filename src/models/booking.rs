use serde::{Deserialize, Serialize};

/// A claim on one slot. Used both for pending requests and for the
/// approved history, which share the same shape on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub user: String,
    pub date: String,
    pub slot: String,
}

impl BookingRequest {
    pub fn new(user: impl Into<String>, date: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            date: date.into(),
            slot: slot.into(),
        }
    }

    pub fn matches(&self, date: &str, slot: &str) -> bool {
        self.date == date && self.slot == slot
    }
}

pub type PendingRequest = BookingRequest;
pub type ApprovedBooking = BookingRequest;
