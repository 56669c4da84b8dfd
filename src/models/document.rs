use serde::{Deserialize, Serialize};

use super::booking::{ApprovedBooking, PendingRequest};
use super::settings::Settings;
use super::slot::{DaySlots, MasterData, SlotStatus};

/// The whole persisted database, stored as one JSON value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub master_data: MasterData,
    #[serde(default)]
    pub pending_requests: Vec<PendingRequest>,
    #[serde(default)]
    pub approved_bookings: Vec<ApprovedBooking>,
}

impl Document {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn day(&self, date: &str) -> Option<&DaySlots> {
        self.master_data.get(date)
    }

    /// Status of a slot; slots never viewed are Available.
    pub fn slot_status(&self, date: &str, slot: &str) -> SlotStatus {
        self.master_data
            .get(date)
            .and_then(|day| day.get(slot))
            .map(|s| s.status)
            .unwrap_or_default()
    }

    pub fn pending_for<'a>(
        &'a self,
        date: &'a str,
        slot: &'a str,
    ) -> impl Iterator<Item = &'a PendingRequest> + 'a {
        self.pending_requests
            .iter()
            .filter(move |r| r.matches(date, slot))
    }
}
