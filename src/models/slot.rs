use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const SLOTS_PER_DAY: u32 = 24;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotStatus {
    #[default]
    Available,
    Pending,
    Booked,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "Available",
            SlotStatus::Pending => "Pending",
            SlotStatus::Booked => "Booked",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    #[serde(default)]
    pub status: SlotStatus,
}

/// Slot key to slot, for one date. Sorted, so iteration runs `00:00`..`23:00`.
pub type DaySlots = BTreeMap<String, Slot>;

/// Date key to that day's slots.
pub type MasterData = BTreeMap<String, DaySlots>;

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT).ok()
}

/// Accepts only the canonical `YYYY-MM-DD` form of a real date.
pub fn is_date_key(s: &str) -> bool {
    parse_date_key(s).is_some_and(|d| date_key(d) == s)
}

pub fn slot_key(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// Accepts `HH:00` for hours 00 through 23.
pub fn is_slot_key(s: &str) -> bool {
    match s.split_once(':') {
        Some((hour, "00")) if hour.len() == 2 && hour.bytes().all(|b| b.is_ascii_digit()) => {
            hour.parse::<u32>().is_ok_and(|h| h < SLOTS_PER_DAY)
        }
        _ => false,
    }
}

pub fn empty_day() -> DaySlots {
    (0..SLOTS_PER_DAY)
        .map(|hour| (slot_key(hour), Slot::default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_day_has_all_hours_available() {
        let day = empty_day();
        assert_eq!(day.len(), 24);
        let keys: Vec<_> = day.keys().cloned().collect();
        assert_eq!(keys.first().map(String::as_str), Some("00:00"));
        assert_eq!(keys.last().map(String::as_str), Some("23:00"));
        assert!(day.values().all(|s| s.status == SlotStatus::Available));
    }

    #[test]
    fn test_slot_key_validation() {
        assert!(is_slot_key("00:00"));
        assert!(is_slot_key("09:00"));
        assert!(is_slot_key("23:00"));
        assert!(!is_slot_key("24:00"));
        assert!(!is_slot_key("9:00"));
        assert!(!is_slot_key("09:30"));
        assert!(!is_slot_key("nine"));
        assert!(!is_slot_key("+9:00"));
        assert!(!is_slot_key("+0:00"));
    }

    #[test]
    fn test_date_key_format() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(date_key(date), "2025-01-01");
        assert_eq!(parse_date_key(" 2025-01-01 "), Some(date));
        assert_eq!(parse_date_key("01/01/2025"), None);

        assert!(is_date_key("2025-01-01"));
        assert!(!is_date_key("2025-1-1"));
        assert!(!is_date_key(" 2025-01-01"));
        assert!(!is_date_key("2025-02-30"));
        assert!(!is_date_key("next tuesday"));
    }

    #[test]
    fn test_status_serializes_capitalized() {
        let json = serde_json::to_string(&Slot {
            status: SlotStatus::Pending,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"Pending"}"#);

        let slot: Slot = serde_json::from_str("{}").unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
    }
}
