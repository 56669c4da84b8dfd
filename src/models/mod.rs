pub mod booking;
pub mod document;
pub mod session;
pub mod settings;
pub mod slot;

pub use booking::{ApprovedBooking, BookingRequest, PendingRequest};
pub use document::Document;
pub use session::{Role, Session};
pub use settings::Settings;
pub use slot::{DaySlots, MasterData, Slot, SlotStatus};
