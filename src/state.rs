use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::{PendingRequest, Role, Session};
use crate::services::session;
use crate::services::store::Store;

/// Everything the front end works against: the store and whoever is
/// currently logged in.
pub struct AppState {
    pub store: Store,
    session: Option<Session>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn login(&mut self, name: &str, today: NaiveDate) -> AppResult<Role> {
        let session = session::login(name, today)?;
        let role = session.role;
        self.session = Some(session);
        Ok(role)
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(user = %session.user_name, "logged out");
        }
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> AppResult<()> {
        let session = self.session.as_mut().ok_or(AppError::NoSession)?;
        session::select_date(session, date, today)
    }

    /// Requests `slot` on the selected date for the logged-in user.
    pub fn request_slot(&mut self, slot: &str) -> AppResult<PendingRequest> {
        let session = self.session.as_ref().ok_or(AppError::NoSession)?;
        let date = session.selected_date_key();
        let user = session.user_name.clone();
        self.store.request(&date, slot, &user)
    }

    pub fn approve(&mut self, req: &PendingRequest) -> AppResult<()> {
        self.require_admin()?;
        self.store.approve(req)
    }

    pub fn reject(&mut self, req: &PendingRequest) -> AppResult<()> {
        self.require_admin()?;
        self.store.reject(req)
    }

    pub fn update_settings(&mut self, rate: i64, jazzcash: &str) -> AppResult<()> {
        self.require_admin()?;
        self.store.update_settings(rate, jazzcash)
    }

    fn require_admin(&self) -> AppResult<()> {
        match &self.session {
            Some(s) if s.is_admin() => Ok(()),
            Some(_) => Err(AppError::Forbidden),
            None => Err(AppError::NoSession),
        }
    }
}
