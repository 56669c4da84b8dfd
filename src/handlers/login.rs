use chrono::NaiveDate;

use super::{admin, user, Screen};
use crate::errors::AppResult;
use crate::models::Role;
use crate::state::AppState;

pub fn submit(state: &mut AppState, name: &str, today: NaiveDate) -> AppResult<Screen> {
    match state.login(name, today)? {
        Role::Admin => admin::dashboard(state),
        Role::User => user::slot_grid(state),
    }
}

pub fn logout(state: &mut AppState) -> Screen {
    state.logout();
    Screen::Login
}
