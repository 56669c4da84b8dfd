use chrono::NaiveDate;

use super::slot::date_key;

pub const ADMIN_NAME: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn for_name(name: &str) -> Self {
        if name.to_lowercase() == ADMIN_NAME {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// Who is logged in and which day they are looking at. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_name: String,
    pub selected_date: NaiveDate,
    pub role: Role,
}

impl Session {
    pub fn selected_date_key(&self) -> String {
        date_key(self.selected_date)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
