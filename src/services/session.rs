use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::slot::date_key;
use crate::models::{Role, Session};

/// Starts a session for whoever typed `name`. There is no password; the
/// name only decides the role.
pub fn login(name: &str, today: NaiveDate) -> AppResult<Session> {
    if name.trim().is_empty() {
        return Err(AppError::EmptyName);
    }

    let role = Role::for_name(name);
    tracing::info!(user = name, ?role, "logged in");

    Ok(Session {
        user_name: name.to_string(),
        selected_date: today,
        role,
    })
}

pub fn select_date(session: &mut Session, date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if date < today {
        return Err(AppError::PastDate(date_key(date)));
    }
    session.selected_date = date;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_admin_name_any_case() {
        for name in ["admin", "Admin", "ADMIN", "aDmIn"] {
            assert_eq!(login(name, today()).unwrap().role, Role::Admin);
        }
    }

    #[test]
    fn test_other_names_are_users() {
        let session = login("Bob", today()).unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(session.user_name, "Bob");
        assert_eq!(session.selected_date, today());
        assert_eq!(login("administrator", today()).unwrap().role, Role::User);
    }

    #[test]
    fn test_empty_name_is_refused() {
        assert!(matches!(login("", today()), Err(AppError::EmptyName)));
        assert!(matches!(login("   \t", today()), Err(AppError::EmptyName)));
    }

    #[test]
    fn test_select_date() {
        let mut session = login("Bob", today()).unwrap();
        let later = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        select_date(&mut session, later, today()).unwrap();
        assert_eq!(session.selected_date_key(), "2025-03-14");

        let earlier = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert!(matches!(
            select_date(&mut session, earlier, today()),
            Err(AppError::PastDate(_))
        ));
        assert_eq!(session.selected_date, later);
    }
}
