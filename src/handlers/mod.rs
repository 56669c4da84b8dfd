pub mod admin;
pub mod console;
pub mod login;
pub mod user;

use std::fmt;

pub use admin::AdminDashboard;
pub use user::{PaymentPrompt, UserScreen};

/// What the front end should show after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    User(UserScreen),
    Payment(PaymentPrompt),
    Admin(AdminDashboard),
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Login => {
                writeln!(f, "Indoor Cricket Club")?;
                write!(f, "Enter your full name to log in: login <name>")
            }
            Screen::User(s) => write!(f, "{s}"),
            Screen::Payment(s) => write!(f, "{s}"),
            Screen::Admin(s) => write!(f, "{s}"),
        }
    }
}
