use chrono::NaiveDate;

use super::admin::{self, Decision};
use super::{login, user, Screen};
use crate::errors::{AppError, AppResult};
use crate::models::slot::parse_date_key;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(String),
    Logout,
    Date(NaiveDate),
    Book(String),
    Sent,
    Cancel,
    Approve(usize),
    Reject(usize),
    Settings { rate: String, jazzcash: String },
    Show,
}

impl Command {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let cmd = match word.to_lowercase().as_str() {
            "login" => Command::Login(rest.to_string()),
            "logout" => Command::Logout,
            "date" => Command::Date(
                parse_date_key(rest)
                    .ok_or_else(|| invalid(format!("expected a date like 2025-01-31, got {rest:?}")))?,
            ),
            "book" => Command::Book(rest.to_string()),
            "sent" => Command::Sent,
            "cancel" => Command::Cancel,
            "approve" => Command::Approve(position(rest)?),
            "reject" => Command::Reject(position(rest)?),
            "settings" => {
                let (rate, jazzcash) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| invalid("usage: settings <rate> <number>".to_string()))?;
                Command::Settings {
                    rate: rate.to_string(),
                    jazzcash: jazzcash.trim().to_string(),
                }
            }
            "" | "show" => Command::Show,
            other => return Err(invalid(format!("unknown command {other:?}"))),
        };
        Ok(cmd)
    }
}

fn invalid(msg: String) -> AppError {
    AppError::InvalidCommand(msg)
}

fn position(s: &str) -> AppResult<usize> {
    s.parse()
        .map_err(|_| invalid(format!("expected a request number, got {s:?}")))
}

/// Terminal front end: tracks the current screen and routes typed
/// commands to the matching handler.
pub struct Console {
    pub state: AppState,
    screen: Screen,
}

impl Console {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            screen: Screen::Login,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Runs one command. On error the current screen is left unchanged.
    pub fn handle(&mut self, line: &str, today: NaiveDate) -> AppResult<&Screen> {
        let cmd = Command::parse(line)?;
        let next = self.dispatch(cmd, today)?;
        self.screen = next;
        Ok(&self.screen)
    }

    fn dispatch(&mut self, cmd: Command, today: NaiveDate) -> AppResult<Screen> {
        let state = &mut self.state;
        match (cmd, &self.screen) {
            (Command::Login(name), Screen::Login) => login::submit(state, &name, today),
            (Command::Login(_), _) => Err(invalid("log out first".to_string())),
            (Command::Logout, _) => Ok(login::logout(state)),
            (Command::Show, Screen::Login) => Ok(Screen::Login),
            (Command::Show, Screen::Admin(_)) => admin::dashboard(state),
            (Command::Show, _) => user::slot_grid(state),
            (Command::Date(date), Screen::User(_)) => user::change_date(state, date, today),
            (Command::Book(slot), Screen::User(_)) => user::open_payment(state, &slot),
            (Command::Sent, Screen::Payment(prompt)) => user::confirm_payment(state, prompt),
            (Command::Cancel, Screen::Payment(_)) => user::slot_grid(state),
            (Command::Approve(n), Screen::Admin(_)) => admin::decide(state, n, Decision::Approve),
            (Command::Reject(n), Screen::Admin(_)) => admin::decide(state, n, Decision::Reject),
            (Command::Settings { rate, jazzcash }, Screen::Admin(_)) => {
                admin::save_settings(state, &rate, &jazzcash)
            }
            (cmd, _) => Err(invalid(format!("{cmd:?} is not available on this screen"))),
        }
    }
}
