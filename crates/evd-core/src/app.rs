//! Application context.
//!
//! Bundles the stores and the router into one explicitly owned value that
//! consumers receive, instead of process-wide singletons.
//!
//! ```text
//! App
//! ├── auth: AuthStore     (current user)
//! ├── events: EventsStore (events + RSVPs)
//! └── router: Router      (current location, history base)
//! ```
//!
//! Fields are public so a consumer can borrow one store mutably while
//! reading another.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::command::{Command, Reply};
use crate::config::Config;
use crate::features::auth::{AuthResult, AuthStore};
use crate::features::events::EventsStore;
use crate::router::{HOME_PATH, Navigation, RouteError, Router};

/// How to build an [`App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    pub base_path: String,
    pub seed_events: bool,
    /// Pins the clock to noon UTC of this date; `None` reads the wall clock.
    pub today: Option<NaiveDate>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            base_path: HOME_PATH.to_string(),
            seed_events: true,
            today: None,
        }
    }
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            base_path: config.effective_base_path().to_string(),
            seed_events: config.seed_events,
            today: config.today,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub auth: AuthStore,
    pub events: EventsStore,
    pub router: Router,
    clock: Arc<dyn Clock>,
}

impl App {
    pub fn new(options: &AppOptions) -> Self {
        let clock: Arc<dyn Clock> = match options.today {
            Some(today) => Arc::new(FixedClock::new(today)),
            None => Arc::new(SystemClock),
        };
        Self::with_clock(options, clock)
    }

    pub fn with_clock(options: &AppOptions, clock: Arc<dyn Clock>) -> Self {
        let events = if options.seed_events {
            EventsStore::with_seed(Arc::clone(&clock))
        } else {
            EventsStore::new(Arc::clone(&clock))
        };
        Self {
            auth: AuthStore::new(Arc::clone(&clock)),
            events,
            router: Router::new(&options.base_path),
            clock,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Navigates with the guard checking the current session.
    pub fn navigate(&mut self, location: &str) -> Result<Navigation, RouteError> {
        self.router.navigate(location, &self.auth)
    }

    /// Runs one store or router operation and describes the result.
    pub fn apply(&mut self, command: Command) -> Result<Reply, RouteError> {
        let reply = match command {
            Command::Login { email, password } => {
                let result = self.auth.login(&email, &password).map(|_| ());
                Reply::Auth(AuthResult::from(&result))
            }
            Command::Signup {
                name,
                email,
                password,
                role,
            } => {
                self.auth.signup(&name, &email, &password, role);
                Reply::Auth(AuthResult {
                    success: true,
                    error: None,
                })
            }
            Command::Logout => {
                self.auth.logout();
                Reply::Session(self.auth.session())
            }
            Command::WhoAmI => Reply::Session(self.auth.session()),
            Command::Navigate { path } => Reply::Navigation(self.navigate(&path)?),
            Command::Routes => Reply::Routes(crate::router::ROUTES.to_vec()),
            Command::AddEvent(input) => Reply::Event(Some(self.events.add_event(input))),
            Command::UpdateEvent { id, patch } => {
                self.events.update_event(id, patch);
                Reply::Event(self.events.event_by_id(id).cloned())
            }
            Command::DeleteEvent { id } => {
                self.events.delete_event(id);
                Reply::Done
            }
            Command::Rsvp { event_id, status } => {
                self.events.rsvp_to_event(event_id, status);
                Reply::Rsvp {
                    event_id,
                    status: self.events.user_rsvp(event_id).cloned(),
                }
            }
            Command::RsvpOf { event_id } => Reply::Rsvp {
                event_id,
                status: self.events.user_rsvp(event_id).cloned(),
            },
            Command::Show { id } => Reply::Event(self.events.event_by_id(id).cloned()),
            Command::List => Reply::Events(self.events.events().to_vec()),
            Command::Upcoming => Reply::Events(cloned(self.events.upcoming_events())),
            Command::Past => Reply::Events(cloned(self.events.past_events())),
            Command::Category { name } => {
                Reply::Events(cloned(self.events.events_by_category(&name)))
            }
            Command::Range { start, end } => {
                Reply::Events(cloned(self.events.events_in_range(start, end)))
            }
            Command::Stats => Reply::Stats(self.events.event_stats()),
        };
        Ok(reply)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppOptions::default())
    }
}

fn cloned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}
