//! Operations a consumer can run against an [`App`](crate::app::App), and
//! what comes back.
//!
//! `Reply` renders two ways: `Display` for people, `Serialize` for tools.

use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::features::auth::{AuthResult, Role, Session};
use crate::features::events::{Event, EventPatch, EventStats, NewEvent, RsvpStatus};
use crate::router::{Navigation, Route};

/// One store or router operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
        role: Role,
    },
    Logout,
    WhoAmI,
    Navigate {
        path: String,
    },
    Routes,
    AddEvent(NewEvent),
    UpdateEvent {
        id: i64,
        patch: EventPatch,
    },
    DeleteEvent {
        id: i64,
    },
    Rsvp {
        event_id: i64,
        status: RsvpStatus,
    },
    RsvpOf {
        event_id: i64,
    },
    Show {
        id: i64,
    },
    List,
    Upcoming,
    Past,
    Category {
        name: String,
    },
    Range {
        start: NaiveDate,
        end: NaiveDate,
    },
    Stats,
}

/// Result of a [`Command`].
///
/// Serializes as the bare payload. `Done` renders as `{"ok":true}` so it
/// stays distinct from a missing event (`null`).
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Auth(AuthResult),
    Session(Session),
    Navigation(Navigation),
    Routes(Vec<Route>),
    Event(Option<Event>),
    Events(Vec<Event>),
    Rsvp {
        event_id: i64,
        status: Option<RsvpStatus>,
    },
    Stats(EventStats),
    Done,
}

impl Serialize for Reply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reply::Auth(result) => result.serialize(serializer),
            Reply::Session(session) => session.serialize(serializer),
            Reply::Navigation(nav) => nav.serialize(serializer),
            Reply::Routes(routes) => routes.serialize(serializer),
            Reply::Event(event) => event.serialize(serializer),
            Reply::Events(events) => events.serialize(serializer),
            Reply::Rsvp { event_id, status } => {
                let mut state = serializer.serialize_struct("Rsvp", 2)?;
                state.serialize_field("eventId", event_id)?;
                state.serialize_field("status", status)?;
                state.end()
            }
            Reply::Stats(stats) => stats.serialize(serializer),
            Reply::Done => {
                let mut state = serializer.serialize_struct("Done", 1)?;
                state.serialize_field("ok", &true)?;
                state.end()
            }
        }
    }
}

impl Reply {
    /// Renders as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_event_line(f: &mut fmt::Formatter<'_>, event: &Event) -> fmt::Result {
    write!(
        f,
        "{:>3}  {} {}  {}  [{}]  {}/{}",
        event.id,
        event.date,
        event.time.format("%H:%M"),
        event.title,
        event.category,
        event.attendees,
        event.max_attendees
    )
}

fn write_event_details(f: &mut fmt::Formatter<'_>, event: &Event) -> fmt::Result {
    writeln!(f, "#{} {}", event.id, event.title)?;
    writeln!(f, "  When:       {} {}", event.date, event.time.format("%H:%M"))?;
    writeln!(
        f,
        "  Where:      {} ({}, {})",
        event.location.name, event.location.lat, event.location.lng
    )?;
    writeln!(f, "  Category:   {}", event.category)?;
    writeln!(f, "  Attendees:  {}/{}", event.attendees, event.max_attendees)?;
    writeln!(f, "  Created by: {}", event.created_by)?;
    write!(f, "  {}", event.description)
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Auth(result) => match &result.error {
                None if result.success => write!(f, "Authenticated."),
                None => write!(f, "Authentication failed."),
                Some(error) => write!(f, "Error: {error}"),
            },
            Reply::Session(session) => match &session.user {
                Some(user) => write!(
                    f,
                    "Logged in as {} <{}> ({})",
                    user.name, user.email, user.role
                ),
                None => write!(f, "Not logged in."),
            },
            Reply::Navigation(nav) => {
                write!(f, "{} ({})", nav.to.path, nav.to.name())?;
                if let Some(from) = &nav.redirected_from {
                    write!(f, " [redirected from {from}]")?;
                }
                Ok(())
            }
            Reply::Routes(routes) => {
                for (i, route) in routes.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    let mut flags = Vec::new();
                    if route.meta.requires_auth {
                        flags.push("requiresAuth");
                    }
                    if route.meta.requires_admin {
                        flags.push("requiresAdmin");
                    }
                    write!(f, "{:<14} {:<13} {}", route.path, route.name, flags.join(" "))?;
                }
                Ok(())
            }
            Reply::Event(Some(event)) => write_event_details(f, event),
            Reply::Event(None) => write!(f, "Event not found."),
            Reply::Events(events) if events.is_empty() => write!(f, "No events found."),
            Reply::Events(events) => {
                for (i, event) in events.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write_event_line(f, event)?;
                }
                Ok(())
            }
            Reply::Rsvp { event_id, status } => match status {
                Some(status) => write!(f, "Event {event_id}: {status}"),
                None => write!(f, "Event {event_id}: no response"),
            },
            Reply::Stats(stats) => write!(
                f,
                "total: {}\nupcoming: {}\npast: {}\ntotalAttendees: {}",
                stats.total, stats.upcoming, stats.past, stats.total_attendees
            ),
            Reply::Done => write!(f, "OK"),
        }
    }
}
