//! Events store handlers.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use evd_core::app::App;
use evd_core::command::Reply;
use evd_core::events::{Event, RsvpStatus};

use super::print_reply;

fn print_events(events: Vec<&Event>, json: bool) -> Result<()> {
    print_reply(&Reply::Events(events.into_iter().cloned().collect()), json)
}

pub fn list(app: &App, json: bool) -> Result<()> {
    print_events(app.events.events().iter().collect(), json)
}

pub fn show(app: &App, id: i64, json: bool) -> Result<()> {
    let Some(event) = app.events.event_by_id(id) else {
        bail!("Event {id} not found");
    };
    print_reply(&Reply::Event(Some(event.clone())), json)
}

pub fn upcoming(app: &App, json: bool) -> Result<()> {
    print_events(app.events.upcoming_events(), json)
}

pub fn past(app: &App, json: bool) -> Result<()> {
    print_events(app.events.past_events(), json)
}

pub fn category(app: &App, name: &str, json: bool) -> Result<()> {
    print_events(app.events.events_by_category(name), json)
}

pub fn range(app: &App, start: NaiveDate, end: NaiveDate, json: bool) -> Result<()> {
    print_events(app.events.events_in_range(start, end), json)
}

pub fn stats(app: &App, json: bool) -> Result<()> {
    print_reply(&Reply::Stats(app.events.event_stats()), json)
}

/// Sets the RSVP when `status` is given, then prints what is stored.
pub fn rsvp(app: &mut App, event_id: i64, status: Option<String>, json: bool) -> Result<()> {
    if let Some(status) = status {
        app.events.rsvp_to_event(event_id, RsvpStatus::from(status));
    }
    let status = app.events.user_rsvp(event_id).cloned();
    print_reply(&Reply::Rsvp { event_id, status }, json)
}
