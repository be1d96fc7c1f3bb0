//! Sample events the store starts with.
//!
//! Dates run from December 2023 through early March 2024. Entries are
//! `const`, so a malformed date or time fails the build rather than startup.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use super::model::{EVENT_CREATOR, Event, Location, RsvpStatus};

struct SeedEvent {
    id: i64,
    title: &'static str,
    description: &'static str,
    date: NaiveDate,
    time: NaiveTime,
    venue: &'static str,
    lat: f64,
    lng: f64,
    attendees: i64,
    max_attendees: i64,
    category: &'static str,
}

impl SeedEvent {
    fn to_event(&self) -> Event {
        Event {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            date: self.date,
            time: self.time,
            location: Location {
                name: self.venue.to_string(),
                lat: self.lat,
                lng: self.lng,
            },
            attendees: self.attendees,
            max_attendees: self.max_attendees,
            category: self.category.to_string(),
            created_by: EVENT_CREATOR.to_string(),
        }
    }
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid seed time"),
    }
}

#[allow(clippy::unreadable_literal)]
const SEED_EVENTS: &[SeedEvent] = &[
    SeedEvent {
        id: 1,
        title: "Holiday Market",
        description: "Festive holiday market with local artisans and seasonal treats.",
        date: ymd(2023, 12, 15),
        time: hm(10, 0),
        venue: "Union Square Park",
        lat: 40.7359,
        lng: -73.9911,
        attendees: 89,
        max_attendees: 150,
        category: "Food",
    },
    SeedEvent {
        id: 2,
        title: "Winter Jazz Festival",
        description: "Cozy winter jazz performances in an intimate setting.",
        date: ymd(2023, 12, 20),
        time: hm(19, 30),
        venue: "Blue Note Jazz Club",
        lat: 40.7308,
        lng: -73.9986,
        attendees: 45,
        max_attendees: 60,
        category: "Music",
    },
    SeedEvent {
        id: 3,
        title: "Tech Year in Review",
        description: "Reflect on the biggest tech trends and innovations of 2023.",
        date: ymd(2023, 12, 28),
        time: hm(18, 0),
        venue: "Google NYC Office",
        lat: 40.7411,
        lng: -73.9897,
        attendees: 78,
        max_attendees: 120,
        category: "Technology",
    },
    SeedEvent {
        id: 4,
        title: "New Year's Day Run",
        description: "Start the year with a refreshing 5K run through the city.",
        date: ymd(2024, 1, 1),
        time: hm(9, 0),
        venue: "Prospect Park",
        lat: 40.6602,
        lng: -73.9690,
        attendees: 156,
        max_attendees: 200,
        category: "Sports",
    },
    SeedEvent {
        id: 5,
        title: "Art Exhibition Opening",
        description: "Contemporary art showcase featuring emerging artists.",
        date: ymd(2024, 1, 3),
        time: hm(18, 0),
        venue: "Whitney Museum",
        lat: 40.7396,
        lng: -74.0089,
        attendees: 67,
        max_attendees: 100,
        category: "Arts",
    },
    SeedEvent {
        id: 6,
        title: "Business Networking Mixer",
        description: "Connect with professionals from various industries.",
        date: ymd(2024, 1, 5),
        time: hm(19, 0),
        venue: "The Standard Hotel",
        lat: 40.7384,
        lng: -74.0089,
        attendees: 89,
        max_attendees: 120,
        category: "Business",
    },
    SeedEvent {
        id: 7,
        title: "Cooking Workshop",
        description: "Learn to cook authentic Italian cuisine with a master chef.",
        date: ymd(2024, 1, 10),
        time: hm(14, 0),
        venue: "Eataly NYC",
        lat: 40.7411,
        lng: -73.9897,
        attendees: 23,
        max_attendees: 30,
        category: "Food",
    },
    SeedEvent {
        id: 8,
        title: "Poetry Slam",
        description: "Experience the power of spoken word and poetry.",
        date: ymd(2024, 1, 12),
        time: hm(20, 0),
        venue: "Nuyorican Poets Cafe",
        lat: 40.7279,
        lng: -73.9837,
        attendees: 45,
        max_attendees: 80,
        category: "Entertainment",
    },
    SeedEvent {
        id: 9,
        title: "Tech Meetup 2024",
        description: "Join us for an exciting evening of networking and tech talks!",
        date: ymd(2024, 1, 15),
        time: hm(18, 0),
        venue: "WeWork - 350 5th Ave",
        lat: 40.7484,
        lng: -73.9857,
        attendees: 45,
        max_attendees: 100,
        category: "Technology",
    },
    SeedEvent {
        id: 10,
        title: "Yoga in the Park",
        description: "Join us for a relaxing yoga session in the heart of the city.",
        date: ymd(2024, 1, 17),
        time: hm(8, 0),
        venue: "Bryant Park",
        lat: 40.7539,
        lng: -73.9857,
        attendees: 34,
        max_attendees: 60,
        category: "Sports",
    },
    SeedEvent {
        id: 11,
        title: "Art Gallery Opening",
        description: "Experience local artists and their amazing works.",
        date: ymd(2024, 1, 20),
        time: hm(19, 0),
        venue: "MoMA - Museum of Modern Art",
        lat: 40.7614,
        lng: -73.9776,
        attendees: 23,
        max_attendees: 50,
        category: "Arts",
    },
    SeedEvent {
        id: 12,
        title: "Food Festival",
        description: "Taste cuisines from around the world in this amazing food festival.",
        date: ymd(2024, 1, 25),
        time: hm(12, 0),
        venue: "Central Park - Bethesda Fountain",
        lat: 40.7645,
        lng: -73.9713,
        attendees: 120,
        max_attendees: 200,
        category: "Food",
    },
    SeedEvent {
        id: 13,
        title: "Classical Music Concert",
        description: "An evening of classical music featuring the city orchestra.",
        date: ymd(2024, 1, 27),
        time: hm(19, 30),
        venue: "Carnegie Hall",
        lat: 40.7648,
        lng: -73.9808,
        attendees: 234,
        max_attendees: 280,
        category: "Music",
    },
    SeedEvent {
        id: 14,
        title: "Startup Pitch Night",
        description: "Watch innovative startups pitch their ideas to investors.",
        date: ymd(2024, 2, 1),
        time: hm(17, 30),
        venue: "Flatiron Building",
        lat: 40.7411,
        lng: -73.9897,
        attendees: 67,
        max_attendees: 80,
        category: "Business",
    },
    SeedEvent {
        id: 15,
        title: "Music Concert",
        description: "Live music performance featuring local bands.",
        date: ymd(2024, 2, 3),
        time: hm(20, 0),
        venue: "Madison Square Garden",
        lat: 40.7505,
        lng: -73.9934,
        attendees: 89,
        max_attendees: 150,
        category: "Music",
    },
    SeedEvent {
        id: 16,
        title: "Book Reading & Discussion",
        description: "Join us for an evening of literature and thoughtful discussion.",
        date: ymd(2024, 2, 10),
        time: hm(19, 30),
        venue: "The Strand Bookstore",
        lat: 40.7345,
        lng: -73.9903,
        attendees: 28,
        max_attendees: 40,
        category: "Education",
    },
    SeedEvent {
        id: 17,
        title: "Photography Workshop",
        description: "Learn street photography techniques from professionals.",
        date: ymd(2024, 2, 11),
        time: hm(14, 0),
        venue: "High Line Park",
        lat: 40.7479,
        lng: -74.0048,
        attendees: 15,
        max_attendees: 25,
        category: "Education",
    },
    SeedEvent {
        id: 18,
        title: "Comedy Night",
        description: "Laugh the night away with some of the city's best comedians.",
        date: ymd(2024, 2, 15),
        time: hm(21, 0),
        venue: "Comedy Cellar",
        lat: 40.7308,
        lng: -73.9986,
        attendees: 56,
        max_attendees: 80,
        category: "Entertainment",
    },
    SeedEvent {
        id: 19,
        title: "Valentine's Day Dance",
        description: "Romantic evening of dancing and live music.",
        date: ymd(2024, 2, 14),
        time: hm(20, 0),
        venue: "The Plaza Hotel",
        lat: 40.7645,
        lng: -73.9740,
        attendees: 89,
        max_attendees: 120,
        category: "Entertainment",
    },
    SeedEvent {
        id: 20,
        title: "AI & Machine Learning Summit",
        description: "Explore the latest developments in AI and ML technologies.",
        date: ymd(2024, 2, 20),
        time: hm(9, 0),
        venue: "Javits Center",
        lat: 40.7579,
        lng: -74.0021,
        attendees: 234,
        max_attendees: 300,
        category: "Technology",
    },
    SeedEvent {
        id: 21,
        title: "Fashion Week Show",
        description: "Exclusive preview of upcoming fashion trends.",
        date: ymd(2024, 2, 22),
        time: hm(19, 0),
        venue: "Lincoln Center",
        lat: 40.7725,
        lng: -73.9831,
        attendees: 156,
        max_attendees: 200,
        category: "Arts",
    },
    SeedEvent {
        id: 22,
        title: "Marathon Training Session",
        description: "Group training session for upcoming spring marathon.",
        date: ymd(2024, 2, 28),
        time: hm(7, 0),
        venue: "Central Park - Reservoir",
        lat: 40.7829,
        lng: -73.9654,
        attendees: 67,
        max_attendees: 100,
        category: "Sports",
    },
    SeedEvent {
        id: 23,
        title: "Wine Tasting Event",
        description: "Sample wines from around the world with expert sommeliers.",
        date: ymd(2024, 3, 1),
        time: hm(18, 30),
        venue: "Chelsea Market",
        lat: 40.7421,
        lng: -74.0060,
        attendees: 45,
        max_attendees: 60,
        category: "Food",
    },
    SeedEvent {
        id: 24,
        title: "Spring Art Walk",
        description: "Guided tour of the city's best art galleries.",
        date: ymd(2024, 3, 5),
        time: hm(14, 0),
        venue: "Chelsea Galleries",
        lat: 40.7421,
        lng: -74.0060,
        attendees: 34,
        max_attendees: 50,
        category: "Arts",
    },
    SeedEvent {
        id: 25,
        title: "Tech Career Fair",
        description: "Connect with top tech companies and find your next opportunity.",
        date: ymd(2024, 3, 8),
        time: hm(10, 0),
        venue: "Brooklyn Expo Center",
        lat: 40.7182,
        lng: -73.9584,
        attendees: 189,
        max_attendees: 250,
        category: "Business",
    },
];

/// The sample events, in display order.
pub fn seed_events() -> Vec<Event> {
    SEED_EVENTS.iter().map(SeedEvent::to_event).collect()
}

/// The current user's responses at startup.
pub fn seed_rsvps() -> BTreeMap<i64, RsvpStatus> {
    BTreeMap::from([(1, RsvpStatus::Attending), (3, RsvpStatus::Interested)])
}
