//! Default events used when nothing is stored yet.

use chrono::{Days, NaiveDate};

use crate::event::Event;

/// Id of the summit event the onboarding demo RSVPs to.
pub const SUMMIT_EVENT_ID: &str = "chi-tech-summit";

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    location: &'static str,
    days_from_today: u64,
    time: &'static str,
    image: &'static str,
    badges: &'static [&'static str],
    host: Option<&'static str>,
    category: Option<&'static str>,
}

const SEEDS: [Seed; 12] = [
    Seed {
        id: "1",
        title: "Tech Networking Mixer",
        description: "Connect with Chicago's tech community over drinks and appetizers.",
        location: "Downtown Chicago",
        days_from_today: 0,
        time: "6:00 PM",
        image: "assets/tech-networking.jpg",
        badges: &["Community Verified", "Black-Owned Venue"],
        host: None,
        category: Some("Networking"),
    },
    Seed {
        id: "2",
        title: "Startup Pitch Night",
        description: "Watch local entrepreneurs pitch their ideas to investors.",
        location: "Innovation Hub",
        days_from_today: 1,
        time: "7:30 PM",
        image: "assets/startup-pitch.jpg",
        badges: &["Community Verified"],
        host: None,
        category: Some("Startups"),
    },
    Seed {
        id: "3",
        title: "Women in Business Brunch",
        description: "Empowering conversations and networking for professional women.",
        location: "River North",
        days_from_today: 2,
        time: "11:00 AM",
        image: "assets/women-brunch.jpg",
        badges: &["Community Verified", "Women-Led"],
        host: None,
        category: Some("Networking"),
    },
    Seed {
        id: "4",
        title: "Design Thinking Workshop",
        description: "Learn design thinking methodologies through hands-on exercises.",
        location: "Creative Space",
        days_from_today: 3,
        time: "2:00 PM",
        image: "assets/design-workshop.jpg",
        badges: &["Workshop", "Community Verified"],
        host: None,
        category: Some("Design"),
    },
    Seed {
        id: "5",
        title: "Data Science Meetup",
        description: "Lightning talks on applied machine learning from Chicago practitioners.",
        location: "West Loop",
        days_from_today: 4,
        time: "6:30 PM",
        image: "assets/tech-networking.jpg",
        badges: &["Community Verified"],
        host: None,
        category: Some("Tech"),
    },
    Seed {
        id: "6",
        title: "Founders Coffee Hour",
        description: "An informal morning for early-stage founders to trade notes.",
        location: "Wicker Park",
        days_from_today: 5,
        time: "8:30 AM",
        image: "assets/startup-pitch.jpg",
        badges: &["Black-Owned Venue"],
        host: None,
        category: Some("Startups"),
    },
    Seed {
        id: "7",
        title: "Product Management Roundtable",
        description: "Small-group discussion on roadmaps, discovery and shipping.",
        location: "The Loop",
        days_from_today: 6,
        time: "5:30 PM",
        image: "assets/design-workshop.jpg",
        badges: &["Community Verified"],
        host: None,
        category: Some("Product"),
    },
    Seed {
        id: "8",
        title: "Creatives of Color Showcase",
        description: "Portfolio reviews and a gallery walk featuring local artists and designers.",
        location: "Bronzeville",
        days_from_today: 7,
        time: "4:00 PM",
        image: "assets/women-brunch.jpg",
        badges: &["Community Verified", "Black-Owned Venue"],
        host: None,
        category: Some("Design"),
    },
    Seed {
        id: "9",
        title: "Career Switchers Night",
        description: "Hear from people who moved into tech from other fields.",
        location: "Hyde Park",
        days_from_today: 9,
        time: "6:00 PM",
        image: "assets/tech-networking.jpg",
        badges: &["Workshop"],
        host: None,
        category: Some("Careers"),
    },
    Seed {
        id: "10",
        title: "Fintech Fireside Chat",
        description: "Industry leaders on the future of payments and inclusive banking.",
        location: "Financial District",
        days_from_today: 11,
        time: "12:00 PM",
        image: "assets/startup-pitch.jpg",
        badges: &["Community Verified"],
        host: None,
        category: Some("Finance"),
    },
    Seed {
        id: "11",
        title: "Open Source Hack Night",
        description: "Bring a laptop and contribute to community projects with mentors on hand.",
        location: "Logan Square",
        days_from_today: 13,
        time: "7:00 PM",
        image: "assets/design-workshop.jpg",
        badges: &["Workshop", "Community Verified"],
        host: None,
        category: Some("Tech"),
    },
    Seed {
        id: SUMMIT_EVENT_ID,
        title: "Chi-Tech Collective Black CS Summit",
        description: "Join Chicago's premier Black computer science summit featuring keynote speakers, technical workshops, career panels, and networking opportunities.",
        location: "UIC Forum, Chicago",
        days_from_today: 14,
        time: "10:00 AM CT",
        image: "assets/chi-tech-summit.jpg",
        badges: &["Community Verified", "Black-centered"],
        host: Some("Chi-Tech Collective"),
        category: Some("Conference"),
    },
];

/// The fixed default event list, dated relative to `today`.
///
/// Calling this twice with the same date yields equal lists.
pub fn default_events(today: NaiveDate) -> Vec<Event> {
    SEEDS
        .iter()
        .map(|seed| {
            let date = today
                .checked_add_days(Days::new(seed.days_from_today))
                .unwrap_or(today);

            Event {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                location: seed.location.to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                time: seed.time.to_string(),
                image: seed.image.to_string(),
                badges: seed.badges.iter().map(|b| b.to_string()).collect(),
                rsvp_status: None,
                attended: None,
                host: seed.host.map(String::from),
                category: seed.category.map(String::from),
            }
        })
        .collect()
}
