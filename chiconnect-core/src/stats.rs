//! Home dashboard numbers.

use crate::connection::Connection;
use crate::constants::DASHBOARD_UPCOMING_LIMIT;
use crate::event::Event;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    /// Events attended or RSVP'd
    pub events_attended: usize,
    pub connections_made: usize,
    /// The first few RSVP'd events not yet attended
    pub upcoming_rsvps: Vec<Event>,
}

impl DashboardStats {
    pub fn compute(events: &[Event], connections: &[Connection]) -> Self {
        let events_attended = events
            .iter()
            .filter(|e| e.is_attended() || e.is_rsvped())
            .count();

        let upcoming_rsvps = events
            .iter()
            .filter(|e| e.is_rsvped() && !e.is_attended())
            .take(DASHBOARD_UPCOMING_LIMIT)
            .cloned()
            .collect();

        DashboardStats {
            events_attended,
            connections_made: connections.len(),
            upcoming_rsvps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RsvpStatus;
    use crate::seed::default_events;
    use chrono::NaiveDate;

    #[test]
    fn counts_and_caps_upcoming() {
        let mut events = default_events(NaiveDate::from_ymd_opt(2025, 9, 13).unwrap());
        for event in events.iter_mut().take(5) {
            event.rsvp_status = Some(RsvpStatus::Rsvp);
        }
        events[0].attended = Some(true);
        events[8].attended = Some(true);

        let stats = DashboardStats::compute(&events, &[]);
        assert_eq!(stats.events_attended, 6);
        assert_eq!(stats.connections_made, 0);

        let upcoming: Vec<_> = stats.upcoming_rsvps.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(upcoming, vec!["2", "3", "4"]);
    }
}
