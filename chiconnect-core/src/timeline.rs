//! The user's personal event timeline.

use chrono::NaiveDate;

use crate::event::Event;

/// Events the user committed to, split around today.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    /// RSVP'd and not yet attended, dated today or later
    pub upcoming: Vec<Event>,
    /// Attended, or RSVP'd with a date before today
    pub past: Vec<Event>,
}

impl Timeline {
    /// Build the timeline from the full event list.
    ///
    /// Only events with an `rsvp` status or an `attended` flag appear. ISO
    /// dates compare correctly as strings, so no parsing is needed.
    pub fn build(events: &[Event], today: NaiveDate) -> Self {
        let today = today.format("%Y-%m-%d").to_string();

        let (past, upcoming): (Vec<Event>, Vec<Event>) = events
            .iter()
            .filter(|e| e.is_rsvped() || e.is_attended())
            .cloned()
            .partition(|e| e.is_attended() || e.date.as_str() < today.as_str());

        Timeline { upcoming, past }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RsvpStatus;
    use crate::seed::default_events;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 13).unwrap()
    }

    #[test]
    fn untouched_seed_gives_empty_timeline() {
        let timeline = Timeline::build(&default_events(today()), today());
        assert!(timeline.is_empty());
    }

    #[test]
    fn splits_upcoming_and_past() {
        let mut events = default_events(today());
        // "1" is today, RSVP'd -> upcoming
        events[0].rsvp_status = Some(RsvpStatus::Rsvp);
        // "2" is tomorrow but attended -> past
        events[1].rsvp_status = Some(RsvpStatus::Rsvp);
        events[1].attended = Some(true);
        // "3" only interested -> not on the timeline
        events[2].rsvp_status = Some(RsvpStatus::Interested);
        // "4" attended without an RSVP -> past
        events[3].attended = Some(true);
        // "5" RSVP'd but dated yesterday -> past
        events[4].rsvp_status = Some(RsvpStatus::Rsvp);
        events[4].date = "2025-09-12".to_string();

        let timeline = Timeline::build(&events, today());
        let upcoming: Vec<_> = timeline.upcoming.iter().map(|e| e.id.as_str()).collect();
        let past: Vec<_> = timeline.past.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(upcoming, vec!["1"]);
        assert_eq!(past, vec!["2", "4", "5"]);
        assert_eq!(timeline.len(), 4);
    }
}
