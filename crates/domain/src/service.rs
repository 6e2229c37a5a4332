use crate::{
    event::{ChurchEvent, EventStatus},
    schedule::{expand_schedules, validate_schedules, ServiceSchedule, ServiceScheduleError},
    shared::{
        entity::{Entity, ID},
        recurrence::RecurrenceBounds,
    },
};
use chrono::NaiveDate;
use chrono_tz::Tz;

/// A recurring church service, e.g. Sunday worship, used as the template for
/// the `ChurchEvent`s generated from its schedules.
#[derive(Debug, Clone)]
pub struct Service {
    pub id: ID,
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    /// Timezone the schedule times are written in
    pub timezone: Tz,
    schedules: Vec<ServiceSchedule>,
    pub created: i64,
    pub updated: i64,
}

impl Service {
    pub fn new(church_id: ID, name: String, timezone: Tz, created: i64) -> Self {
        Self {
            id: Default::default(),
            church_id,
            name,
            description: None,
            location: None,
            tags: Vec::new(),
            timezone,
            schedules: Vec::new(),
            created,
            updated: created,
        }
    }

    pub fn schedules(&self) -> &[ServiceSchedule] {
        &self.schedules
    }

    /// Replaces the schedules, rejecting sets where two active schedules
    /// start on the same day and time.
    pub fn set_schedules(
        &mut self,
        schedules: Vec<ServiceSchedule>,
    ) -> Result<(), ServiceScheduleError> {
        validate_schedules(&schedules)?;
        self.schedules = schedules;
        Ok(())
    }

    /// Builds the events this service has in the given window. See
    /// `expand_schedules` for how the window and `max_occurrences` apply.
    pub fn generate_events(
        &self,
        window_start: NaiveDate,
        window_end: Option<NaiveDate>,
        max_occurrences: Option<usize>,
        bounds: &RecurrenceBounds,
        created: i64,
    ) -> Vec<ChurchEvent> {
        expand_schedules(
            &self.schedules,
            &self.timezone,
            window_start,
            window_end,
            max_occurrences,
            bounds,
        )
        .into_iter()
        .map(|slot| {
            let title = slot.name.unwrap_or_else(|| self.name.clone());
            let mut event =
                ChurchEvent::new(self.church_id.clone(), title, slot.start, slot.end, created);
            event.description = self.description.clone();
            event.location = self.location.clone();
            event.tags = self.tags.clone();
            event.status = EventStatus::Published;
            event.service_id = Some(self.id.clone());
            event
        })
        .collect()
    }
}

impl Entity for Service {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schedule::TimeOfDay;
    use chrono::prelude::*;
    use chrono_tz::UTC;

    fn schedule(day_of_week: u32, start: &str, end: &str) -> ServiceSchedule {
        ServiceSchedule::new(
            day_of_week,
            start.parse::<TimeOfDay>().unwrap(),
            end.parse::<TimeOfDay>().unwrap(),
        )
    }

    fn service() -> Service {
        let mut service = Service::new(ID::new(), "Sunday worship".into(), UTC, 0);
        service.location = Some("Main hall".into());
        service.tags = vec!["worship".into()];
        service.description = Some("Weekly gathering".into());
        service
    }

    #[test]
    fn generated_events_copy_the_service() {
        let mut service = service();
        let mut evening = schedule(0, "18:00", "19:00");
        evening.name = Some("Evening worship".into());
        service
            .set_schedules(vec![schedule(0, "09:00", "10:00"), evening])
            .unwrap();

        let events = service.generate_events(
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()),
            Some(1),
            &RecurrenceBounds::default(),
            42,
        );

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Sunday worship");
        assert_eq!(events[1].title, "Evening worship");
        for event in &events {
            assert_eq!(event.church_id, service.church_id);
            assert_eq!(event.service_id, Some(service.id.clone()));
            assert_eq!(event.location, service.location);
            assert_eq!(event.description, service.description);
            assert_eq!(event.tags, service.tags);
            assert_eq!(event.status, EventStatus::Published);
            assert!(event.attendee_ids.is_empty());
            assert!(event.team_ids.is_empty());
            assert!(event.parent_event_id.is_none());
            assert_eq!(event.created, 42);
        }
        assert_eq!(
            events[0].start_date,
            Utc.with_ymd_and_hms(2024, 1, 7, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_schedules_and_keeps_old_ones() {
        let mut service = service();
        service
            .set_schedules(vec![schedule(0, "09:00", "10:00")])
            .unwrap();
        let res = service.set_schedules(vec![
            schedule(3, "19:00", "20:00"),
            schedule(3, "19:00", "21:00"),
        ]);
        assert!(res.is_err());
        assert_eq!(service.schedules().len(), 1);
        assert_eq!(service.schedules()[0].day_of_week, 0);
    }

    #[test]
    fn service_without_schedules_generates_nothing() {
        let events = service().generate_events(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            None,
            None,
            &RecurrenceBounds::default(),
            0,
        );
        assert!(events.is_empty());
    }
}
