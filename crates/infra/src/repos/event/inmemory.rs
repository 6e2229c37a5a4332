use super::IEventRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::{DateTime, Utc};
use flock_domain::{ChurchEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<ChurchEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &ChurchEvent) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn insert_many(&self, events: &[ChurchEvent]) -> anyhow::Result<()> {
        insert_many(events, &self.events);
        Ok(())
    }

    async fn save(&self, e: &ChurchEvent) -> anyhow::Result<()> {
        save(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<ChurchEvent> {
        find(event_id, &self.events)
    }

    async fn find_by_church(
        &self,
        church_id: &ID,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<ChurchEvent>> {
        let mut events = find_by(&self.events, |e| {
            e.church_id == *church_id && e.overlaps(start, end)
        });
        events.sort_by_key(|e| e.start_date);
        Ok(events)
    }

    async fn delete(&self, event_id: &ID) -> Option<ChurchEvent> {
        delete(event_id, &self.events)
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.events, |e| e.church_id == *church_id))
    }

    async fn remove_attendee(&self, member_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.events,
            |e| e.attendee_ids.contains(member_id),
            |e| e.attendee_ids.retain(|id| id != member_id),
        );
        Ok(())
    }

    async fn remove_team(&self, team_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.events,
            |e| e.team_ids.contains(team_id),
            |e| e.team_ids.retain(|id| id != team_id),
        );
        Ok(())
    }
}
