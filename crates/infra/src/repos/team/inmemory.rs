use super::ITeamRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use flock_domain::{Team, ID};

pub struct InMemoryTeamRepo {
    teams: std::sync::Mutex<Vec<Team>>,
}

impl InMemoryTeamRepo {
    pub fn new() -> Self {
        Self {
            teams: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITeamRepo for InMemoryTeamRepo {
    async fn insert(&self, team: &Team) -> anyhow::Result<()> {
        insert(team, &self.teams);
        Ok(())
    }

    async fn save(&self, team: &Team) -> anyhow::Result<()> {
        save(team, &self.teams);
        Ok(())
    }

    async fn find(&self, team_id: &ID) -> Option<Team> {
        find(team_id, &self.teams)
    }

    async fn find_by_church(&self, church_id: &ID) -> anyhow::Result<Vec<Team>> {
        Ok(find_by(&self.teams, |t| t.church_id == *church_id))
    }

    async fn delete(&self, team_id: &ID) -> Option<Team> {
        delete(team_id, &self.teams)
    }

    async fn delete_by_church(&self, church_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.teams, |t| t.church_id == *church_id))
    }

    async fn remove_member(&self, member_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.teams,
            |t| t.member_ids.contains(member_id),
            |t| {
                t.remove_member(member_id);
            },
        );
        Ok(())
    }
}
