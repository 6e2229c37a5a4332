use flock_domain::{Service, ServiceSchedule, Tz, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDTO {
    pub id: ID,
    pub church_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub timezone: Tz,
    pub schedules: Vec<ServiceSchedule>,
    pub created: i64,
    pub updated: i64,
}

impl ServiceDTO {
    pub fn new(service: Service) -> Self {
        Self {
            schedules: service.schedules().to_vec(),
            id: service.id,
            church_id: service.church_id,
            name: service.name,
            description: service.description,
            location: service.location,
            tags: service.tags,
            timezone: service.timezone,
            created: service.created,
            updated: service.updated,
        }
    }
}
