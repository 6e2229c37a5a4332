mod base;
mod church;
mod event;
mod member;
mod service;
mod status;
mod team;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use church::ChurchClient;
pub use church::{CreateChurchInput, UpdateChurchInput};
use event::ChurchEventClient;
pub use event::{
    CreateEventInput, CreateRecurringEventsInput, GetChurchEventsInput, UpdateEventInput,
};
pub use flock_api_structs::dtos::*;
pub use flock_domain::{EventStatus, Frequency, ServiceSchedule, TimeOfDay, Tz, ID};
use member::MemberClient;
pub use member::CreateMemberInput;
use service::ServiceClient;
pub use service::{CreateServiceEventsInput, CreateServiceInput, UpdateServiceInput};
use status::StatusClient;
use std::sync::Arc;
use team::TeamClient;
pub use team::CreateTeamInput;

// Domain
pub use flock_api_structs::dtos::ChurchDTO as Church;
pub use flock_api_structs::dtos::ChurchEventDTO as ChurchEvent;
pub use flock_api_structs::dtos::MemberDTO as Member;
pub use flock_api_structs::dtos::ServiceDTO as Service;
pub use flock_api_structs::dtos::TeamDTO as Team;

/// Flock Server SDK
///
/// The SDK contains methods for interacting with the Flock server
/// API.
#[derive(Clone)]
pub struct FlockSDK {
    pub church: ChurchClient,
    pub event: ChurchEventClient,
    pub member: MemberClient,
    pub service: ServiceClient,
    pub status: StatusClient,
    pub team: TeamClient,
}

impl FlockSDK {
    /// `token` is the JWT sent as a bearer token with every request
    pub fn new<T: Into<String>>(address: String, token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_token(token.into());
        let base = Arc::new(base);
        let church = ChurchClient::new(base.clone());
        let event = ChurchEventClient::new(base.clone());
        let member = MemberClient::new(base.clone());
        let service = ServiceClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let team = TeamClient::new(base);

        Self {
            church,
            event,
            member,
            service,
            status,
            team,
        }
    }
}
