mod church;
pub mod date;
mod event;
mod member;
mod schedule;
mod service;
mod shared;
mod team;

pub use church::Church;
pub use event::{ChurchEvent, EventStatus};
pub use member::Member;
pub use schedule::{
    expand_schedules, validate_schedules, InvalidTimeOfDayError, ScheduleSlot, ServiceSchedule,
    ServiceScheduleError, TimeOfDay,
};
pub use service::Service;
pub use team::Team;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::{
    calculate_dates, Frequency, InvalidRecurrenceError, RecurrenceBounds, RecurrencePattern,
    RecurrenceRule, MAX_HORIZON_DAYS, MAX_RECURRENCE_COUNT,
};
pub use chrono_tz::Tz;
