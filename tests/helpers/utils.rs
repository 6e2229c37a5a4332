use chrono::{DateTime, TimeZone, Utc};
use flock_sdk::{Church, CreateChurchInput, FlockSDK, ServiceSchedule, TimeOfDay};

pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("Expected a valid date")
}

pub fn schedule(day_of_week: u32, start: &str, end: &str) -> ServiceSchedule {
    ServiceSchedule::new(
        day_of_week,
        start.parse::<TimeOfDay>().expect("Expected a valid time"),
        end.parse::<TimeOfDay>().expect("Expected a valid time"),
    )
}

pub async fn create_church(sdk: &FlockSDK) -> Church {
    sdk.church
        .create(CreateChurchInput {
            name: "Grace Chapel".into(),
            address: None,
            timezone: None,
        })
        .await
        .expect("Expected to create church")
        .church
}
