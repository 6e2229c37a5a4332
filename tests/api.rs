mod helpers;

use chrono::NaiveDate;
use flock_sdk::{
    APIError, CreateChurchInput, CreateEventInput, CreateMemberInput,
    CreateRecurringEventsInput, CreateServiceEventsInput, CreateServiceInput, CreateTeamInput,
    EventStatus, Frequency, GetChurchEventsInput, RecurrenceInputDTO, UpdateChurchInput,
};
use helpers::setup::spawn_app;
use helpers::utils::{create_church, schedule, utc};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_requires_valid_token() {
    let (app, _) = spawn_app().await;

    let sdk = app.sdk("not-a-jwt".into());
    let res = sdk.church.get(Default::default()).await;
    assert_eq!(res.unwrap_err(), APIError::Unauthorized);
}

#[actix_web::main]
#[test]
async fn test_read_only_token_cannot_write() {
    let (app, sdk) = spawn_app().await;
    let church = create_church(&sdk).await;

    let reader = app.sdk(app.read_only_token());
    assert!(reader.church.get(church.id.clone()).await.is_ok());
    let res = reader
        .church
        .create(CreateChurchInput {
            name: "Other".into(),
            address: None,
            timezone: None,
        })
        .await;
    assert_eq!(res.unwrap_err(), APIError::Unauthorized);
}

#[actix_web::main]
#[test]
async fn test_crud_church() {
    let (_, sdk) = spawn_app().await;
    let church = create_church(&sdk).await;

    let res = sdk
        .church
        .update(UpdateChurchInput {
            church_id: church.id.clone(),
            name: None,
            address: Some("Church street 1".into()),
            timezone: Some(chrono_tz::Europe::Oslo),
        })
        .await
        .expect("Expected to update church");
    assert_eq!(res.church.address, Some("Church street 1".into()));
    assert_eq!(res.church.timezone, chrono_tz::Europe::Oslo);

    assert!(sdk.church.delete(church.id.clone()).await.is_ok());
    assert_eq!(
        sdk.church.get(church.id).await.unwrap_err(),
        APIError::NotFound
    );
}

#[actix_web::main]
#[test]
async fn test_team_members() {
    let (_, sdk) = spawn_app().await;
    let church = create_church(&sdk).await;

    let member = sdk
        .member
        .create(CreateMemberInput {
            church_id: church.id.clone(),
            first_name: "Miriam".into(),
            last_name: "Levi".into(),
            email: None,
            phone: None,
        })
        .await
        .expect("Expected to create member")
        .member;
    let team = sdk
        .team
        .create(CreateTeamInput {
            church_id: church.id.clone(),
            name: "Worship".into(),
            description: None,
        })
        .await
        .expect("Expected to create team")
        .team;

    let res = sdk
        .team
        .add_member(team.id.clone(), member.id.clone())
        .await
        .expect("Expected to add member");
    assert_eq!(res.team.member_ids, vec![member.id.clone()]);
    assert_eq!(
        sdk.team
            .add_member(team.id.clone(), member.id.clone())
            .await
            .unwrap_err(),
        APIError::Conflict
    );

    assert!(sdk.member.delete(member.id.clone()).await.is_ok());
    let team = sdk.team.get(team.id).await.expect("Expected team").team;
    assert!(team.member_ids.is_empty());
    let members = sdk
        .member
        .get_by_church(church.id)
        .await
        .expect("Expected members");
    assert!(members.members.is_empty());
}

#[actix_web::main]
#[test]
async fn test_create_recurring_events() {
    let (_, sdk) = spawn_app().await;
    let church = create_church(&sdk).await;

    let template = sdk
        .event
        .create(CreateEventInput {
            church_id: church.id.clone(),
            title: "Bible study".into(),
            description: None,
            location: Some("Room 2".into()),
            tags: None,
            start_date: utc(2024, 1, 1, 18, 0),
            end_date: utc(2024, 1, 1, 19, 30),
            status: Some(EventStatus::Published),
            attendee_ids: None,
            team_ids: None,
        })
        .await
        .expect("Expected to create event")
        .event;

    let res = sdk
        .event
        .create_recurring(CreateRecurringEventsInput {
            event_id: template.id.clone(),
            recurrence: RecurrenceInputDTO {
                frequency: Some(Frequency::Custom),
                days_of_week: Some(vec![1, 3, 5]),
                count: Some(5),
                ..Default::default()
            },
            start_date: utc(2024, 1, 1, 18, 0),
            end_date: None,
        })
        .await
        .expect("Expected to create recurring events");

    let starts = res.events.iter().map(|e| e.start_date).collect::<Vec<_>>();
    assert_eq!(
        starts,
        vec![
            utc(2024, 1, 1, 18, 0),
            utc(2024, 1, 3, 18, 0),
            utc(2024, 1, 5, 18, 0),
            utc(2024, 1, 8, 18, 0),
            utc(2024, 1, 10, 18, 0),
        ]
    );
    assert_eq!(res.events[0].end_date, utc(2024, 1, 1, 19, 30));

    let template = sdk
        .event
        .get(template.id)
        .await
        .expect("Expected template")
        .event;
    assert_eq!(
        template.recurrence.map(|r| r.frequency),
        Some(Frequency::Custom)
    );

    let events = sdk
        .event
        .get_by_church(GetChurchEventsInput {
            church_id: church.id,
            start_date: Some(utc(2024, 1, 2, 0, 0)),
            end_date: Some(utc(2024, 1, 6, 0, 0)),
        })
        .await
        .expect("Expected events")
        .events;
    assert_eq!(events.len(), 2);
    for event in events {
        assert_eq!(event.parent_event_id, Some(template.id.clone()));
        assert_eq!(event.location, Some("Room 2".into()));
    }
}

#[actix_web::main]
#[test]
async fn test_recurring_events_require_frequency() {
    let (_, sdk) = spawn_app().await;
    let church = create_church(&sdk).await;
    let template = sdk
        .event
        .create(CreateEventInput {
            church_id: church.id,
            title: "Prayer".into(),
            description: None,
            location: None,
            tags: None,
            start_date: utc(2024, 1, 1, 7, 0),
            end_date: utc(2024, 1, 1, 8, 0),
            status: None,
            attendee_ids: None,
            team_ids: None,
        })
        .await
        .expect("Expected to create event")
        .event;

    let res = sdk
        .event
        .create_recurring(CreateRecurringEventsInput {
            event_id: template.id,
            recurrence: RecurrenceInputDTO::default(),
            start_date: utc(2024, 1, 1, 7, 0),
            end_date: None,
        })
        .await;
    assert_eq!(res.unwrap_err(), APIError::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_create_service_events() {
    let (_, sdk) = spawn_app().await;
    let church = create_church(&sdk).await;

    let service = sdk
        .service
        .create(CreateServiceInput {
            church_id: church.id.clone(),
            name: "Sunday worship".into(),
            description: None,
            location: Some("Main hall".into()),
            tags: None,
            timezone: Some(chrono_tz::Europe::Oslo),
            schedules: Some(vec![
                schedule(0, "09:00", "10:30"),
                schedule(0, "11:00", "12:30"),
            ]),
        })
        .await
        .expect("Expected to create service")
        .service;

    let res = sdk
        .service
        .create_events(CreateServiceEventsInput {
            service_id: service.id.clone(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("Expected date"),
            end_date: None,
            occurrences: Some(2),
        })
        .await
        .expect("Expected to create service events");

    assert_eq!(res.count, 4);
    // Oslo is UTC+1 in January
    assert_eq!(res.events[0].start_date, utc(2024, 1, 7, 8, 0));
    assert_eq!(res.events[3].start_date, utc(2024, 1, 14, 10, 0));
    assert_eq!(res.events[0].title, "Sunday worship");

    let duplicate = sdk
        .service
        .create(CreateServiceInput {
            church_id: church.id,
            name: "Broken".into(),
            description: None,
            location: None,
            tags: None,
            timezone: None,
            schedules: Some(vec![
                schedule(0, "09:00", "10:30"),
                schedule(0, "09:00", "11:00"),
            ]),
        })
        .await;
    assert_eq!(duplicate.unwrap_err(), APIError::BadClientData);
}
