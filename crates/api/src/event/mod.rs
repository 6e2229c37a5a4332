mod create_event;
mod create_recurring_events;
mod delete_event;
mod get_church_events;
mod get_event;
mod update_event;

use actix_web::web;
use create_event::create_event_controller;
use create_recurring_events::create_recurring_events_controller;
use delete_event::delete_event_controller;
use get_church_events::get_church_events_controller;
use get_event::get_event_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/churches/{church_id}/events",
        web::post().to(create_event_controller),
    );
    cfg.route(
        "/churches/{church_id}/events",
        web::get().to(get_church_events_controller),
    );
    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route("/events/{event_id}", web::put().to(update_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_controller),
    );
    cfg.route(
        "/events/{event_id}/recurring",
        web::post().to(create_recurring_events_controller),
    );
}
