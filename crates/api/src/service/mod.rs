mod create_service;
mod create_service_events;
mod delete_service;
mod get_service;
mod update_service;

use actix_web::web;
use create_service::create_service_controller;
use create_service_events::create_service_events_controller;
use delete_service::delete_service_controller;
use get_service::get_service_controller;
use update_service::update_service_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/churches/{church_id}/services",
        web::post().to(create_service_controller),
    );
    cfg.route(
        "/services/{service_id}",
        web::get().to(get_service_controller),
    );
    cfg.route(
        "/services/{service_id}",
        web::put().to(update_service_controller),
    );
    cfg.route(
        "/services/{service_id}",
        web::delete().to(delete_service_controller),
    );
    cfg.route(
        "/services/{service_id}/events",
        web::post().to(create_service_events_controller),
    );
}
