mod create_church;
mod delete_church;
mod get_church;
mod update_church;

use actix_web::web;
use create_church::create_church_controller;
use delete_church::delete_church_controller;
use get_church::get_church_controller;
use update_church::update_church_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/churches", web::post().to(create_church_controller));
    cfg.route("/churches/{church_id}", web::get().to(get_church_controller));
    cfg.route("/churches/{church_id}", web::put().to(update_church_controller));
    cfg.route(
        "/churches/{church_id}",
        web::delete().to(delete_church_controller),
    );
}
