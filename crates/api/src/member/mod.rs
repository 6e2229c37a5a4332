mod create_member;
mod delete_member;
mod get_church_members;
mod get_member;

use actix_web::web;
use create_member::create_member_controller;
use delete_member::delete_member_controller;
use get_church_members::get_church_members_controller;
use get_member::get_member_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/churches/{church_id}/members",
        web::post().to(create_member_controller),
    );
    cfg.route(
        "/churches/{church_id}/members",
        web::get().to(get_church_members_controller),
    );
    cfg.route("/members/{member_id}", web::get().to(get_member_controller));
    cfg.route(
        "/members/{member_id}",
        web::delete().to(delete_member_controller),
    );
}
