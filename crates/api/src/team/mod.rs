mod add_team_member;
mod create_team;
mod delete_team;
mod get_team;
mod remove_team_member;

use actix_web::web;
use add_team_member::add_team_member_controller;
use create_team::create_team_controller;
use delete_team::delete_team_controller;
use get_team::get_team_controller;
use remove_team_member::remove_team_member_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/churches/{church_id}/teams",
        web::post().to(create_team_controller),
    );
    cfg.route("/teams/{team_id}", web::get().to(get_team_controller));
    cfg.route("/teams/{team_id}", web::delete().to(delete_team_controller));
    cfg.route(
        "/teams/{team_id}/members/{member_id}",
        web::put().to(add_team_member_controller),
    );
    cfg.route(
        "/teams/{team_id}/members/{member_id}",
        web::delete().to(remove_team_member_controller),
    );
}
