pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::check_session)
        .service(auth::get_username)
        .service(auth::login)
        .service(auth::signup)
        .service(auth::logout)
        .service(tasks::get_tasks)
        .service(tasks::create_task)
        .service(tasks::update_task)
        .service(tasks::delete_task)
        .service(tasks::get_task);
}
