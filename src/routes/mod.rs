use actix_web::web;

pub mod auth;
pub mod employee;
pub mod health;
pub mod manager;
pub mod team;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .service(auth::login::login)
                    .service(auth::validate::validate),
            )
            .service(
                web::scope("/managers")
                    .service(manager::create::create)
                    .service(manager::list::list)
                    .service(manager::get::get),
            )
            .service(
                web::scope("/employees")
                    .service(employee::create::create)
                    .service(employee::list::list)
                    .service(employee::get::get)
                    .service(employee::goal::update_goal),
            )
            .service(
                web::scope("/teams")
                    .service(team::create::create)
                    .service(team::list::list)
                    .service(team::get::get),
            ),
    );
}
