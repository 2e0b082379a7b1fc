pub mod form;
pub mod health;
pub mod page;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(page::config).service(
        web::scope("/api/v1")
            .configure(health::config)
            .configure(form::config)
    );
}
