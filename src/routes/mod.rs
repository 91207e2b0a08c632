mod health_check;
mod submit_contact_form;

// re-export
pub use health_check::*;
pub use submit_contact_form::*;

use crate::constant::{ROUTE_NAMESPACE, SUBMIT_CONTACT_FORM_PATH};
use actix_web::web;

/// Register every route of the service on the given registry.
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(
            web::scope(&format!("/{}", ROUTE_NAMESPACE)).route(
                &format!("/{}", SUBMIT_CONTACT_FORM_PATH),
                web::post().to(submit_contact_form),
            ),
        );
}
