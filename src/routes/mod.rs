use actix_web::web::{scope, JsonConfig, ServiceConfig};
use actix_web::Scope;
use admin::{dashboard_overview, login, logout, session_status};
use donations::{create_checkout, get_donation_options};
use messages::{delete_message, get_messages, submit_message};
use projects::{
    create_project, delete_project, delete_project_image, get_project, get_projects,
    update_project, upload_project_images,
};
use settings::{get_site_logo, get_site_settings, update_site_settings, upload_image};
use volunteers::{delete_application, get_applications, submit_application};
mod admin;
mod donations;
mod health_check;
mod messages;
mod projects;
mod settings;
mod volunteers;

use crate::core::AppError;
use crate::routes::health_check::*;

// A donation request is a method and an amount.
const DONATION_JSON_LIMIT: usize = 1024;

fn util_routes() -> Scope {
    scope("")
        .service(health_check)
        .service(get_site_settings)
        .service(get_site_logo)
}

fn projects_routes() -> Scope {
    scope("projects")
        .service(get_projects)
        .service(get_project)
}

fn volunteers_routes() -> Scope {
    scope("volunteers").service(submit_application)
}

fn contact_routes() -> Scope {
    scope("contact").service(submit_message)
}

fn donations_routes() -> Scope {
    scope("donations")
        .app_data(
            JsonConfig::default()
                .limit(DONATION_JSON_LIMIT)
                .error_handler(|err, _| AppError::bad_request(err.to_string()).into()),
        )
        .service(get_donation_options)
        .service(create_checkout)
}

fn admin_projects_routes() -> Scope {
    scope("projects")
        .service(create_project)
        .service(update_project)
        .service(delete_project)
        .service(upload_project_images)
        .service(delete_project_image)
}

fn admin_routes() -> Scope {
    scope("admin")
        .service(login)
        .service(logout)
        .service(session_status)
        .service(dashboard_overview)
        .service(update_site_settings)
        .service(upload_image)
        .service(admin_projects_routes())
        // volunteer and message inboxes
        .service(get_applications)
        .service(delete_application)
        .service(get_messages)
        .service(delete_message)
}

pub fn xalima_routes(conf: &mut ServiceConfig) {
    conf.service(
        scope("api/v1")
            .service(admin_routes())
            .service(projects_routes())
            .service(volunteers_routes())
            .service(contact_routes())
            .service(donations_routes())
            .service(util_routes()),
    );
}
