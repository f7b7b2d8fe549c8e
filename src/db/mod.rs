//! Typed repositories over the key-value store. Key names stay private to
//! this module.

pub mod admin;
pub mod messages;
pub mod projects;
pub mod seed;
pub mod settings;
pub mod volunteers;

const SITE_SETTINGS_KEY: &str = "site-settings";
const PROJECTS_KEY: &str = "admin-projects";
const VOLUNTEERS_KEY: &str = "volunteer-applications";
const MESSAGES_KEY: &str = "contact-messages";
const ADMIN_PASSWORD_KEY: &str = "admin-password";
const ADMIN_LOGGED_IN_KEY: &str = "admin-logged-in";
const DATA_INITIALIZED_KEY: &str = "data-initialized";
