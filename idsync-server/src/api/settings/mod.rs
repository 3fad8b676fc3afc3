pub mod settings;
pub mod settings_bundle_response;
pub mod settings_query;
pub mod update_settings_request;
