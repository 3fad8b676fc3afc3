pub mod profile_response;
pub mod sync;
pub mod sync_user_request;
