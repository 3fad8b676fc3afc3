pub mod member_dto;
pub mod member_list_query;
pub mod member_list_response;
pub mod member_response;
pub mod members;
pub mod removal_response;
pub mod remove_member_request;
pub mod transfer_owner_request;
pub mod transfer_owner_response;
pub mod update_role_request;
