pub mod invitation_dto;
pub mod invitation_response;
pub mod invitations;
pub mod invite_user_request;
