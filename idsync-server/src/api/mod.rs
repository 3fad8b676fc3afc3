pub mod error;
pub mod events;
pub mod extractors;
pub mod invitations;
pub mod members;
pub mod organizations;
pub mod profile_dto;
pub mod resolve;
pub mod settings;
pub mod sync;
