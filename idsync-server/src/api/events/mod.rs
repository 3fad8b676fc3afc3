pub mod event_ack_response;
pub mod events;
