use crate::InvitationDto;
use serde::Serialize;

/// Invitation creation response
#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub invitation: InvitationDto,
}
