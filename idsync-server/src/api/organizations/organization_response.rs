use crate::OrganizationDto;
use serde::Serialize;

/// Organization creation response
#[derive(Debug, Serialize)]
pub struct OrganizationResponse {
    pub organization: OrganizationDto,
}
