use crate::MemberDto;
use serde::Serialize;

/// Membership list response
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberDto>,
}
