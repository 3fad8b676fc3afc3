use idsync_core::{Identity, OrgInvitation, OrgMembership, Organization};

use serde::{Deserialize, Serialize};

/// A user as the provider's API serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct UserObject {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddressObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailAddressObject {
    pub email_address: String,
}

impl From<UserObject> for Identity {
    fn from(user: UserObject) -> Self {
        // The provider lists the primary address first
        let email = user
            .email_addresses
            .into_iter()
            .next()
            .map(|e| e.email_address);

        Identity {
            external_id: user.id,
            email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar_url: user.image_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationObject {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl From<OrganizationObject> for Organization {
    fn from(org: OrganizationObject) -> Self {
        Organization {
            id: org.id,
            name: org.name,
            slug: org.slug,
            created_by: org.created_by,
        }
    }
}

/// Membership rows come back nested: the organization and the member's
/// user data are sub-objects, flattened here into [`OrgMembership`].
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipObject {
    pub id: String,
    pub role: String,
    pub organization: OrganizationRef,
    pub public_user_data: PublicUserData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublicUserData {
    pub user_id: String,
}

impl From<MembershipObject> for OrgMembership {
    fn from(membership: MembershipObject) -> Self {
        OrgMembership {
            id: membership.id,
            organization_id: membership.organization.id,
            user_id: membership.public_user_data.user_id,
            role: membership.role,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvitationObject {
    pub id: String,
    pub organization_id: String,
    pub email_address: String,
    pub role: String,
    pub status: String,
}

impl From<InvitationObject> for OrgInvitation {
    fn from(invitation: InvitationObject) -> Self {
        OrgInvitation {
            id: invitation.id,
            organization_id: invitation.organization_id,
            email: invitation.email_address,
            role: invitation.role,
            status: invitation.status,
        }
    }
}

/// Paged collection envelope used by the provider's list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganizationParams {
    pub name: String,
    pub slug: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateInvitationParams {
    pub email_address: String,
    pub role: String,
    pub inviter_user_id: String,
}
