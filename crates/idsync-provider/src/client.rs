use crate::error::{ProviderError, Result as ProviderResult};
use crate::provider_api::ProviderApi;
use crate::types::{
    CreateInvitationParams, CreateOrganizationParams, InvitationObject, ListEnvelope,
    MembershipObject, OrganizationObject, UserObject,
};

use idsync_core::{Identity, OrgInvitation, OrgMembership, Organization};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the identity provider's backend API
///
/// Every request carries the backend secret key as a bearer token and is
/// bounded by the configured timeout.
pub struct ProviderClient {
    base_url: String,
    secret_key: String,
    client: ReqwestClient,
}

impl ProviderClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Provider API root (e.g., "https://api.example-idp.com")
    /// * `secret_key` - Backend secret key for bearer authentication
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, secret_key: &str, timeout: Duration) -> ProviderResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.secret_key)
    }

    /// Execute a request and decode the response, mapping provider error
    /// bodies onto [`ProviderError`]. `resource` names what a 404 means.
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        resource: &str,
    ) -> ProviderResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::not_found(resource));
        }

        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(ProviderError::api(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(ProviderError::from_reqwest)
    }

    /// Pull a human-readable message out of the provider's error body:
    /// `{"errors": [{"message": ...}]}`, with fallbacks for other shapes.
    async fn error_message(response: reqwest::Response) -> String {
        let Ok(body) = response.json::<Value>().await else {
            return "Unknown error".to_string();
        };

        body.get("errors")
            .and_then(|errors| errors.get(0))
            .and_then(|error| error.get("message"))
            .or_else(|| body.get("message"))
            .and_then(|message| message.as_str())
            .unwrap_or("Unknown error")
            .to_string()
    }
}

#[async_trait]
impl ProviderApi for ProviderClient {
    async fn fetch_user(&self, user_id: &str) -> ProviderResult<Identity> {
        let req = self.request(Method::GET, &format!("/v1/users/{}", user_id));
        let user: UserObject = self.execute(req, "user").await?;
        Ok(Identity::from(user))
    }

    async fn create_organization(
        &self,
        params: CreateOrganizationParams,
    ) -> ProviderResult<Organization> {
        let req = self.request(Method::POST, "/v1/organizations").json(&params);
        let org: OrganizationObject = self.execute(req, "organization").await?;
        Ok(Organization::from(org))
    }

    async fn list_memberships(
        &self,
        organization_id: &str,
        limit: u32,
    ) -> ProviderResult<Vec<OrgMembership>> {
        let req = self
            .request(
                Method::GET,
                &format!("/v1/organizations/{}/memberships", organization_id),
            )
            .query(&[("limit", limit)]);
        let envelope: ListEnvelope<MembershipObject> = self.execute(req, "organization").await?;

        Ok(envelope.data.into_iter().map(OrgMembership::from).collect())
    }

    async fn create_invitation(
        &self,
        organization_id: &str,
        params: CreateInvitationParams,
    ) -> ProviderResult<OrgInvitation> {
        let req = self
            .request(
                Method::POST,
                &format!("/v1/organizations/{}/invitations", organization_id),
            )
            .json(&params);
        let invitation: InvitationObject = self.execute(req, "organization").await?;
        Ok(OrgInvitation::from(invitation))
    }

    async fn update_membership_role(
        &self,
        organization_id: &str,
        membership_id: &str,
        role: &str,
    ) -> ProviderResult<OrgMembership> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            role: &'a str,
        }

        let req = self
            .request(
                Method::PATCH,
                &format!(
                    "/v1/organizations/{}/memberships/{}",
                    organization_id, membership_id
                ),
            )
            .json(&UpdateRequest { role });
        let membership: MembershipObject = self.execute(req, "membership").await?;
        Ok(OrgMembership::from(membership))
    }

    async fn delete_membership(
        &self,
        organization_id: &str,
        membership_id: &str,
    ) -> ProviderResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!(
                "/v1/organizations/{}/memberships/{}",
                organization_id, membership_id
            ),
        );
        // The provider echoes the deleted object; we only need success
        let _: Value = self.execute(req, "membership").await?;
        Ok(())
    }
}
