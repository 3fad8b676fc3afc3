pub mod client;
pub mod error;
pub mod events;
pub mod provider_api;
pub mod types;
pub mod webhook;


pub use client::ProviderClient;
pub use error::{ProviderError, Result as ProviderResult, WebhookError};
pub use events::{ParsedEvent, parse_event};
pub use provider_api::ProviderApi;
pub use types::{CreateInvitationParams, CreateOrganizationParams};
pub use webhook::{DEFAULT_TOLERANCE_SECS, WebhookVerifier};
