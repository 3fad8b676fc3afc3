pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod resolver;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use resolver::{AuthorizationResolver, MEMBERSHIP_PAGE_SIZE};
