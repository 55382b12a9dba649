//! Authentication: password hashing, bearer tokens and the request
//! extractors that enforce them.

#[cfg(feature = "server")]
mod extract;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod token;

#[cfg(feature = "server")]
pub use extract::{bearer_token, AdminUser, CurrentUser};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password, PasswordError};
#[cfg(feature = "server")]
pub use token::{Claims, TokenError, TokenIssuer};
