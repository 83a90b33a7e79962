pub mod credentials;

pub use credentials::{service_credentials, CookieToken, CredentialProvider};
