//! Account infrastructure - storage, hashing, and the service layer

mod repository;
mod secret;
mod service;

pub use repository::InMemoryAccountRepository;
pub use secret::{SecretHasher, Sha256SecretHasher};
pub use service::{AccountService, CreateAccountRequest, UpdateAccountRequest};
