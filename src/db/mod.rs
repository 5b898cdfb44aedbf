pub mod user_repo;
pub use user_repo::UserRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod ordem_repo;
pub use ordem_repo::OrdemRepository;
