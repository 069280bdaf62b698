pub mod controller;
pub mod domain;
pub mod repository;
pub mod service;
pub mod validation;

pub use controller::UserController;
pub use domain::{CreateUserRequest, UpdateUserRequest, User};
pub use repository::{MemoryUserRepository, SeaOrmUserRepository, UserEntity, UserRepository};
pub use service::UserService;
