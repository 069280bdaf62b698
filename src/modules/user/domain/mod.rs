mod user_model;

pub use user_model::{CreateUserRequest, UpdateUserRequest, User};
