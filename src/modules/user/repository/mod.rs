mod memory_repository;
mod sea_orm_repository;
mod user_entity;
mod user_repository;

pub use memory_repository::MemoryUserRepository;
pub use sea_orm_repository::SeaOrmUserRepository;
pub use user_entity::Entity as UserEntity;
pub use user_repository::UserRepository;
