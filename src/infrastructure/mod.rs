//! Infrastructure layer: Redis persistence and external integrations.

mod memory_store;
mod redis_store;
pub mod safety;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
