pub mod memory;
pub mod subscriber;

pub use memory::MemoryRecordCache;
pub use subscriber::InvalidationSubscriber;
