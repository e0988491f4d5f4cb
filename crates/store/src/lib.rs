// Repository and localizer implementations for navorder

pub mod fs;
pub mod lock;
pub mod memory;
pub mod messages;

pub use fs::FsRepository;
pub use lock::FolderLocks;
pub use memory::InMemoryRepository;
pub use messages::MessageBundle;
