mod atomic_write;
mod instance_lock;

pub use atomic_write::{atomic_write, temp_path_for};
pub use instance_lock::{InstanceLock, InstanceLockError};
