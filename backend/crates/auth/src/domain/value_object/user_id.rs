//! Internal user identifier, shared with the `home` crate through `kernel`

pub use kernel::id::UserId;
