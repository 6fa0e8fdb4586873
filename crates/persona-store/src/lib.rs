pub mod error;
pub mod memory;
pub mod traits;
pub mod user;

pub use error::StoreError;
pub use memory::InMemoryUserStore;
pub use traits::UserStore;
pub use user::{NewUser, User};
