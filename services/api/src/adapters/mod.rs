pub mod db;
pub mod identity;
pub mod notify;

pub use db::PgStore;
pub use identity::PgIdentityProvider;
pub use notify::TracingNotifier;
