pub mod actions;
pub mod events;
pub mod reducer;
pub mod store;

pub use actions::Action;
pub use events::DomainEvent;
pub use reducer::reduce;
pub use store::{AppStore, Listener, StateStore, Subscription};
