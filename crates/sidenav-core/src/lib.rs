//! Core state for the SideNav drawer shell
//!
//! This crate holds the observable state cell used across the workspace,
//! the closed set of destinations, and the navigation state that tracks the
//! selected one.

pub mod destination;
pub mod error;
pub mod navigation;
pub mod state;

pub use destination::{Destination, DestinationDescriptor, UnknownDestination};
pub use error::ConfigError;
pub use navigation::NavigationState;
pub use state::{
    MutableState, MutationPolicy, NeverEqual, ObserverId, StructuralEqualityPolicy, Subscription,
};

pub mod prelude {
    pub use crate::destination::Destination;
    pub use crate::error::ConfigError;
    pub use crate::navigation::NavigationState;
    pub use crate::state::{MutableState, Subscription};
}
