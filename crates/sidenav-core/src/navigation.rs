//! The currently selected destination.

use crate::destination::Destination;
use crate::state::{MutableState, Subscription};

/// Holds exactly one selected [`Destination`] and notifies on every selection.
///
/// Re-selecting the current destination still notifies: a tap on the
/// highlighted drawer item is a real user action the host reacts to.
#[derive(Clone, Debug)]
pub struct NavigationState {
    current: MutableState<Destination>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::starting_at(Destination::default())
    }

    pub fn starting_at(destination: Destination) -> Self {
        Self {
            current: MutableState::never_equal(destination),
        }
    }

    pub fn select(&self, destination: Destination) {
        let previous = self.current.get();
        log::debug!("navigate {:?} -> {:?}", previous, destination);
        self.current.set(destination);
    }

    pub fn current(&self) -> Destination {
        self.current.get()
    }

    pub fn is_selected(&self, destination: Destination) -> bool {
        self.current() == destination
    }

    pub fn subscribe(&self, observer: impl Fn(&Destination) + 'static) -> Subscription {
        self.current.subscribe(observer)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_at_home() {
        assert_eq!(NavigationState::new().current(), Destination::Home);
    }

    #[test]
    fn select_then_current_round_trips_every_destination() {
        let navigation = NavigationState::new();
        for destination in Destination::ALL {
            navigation.select(destination);
            assert_eq!(navigation.current(), destination);
            assert!(navigation.is_selected(destination));
        }
    }

    #[test]
    fn every_select_notifies_even_when_unchanged() {
        let navigation = NavigationState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            navigation.subscribe(move |destination| seen.borrow_mut().push(*destination))
        };

        navigation.select(Destination::Friends);
        navigation.select(Destination::Friends);
        navigation.select(Destination::Home);

        assert_eq!(
            *seen.borrow(),
            vec![Destination::Friends, Destination::Friends, Destination::Home]
        );
    }

    #[test]
    fn clones_observe_the_same_selection() {
        let navigation = NavigationState::starting_at(Destination::Settings);
        let handle = navigation.clone();
        handle.select(Destination::Profile);
        assert_eq!(navigation.current(), Destination::Profile);
    }
}
