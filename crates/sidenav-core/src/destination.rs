//! The closed set of screens the shell can show.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    #[default]
    Home,
    Profile,
    Friends,
    Notifications,
    Settings,
    Help,
}

/// Static presentation data for a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DestinationDescriptor {
    pub destination: Destination,
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

static DESCRIPTORS: [DestinationDescriptor; 6] = [
    DestinationDescriptor {
        destination: Destination::Home,
        slug: "home",
        title: "Home",
        icon: "house.fill",
    },
    DestinationDescriptor {
        destination: Destination::Profile,
        slug: "profile",
        title: "Profile",
        icon: "person.fill",
    },
    DestinationDescriptor {
        destination: Destination::Friends,
        slug: "friends",
        title: "Friends",
        icon: "person.3.fill",
    },
    DestinationDescriptor {
        destination: Destination::Notifications,
        slug: "notifications",
        title: "Notifications",
        icon: "bell.fill",
    },
    DestinationDescriptor {
        destination: Destination::Settings,
        slug: "settings",
        title: "Settings",
        icon: "gear",
    },
    DestinationDescriptor {
        destination: Destination::Help,
        slug: "help",
        title: "Help & Feedback",
        icon: "questionmark.circle",
    },
];

impl Destination {
    pub const ALL: [Destination; 6] = [
        Destination::Home,
        Destination::Profile,
        Destination::Friends,
        Destination::Notifications,
        Destination::Settings,
        Destination::Help,
    ];

    pub fn descriptor(self) -> &'static DestinationDescriptor {
        &DESCRIPTORS[self.index()]
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn icon(self) -> &'static str {
        self.descriptor().icon
    }

    pub fn slug(self) -> &'static str {
        self.descriptor().slug
    }

    /// Position of this destination in [`Destination::ALL`].
    pub fn index(self) -> usize {
        match self {
            Destination::Home => 0,
            Destination::Profile => 1,
            Destination::Friends => 2,
            Destination::Notifications => 3,
            Destination::Settings => 4,
            Destination::Help => 5,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown destination `{0}`")]
pub struct UnknownDestination(pub String);

impl FromStr for Destination {
    type Err = UnknownDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DESCRIPTORS
            .iter()
            .find(|descriptor| descriptor.slug.eq_ignore_ascii_case(needle))
            .map(|descriptor| descriptor.destination)
            .ok_or_else(|| UnknownDestination(s.to_string()))
    }
}
