//! Drawer UI model for the SideNav shell: the interaction controller that
//! drives the drawer offset and the static menu the drawer shows.

pub mod drawer;
pub mod menu;

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod drawer_tests;

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod menu_tests;

pub use drawer::{
    overlay_opacity, DragOutcome, DrawerConfig, DrawerController, DrawerState, DrawerValue,
    CLOSE_THRESHOLD_FRACTION, DRAWER_WIDTH, MAX_OVERLAY_OPACITY,
};
pub use menu::{
    DrawerHeader, DrawerMenu, FooterAction, MenuAction, MenuItem, MenuLayout, MenuRow,
    MenuRowKind, MenuSection,
};

pub mod prelude {
    pub use crate::drawer::{DrawerConfig, DrawerController, DrawerValue};
    pub use crate::menu::{DrawerMenu, MenuAction};
}
