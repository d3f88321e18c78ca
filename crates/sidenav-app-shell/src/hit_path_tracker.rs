//! Hit path tracking for pointer input capture.
//!
//! The surface hit on Down receives every following Move and the final
//! Up/Cancel of that pointer, even when the drawer moves away underneath the
//! finger or the pointer leaves the surface.

use rustc_hash::FxHashMap;
use sidenav_foundation::PointerId;

/// Interactive surfaces of the shell, top-most first within each drawer
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// The drawer panel itself.
    Drawer,
    /// The dimmed area beside the open drawer.
    Overlay,
    /// The hamburger button in the navigation bar.
    MenuButton,
    /// Screen content while the drawer is closed.
    Content,
}

#[derive(Debug, Default)]
pub struct HitPathTracker {
    paths: FxHashMap<PointerId, HitTarget>,
}

impl HitPathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the surface hit for a pointer. Called on Down.
    pub fn add_hit_path(&mut self, pointer: PointerId, target: HitTarget) {
        self.paths.insert(pointer, target);
    }

    pub fn get_path(&self, pointer: PointerId) -> Option<HitTarget> {
        self.paths.get(&pointer).copied()
    }

    /// Ends the gesture of a pointer. Called on Up.
    pub fn remove_path(&mut self, pointer: PointerId) -> Option<HitTarget> {
        self.paths.remove(&pointer)
    }

    pub fn has_path(&self, pointer: PointerId) -> bool {
        self.paths.contains_key(&pointer)
    }

    /// Drops every tracked gesture. Called on cancel.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
