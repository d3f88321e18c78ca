//! Shell layout configuration.

use sidenav_core::ConfigError;
use sidenav_foundation::{Rect, Size, ViewConfiguration};
use sidenav_ui::DrawerConfig;

/// Viewport of a typical phone in logical pixels.
pub const DEFAULT_VIEWPORT: Size = Size::new(390.0, 844.0);
pub const NAV_BAR_HEIGHT: f32 = 44.0;
pub const MENU_BUTTON_BOUNDS: Rect = Rect::new(16.0, 0.0, 44.0, 44.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellConfig {
    pub viewport: Size,
    /// Height of the bar at the top of the content; hosts the menu button.
    pub nav_bar_height: f32,
    /// Hamburger button in window coordinates.
    pub menu_button: Rect,
    pub drawer: DrawerConfig,
    pub view_configuration: ViewConfiguration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            nav_bar_height: NAV_BAR_HEIGHT,
            menu_button: MENU_BUTTON_BOUNDS,
            drawer: DrawerConfig::default(),
            view_configuration: ViewConfiguration::default(),
        }
    }
}

impl ShellConfig {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn with_nav_bar_height(mut self, height: f32) -> Self {
        self.nav_bar_height = height;
        self
    }

    pub fn with_menu_button(mut self, bounds: Rect) -> Self {
        self.menu_button = bounds;
        self
    }

    pub fn with_drawer(mut self, drawer: DrawerConfig) -> Self {
        self.drawer = drawer;
        self
    }

    pub fn with_view_configuration(mut self, view_configuration: ViewConfiguration) -> Self {
        self.view_configuration = view_configuration;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_positive("viewport width", self.viewport.width)?;
        ConfigError::ensure_positive("viewport height", self.viewport.height)?;
        ConfigError::ensure_in_range(
            "nav bar height",
            self.nav_bar_height,
            0.0,
            self.viewport.height,
        )?;
        self.drawer.validate()?;
        ConfigError::ensure_in_range("drawer width", self.drawer.width, 0.0, self.viewport.width)?;
        self.view_configuration.validate()?;
        if !Rect::from_size(self.viewport).contains_rect(&self.menu_button) {
            return Err(ConfigError::OutsideViewport {
                field: "menu button",
            });
        }
        if self.menu_button.y < 0.0 || self.menu_button.bottom() > self.nav_bar_height {
            return Err(ConfigError::OutsideNavBar {
                field: "menu button",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ShellConfig::default().validate(), Ok(()));
    }

    #[test]
    fn drawer_wider_than_viewport_is_rejected() {
        let config = ShellConfig::default().with_viewport(200.0, 600.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "drawer width",
                ..
            })
        ));
    }

    #[test]
    fn menu_button_must_be_visible() {
        let config = ShellConfig::default().with_menu_button(Rect::new(370.0, 0.0, 44.0, 44.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutsideViewport {
                field: "menu button"
            })
        );
    }

    #[test]
    fn menu_button_must_sit_in_nav_bar() {
        let low_button = ShellConfig::default().with_menu_button(Rect::new(16.0, 60.0, 44.0, 44.0));
        assert_eq!(
            low_button.validate(),
            Err(ConfigError::OutsideNavBar {
                field: "menu button"
            })
        );

        let short_bar = ShellConfig::default().with_nav_bar_height(30.0);
        assert!(matches!(
            short_bar.validate(),
            Err(ConfigError::OutsideNavBar { .. })
        ));

        let tall_bar = ShellConfig::default()
            .with_nav_bar_height(64.0)
            .with_menu_button(Rect::new(16.0, 10.0, 44.0, 44.0));
        assert_eq!(tall_bar.validate(), Ok(()));
    }

    #[test]
    fn nested_config_errors_surface() {
        let config = ShellConfig::default()
            .with_view_configuration(ViewConfiguration::default().with_touch_slop(0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "touch slop",
                ..
            })
        ));
    }
}
