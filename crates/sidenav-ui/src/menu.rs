//! Static menu model of the drawer.
//!
//! The drawer shows a profile header, three sections of destinations and a
//! footer with two actions. [`DrawerMenu::layout`] stacks the rows
//! vertically in drawer coordinates so the shell can map taps to actions.

use sidenav_core::Destination;
use sidenav_foundation::Rect;

pub const HEADER_HEIGHT: f32 = 132.0;
pub const SECTION_TITLE_HEIGHT: f32 = 36.0;
pub const ITEM_HEIGHT: f32 = 48.0;
/// Divider plus its vertical padding after every section.
pub const SECTION_SPACING: f32 = 17.0;
pub const FOOTER_ROW_HEIGHT: f32 = 56.0;

/// What a tap on a menu row does. Every action closes the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Navigate(Destination),
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerHeader {
    pub name: &'static str,
    pub email: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub destination: Destination,
    pub badge: Option<u32>,
}

impl MenuItem {
    pub const fn new(destination: Destination) -> Self {
        Self {
            destination,
            badge: None,
        }
    }

    pub const fn with_badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    /// Badge text, shown only for positive counts.
    pub fn badge_label(&self) -> Option<String> {
        self.badge
            .filter(|count| *count > 0)
            .map(|count| count.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

impl MenuSection {
    /// Section headings are rendered upper-cased.
    pub fn heading(&self) -> String {
        self.title.to_uppercase()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterAction {
    pub title: &'static str,
    pub icon: &'static str,
    pub action: MenuAction,
    pub destructive: bool,
}

const SECTIONS: &[MenuSection] = &[
    MenuSection {
        title: "Main",
        items: &[
            MenuItem::new(Destination::Home),
            MenuItem::new(Destination::Profile),
        ],
    },
    MenuSection {
        title: "Social",
        items: &[
            MenuItem::new(Destination::Friends),
            MenuItem::new(Destination::Notifications).with_badge(5),
        ],
    },
    MenuSection {
        title: "Settings",
        items: &[MenuItem::new(Destination::Settings)],
    },
];

const FOOTER: &[FooterAction] = &[
    FooterAction {
        title: "Help & Feedback",
        icon: "questionmark.circle",
        action: MenuAction::Navigate(Destination::Help),
        destructive: false,
    },
    FooterAction {
        title: "Logout",
        icon: "rectangle.portrait.and.arrow.right",
        action: MenuAction::Logout,
        destructive: true,
    },
];

const HEADER: DrawerHeader = DrawerHeader {
    name: "John Doe",
    email: "john.doe@example.com",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerMenu {
    header: DrawerHeader,
    sections: &'static [MenuSection],
    footer: &'static [FooterAction],
}

impl Default for DrawerMenu {
    fn default() -> Self {
        Self::standard()
    }
}

impl DrawerMenu {
    pub const fn standard() -> Self {
        Self {
            header: HEADER,
            sections: SECTIONS,
            footer: FOOTER,
        }
    }

    pub fn header(&self) -> &DrawerHeader {
        &self.header
    }

    pub fn sections(&self) -> &[MenuSection] {
        self.sections
    }

    pub fn footer(&self) -> &[FooterAction] {
        self.footer
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Stacks the rows for a drawer of `width` x `height`.
    ///
    /// Header and sections flow from the top; the footer is pinned to the
    /// bottom. When the drawer is too short the footer wins: the header is
    /// clipped at the footer and overlapping section rows are dropped.
    pub fn layout(&self, width: f32, height: f32) -> MenuLayout {
        let footer_top = height - FOOTER_ROW_HEIGHT * self.footer.len() as f32;
        let mut rows = Vec::new();

        let header_height = HEADER_HEIGHT.min(footer_top);
        if header_height > 0.0 {
            rows.push(MenuRow {
                kind: MenuRowKind::Header,
                bounds: Rect::new(0.0, 0.0, width, header_height),
            });
        }

        let mut y = HEADER_HEIGHT;
        for section in self.sections {
            let title = Rect::new(0.0, y, width, SECTION_TITLE_HEIGHT);
            y += SECTION_TITLE_HEIGHT;
            if title.bottom() <= footer_top {
                rows.push(MenuRow {
                    kind: MenuRowKind::SectionTitle(section.title),
                    bounds: title,
                });
            }
            for item in section.items {
                let bounds = Rect::new(0.0, y, width, ITEM_HEIGHT);
                y += ITEM_HEIGHT;
                if bounds.bottom() <= footer_top {
                    rows.push(MenuRow {
                        kind: MenuRowKind::Item(*item),
                        bounds,
                    });
                }
            }
            y += SECTION_SPACING;
        }

        for (index, action) in self.footer.iter().enumerate() {
            rows.push(MenuRow {
                kind: MenuRowKind::Footer(*action),
                bounds: Rect::new(
                    0.0,
                    footer_top + FOOTER_ROW_HEIGHT * index as f32,
                    width,
                    FOOTER_ROW_HEIGHT,
                ),
            });
        }

        MenuLayout { rows }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuRowKind {
    Header,
    SectionTitle(&'static str),
    Item(MenuItem),
    Footer(FooterAction),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuRow {
    pub kind: MenuRowKind,
    pub bounds: Rect,
}

impl MenuRow {
    pub fn action(&self) -> Option<MenuAction> {
        match self.kind {
            MenuRowKind::Item(item) => Some(MenuAction::Navigate(item.destination)),
            MenuRowKind::Footer(footer) => Some(footer.action),
            MenuRowKind::Header | MenuRowKind::SectionTitle(_) => None,
        }
    }

    /// Destination rows are highlighted while their destination is current.
    /// Footer actions never are.
    pub fn is_highlighted(&self, current: Destination) -> bool {
        matches!(self.kind, MenuRowKind::Item(item) if item.destination == current)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuLayout {
    rows: Vec<MenuRow>,
}

impl MenuLayout {
    pub fn rows(&self) -> &[MenuRow] {
        &self.rows
    }

    /// Action of the row under `y` (drawer coordinates), if any.
    pub fn action_at(&self, y: f32) -> Option<MenuAction> {
        self.rows
            .iter()
            .find(|row| y >= row.bounds.y && y < row.bounds.bottom())
            .and_then(MenuRow::action)
    }

    pub fn row_for(&self, action: MenuAction) -> Option<&MenuRow> {
        self.rows.iter().find(|row| row.action() == Some(action))
    }

    pub fn highlighted(&self, current: Destination) -> Option<&MenuRow> {
        self.rows.iter().find(|row| row.is_highlighted(current))
    }
}
