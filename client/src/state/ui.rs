#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome state: theme and which overlays are open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Mobile navigation drawer.
    pub nav_open: bool,
    pub notifications_open: bool,
    pub user_menu_open: bool,
}

impl UiState {
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode, ..Self::default() }
    }

    /// Open the notifications panel, closing the user menu.
    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
        if self.notifications_open {
            self.user_menu_open = false;
        }
    }

    /// Open the user menu, closing the notifications panel.
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
        if self.user_menu_open {
            self.notifications_open = false;
        }
    }

    /// Close every overlay, e.g. after navigation.
    pub fn close_overlays(&mut self) {
        self.nav_open = false;
        self.notifications_open = false;
        self.user_menu_open = false;
    }
}
