//! Theme and column-manager modal toggles

use super::TableManager;
use crate::types::ThemeMode;

impl TableManager {
    pub fn theme(&self) -> ThemeMode {
        self.ui.theme
    }

    pub fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggled();
    }

    pub fn open_column_manager(&mut self) {
        self.ui.column_manager_open = true;
    }

    pub fn close_column_manager(&mut self) {
        self.ui.column_manager_open = false;
    }

    pub fn is_column_manager_open(&self) -> bool {
        self.ui.column_manager_open
    }
}
