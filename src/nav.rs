/// Visibility ratio at which a section claims the active highlight.
pub const VISIBLE_THRESHOLD: f64 = 0.5;

/// Label shown before any section has been visible.
pub const HOME_LABEL: &str = "Accueil";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Sticky navigation state: which labeled section currently holds the
/// highlight, plus the collapsible mobile menu.
///
/// The host forwards intersection notifications; the last section
/// reported at or above the visibility threshold wins, matching observer
/// callback order.
#[derive(Clone, Debug)]
pub struct Navigation {
    sections: Vec<Section>,
    active: Option<usize>,
    menu_open: bool,
}

impl Navigation {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            active: None,
            menu_open: false,
        }
    }

    /// The landing page's section table.
    pub fn landing_sections() -> Vec<Section> {
        vec![
            Section::new("le-projet", "Le Projet"),
            Section::new("qui-sommes-nous", "Qui Sommes-nous ?"),
            Section::new("dates", "Dates à venir"),
            Section::new("passes", "Événements passés"),
            Section::new("pro", "Espace Pro"),
        ]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Intersection notification for one section. Ratios below the
    /// threshold and unknown ids are ignored.
    pub fn observe(&mut self, id: &str, visible_ratio: f64) {
        if visible_ratio < VISIBLE_THRESHOLD {
            return;
        }
        if let Some(position) = self.sections.iter().position(|s| s.id == id) {
            self.active = Some(position);
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].id.as_str())
    }

    pub fn active_label(&self) -> &str {
        self.active
            .map(|i| self.sections[i].label.as_str())
            .unwrap_or(HOME_LABEL)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// A link was chosen from the menu: activate it and collapse the
    /// mobile menu.
    pub fn select(&mut self, id: &str) {
        if let Some(position) = self.sections.iter().position(|s| s.id == id) {
            self.active = Some(position);
        }
        self.menu_open = false;
    }
}
