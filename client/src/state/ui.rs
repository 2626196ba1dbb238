//! Local UI chrome state (theme, admin tab selection).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Active tab on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Resumen,
    Usuarios,
    Tarifas,
    Exportar,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [Self::Resumen, Self::Usuarios, Self::Tarifas, Self::Exportar];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Resumen => "Resumen",
            Self::Usuarios => "Usuarios",
            Self::Tarifas => "Tarifas",
            Self::Exportar => "Exportar",
        }
    }
}

/// UI state for theme and admin navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub admin_tab: AdminTab,
}
