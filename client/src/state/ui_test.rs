use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_tab_is_resumen() {
    let state = UiState::default();
    assert_eq!(state.admin_tab, AdminTab::Resumen);
}

#[test]
fn admin_tabs_have_distinct_labels() {
    let labels: Vec<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Resumen", "Usuarios", "Tarifas", "Exportar"]);
}
