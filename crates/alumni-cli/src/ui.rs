use std::sync::OnceLock;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Capture terminal preferences once, before any output.
pub fn init() {
    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs { term_width });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { term_width: None })
}
