use debtors_business::BusinessConfig;
use egui::{Color32, Response, Ui};

/// Build environment selected by Cargo features.
pub const fn env_name() -> &'static str {
    if cfg!(feature = "env_test") {
        "test"
    } else if cfg!(feature = "env_nightly") {
        "nightly"
    } else {
        "stable"
    }
}

/// Shows `{env}:{version}`, hovering reveals the API root in use.
pub fn env_label(config: &BusinessConfig, ui: &mut Ui) -> Response {
    let env = env_name();
    let color = match env {
        "stable" => Color32::GREEN,
        "nightly" => Color32::from_rgb(255, 165, 0), // Orange
        _ => Color32::from_rgb(200, 200, 200),
    };

    ui.colored_label(color, format!("{env}:{}", env!("CARGO_PKG_VERSION")))
        .on_hover_text(config.api_url().as_str())
}
