use dirsync::SyncError;

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

/// Exit status for an error that reached `main`
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SyncError>()
        .map(SyncError::exit_code)
        .unwrap_or(1)
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    match err.downcast_ref::<SyncError>() {
        // clap already formats usage errors, usage line included
        Some(SyncError::Usage { message }) => message.clone(),
        _ => format!("{} {:#}", Icon::Error.colored(ui.color, ui.unicode), err),
    }
}

/// Text written to stderr for `err`
///
/// Usage errors stay plain text in `--json` mode too, matching the ones clap
/// reports before the flags are known.
pub fn render_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let is_usage = matches!(err.downcast_ref::<SyncError>(), Some(e) if e.is_usage());
    if ui.json && !is_usage {
        return serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
            "exit_code": exit_code(err),
        })
        .to_string();
    }

    format_error(err, ui)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    eprintln!("{}", render_error(err, ui));
}
