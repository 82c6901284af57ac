use crate::output::{print_json, print_success, OutputMode};

pub fn execute(mode: OutputMode) {
    let version = env!("CARGO_PKG_VERSION");
    match mode {
        OutputMode::Json => {
            let _ = print_json(&serde_json::json!({"version": version}));
        }
        OutputMode::Human => print_success(&format!("ruledeck {version}")),
    }
}
