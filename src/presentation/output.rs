//! Error and warning rendering for the CLI

use std::fmt;

use kvseed::config::ConfigWarning;
use kvseed::ui::theme::{colors, paint, Icons};
use kvseed::ui::detect_capabilities;
use kvseed::KvseedError;

/// A command ran to completion but some store operations failed.
///
/// The failing keys have already been reported by the event sink.
#[derive(Debug)]
pub struct OperationsFailed {
    pub command: &'static str,
    pub failed: usize,
    pub total: usize,
    /// At least one failure was a connection problem, not a rejection
    pub unreachable: bool,
}

impl fmt::Display for OperationsFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} operations failed",
            self.command, self.failed, self.total
        )
    }
}

impl std::error::Error for OperationsFailed {}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(kvseed) = err.downcast_ref::<KvseedError>() {
        kvseed.code()
    } else if err.downcast_ref::<OperationsFailed>().is_some() {
        "operations_failed"
    } else {
        "error"
    }
}

const UNREACHABLE_HELP: &str =
    "Is the store running? Set --store-host/--store-port or KVSEED_STORE_HOST/KVSEED_STORE_PORT.";

fn help_for(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(failed) = err.downcast_ref::<OperationsFailed>() {
        return failed.unreachable.then_some(UNREACHABLE_HELP);
    }

    match err.downcast_ref::<KvseedError>()? {
        KvseedError::HostnameResolution(_) => {
            Some("Pass --hostname or set KVSEED_HOSTNAME to register under an explicit name.")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let icons = Icons::new(unicode);
    let mut out = format!("{} {}", paint(icons.error, colors::ERROR, color), err);
    if let Some(help) = help_for(err) {
        out.push_str(&format!("\n  {}", paint(help, colors::DIM, color)));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "code": error_code(err),
            "message": err.to_string(),
        });
        if let Some(help) = help_for(err) {
            output["help"] = serde_json::Value::from(help);
        }
        println!("{}", output);
        return;
    }

    let caps = detect_capabilities();
    eprintln!("{}", format_error(err, caps.use_color(), caps.supports_unicode));
}

pub fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!("unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    out
}

pub fn print_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let output = serde_json::json!({
                "event": "warning",
                "code": "unknown_config_key",
                "message": format_warning(warning),
            });
            println!("{}", output);
        } else {
            let caps = detect_capabilities();
            let icons = Icons::new(caps.supports_unicode);
            eprintln!(
                "{} {}",
                paint(icons.warning, colors::WARNING, caps.use_color()),
                format_warning(warning)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn operations_failed_message() {
        let err = anyhow::Error::new(OperationsFailed {
            command: "publish",
            failed: 1,
            total: 3,
            unreachable: false,
        });
        assert_eq!(err.to_string(), "publish: 1 of 3 operations failed");
        assert_eq!(error_code(&err), "operations_failed");
        assert_eq!(help_for(&err), None);
    }

    #[test]
    fn unreachable_store_gets_help() {
        let err = anyhow::Error::new(OperationsFailed {
            command: "verify",
            failed: 3,
            total: 3,
            unreachable: true,
        });
        let text = format_error(&err, false, false);
        assert!(text.starts_with("[FAIL] verify: 3 of 3 operations failed"));
        assert!(text.contains("--store-host"));
    }

    #[test]
    fn hostname_failure_gets_help() {
        let err = anyhow::Error::new(KvseedError::HostnameResolution("boom".to_string()));
        let text = format_error(&err, false, false);
        assert!(text.starts_with("[FAIL] could not resolve local hostname: boom"));
        assert!(text.contains("--hostname"));
    }

    #[test]
    fn warning_with_suggestion() {
        let warning = ConfigWarning {
            key: "prot".to_string(),
            file: PathBuf::from("kvseed.toml"),
            line: Some(4),
            suggestion: Some("port".to_string()),
        };
        assert_eq!(
            format_warning(&warning),
            "unknown config key 'prot' in kvseed.toml:4 (did you mean 'port'?)"
        );
    }
}
