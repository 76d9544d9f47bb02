//! Console Event Sink
//!
//! Human-readable progress on stdout. Every request line is printed before
//! the request goes out, so a failed run still shows what was attempted.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{PublishEvent, PublishEventSink};
use crate::ui::theme::{colors, paint, Icons};
use crate::ui::TerminalCapabilities;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    icons: Icons,
}

impl ConsoleEventSink {
    /// Console sink on stdout, styled according to the terminal
    pub fn stdout(caps: TerminalCapabilities) -> Self {
        Self::with_writer(io::stdout(), caps.use_color(), caps.supports_unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            icons: Icons::new(unicode),
        }
    }

    fn render(&self, event: PublishEvent) -> String {
        let icons = &self.icons;
        match event {
            PublishEvent::Started {
                command,
                hostname,
                store,
            } => format!(
                "{} {} {} {} {}",
                icons.remote,
                command,
                hostname,
                icons.arrow,
                paint(&store, colors::INFO, self.color)
            ),

            PublishEvent::Request {
                method, url, body, ..
            } => match body {
                Some(body) => format!("{} {} {}", method, url, paint(&body, colors::DIM, self.color)),
                None => format!("{} {}", method, url),
            },

            PublishEvent::Succeeded { key, status, .. } => format!(
                "  {} {} ({})",
                paint(icons.success, colors::SUCCESS, self.color),
                key,
                status
            ),

            PublishEvent::Failed { key, error, .. } => format!(
                "  {} {}: {}",
                paint(icons.error, colors::ERROR, self.color),
                key,
                error
            ),

            PublishEvent::Verified {
                key, matches_local, ..
            } => {
                if matches_local {
                    format!(
                        "  {} {} matches local config",
                        paint(icons.success, colors::SUCCESS, self.color),
                        key
                    )
                } else {
                    format!(
                        "  {} {} differs from local config",
                        paint(icons.warning, colors::WARNING, self.color),
                        key
                    )
                }
            }

            PublishEvent::Completed {
                command,
                succeeded,
                failed,
                dry_run,
            } => {
                let mut line = format!("{}: {} succeeded, {} failed", command, succeeded, failed);
                if dry_run {
                    line.push_str(" (dry run, nothing sent)");
                }
                line
            }
        }
    }
}

impl PublishEventSink for ConsoleEventSink {
    fn on_event(&self, event: PublishEvent) {
        let line = self.render(event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
