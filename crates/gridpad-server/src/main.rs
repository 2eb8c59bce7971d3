//! Gridpad server — answers spreadsheet commands as JSON over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! - Reads `Request` objects from stdin
//! - Writes `Response` objects to stdout
//! - Diagnostic/log output goes to stderr (never stdout)
//!
//! The server holds no spreadsheet state between requests; every command
//! carries the full grid it operates on.

mod dispatch;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use gridpad_protocol::{Command, Request, Response, ResponseResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridpad-server")]
#[command(author, version, about = "JSON-over-stdio spreadsheet backend")]
struct Cli {
    /// Log filter used when the GRIDPAD_LOG environment variable is unset
    /// (e.g. "debug" or "gridpad_server=trace")
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Pretty-print response JSON. Responses then span multiple lines, so
    /// only use this when poking the server by hand.
    #[arg(long)]
    pretty: bool,
}

/// Encode a response for the wire, honoring the `--pretty` flag.
fn render(response: &Response, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_env("GRIDPAD_LOG").unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("gridpad server starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("unparseable request line: {e}");
                // No id could be recovered from the line, so answer with 0
                let response = Response::invalid(0, format!("Malformed request: {e}"));
                writeln!(out, "{}", render(&response, cli.pretty)?)?;
                out.flush()?;
                continue;
            }
        };

        let shutting_down = matches!(request.command, Command::Shutdown);
        let response = dispatch::dispatch(request);
        let answered_ok = matches!(response.result, ResponseResult::Ok { .. });
        writeln!(out, "{}", render(&response, cli.pretty)?)?;
        out.flush()?;

        if shutting_down && answered_ok {
            tracing::info!("shutdown requested, exiting");
            break;
        }
    }

    tracing::info!("gridpad server exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_compact_stays_on_one_line() {
        let response = Response::ok(1, "Row added successfully", None);
        let encoded = render(&response, false).unwrap();
        assert!(!encoded.contains('\n'));
        assert_eq!(
            encoded,
            r#"{"id":1,"status":"ok","message":"Row added successfully"}"#
        );
    }

    #[test]
    fn test_render_pretty_is_multiline_and_equivalent() {
        let response = Response::invalid(0, "Malformed request: expected value");
        let compact = render(&response, false).unwrap();
        let pretty = render(&response, true).unwrap();

        assert!(pretty.contains('\n'));
        let compact: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(reparsed, compact);
    }
}
