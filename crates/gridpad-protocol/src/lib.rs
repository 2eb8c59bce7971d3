//! Shared protocol types for communication between a client and the
//! gridpad server process.
//!
//! The protocol is JSON-over-stdio: one JSON object per line in each
//! direction. A request carries a client-chosen id that is echoed on the
//! matching response.

use gridpad_core::{ColumnDefinition, Spreadsheet};
use serde::{Deserialize, Serialize};

/// A command sent from a client to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Client-chosen request ID for correlating responses.
    pub id: u64,
    /// The command to execute.
    #[serde(flatten)]
    pub command: Command,
}

/// Commands a client can send.
///
/// Every command that reads or transforms a grid carries the full
/// spreadsheet value; the server keeps no state between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "params", rename_all = "snake_case")]
pub enum Command {
    /// Fetch the fixed starter spreadsheet.
    GetStarter,

    /// Check structural validity of a spreadsheet.
    Validate { spreadsheet: Spreadsheet },

    /// Set one cell and return the updated spreadsheet.
    UpdateCell {
        spreadsheet: Spreadsheet,
        row: usize,
        column: String,
        value: String,
    },

    /// Append a blank row and return the updated spreadsheet.
    AddRow { spreadsheet: Spreadsheet },

    /// Append a column and return the updated spreadsheet.
    AddColumn {
        spreadsheet: Spreadsheet,
        column: ColumnDefinition,
    },

    /// Shut down the server after responding.
    Shutdown,
}

/// A response sent from the server back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// The request ID this response corresponds to.
    pub id: u64,
    /// The result of the command.
    #[serde(flatten)]
    pub result: ResponseResult,
}

/// Outcome of a command, tagged by `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// The command succeeded.
    Ok {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<ResponseData>,
    },

    /// The request was the client's fault: a bad row index, an unknown or
    /// duplicate column key, or a line that could not be parsed. The
    /// message names the offending detail.
    Invalid { message: String },

    /// An internal fault. The message stays generic; detail goes to the
    /// server log only.
    Error { message: String },
}

/// Data returned in successful responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    /// A (possibly updated) spreadsheet.
    Spreadsheet { spreadsheet: Spreadsheet },
    /// The verdict of a `validate` command.
    Validity { valid: bool },
}

impl Response {
    /// Build a success response.
    pub fn ok<M: Into<String>>(id: u64, message: M, data: Option<ResponseData>) -> Self {
        Self {
            id,
            result: ResponseResult::Ok {
                message: message.into(),
                data,
            },
        }
    }

    /// Build a client-error response.
    pub fn invalid<M: Into<String>>(id: u64, message: M) -> Self {
        Self {
            id,
            result: ResponseResult::Invalid {
                message: message.into(),
            },
        }
    }

    /// Build a server-error response.
    pub fn error<M: Into<String>>(id: u64, message: M) -> Self {
        Self {
            id,
            result: ResponseResult::Error {
                message: message.into(),
            },
        }
    }
}
