//! Maps protocol commands onto the core spreadsheet operations.

use gridpad_core::{Error, Spreadsheet};
use gridpad_protocol::{Command, Request, Response, ResponseData, ResponseResult};

/// Handle one request and produce its response.
///
/// Pure: no IO and no state beyond the request itself, so the full
/// command surface is testable without a process or pipes.
pub fn dispatch(request: Request) -> Response {
    let id = request.id;

    let result = match request.command {
        Command::GetStarter => ok_with_sheet(
            "Spreadsheet data retrieved successfully".to_string(),
            Spreadsheet::starter(),
        ),

        Command::Validate { spreadsheet } => {
            let valid = spreadsheet.validate();
            ResponseResult::Ok {
                message: "Spreadsheet validation completed".to_string(),
                data: Some(ResponseData::Validity { valid }),
            }
        }

        Command::UpdateCell {
            spreadsheet,
            row,
            column,
            value,
        } => match spreadsheet.update_cell(row, &column, &value) {
            Ok(updated) => ok_with_sheet(
                format!("Cell ({row}, {column}) updated successfully"),
                updated,
            ),
            Err(e) => failure("update cell", e),
        },

        Command::AddRow { spreadsheet } => {
            ok_with_sheet("Row added successfully".to_string(), spreadsheet.add_row())
        }

        Command::AddColumn {
            spreadsheet,
            column,
        } => match spreadsheet.add_column(column) {
            Ok(updated) => ok_with_sheet("Column added successfully".to_string(), updated),
            Err(e) => failure("add column", e),
        },

        Command::Shutdown => ResponseResult::Ok {
            message: "Shutting down".to_string(),
            data: None,
        },
    };

    Response { id, result }
}

fn ok_with_sheet(message: String, spreadsheet: Spreadsheet) -> ResponseResult {
    ResponseResult::Ok {
        message,
        data: Some(ResponseData::Spreadsheet { spreadsheet }),
    }
}

/// Translate a core error into a response class: caller-caused failures
/// keep their detail, anything else is logged and answered generically.
fn failure(op: &str, err: Error) -> ResponseResult {
    if err.is_invalid_input() {
        tracing::warn!("invalid {op} request: {err}");
        ResponseResult::Invalid {
            message: err.to_string(),
        }
    } else {
        tracing::error!("{op} failed: {err}");
        ResponseResult::Error {
            message: format!("Failed to {op}"),
        }
    }
}
