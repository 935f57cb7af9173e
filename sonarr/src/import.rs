//! Import helpers for resources identified by a numeric Sonarr id

use crate::errors::UNEXPECTED_IMPORT_IDENTIFIER;
use tfplug::resource::{ImportResourceStateRequest, ImportResourceStateResponse};
use tfplug::{AttributePath, Context};

/// Parses the import ID as a decimal integer and stores it at `attr_path`
///
/// Example: ID "12" -> state.id = 12
///
/// State numbers are f64, so IDs beyond 2^53 - 1 in magnitude are refused
/// with a diagnostic instead of being rounded.
pub fn import_int_id(
    ctx: &Context,
    attr_path: AttributePath,
    request: &ImportResourceStateRequest,
    response: &mut ImportResourceStateResponse,
) {
    let id = match request.id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            response.diagnostics.add_error(
                UNEXPECTED_IMPORT_IDENTIFIER,
                Some(format!(
                    "Expected import identifier with format: ID. Got: {}",
                    request.id
                )),
            );
            return;
        }
    };

    if attr_path.is_empty() {
        response.diagnostics.add_error(
            "Resource Import Passthrough Missing Attribute Path",
            Some(
                "This is always an error in the provider. Please report the following to the provider developer:\n\n\
                 Resource ImportState method call to import_int_id path must be set to a valid attribute path that can accept an int64 value.",
            ),
        );
        return;
    }

    tracing::debug!(
        deadline = ?ctx.deadline(),
        "importing {} with id {}",
        request.type_name,
        id
    );
    let diags = response.state.set_int64(&attr_path, id);
    response.diagnostics.append(diags);
}
