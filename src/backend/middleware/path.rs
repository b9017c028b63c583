/**
 * Path Parameter Helpers
 *
 * Entity ids arrive as raw path segments. A segment that is not a UUID
 * cannot name a stored entity, so it is reported as not found rather than
 * as a malformed request.
 */

use uuid::Uuid;

use crate::backend::error::BackendError;

/// Parse an entity id from a path segment
///
/// # Arguments
/// * `raw` - Path segment as received
/// * `entity` - Entity name used in the not-found message
pub fn parse_id(raw: &str, entity: &'static str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        tracing::debug!("Unparseable {} id: {:?}", entity, raw);
        BackendError::not_found(entity)
    })
}
