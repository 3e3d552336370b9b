//! Viewer-request Basic-Auth edge function builder.

use std::sync::Arc;

use tracing::info;

use crate::domain::capabilities::{EdgeFunctions, FunctionRuntime};
use crate::domain::entities::{BasicAuthCredentials, EdgeBinding, EdgeEventType};
use crate::error::HostingError;
use crate::utils::basic_auth::authorization_header;
use crate::utils::logical_id::logical_id;

/// Entry point of the published function payload.
const HANDLER: &str = "index.handler";

/// Fixed denial body returned to unauthorized viewers.
const DENIAL_BODY: &str = "You are not authorized to enter";

/// Builds the optional viewer-request gate: an edge function that rejects
/// requests without matching `Authorization` credentials before any cache
/// lookup or origin fetch.
///
/// The expected header value is computed at declaration time and embedded as
/// a literal in the function payload. Rotating credentials therefore
/// requires republishing the function; this trade-off is deliberate and kept
/// from the construct this crate models.
pub struct EdgeAuthBuilder<E: EdgeFunctions> {
    functions: Arc<E>,
}

impl<E: EdgeFunctions> EdgeAuthBuilder<E> {
    /// Creates a new edge auth builder.
    pub fn new(functions: Arc<E>) -> Self {
        Self { functions }
    }

    /// Publishes the gate function for `site_url` and returns its binding,
    /// targeted at the viewer-request event.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the function cannot be
    /// declared.
    pub fn build(
        &self,
        site_url: &str,
        credentials: &BasicAuthCredentials,
    ) -> Result<EdgeBinding, HostingError> {
        let name = logical_id("basicauth", site_url);
        let code = function_code(credentials);

        info!(function = %name, site = %site_url, "publishing basic-auth edge function");

        let version = self
            .functions
            .publish(&name, HANDLER, FunctionRuntime::NodeJs14, &code)?;

        Ok(EdgeBinding::new(version, EdgeEventType::ViewerRequest))
    }
}

/// Renders the function payload with the expected header value embedded.
///
/// At request time on the edge nodes the function compares the incoming
/// `authorization` header against the literal; on absence or mismatch it
/// short-circuits with 401 and `WWW-Authenticate: Basic`, bypassing the
/// origin, otherwise it passes the request through unchanged.
pub fn function_code(credentials: &BasicAuthCredentials) -> String {
    let expected = authorization_header(&credentials.username, &credentials.password);

    format!(
        r#"
exports.handler = async (event, context, callback) => {{

  const request = event.Records[0].cf.request;
  const headers = request.headers;

  const expected = '{expected}';

  if (typeof headers.authorization == 'undefined' || headers.authorization[0].value != expected) {{
      const body = '{DENIAL_BODY}';
      const response = {{
          status: '401',
          statusDescription: 'Unauthorized',
          body: body,
          headers: {{
              'www-authenticate': [{{key: 'WWW-Authenticate', value: 'Basic'}}]
          }},
      }};
      callback(null, response);
  }}
  callback(null, request);
}};
"#
    )
}
