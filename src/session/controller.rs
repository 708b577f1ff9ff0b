//! Request handling for one interactive session
//!
//! A preview request samples a mask and caches it in the session context. A
//! confirm request lays out the cached mask, inserts it into the canvas and
//! replaces the artifact of the previous confirm. Failures are reported to the
//! user and leave the context as it was.

use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::io::configuration::{ERROR_NOTICE_PREFIX, INSERTED_NOTICE};
use crate::io::error::{MosaicError, Result, invalid_mask};
use crate::layout::{GenerationParameters, build_layout};
use crate::sampling::{ActivationMask, GridSampler};
use crate::session::canvas::{Canvas, NodeId};
use crate::session::message::{Request, Response};

const MALFORMED_KIND: &str = "message";

/// State scoped to one interactive session
///
/// Holds the mask from the latest preview and the node created by the latest
/// confirm. Both slots are overwritten by newer requests, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    /// Mask from the most recent preview
    pub current_mask: Option<ActivationMask>,
    /// Node inserted by the most recent confirm
    pub current_artifact: Option<NodeId>,
}

impl SessionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the current mask and artifact
    pub fn reset(&mut self) {
        self.current_mask = None;
        self.current_artifact = None;
    }
}

/// Drives sampling, layout and canvas updates for incoming requests
pub struct SessionController<C, R = StdRng> {
    canvas: C,
    sampler: GridSampler<R>,
}

impl<C: Canvas> SessionController<C, StdRng> {
    /// Create a controller with a deterministic sampler
    pub fn seeded(canvas: C, seed: u64) -> Self {
        Self::new(canvas, GridSampler::seeded(seed))
    }
}

impl<C: Canvas, R: Rng> SessionController<C, R> {
    /// Create a controller around a canvas and a sampler
    pub const fn new(canvas: C, sampler: GridSampler<R>) -> Self {
        Self { canvas, sampler }
    }

    /// Host canvas
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Mutable host canvas
    pub const fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Give back the canvas
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Handle a request and return its response
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request parameters are invalid
    /// - A confirm arrives with no current mask, or with a mask of another shape
    /// - The new artifact cannot be attached to, found on or focused on the canvas
    /// - Removing the previous artifact fails for a reason other than it being gone
    pub fn handle(&mut self, context: &mut SessionContext, request: &Request) -> Result<Response> {
        request.options().validate()?;

        match request {
            Request::Preview { options } => Ok(self.preview(context, options)),
            Request::Confirm { options } => self.confirm(context, options),
        }
    }

    /// Handle a request at the user-facing boundary
    ///
    /// Errors are logged and shown as a notification instead of being returned.
    pub fn dispatch(&mut self, context: &mut SessionContext, request: &Request) -> Option<Response> {
        match self.handle(context, request) {
            Ok(response) => Some(response),
            Err(error) => {
                self.report(request.kind(), &error);
                None
            }
        }
    }

    /// Decode, handle and encode one JSON message
    ///
    /// Malformed messages are reported like any other failed request.
    pub fn dispatch_json(&mut self, context: &mut SessionContext, text: &str) -> Option<String> {
        self.dispatch_labeled(context, text).1
    }

    /// Like [`Self::dispatch_json`], also returning the request kind
    ///
    /// The kind is `"message"` when the text could not be decoded.
    pub fn dispatch_labeled(
        &mut self,
        context: &mut SessionContext,
        text: &str,
    ) -> (&'static str, Option<String>) {
        let request = match Request::from_json(text) {
            Ok(request) => request,
            Err(error) => {
                self.report(MALFORMED_KIND, &error);
                return (MALFORMED_KIND, None);
            }
        };

        let kind = request.kind();
        let Some(response) = self.dispatch(context, &request) else {
            return (kind, None);
        };
        match response.to_json() {
            Ok(json) => (kind, Some(json)),
            Err(error) => {
                self.report(kind, &error);
                (kind, None)
            }
        }
    }

    fn preview(&mut self, context: &mut SessionContext, options: &GenerationParameters) -> Response {
        let (rows, columns) = options.shape();
        let mask = self.sampler.sample(columns, rows, options.density);
        debug!(
            "sampled {rows}x{columns} mask with {} active cells",
            mask.active_count()
        );

        context.current_mask = Some(mask.clone());
        Response::PreviewData { data: mask }
    }

    fn confirm(
        &mut self,
        context: &mut SessionContext,
        options: &GenerationParameters,
    ) -> Result<Response> {
        let mask = context
            .current_mask
            .as_ref()
            .ok_or_else(|| invalid_mask(&"no grid has been previewed yet"))?;

        let layout = build_layout(options, mask)?;
        let (width, height, cell_count) = (layout.width, layout.height, layout.cells.len());

        let id = self
            .canvas
            .attach(layout)
            .map_err(|error| MosaicError::ArtifactCreation {
                reason: error.to_string(),
            })?;
        if !self.canvas.contains(id) {
            return Err(MosaicError::ArtifactCreation {
                reason: "failed to find created grid".to_string(),
            });
        }
        if let Err(error) = self.canvas.focus(id) {
            debug!("focusing node {} failed: {error}", id.0);
            self.discard(id);
            return Err(MosaicError::ArtifactCreation {
                reason: "failed to focus created grid".to_string(),
            });
        }

        if let Some(previous) = context.current_artifact {
            match self.canvas.remove(previous) {
                Ok(()) => debug!("replaced node {} with {}", previous.0, id.0),
                Err(MosaicError::ArtifactLookup { .. }) => {
                    debug!("previous node {} was already removed", previous.0);
                }
                Err(error) => {
                    self.discard(id);
                    return Err(error);
                }
            }
        }
        context.current_artifact = Some(id);

        self.canvas.notify(INSERTED_NOTICE);
        info!("inserted {width}x{height} mosaic with {cell_count} cells as node {}", id.0);

        Ok(Response::GridInserted)
    }

    // Roll back a node attached by a confirm that did not complete
    fn discard(&mut self, id: NodeId) {
        if let Err(cleanup) = self.canvas.remove(id) {
            warn!("could not roll back node {}: {cleanup}", id.0);
        }
    }

    fn report(&mut self, kind: &str, error: &MosaicError) {
        warn!("{kind} request failed: {error}");
        self.canvas.notify(&format!("{ERROR_NOTICE_PREFIX}{error}"));
    }
}
