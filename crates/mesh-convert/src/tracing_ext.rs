//! Tracing extensions for mesh conversion.
//!
//! Structured logging and timing for the read, triangulate and write stages.
//! Nothing is printed unless the application installs a subscriber:
//!
//! ```rust,ignore
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env())
//!     .init();
//!
//! // Set RUST_LOG=mesh_convert=debug for detailed output
//! ```
//!
//! # Log Levels
//!
//! - **WARN**: Suspicious but accepted input (ignored records)
//! - **INFO**: Stage summaries and timing
//! - **DEBUG**: Counts, bounds and histograms between stages
//! - **TRACE**: Per-face detail

use std::time::Instant;
use tracing::span::EnteredSpan;
use tracing::{debug, info, trace};

use crate::PolygonMesh;

/// A performance timer that logs duration on drop.
///
/// The timer enters a `mesh_operation` span for as long as it lives, so
/// events logged during the operation carry its name.
///
/// ```rust,ignore
/// use mesh_convert::tracing_ext::OperationTimer;
///
/// fn expensive_operation() {
///     let _timer = OperationTimer::new("expensive_operation");
///     // ... do work ...
/// } // Timer logs duration when dropped
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
    _span: EnteredSpan,
}

impl OperationTimer {
    /// Create a new operation timer.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!("mesh_operation", operation = name).entered();
        debug!(target: "mesh_convert::timing", operation = name, "Starting operation");
        Self {
            name,
            start: Instant::now(),
            _span: span,
        }
    }

    /// Create a timer that records the size of the face sequence it works on.
    pub fn with_faces(name: &'static str, face_count: usize) -> Self {
        let span =
            tracing::info_span!("mesh_operation", operation = name, faces = face_count).entered();
        debug!(
            target: "mesh_convert::timing",
            operation = name,
            faces = face_count,
            "Starting operation"
        );
        Self {
            name,
            start: Instant::now(),
            _span: span,
        }
    }

    /// Get the elapsed time.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        info!(
            target: "mesh_convert::timing",
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            "Operation completed"
        );
    }
}

/// Log mesh counts and bounds at debug level.
pub fn log_mesh_stats(mesh: &PolygonMesh, context: &str) {
    let dimensions = match mesh.bounds().dimensions() {
        Ok([dx, dy, dz]) => format!("{:.2} x {:.2} x {:.2}", dx, dy, dz),
        Err(_) => "undefined".to_string(),
    };

    debug!(
        target: "mesh_convert::mesh_state",
        context = context,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        arities = mesh.statistics().len(),
        dimensions = dimensions,
        "Mesh state"
    );

    for (arity, count) in mesh.statistics().iter() {
        trace!(
            target: "mesh_convert::mesh_state",
            context = context,
            arity = arity,
            count = count,
            "Polygon bucket"
        );
    }
}

/// Log a file I/O operation.
pub fn log_io_operation(operation: &str, path: &std::path::Path, format: &str) {
    info!(
        target: "mesh_convert::io",
        operation = operation,
        path = path.display().to_string(),
        format = format,
        "I/O operation completed"
    );
}
