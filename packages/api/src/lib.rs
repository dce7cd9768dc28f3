//! HTTP client for the incidencias API.
//!
//! Every remote operation is one method on [`Client`], one HTTP round trip,
//! returning the uniform `{success, message, data}` envelope. Transport
//! problems (network failure, non-2xx, malformed body) collapse into a single
//! [`ApiError`]; `success: false` is a normal return the caller surfaces to
//! the user.

mod client;
pub use client::Client;

mod error;
pub use error::ApiError;

pub mod models;
pub use models::{Alumno, Envelope, Estado, EstadoRef, Incidencia, IncidenciaResumen, Seguimiento};

pub mod forms;
pub use forms::{FileAttachment, FollowUpDraft, IncidentDraft};
