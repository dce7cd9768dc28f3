//! # Wire models for the incidencias API
//!
//! Field names match the remote contract exactly (Spanish), so none of these
//! types need serde rename attributes. All records are server-owned; the
//! client only mirrors them as transient view state.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Envelope`] | The uniform `{success, message, data}` response wrapper shared by every endpoint. |
//! | [`IncidenciaResumen`] | One row of the scoped incident list. |
//! | [`Incidencia`] | Full incident detail as shown on the detail screen. |
//! | [`Seguimiento`] | One follow-up entry in an incident's history, ordered by creation. |
//! | [`Estado`] | A selectable status transition for the follow-up form. |
//! | [`EstadoRef`] | The nested `{nombre, color}` display descriptor on incidents and follow-ups. |
//! | [`Alumno`] | One student roster entry for the new-incident picker. |

use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    /// Human-readable text, surfaced verbatim to the user on failure.
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The server message, or the given fallback when the server sent none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

/// Status display descriptor nested on incidents and follow-ups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstadoRef {
    pub nombre: String,
    /// CSS-style color the status renders in.
    pub color: String,
}

/// A selectable status transition, fetched per incident.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estado {
    pub id: u64,
    pub nombre: String,
    pub color: String,
}

/// One row of the scoped incident list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IncidenciaResumen {
    pub id: u64,
    pub codigo: String,
    pub titulo: String,
    pub created_at: String,
    pub estado: EstadoRef,
    /// Thumbnail URL, when the incident carries a photo.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Full incident detail.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Incidencia {
    pub id: u64,
    pub codigo: String,
    pub titulo: String,
    pub descripcion: String,
    pub alumno: String,
    pub nivel: String,
    pub creador: String,
    pub fecha: String,
    pub estado: EstadoRef,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// One follow-up entry in an incident's history.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Seguimiento {
    pub id: u64,
    pub usuario: String,
    pub fecha: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub estado: EstadoRef,
    /// Attachment URL, when the follow-up carries a file.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// One student roster entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Alumno {
    pub id: u64,
    pub nombre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_with_list() {
        let json = r##"{
            "success": true,
            "message": "ok",
            "data": [
                {
                    "id": 12,
                    "codigo": "INC-0012",
                    "titulo": "Ventana rota",
                    "created_at": "2025-03-04 10:15",
                    "estado": {"nombre": "Abierta", "color": "#dc3545"},
                    "base_url": "https://example.org/files/12.jpg"
                }
            ]
        }"##;
        let env: Envelope<Vec<IncidenciaResumen>> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        let rows = env.data.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].codigo, "INC-0012");
        assert_eq!(rows[0].estado.color, "#dc3545");
    }

    #[test]
    fn envelope_failure_without_data() {
        let json = r#"{"success": false, "message": "Credenciales inválidas"}"#;
        let env: Envelope<Vec<Alumno>> = serde_json::from_str(json).unwrap();
        assert!(!env.success);
        assert_eq!(env.message, "Credenciales inválidas");
        assert!(env.data.is_none());
    }

    #[test]
    fn envelope_fallback_message() {
        let json = r#"{"success": false}"#;
        let env: Envelope<Vec<Alumno>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.message_or("Error al registrar la incidencia"), "Error al registrar la incidencia");

        let json = r#"{"success": false, "message": "Ya existe"}"#;
        let env: Envelope<Vec<Alumno>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.message_or("fallback"), "Ya existe");
    }

    #[test]
    fn envelope_payload_needs_no_default() {
        // Usuario implements Deserialize but not Default; the envelope must
        // still deserialize, including when `data` is missing entirely.
        let json = r#"{"success": true, "message": "ok", "data": {"id": 7, "nombre": "Ana", "id_perfil": 3}}"#;
        let env: Envelope<store::Usuario> = serde_json::from_str(json).unwrap();
        assert_eq!(env.data.unwrap().id, 7);

        let json = r#"{"success": false, "message": "Credenciales inválidas"}"#;
        let env: Envelope<store::Usuario> = serde_json::from_str(json).unwrap();
        assert!(env.data.is_none());
    }

    #[test]
    fn seguimiento_optional_fields() {
        let json = r##"{
            "id": 3,
            "usuario": "Luis Pérez",
            "fecha": "2025-03-05 09:00",
            "estado": {"nombre": "En curso", "color": "#ffc107"}
        }"##;
        let s: Seguimiento = serde_json::from_str(json).unwrap();
        assert!(s.descripcion.is_none());
        assert!(s.base_url.is_none());
    }
}
