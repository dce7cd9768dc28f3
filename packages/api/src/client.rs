use reqwest::multipart::{Form, Part};
use reqwest::Client as ReqwestClient;

use crate::error::ApiError;
use crate::forms::{FileAttachment, FollowUpDraft, IncidentDraft};
use crate::models::{Alumno, Envelope, Estado, Incidencia, IncidenciaResumen, Seguimiento};
use store::Usuario;

/// Base URL baked in at build time, overridable via `INCIDENCIAS_API_URL`.
const DEFAULT_BASE_URL: &str = "https://incidenciassanagustin.org/api";

/// HTTP client for the incidencias API.
#[derive(Clone, Debug)]
pub struct Client {
    http: ReqwestClient,
    base_url: String,
}

impl Client {
    pub fn new() -> Self {
        let base_url = option_env!("INCIDENCIAS_API_URL")
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        Self {
            http: ReqwestClient::new(),
            base_url,
        }
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Log in with plain credentials. `success: true` carries the user record
    /// that becomes the cached session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Envelope<Usuario>, ApiError> {
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the incident list scoped to the current user and profile.
    pub async fn list_incidencias(
        &self,
        id_user: u64,
        id_perfil: u32,
    ) -> Result<Envelope<Vec<IncidenciaResumen>>, ApiError> {
        let response = self
            .http
            .post(format!("{}/incidencias/lista", self.base_url))
            .json(&serde_json::json!({
                "id_user": id_user,
                "id_perfil": id_perfil,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch one incident's detail.
    pub async fn incidencia(&self, id: u64) -> Result<Envelope<Incidencia>, ApiError> {
        let response = self
            .http
            .get(format!("{}/incidencias/show/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch an incident's follow-up history, ordered by creation.
    pub async fn seguimientos(&self, id: u64) -> Result<Envelope<Vec<Seguimiento>>, ApiError> {
        let response = self
            .http
            .get(format!("{}/incidencias/seguimiento/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the statuses an incident may transition to.
    pub async fn estados(&self, id: u64) -> Result<Envelope<Vec<Estado>>, ApiError> {
        let response = self
            .http
            .get(format!("{}/incidencias/status/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the student roster for the new-incident picker.
    pub async fn alumnos(&self) -> Result<Envelope<Vec<Alumno>>, ApiError> {
        let response = self
            .http
            .get(format!("{}/alumnos", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Append a follow-up to an incident. The draft must already be validated.
    pub async fn crear_seguimiento(
        &self,
        user_id: u64,
        id_incidencia: u64,
        draft: &FollowUpDraft,
    ) -> Result<Envelope<serde_json::Value>, ApiError> {
        let mut form = Form::new()
            .text("user_id", user_id.to_string())
            .text("id_incidencia", id_incidencia.to_string())
            .text(
                "id_estado",
                draft.estado_id.unwrap_or_default().to_string(),
            )
            .text("descripcion", draft.descripcion.clone());
        if let Some(file) = &draft.archivo {
            form = form.part("file", file_part(file)?);
        }

        let response = self
            .http
            .post(format!("{}/incidencias/seguimiento", self.base_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Create a new incident. `tiempo_formulario` is the whole seconds the
    /// form was open, sent uninterpreted as a trust signal.
    pub async fn crear_incidencia(
        &self,
        user_id: u64,
        draft: &IncidentDraft,
        tiempo_formulario: u64,
    ) -> Result<Envelope<serde_json::Value>, ApiError> {
        let mut form = Form::new()
            .text("user_id", user_id.to_string())
            .text(
                "alumno_id",
                draft.alumno_id.unwrap_or_default().to_string(),
            )
            .text("prioridad", draft.prioridad.clone().unwrap_or_default())
            .text("palabra_clave", draft.palabra_clave())
            .text("titulo", draft.titulo.clone())
            .text("descripcion", draft.descripcion.clone())
            .text("tiempo_formulario", tiempo_formulario.to_string());
        if let Some(file) = &draft.foto {
            form = form.part("file", file_part(file)?);
        }

        let response = self
            .http
            .post(format!("{}/incidencias", self.base_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

fn file_part(file: &FileAttachment) -> Result<Part, ApiError> {
    Ok(Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.mime)?)
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_and_overrides() {
        let client = Client::new();
        assert!(!client.base_url.is_empty());

        let client = Client::new().with_base_url("http://localhost:8000/api".to_string());
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn file_part_rejects_garbage_mime() {
        let file = FileAttachment {
            name: "foto.jpg".to_string(),
            mime: "not a mime".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert!(file_part(&file).is_err());
    }
}
