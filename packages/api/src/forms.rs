//! # Form drafts and client-side validation
//!
//! The two submission forms exist only in view memory until they are sent as
//! multipart requests. Validation runs before any network call, first failing
//! check wins, and every message is shown to the user as-is.

/// A picked file, read into memory for multipart upload.
#[derive(Clone, Debug, PartialEq)]
pub struct FileAttachment {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Guess a MIME type from the file name, defaulting to a generic binary
    /// type the way the picker did.
    pub fn mime_for(name: &str) -> String {
        match name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg".to_string(),
            Some("png") => "image/png".to_string(),
            Some("gif") => "image/gif".to_string(),
            Some("webp") => "image/webp".to_string(),
            Some("pdf") => "application/pdf".to_string(),
            _ => "application/octet-stream".to_string(),
        }
    }
}

/// Draft state of the new-incident form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentDraft {
    pub titulo: String,
    pub alumno_id: Option<u64>,
    /// Priority as the wire expects it: "1" (BAJA), "2" (MEDIA), "3" (ALTA).
    pub prioridad: Option<String>,
    /// Free-text keyword tags in entry order. Duplicates are allowed.
    pub palabras_clave: Vec<String>,
    pub descripcion: String,
    pub foto: Option<FileAttachment>,
}

impl IncidentDraft {
    /// Check the draft in the order the form enforces. The first failing
    /// check wins and its message is shown to the user.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.titulo.trim().is_empty() {
            return Err("El campo Título es obligatorio.");
        }
        if self.alumno_id.is_none() {
            return Err("Debe seleccionar un alumno.");
        }
        if self.prioridad.is_none() {
            return Err("Debe seleccionar una prioridad.");
        }
        if self.palabras_clave.is_empty() {
            return Err("Debe agregar al menos una palabra clave.");
        }
        if self.descripcion.trim().is_empty() {
            return Err("El campo Descripción es obligatorio.");
        }
        Ok(())
    }

    /// The `palabra_clave` wire field: tags joined by commas in entry order.
    pub fn palabra_clave(&self) -> String {
        self.palabras_clave.join(",")
    }
}

/// Draft state of the follow-up form on the incident detail screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FollowUpDraft {
    pub estado_id: Option<u64>,
    pub descripcion: String,
    pub archivo: Option<FileAttachment>,
}

impl FollowUpDraft {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.estado_id.is_none() {
            return Err("Debe seleccionar un estado.");
        }
        if self.descripcion.trim().is_empty() {
            return Err("El campo Descripción es obligatorio.");
        }
        Ok(())
    }
}

/// Check login credentials before any network call: both fields present,
/// then a simple `local@domain.tld` shape on the email.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Todos los campos son obligatorios");
    }
    if !email_is_valid(email) {
        return Err("Ingrese un correo electrónico válido");
    }
    Ok(())
}

/// `local@domain.tld`: one `@`, non-empty local part, domain with a dot and a
/// non-empty tail, no whitespace anywhere.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_validation_order() {
        let mut draft = IncidentDraft::default();
        assert_eq!(draft.validate(), Err("El campo Título es obligatorio."));

        draft.titulo = "Ventana rota".to_string();
        assert_eq!(draft.validate(), Err("Debe seleccionar un alumno."));

        draft.alumno_id = Some(4);
        assert_eq!(draft.validate(), Err("Debe seleccionar una prioridad."));

        draft.prioridad = Some("2".to_string());
        assert_eq!(draft.validate(), Err("Debe agregar al menos una palabra clave."));

        draft.palabras_clave.push("vidrio".to_string());
        assert_eq!(draft.validate(), Err("El campo Descripción es obligatorio."));

        draft.descripcion = "Se rompió el cristal del aula 3.".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_text_fields_are_rejected() {
        let draft = IncidentDraft {
            titulo: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err("El campo Título es obligatorio."));
    }

    #[test]
    fn keywords_join_in_entry_order_without_dedup() {
        let draft = IncidentDraft {
            palabras_clave: vec![
                "vidrio".to_string(),
                "aula".to_string(),
                "vidrio".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(draft.palabra_clave(), "vidrio,aula,vidrio");
    }

    #[test]
    fn single_keyword_joins_plain() {
        let draft = IncidentDraft {
            palabras_clave: vec!["vidrio".to_string()],
            ..Default::default()
        };
        assert_eq!(draft.palabra_clave(), "vidrio");
    }

    #[test]
    fn follow_up_requires_status_then_description() {
        let mut draft = FollowUpDraft::default();
        assert_eq!(draft.validate(), Err("Debe seleccionar un estado."));

        draft.estado_id = Some(5);
        assert_eq!(draft.validate(), Err("El campo Descripción es obligatorio."));

        draft.descripcion = "Revisado en el aula.".to_string();
        assert_eq!(draft.validate(), Ok(()));

        // The file is optional
        assert!(draft.archivo.is_none());
    }

    #[test]
    fn credential_checks() {
        assert_eq!(
            validate_credentials("", ""),
            Err("Todos los campos son obligatorios")
        );
        assert_eq!(
            validate_credentials("ana@example.com", ""),
            Err("Todos los campos son obligatorios")
        );
        assert_eq!(
            validate_credentials("not-an-email", "secret"),
            Err("Ingrese un correo electrónico válido")
        );
        assert_eq!(validate_credentials("ana@example.com", "secret"), Ok(()));
    }

    #[test]
    fn email_shapes() {
        assert!(email_is_valid("a@b.c"));
        assert!(email_is_valid("ana.lopez@colegio.edu.es"));
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("@b.c"));
        assert!(!email_is_valid("a@.c"));
        assert!(!email_is_valid("a@b."));
        assert!(!email_is_valid("a b@c.d"));
        assert!(!email_is_valid("a@b@c.d"));
        assert!(!email_is_valid(""));
    }

    #[test]
    fn mime_guesses() {
        assert_eq!(FileAttachment::mime_for("foto.JPG"), "image/jpeg");
        assert_eq!(FileAttachment::mime_for("captura.png"), "image/png");
        assert_eq!(FileAttachment::mime_for("parte.pdf"), "application/pdf");
        assert_eq!(FileAttachment::mime_for("informe"), "application/octet-stream");
    }
}
