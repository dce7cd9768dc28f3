use dioxus::prelude::*;

/// One-shot success banner that outlives a navigation.
///
/// The new-incident screen navigates back as soon as the server accepts the
/// submission, so its success message is shown by the shell on the next
/// screen instead. Dismissed by tap or replaced by the next message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flash {
    pub message: Option<String>,
}

impl Flash {
    pub fn show(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

pub fn use_flash() -> Signal<Flash> {
    use_context::<Signal<Flash>>()
}

pub fn show_flash(flash: &mut Signal<Flash>, message: &str) {
    flash.write().show(message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_and_clear_empties() {
        let mut flash = Flash::default();
        assert!(flash.message.is_none());

        flash.show("Incidencia registrada correctamente".to_string());
        flash.show("Éxito".to_string());
        assert_eq!(flash.message.as_deref(), Some("Éxito"));

        flash.clear();
        assert!(flash.message.is_none());
    }
}
