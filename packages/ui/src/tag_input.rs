use dioxus::prelude::*;

/// Free-text keyword tag editor.
///
/// Tokens are confirmed one at a time with Enter; blank or whitespace-only
/// input is ignored. Tapping a tag removes it. Entry order is preserved and
/// duplicates are allowed.
#[component]
pub fn TagInput(tags: Signal<Vec<String>>) -> Element {
    let mut text = use_signal(String::new);

    let mut submit = move || {
        let trimmed = text().trim().to_string();
        if !trimmed.is_empty() {
            tags.write().push(trimmed);
            text.set(String::new());
        }
    };

    rsx! {
        div {
            class: "tag-input",
            div {
                class: "tag-list",
                for (i, tag) in tags().into_iter().enumerate() {
                    button {
                        key: "{i}",
                        class: "tag",
                        onclick: move |_| {
                            tags.write().remove(i);
                        },
                        "{tag} ✕"
                    }
                }
            }
            input {
                class: "tag-text",
                r#type: "text",
                placeholder: "Palabras clave",
                value: text(),
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        submit();
                    }
                },
            }
        }
    }
}
