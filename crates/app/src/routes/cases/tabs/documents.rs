use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::Document;
use shared_ui::components::{Card, CardContent, CardHeader, CardTitle};

pub const NO_DOCUMENTS_MESSAGE: &str = "No hay documentos subidos para este caso.";

/// Links to the case's documents. URLs are rendered as given and open in a
/// new tab.
#[component]
pub fn DocumentsTab(documents: Vec<Document>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tabs.css") }
        Card {
            CardHeader { CardTitle { "Documentos del Caso" } }
            CardContent {
                if documents.is_empty() {
                    p { class: "muted", "{NO_DOCUMENTS_MESSAGE}" }
                } else {
                    ul { class: "document-list",
                        for (index, doc) in documents.iter().enumerate() {
                            li { key: "{index}", class: "document-item",
                                Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                                a {
                                    href: "{doc.url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{doc.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(documents: Vec<Document>) -> String {
        let mut dom = VirtualDom::new_with_props(DocumentsTab, DocumentsTabProps { documents });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_documents_show_message() {
        let html = render(vec![]);
        assert!(html.contains(NO_DOCUMENTS_MESSAGE));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn one_document_renders_one_link() {
        let html = render(vec![Document {
            name: "Informe".into(),
            url: "https://x/y.pdf".into(),
        }]);

        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(r#"href="https://x/y.pdf""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(">Informe</a>"));
        assert!(!html.contains(NO_DOCUMENTS_MESSAGE));
    }
}
