use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};
use yew::prelude::*;

use crate::error::SiteError;

/// A `<meta>` tag to create or update, keyed by `attribute="key"`.
#[derive(Debug, PartialEq, Eq)]
pub struct MetaUpdate {
    pub attribute: &'static str,
    pub key: &'static str,
    pub content: String,
}

impl MetaUpdate {
    fn name(key: &'static str, content: &str) -> Self {
        Self { attribute: "name", key, content: content.to_string() }
    }

    fn property(key: &'static str, content: &str) -> Self {
        Self { attribute: "property", key, content: content.to_string() }
    }

    fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attribute, self.key)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Meta tags touched for the given inputs. Absent or empty inputs touch nothing.
pub fn meta_updates(description: Option<&str>, keywords: Option<&str>) -> Vec<MetaUpdate> {
    let mut updates = Vec::new();
    if let Some(description) = present(description) {
        updates.push(MetaUpdate::name("description", description));
        updates.push(MetaUpdate::property("og:description", description));
        updates.push(MetaUpdate::property("twitter:description", description));
    }
    if let Some(keywords) = present(keywords) {
        updates.push(MetaUpdate::name("keywords", keywords));
    }
    updates
}

/// The parts of a document head the metadata helper writes to.
pub trait MetaHead {
    type Tag;

    fn set_title(&self, title: &str);
    fn find(&self, selector: &str) -> Result<Option<Self::Tag>, SiteError>;
    /// Creates a detached `<meta>` element.
    fn create(&self) -> Result<Self::Tag, SiteError>;
    fn set_attribute(&self, tag: &Self::Tag, name: &str, value: &str) -> Result<(), SiteError>;
    fn append(&self, tag: &Self::Tag) -> Result<(), SiteError>;
}

pub struct DomHead(Document);

fn dom_error(e: JsValue) -> SiteError {
    SiteError::Dom(SiteError::describe(&e))
}

impl MetaHead for DomHead {
    type Tag = Element;

    fn set_title(&self, title: &str) {
        self.0.set_title(title);
    }

    fn find(&self, selector: &str) -> Result<Option<Element>, SiteError> {
        self.0.query_selector(selector).map_err(dom_error)
    }

    fn create(&self) -> Result<Element, SiteError> {
        self.0.create_element("meta").map_err(dom_error)
    }

    fn set_attribute(&self, tag: &Element, name: &str, value: &str) -> Result<(), SiteError> {
        tag.set_attribute(name, value).map_err(dom_error)
    }

    fn append(&self, tag: &Element) -> Result<(), SiteError> {
        let head = self.0.head().ok_or_else(|| SiteError::MissingElement("head".to_string()))?;
        head.append_child(tag).map(|_| ()).map_err(dom_error)
    }
}

fn upsert_meta<H: MetaHead>(head: &H, update: &MetaUpdate) -> Result<(), SiteError> {
    let tag = match head.find(&update.selector())? {
        Some(tag) => tag,
        None => {
            let tag = head.create()?;
            head.set_attribute(&tag, update.attribute, update.key)?;
            head.append(&tag)?;
            tag
        }
    };
    head.set_attribute(&tag, "content", &update.content)
}

pub fn write_metadata<H: MetaHead>(
    head: &H,
    title: Option<&str>,
    description: Option<&str>,
    keywords: Option<&str>,
) -> Result<(), SiteError> {
    if let Some(title) = present(title) {
        head.set_title(title);
    }
    for update in meta_updates(description, keywords) {
        upsert_meta(head, &update)?;
    }
    Ok(())
}

pub fn apply_metadata(title: Option<&str>, description: Option<&str>, keywords: Option<&str>) -> Result<(), SiteError> {
    let document = window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)?;
    write_metadata(&DomHead(document), title, description, keywords)
}

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub keywords: Option<AttrValue>,
}

/// Renders nothing; keeps the document head in sync with its props.
#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    let deps = (props.title.clone(), props.description.clone(), props.keywords.clone());
    use_effect_with_deps(
        move |(title, description, keywords)| {
            if let Err(e) = apply_metadata(title.as_deref(), description.as_deref(), keywords.as_deref()) {
                warn!("Could not update page metadata: {}", e);
            }
            || ()
        },
        deps,
    );
    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn description_fans_out_to_three_tags() {
        let updates = meta_updates(Some("Managed homes"), None);
        let keys: Vec<_> = updates.iter().map(|u| (u.attribute, u.key)).collect();
        assert_eq!(
            keys,
            [("name", "description"), ("property", "og:description"), ("property", "twitter:description")]
        );
        assert!(updates.iter().all(|u| u.content == "Managed homes"));
    }

    #[test]
    fn keywords_only_touch_keywords_tag() {
        assert_eq!(meta_updates(None, Some("a, b")), vec![MetaUpdate::name("keywords", "a, b")]);
        assert!(meta_updates(None, None).is_empty());
    }

    #[test]
    fn empty_inputs_count_as_absent() {
        assert!(meta_updates(Some(""), Some("")).is_empty());
        let head = FakeHead::default();
        write_metadata(&head, Some(""), Some(""), None).unwrap();
        assert_eq!(*head.title.borrow(), None);
        assert!(head.tags.borrow().is_empty());
    }

    /// In-memory head; tags are (attributes, appended) pairs addressed by index.
    #[derive(Default)]
    struct FakeHead {
        title: RefCell<Option<String>>,
        tags: RefCell<Vec<(Vec<(String, String)>, bool)>>,
        reject_append: bool,
    }

    impl FakeHead {
        fn attr(&self, tag: usize, name: &str) -> Option<String> {
            self.tags.borrow()[tag].0.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone())
        }
    }

    impl MetaHead for FakeHead {
        type Tag = usize;

        fn set_title(&self, title: &str) {
            *self.title.borrow_mut() = Some(title.to_string());
        }

        fn find(&self, selector: &str) -> Result<Option<usize>, SiteError> {
            let tags = self.tags.borrow();
            Ok((0..tags.len()).find(|&i| {
                tags[i].1
                    && tags[i].0.iter().any(|(name, value)| selector == format!("meta[{}=\"{}\"]", name, value))
            }))
        }

        fn create(&self) -> Result<usize, SiteError> {
            let mut tags = self.tags.borrow_mut();
            tags.push((Vec::new(), false));
            Ok(tags.len() - 1)
        }

        fn set_attribute(&self, tag: &usize, name: &str, value: &str) -> Result<(), SiteError> {
            let mut tags = self.tags.borrow_mut();
            let attrs = &mut tags[*tag].0;
            attrs.retain(|(n, _)| n != name);
            attrs.push((name.to_string(), value.to_string()));
            Ok(())
        }

        fn append(&self, tag: &usize) -> Result<(), SiteError> {
            if self.reject_append {
                return Err(SiteError::Dom("HierarchyRequestError".to_string()));
            }
            self.tags.borrow_mut()[*tag].1 = true;
            Ok(())
        }
    }

    #[test]
    fn creates_missing_tags_then_updates_them_in_place() {
        let head = FakeHead::default();
        write_metadata(&head, Some("Home"), Some("first"), Some("a, b")).unwrap();
        assert_eq!(head.title.borrow().as_deref(), Some("Home"));
        assert_eq!(head.tags.borrow().len(), 4);

        write_metadata(&head, None, Some("second"), None).unwrap();
        assert_eq!(head.tags.borrow().len(), 4);
        assert_eq!(head.attr(0, "content").as_deref(), Some("second"));
        assert_eq!(head.attr(3, "content").as_deref(), Some("a, b"));
    }

    #[test]
    fn rejected_append_is_reported() {
        let head = FakeHead { reject_append: true, ..Default::default() };
        let result = write_metadata(&head, None, Some("Managed homes"), None);
        assert_eq!(result, Err(SiteError::Dom("HierarchyRequestError".to_string())));
        assert_eq!(head.attr(0, "content"), None);
    }

    #[test]
    fn selector_matches_attribute_kind() {
        assert_eq!(MetaUpdate::property("og:description", "x").selector(), "meta[property=\"og:description\"]");
    }
}
