use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, Element, Window};

use super::SourceTree;
use crate::geometry::DomRect;
use crate::style::PropertyId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WebNodeId(usize);

/// [`SourceTree`] over live browser elements.
///
/// Elements are registered once and referred to by index afterwards.
pub struct WebDocument {
    window: Window,
    elements: Vec<Element>,
}

impl WebDocument {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            elements: Vec::new(),
        }
    }

    pub fn register(&mut self, element: Element) -> WebNodeId {
        if let Some(index) = self.elements.iter().position(|known| *known == element) {
            return WebNodeId(index);
        }
        self.elements.push(element);
        WebNodeId(self.elements.len() - 1)
    }

    pub fn lookup(&self, element: &Element) -> Option<WebNodeId> {
        self.elements
            .iter()
            .position(|known| known == element)
            .map(WebNodeId)
    }

    pub fn element(&self, node: WebNodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    fn style(&self, element: &Element) -> Option<CssStyleDeclaration> {
        match self.window.get_computed_style(element) {
            Ok(style) => style,
            Err(err) => {
                log_js_error("getComputedStyle", &err);
                None
            }
        }
    }
}

impl SourceTree for WebDocument {
    type NodeId = WebNodeId;

    fn bounding_rect(&self, node: WebNodeId) -> DomRect {
        let Some(element) = self.element(node) else {
            return DomRect::default();
        };
        let rect = element.get_bounding_client_rect();
        DomRect::new(
            rect.top() as f32,
            rect.bottom() as f32,
            rect.left() as f32,
            rect.right() as f32,
        )
    }

    fn parent(&self, node: WebNodeId) -> Option<WebNodeId> {
        let parent = self.element(node)?.parent_element()?;
        self.lookup(&parent)
    }

    fn style_property(&self, node: WebNodeId, property: PropertyId) -> Option<String> {
        let element = self.element(node)?;
        let style = self.style(element)?;
        match style.get_property_value(property.css_name()) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(err) => {
                log_js_error(property.css_name(), &err);
                None
            }
        }
    }
}

fn log_js_error(context: &str, err: &JsValue) {
    log::warn!(target: "dom2scene", "{context} failed: {err:?}");
}
