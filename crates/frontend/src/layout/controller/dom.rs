//! Применение [`MenuPatch`] к меню хоста в DOM

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, MouseEvent};

use super::history;
use super::location::Location;
use super::menu::{
    plan_class_change, plan_link_updates, MenuNode, MenuPatch, MenuTree, NodeTag, WRAPPER_ID,
};
use super::pages::Page;
use super::query::Query;

/// Корень меню админки хоста
pub const MENU_ROOT_ID: &str = "adminmenu";

thread_local! {
    // Один обработчик на все ссылки меню: клиентский переход вместо загрузки страницы
    static LINK_CLICK: Closure<dyn FnMut(MouseEvent)> = Closure::wrap(Box::new(|event: MouseEvent| {
        event.prevent_default();
        let href = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.get_attribute("href"));
        if let Some(href) = href {
            history::push(&Location::from_href(&href));
        }
    }) as Box<dyn FnMut(_)>);
}

/// Снимок меню с привязкой узлов к элементам DOM
pub struct DomMenu {
    tree: MenuTree,
    elements: Vec<Element>,
}

impl DomMenu {
    pub fn snapshot(document: &Document) -> Self {
        let mut menu = Self {
            tree: MenuTree::default(),
            elements: Vec::new(),
        };

        match document.get_element_by_id(WRAPPER_ID) {
            Some(wrapper) => {
                menu.push(&wrapper, NodeTag::Other, None);
            }
            None => log::warn!("#{} not found", WRAPPER_ID),
        }
        match document.get_element_by_id(MENU_ROOT_ID) {
            Some(root) => menu.walk(&root, None),
            None => log::warn!("#{} not found", MENU_ROOT_ID),
        }
        menu
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    fn push(&mut self, element: &Element, tag: NodeTag, parent: Option<usize>) -> usize {
        let mut node = MenuNode::new(tag, parent).with_classes(&element.class_name());
        let id = element.id();
        if !id.is_empty() {
            node = node.with_id(&id);
        }
        if tag == NodeTag::Anchor {
            node.href = element.get_attribute("href");
        }
        self.elements.push(element.clone());
        self.tree.push(node)
    }

    fn walk(&mut self, element: &Element, parent: Option<usize>) {
        let tag = match element.tag_name().to_ascii_lowercase().as_str() {
            "li" => NodeTag::Li,
            "a" => NodeTag::Anchor,
            _ => NodeTag::Other,
        };
        let index = self.push(element, tag, parent);

        let mut child = element.first_element_child();
        while let Some(current) = child {
            self.walk(&current, Some(index));
            child = current.next_element_sibling();
        }
    }

    pub fn apply(&mut self, patch: &MenuPatch) {
        for change in &patch.class_changes {
            let classes: Vec<&str> = change.classes.iter().map(String::as_str).collect();
            self.elements[change.node].set_class_name(&classes.join(" "));
        }
        for change in &patch.href_changes {
            if let Err(e) = self.elements[change.node].set_attribute("href", &change.href) {
                log::warn!("failed to update menu link: {:?}", e);
            }
        }
        LINK_CLICK.with(|handler| {
            for node in &patch.links {
                if let Some(link) = self.elements[*node].dyn_ref::<HtmlElement>() {
                    link.set_onclick(Some(handler.as_ref().unchecked_ref()));
                }
            }
        });
        self.tree.apply(patch);
    }
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Переписать ссылки меню страницы с сохраняемыми параметрами запроса
pub fn update_menu_links(page: &Page, next_query: &Query, excluded_screens: &[String]) {
    let Some(document) = document() else {
        return;
    };
    let mut menu = DomMenu::snapshot(&document);
    let patch = plan_link_updates(menu.tree(), page, next_query, excluded_screens);
    menu.apply(&patch);
}

/// Отметить в меню хоста активную страницу
pub fn sync_menu_classes(page: &Page, url: &str) {
    let Some(document) = document() else {
        return;
    };
    let mut menu = DomMenu::snapshot(&document);
    let patch = plan_class_change(menu.tree(), page, url);
    menu.apply(&patch);
}

pub fn scroll_to_top() {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        root.set_scroll_top(0);
    }
}
