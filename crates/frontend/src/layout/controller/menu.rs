//! Синхронизация меню хоста с активной страницей
//!
//! Дерево меню снимается в [`MenuTree`], изменения вычисляются как данные
//! ([`MenuPatch`]) и применяются адаптером: в тестах к самому дереву, в браузере
//! к DOM (см. `dom.rs`). Повторное применение с теми же страницей и url даёт
//! то же состояние.

use std::collections::BTreeSet;

use super::location::{ADMIN_PAGE, ADMIN_SLUG};
use super::pages::Page;
use super::query::{parse_query, stringify_query, Query, PAGE_CURSOR};

pub const CURRENT: &str = "current";
pub const HAS_CURRENT_SUBMENU: &str = "wp-has-current-submenu";
pub const NOT_CURRENT_SUBMENU: &str = "wp-not-current-submenu";
pub const MENU_OPEN: &str = "wp-menu-open";
pub const MENU_TOP: &str = "menu-top";
pub const SELECTED: &str = "selected";
pub const RESPONSIVE_OPEN: &str = "wp-responsive-open";

pub const WRAPPER_ID: &str = "wpwrap";

/// Screen по умолчанию для ссылок без `path`
const DEFAULT_SCREEN: &str = "dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTag {
    Li,
    Anchor,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub id: Option<String>,
    pub tag: NodeTag,
    /// Индекс родителя в [`MenuTree::nodes`]
    pub parent: Option<usize>,
    pub classes: BTreeSet<String>,
    pub href: Option<String>,
}

impl MenuNode {
    pub fn new(tag: NodeTag, parent: Option<usize>) -> Self {
        Self {
            id: None,
            tag,
            parent,
            classes: BTreeSet::new(),
            href: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes = classes.split_whitespace().map(str::to_string).collect();
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add(&mut self, classes: &[&str]) {
        self.classes.extend(classes.iter().map(|c| c.to_string()));
    }

    fn remove(&mut self, classes: &[&str]) {
        for class in classes {
            self.classes.remove(*class);
        }
    }
}

/// Снимок меню хоста: узлы в порядке документа, родитель раньше потомков
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    pub nodes: Vec<MenuNode>,
}

impl MenuTree {
    pub fn push(&mut self, node: MenuNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id.as_deref() == Some(id))
    }

    fn is_descendant_of(&self, index: usize, ancestor: usize) -> bool {
        let mut current = self.nodes[index].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent].parent;
        }
        false
    }

    pub fn apply(&mut self, patch: &MenuPatch) {
        for change in &patch.class_changes {
            if let Some(node) = self.nodes.get_mut(change.node) {
                node.classes = change.classes.clone();
            }
        }
        for change in &patch.href_changes {
            if let Some(node) = self.nodes.get_mut(change.node) {
                node.href = Some(change.href.clone());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassChange {
    pub node: usize,
    /// Итоговый набор классов узла
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefChange {
    pub node: usize,
    pub href: String,
}

/// Изменения меню, которые надо применить
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuPatch {
    pub class_changes: Vec<ClassChange>,
    pub href_changes: Vec<HrefChange>,
    /// Ссылки, которым нужен обработчик клиентской навигации
    pub links: Vec<usize>,
}

impl MenuPatch {
    pub fn is_empty(&self) -> bool {
        self.class_changes.is_empty() && self.href_changes.is_empty() && self.links.is_empty()
    }
}

/// Запрос ссылки на страницу приложения или `None` для чужих ссылок
fn wc_admin_query(href: &str) -> Option<Query> {
    let href = href.split('#').next().unwrap_or(href);
    let (target, search) = href.split_once('?')?;
    if !target.ends_with(ADMIN_PAGE) {
        return None;
    }
    let query = parse_query(search);
    (query.get(PAGE_CURSOR).map(String::as_str) == Some(ADMIN_SLUG)).then_some(query)
}

/// Ссылка указывает на активный url: точное совпадение для корня, по префиксу
/// пути для остальных
fn links_to(href: &str, url: &str) -> bool {
    let Some(query) = wc_admin_query(href) else {
        return false;
    };
    let path = query.get("path").map(String::as_str).unwrap_or("/");
    if url == "/" {
        path == "/"
    } else {
        path.starts_with(url)
    }
}

fn warn_missing(id: &str) {
    log::warn!("menu element #{} not found, skipping", id);
}

/// Классы меню для активной страницы
pub fn plan_class_change(tree: &MenuTree, page: &Page, url: &str) -> MenuPatch {
    let mut next = tree.clone();
    let declared: Vec<usize> = page
        .menu_ids()
        .filter_map(|id| {
            let found = tree.find_by_id(id);
            if found.is_none() {
                warn_missing(id);
            }
            found
        })
        .collect();

    for (index, node) in next.nodes.iter_mut().enumerate() {
        let had_current_submenu = node.has_class(HAS_CURRENT_SUBMENU);
        node.remove(&[CURRENT]);
        if had_current_submenu || declared.contains(&index) {
            node.remove(&[HAS_CURRENT_SUBMENU, MENU_OPEN, SELECTED]);
            node.add(&[NOT_CURRENT_SUBMENU, MENU_TOP]);
        }
    }

    let current_items: Vec<usize> = tree
        .nodes
        .iter()
        .filter(|node| node.tag == NodeTag::Anchor)
        .filter(|node| node.href.as_deref().is_some_and(|href| links_to(href, url)))
        .filter_map(|node| node.parent)
        .filter(|parent| tree.nodes[*parent].tag == NodeTag::Li)
        .collect();
    for parent in current_items {
        next.nodes[parent].add(&[CURRENT]);
    }

    if let Some(id) = page.wp_open_menu {
        if let Some(index) = tree.find_by_id(id) {
            let menu = &mut next.nodes[index];
            menu.remove(&[NOT_CURRENT_SUBMENU]);
            menu.add(&[HAS_CURRENT_SUBMENU, MENU_OPEN, CURRENT]);
        }
    }

    if let Some(id) = page.wp_closed_menu {
        if let Some(index) = tree.find_by_id(id) {
            let menu = &mut next.nodes[index];
            menu.remove(&[HAS_CURRENT_SUBMENU, MENU_OPEN]);
            menu.add(&[NOT_CURRENT_SUBMENU]);
        }
    }

    match tree.find_by_id(WRAPPER_ID) {
        Some(index) => next.nodes[index].remove(&[RESPONSIVE_OPEN]),
        None => warn_missing(WRAPPER_ID),
    }

    let class_changes = tree
        .nodes
        .iter()
        .zip(&next.nodes)
        .enumerate()
        .filter(|(_, (before, after))| before.classes != after.classes)
        .map(|(node, (_, after))| ClassChange {
            node,
            classes: after.classes.clone(),
        })
        .collect();

    MenuPatch {
        class_changes,
        ..Default::default()
    }
}

/// Новый href ссылки меню с сохраняемыми параметрами запроса.
///
/// `None` для ссылок не на страницы приложения. Для исключённых screen запрос
/// ссылки остаётся как есть.
pub fn update_link_href(
    href: &str,
    next_query: &Query,
    excluded_screens: &[String],
) -> Option<String> {
    let mut query = wc_admin_query(href)?;
    let path = query
        .get("path")
        .cloned()
        .unwrap_or_else(|| DEFAULT_SCREEN.to_string());
    let screen = path.replacen("/analytics", "", 1).replacen('/', "", 1);

    if !excluded_screens.iter().any(|s| *s == screen) {
        query.extend(next_query.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    Some(format!("{}?{}", ADMIN_PAGE, stringify_query(&query)))
}

/// Ссылки внутри раскрытого и свёрнутого меню страницы
pub fn plan_link_updates(
    tree: &MenuTree,
    page: &Page,
    next_query: &Query,
    excluded_screens: &[String],
) -> MenuPatch {
    let menus: Vec<usize> = page
        .menu_ids()
        .filter_map(|id| {
            let found = tree.find_by_id(id);
            if found.is_none() {
                warn_missing(id);
            }
            found
        })
        .collect();

    let mut patch = MenuPatch::default();
    for (index, node) in tree.nodes.iter().enumerate() {
        if node.tag != NodeTag::Anchor || !menus.iter().any(|m| tree.is_descendant_of(index, *m)) {
            continue;
        }
        let Some(href) = node
            .href
            .as_deref()
            .and_then(|href| update_link_href(href, next_query, excluded_screens))
        else {
            continue;
        };
        if node.href.as_deref() != Some(href.as_str()) {
            patch.href_changes.push(HrefChange { node: index, href });
        }
        patch.links.push(index);
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::controller::pages::{PageContainer, ANALYTICS_MENU, WOOCOMMERCE_MENU};

    fn analytics_page() -> Page {
        Page {
            container: PageContainer::AnalyticsReport,
            path: "/analytics/:report",
            wp_open_menu: Some(ANALYTICS_MENU),
            wp_closed_menu: Some(WOOCOMMERCE_MENU),
        }
    }

    fn dashboard_page() -> Page {
        Page {
            container: PageContainer::Dashboard,
            path: "/",
            wp_open_menu: Some(WOOCOMMERCE_MENU),
            wp_closed_menu: Some(ANALYTICS_MENU),
        }
    }

    /// Меню хоста: WooCommerce (открыто) и Analytics с подпунктами
    fn host_menu() -> (MenuTree, usize, usize, usize) {
        let mut tree = MenuTree::default();
        tree.push(
            MenuNode::new(NodeTag::Other, None)
                .with_id(WRAPPER_ID)
                .with_classes("wp-responsive-open"),
        );
        let root = tree.push(MenuNode::new(NodeTag::Other, None).with_id("adminmenu"));

        let woo = tree.push(
            MenuNode::new(NodeTag::Li, Some(root))
                .with_id(WOOCOMMERCE_MENU)
                .with_classes("wp-has-current-submenu wp-menu-open menu-top"),
        );
        let woo_home = tree.push(MenuNode::new(NodeTag::Li, Some(woo)).with_classes("current"));
        tree.push(
            MenuNode::new(NodeTag::Anchor, Some(woo_home)).with_href("admin.php?page=wc-admin"),
        );

        let analytics = tree.push(
            MenuNode::new(NodeTag::Li, Some(root))
                .with_id(ANALYTICS_MENU)
                .with_classes("wp-not-current-submenu menu-top"),
        );
        let revenue = tree.push(MenuNode::new(NodeTag::Li, Some(analytics)));
        tree.push(
            MenuNode::new(NodeTag::Anchor, Some(revenue))
                .with_href("admin.php?page=wc-admin&path=%2Fanalytics%2Frevenue"),
        );
        let orders = tree.push(MenuNode::new(NodeTag::Li, Some(analytics)));
        tree.push(
            MenuNode::new(NodeTag::Anchor, Some(orders))
                .with_href("admin.php?page=wc-admin&path=%2Fanalytics%2Forders"),
        );
        let settings = tree.push(MenuNode::new(NodeTag::Li, Some(analytics)));
        tree.push(
            MenuNode::new(NodeTag::Anchor, Some(settings))
                .with_href("admin.php?page=wc-admin&path=%2Fanalytics%2Fsettings"),
        );
        tree.push(
            MenuNode::new(NodeTag::Anchor, Some(analytics)).with_href("edit.php?post_type=product"),
        );

        (tree, woo_home, orders, analytics)
    }

    fn synced(tree: &MenuTree, page: &Page, url: &str) -> MenuTree {
        let mut next = tree.clone();
        next.apply(&plan_class_change(tree, page, url));
        next
    }

    #[test]
    fn test_marks_current_report() {
        let (tree, woo_home, orders, analytics) = host_menu();
        let next = synced(&tree, &analytics_page(), "/analytics/orders");

        assert!(next.nodes[orders].has_class(CURRENT));
        assert!(!next.nodes[woo_home].has_class(CURRENT));

        let menu = &next.nodes[analytics];
        assert!(menu.has_class(HAS_CURRENT_SUBMENU));
        assert!(menu.has_class(MENU_OPEN));
        assert!(menu.has_class(CURRENT));
        assert!(!menu.has_class(NOT_CURRENT_SUBMENU));

        let woo = &next.nodes[tree.find_by_id(WOOCOMMERCE_MENU).unwrap()];
        assert!(woo.has_class(NOT_CURRENT_SUBMENU));
        assert!(woo.has_class(MENU_TOP));
        assert!(!woo.has_class(MENU_OPEN));
        assert!(!woo.has_class(HAS_CURRENT_SUBMENU));

        let wrap = &next.nodes[tree.find_by_id(WRAPPER_ID).unwrap()];
        assert!(!wrap.has_class(RESPONSIVE_OPEN));
    }

    #[test]
    fn test_root_matches_exactly() {
        let (tree, woo_home, orders, _) = host_menu();
        let after_report = synced(&tree, &analytics_page(), "/analytics/orders");
        let next = synced(&after_report, &dashboard_page(), "/");

        assert!(next.nodes[woo_home].has_class(CURRENT));
        assert!(!next.nodes[orders].has_class(CURRENT));
    }

    #[test]
    fn test_class_sync_is_idempotent() {
        let (tree, ..) = host_menu();
        let page = analytics_page();
        let once = synced(&tree, &page, "/analytics/orders");
        let twice = synced(&once, &page, "/analytics/orders");
        assert_eq!(once, twice);
        assert!(plan_class_change(&once, &page, "/analytics/orders").is_empty());
    }

    #[test]
    fn test_missing_menu_is_skipped() {
        let mut tree = MenuTree::default();
        let li = tree.push(MenuNode::new(NodeTag::Li, None));
        tree.push(MenuNode::new(NodeTag::Anchor, Some(li)).with_href("admin.php?page=wc-admin"));

        let next = synced(&tree, &dashboard_page(), "/");
        assert!(next.nodes[li].has_class(CURRENT));
    }

    fn excluded(screens: &[&str]) -> Vec<String> {
        screens.iter().map(|s| s.to_string()).collect()
    }

    fn period_query() -> Query {
        Query::from([("period".to_string(), "month".to_string())])
    }

    #[test]
    fn test_excluded_screen_keeps_query() {
        let href = "admin.php?page=wc-admin&path=%2Fanalytics%2Fsettings";
        let updated = update_link_href(href, &period_query(), &excluded(&["settings"])).unwrap();
        let query = wc_admin_query(&updated).unwrap();
        assert_eq!(query.get("path").map(String::as_str), Some("/analytics/settings"));
        assert!(!query.contains_key("period"));
    }

    #[test]
    fn test_screen_merges_persisted_query() {
        let href = "admin.php?page=wc-admin&path=%2Fanalytics%2Fsettings";
        let updated = update_link_href(href, &period_query(), &excluded(&["devdocs"])).unwrap();
        let query = wc_admin_query(&updated).unwrap();
        assert_eq!(query.get("period").map(String::as_str), Some("month"));
        assert_eq!(query.get("page").map(String::as_str), Some("wc-admin"));
    }

    #[test]
    fn test_dashboard_is_default_screen() {
        let updated = update_link_href(
            "admin.php?page=wc-admin",
            &period_query(),
            &excluded(&["dashboard"]),
        )
        .unwrap();
        assert!(!wc_admin_query(&updated).unwrap().contains_key("period"));
    }

    #[test]
    fn test_foreign_links_are_ignored() {
        assert!(update_link_href("edit.php?post_type=product", &period_query(), &[]).is_none());
        assert!(update_link_href("admin.php?page=wc-settings", &period_query(), &[]).is_none());
    }

    #[test]
    fn test_plan_link_updates() {
        let (tree, ..) = host_menu();
        let patch = plan_link_updates(
            &tree,
            &analytics_page(),
            &period_query(),
            &excluded(&["settings"]),
        );

        // Главная, revenue и orders получают period; settings исключён,
        // ссылка на товары не относится к приложению
        assert_eq!(patch.links.len(), 4);

        let mut next = tree.clone();
        next.apply(&patch);
        let periods: Vec<bool> = patch
            .links
            .iter()
            .map(|i| {
                let query = wc_admin_query(next.nodes[*i].href.as_deref().unwrap()).unwrap();
                query.contains_key("period")
            })
            .collect();
        assert_eq!(periods, vec![true, true, true, false]);

        let again = plan_link_updates(
            &next,
            &analytics_page(),
            &period_query(),
            &excluded(&["settings"]),
        );
        assert!(again.href_changes.is_empty());
        assert_eq!(again.links, patch.links);
    }

    #[test]
    fn test_rewritten_links_still_mark_current() {
        let (tree, _, orders, _) = host_menu();
        let page = analytics_page();
        let mut next = tree.clone();
        next.apply(&plan_link_updates(&tree, &page, &period_query(), &[]));
        let next = synced(&next, &page, "/analytics/orders");
        assert!(next.nodes[orders].has_class(CURRENT));
    }
}
