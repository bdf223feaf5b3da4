//! Navigation blocks. One entry point, three variants selected by the module type:
//! a top header bar, a collapsible sidebar, and a bare link bar.

use crate::ast::{ModuleType, UiModule};
use crate::generators::js_string;
use crate::markup::Element;
use crate::props::{default_links, lenient, module_props, Link, Logo, UserMenu};
use log::warn;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderProps {
    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<Logo>,
    #[serde(default, deserialize_with = "lenient")]
    pub links: Option<Vec<Link>>,
    #[serde(default, deserialize_with = "lenient")]
    pub show_search: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub search_placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_menu: Option<UserMenu>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SidebarProps {
    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<Logo>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Vec<Link>>,
    #[serde(default, deserialize_with = "lenient")]
    pub groups: Option<Vec<SidebarGroup>>,
    #[serde(default, deserialize_with = "lenient")]
    pub footer: Option<SidebarFooter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SidebarGroup {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Vec<Link>>,
    #[serde(default, deserialize_with = "lenient")]
    pub collapsed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarFooter {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_menu: Option<UserMenu>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BarProps {
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Vec<Link>>,
}

pub fn generate(module: &UiModule) -> Element {
    match &module.module_type {
        ModuleType::NavigationHeader => header(module).0,
        ModuleType::NavigationSidebar => sidebar(module),
        ModuleType::Navigation => bar(module),
        other => {
            warn!("Module '{}' of type {other} rendered as a navigation bar", module.id);
            bar(module)
        }
    }
}

/// The header bar, and whether it renders a search input (on unless `showSearch` is `false`).
pub fn header(module: &UiModule) -> (Element, bool) {
    let props: HeaderProps = module_props(module);
    let links = props
        .links
        .unwrap_or_else(|| default_links(&[("Home", "/"), ("Features", "#features"), ("Pricing", "#pricing")]));

    let search_enabled = props.show_search != Some(false);
    let search = search_enabled.then(|| {
        Element::new("Input")
            .attr("type", "search")
            .attr("placeholder", props.search_placeholder.as_deref().unwrap_or("Search..."))
            .class("w-64")
    });

    let element = Element::root("header", &module.id, module.module_type.as_str())
        .class("sticky top-0 z-50 w-full border-b bg-background")
        .child(
            Element::new("div")
                .class("container mx-auto flex h-16 items-center justify-between px-4")
                .child(logo_link(props.logo.as_ref(), module.title()))
                .child(
                    Element::new("nav")
                        .class("hidden items-center gap-6 md:flex")
                        .children(links.iter().map(|link| {
                            Element::new("a")
                                .attr("href", link.href())
                                .class("text-sm font-medium transition-colors hover:text-primary")
                                .text(link.label())
                        })),
                )
                .child(
                    Element::new("div")
                        .class("flex items-center gap-4")
                        .child_opt(search)
                        .child_opt(props.user_menu.as_ref().map(user_button)),
                ),
        );
    (element, search_enabled)
}

fn logo_link(logo: Option<&Logo>, title: Option<&str>) -> Element {
    let href = logo.and_then(|l| l.href.as_deref()).unwrap_or("/");
    let text = logo
        .and_then(|l| l.text.as_deref())
        .or(title)
        .unwrap_or("Brand");
    let link = Element::new("a")
        .attr("href", href)
        .class("flex items-center gap-2 text-xl font-bold");
    match logo.and_then(|l| l.src.as_deref()) {
        Some(src) => link.child(
            Element::new("img")
                .attr("src", src)
                .attr("alt", logo.and_then(|l| l.alt.as_deref()).unwrap_or(text))
                .class("h-8 w-auto"),
        ),
        None => link.text(text),
    }
}

fn avatar(menu: &UserMenu) -> Element {
    match &menu.avatar {
        Some(src) => Element::new("img")
            .attr("src", src.as_str())
            .attr("alt", menu.name())
            .class("h-8 w-8 rounded-full object-cover"),
        None => Element::new("span")
            .class("flex h-8 w-8 items-center justify-center rounded-full bg-primary text-sm font-medium text-primary-foreground")
            .text(menu.initials()),
    }
}

fn user_button(menu: &UserMenu) -> Element {
    Element::new("button")
        .attr("type", "button")
        .attr("aria-label", menu.name())
        .class("rounded-full")
        .child(avatar(menu))
}

fn sidebar(module: &UiModule) -> Element {
    let props: SidebarProps = module_props(module);
    let items = props.items.unwrap_or_else(|| {
        default_links(&[("Dashboard", "/"), ("Projects", "/projects"), ("Settings", "/settings")])
    });
    let groups = props.groups.unwrap_or_default();

    let brand = (props.logo.is_some() || module.title().is_some()).then(|| {
        Element::new("div")
            .class("flex h-16 items-center border-b px-6")
            .child(logo_link(props.logo.as_ref(), module.title()))
    });

    let nav = Element::new("nav")
        .class("flex-1 space-y-1 overflow-y-auto p-4")
        .children(items.iter().map(sidebar_link))
        .children(
            groups
                .iter()
                .enumerate()
                .map(|(index, group)| sidebar_group(&module.id, index, group)),
        );

    Element::root("aside", &module.id, module.module_type.as_str())
        .class("flex h-screen w-64 flex-col border-r bg-background")
        .child_opt(brand)
        .child(nav)
        .child_opt(props.footer.as_ref().map(sidebar_footer))
}

fn sidebar_link(link: &Link) -> Element {
    Element::new("a")
        .attr("href", link.href())
        .class("flex items-center gap-3 rounded-md px-3 py-2 text-sm hover:bg-accent")
        .child_opt(
            link.icon
                .as_deref()
                .map(|icon| Element::new("span").class("h-4 w-4").text(icon)),
        )
        .child(Element::new("span").text(link.label()))
}

/// A group header toggling its submenu by element id. Collapsed unless `collapsed` is `false`.
fn sidebar_group(module_id: &str, index: usize, group: &SidebarGroup) -> Element {
    let key = group.id.clone().unwrap_or_else(|| index.to_string());
    let submenu_id = format!("{module_id}-group-{key}");
    let collapsed = group.collapsed != Some(false);
    let items = group.items.as_deref().unwrap_or_default();

    let submenu_class = if collapsed {
        "ml-4 mt-1 hidden space-y-1"
    } else {
        "ml-4 mt-1 space-y-1"
    };

    Element::new("div")
        .class("pt-2")
        .child(
            Element::new("button")
                .attr("type", "button")
                .class("flex w-full items-center justify-between rounded-md px-3 py-2 text-sm font-semibold hover:bg-accent")
                .expr(
                    "onClick",
                    format!(
                        "() => document.getElementById({})?.classList.toggle(\"hidden\")",
                        js_string(&submenu_id)
                    ),
                )
                .attr("aria-controls", submenu_id.as_str())
                .child(Element::new("span").text(group.label.as_deref().unwrap_or("Group")))
                .child(Element::new("span").attr("aria-hidden", "true").text("▾")),
        )
        .child(
            Element::new("div")
                .attr("id", submenu_id.as_str())
                .class(submenu_class)
                .children(items.iter().map(sidebar_link)),
        )
}

fn sidebar_footer(footer: &SidebarFooter) -> Element {
    let user = footer.user_menu.as_ref().map(|menu| {
        Element::new("div")
            .class("flex items-center gap-3")
            .child(avatar(menu))
            .child(
                Element::new("div")
                    .class("text-sm")
                    .child(Element::new("p").class("font-medium").text(menu.name()))
                    .child_opt(menu.email.as_deref().map(|email| {
                        Element::new("p").class("text-muted-foreground").text(email)
                    })),
            )
    });

    Element::new("div")
        .class("border-t p-4")
        .child_opt(
            footer
                .text
                .as_deref()
                .map(|text| Element::new("p").class("mb-2 text-xs text-muted-foreground").text(text)),
        )
        .child_opt(user)
}

fn bar(module: &UiModule) -> Element {
    let props: BarProps = module_props(module);
    let items = props
        .items
        .unwrap_or_else(|| default_links(&[("Home", "/"), ("About", "/about"), ("Contact", "/contact")]));

    Element::root("nav", &module.id, module.module_type.as_str())
        .class("flex items-center gap-6 border-b p-4")
        .child_opt(
            module
                .title()
                .map(|title| Element::new("span").class("mr-auto font-bold").text(title)),
        )
        .children(items.iter().map(|link| {
            Element::new("a")
                .attr("href", link.href())
                .class("text-sm font-medium hover:text-primary")
                .text(link.label())
        }))
}
