//! Document shell: head, header navigation, footer.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::copy::Messages;
use super::routes::SEARCH_PATH;
use crate::core::config::Config;
use crate::domains::catalog::Locale;
use crate::domains::navigation::{AuthState, MenuState, NavigationController, SUBMIT_TOOL_PATH};

/// Page metadata.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Locale and strings of the page being rendered.
#[derive(Debug, Clone, Copy)]
pub struct PageLocale<'a> {
    pub locale: Locale,
    pub default_locale: Locale,
    pub messages: &'a Messages,
}

impl PageLocale<'_> {
    pub fn path(&self, path: &str) -> String {
        self.locale.localize_path(self.default_locale, path)
    }
}

const STYLES: &str = r#"
body { font-family: system-ui, -apple-system, sans-serif; margin: 0; color: #111; }
a { color: #2563eb; text-decoration: none; }
a:hover { color: #1e40af; }
header { position: sticky; top: 0; background: rgba(255,255,255,.95); border-bottom: 1px solid #e5e7eb; }
.bar { display: flex; align-items: center; gap: 1.5rem; height: 3.5rem; padding: 0 1rem; }
.brand { font-weight: 700; color: #111; }
.nav-links { display: flex; gap: 1rem; }
.nav-links a { font-weight: 500; }
.nav-links a.active { font-weight: 800; }
.actions { margin-left: auto; display: flex; gap: .75rem; align-items: center; }
.auth.loading { color: #9ca3af; }
main { max-width: 80rem; margin: 0 auto; padding: 3rem 1rem; }
.hero { text-align: center; margin-bottom: 4rem; }
.hero h1 { font-size: 3rem; letter-spacing: -.05em; }
.search { display: flex; gap: .5rem; justify-content: center; }
.tool-grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.tool-card, .category-card { position: relative; border: 1px solid #e5e7eb; border-radius: .5rem; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.tool-link { display: inline-flex; align-items: center; gap: .25rem; }
.tool-icon { border: 1px solid #e5e7eb; border-radius: .375rem; padding: .25rem; background: #fff; }
.tool-name { margin: 0; text-transform: capitalize; }
.clamp-3, .clamp-2 { display: -webkit-box; -webkit-box-orient: vertical; overflow: hidden; }
.clamp-3 { -webkit-line-clamp: 3; height: 60px; }
.clamp-2 { -webkit-line-clamp: 2; height: 40px; }
.badge { display: inline-block; font-size: .75rem; background: #f3f4f6; border-radius: 9999px; padding: 0 .5rem; margin: .5rem .25rem 0 0; }
.badge.featured { position: absolute; top: .5rem; right: .5rem; margin: 0; }
.empty-state { color: #6b7280; text-align: center; }
.errors { color: #b91c1c; }
.mobile-menu { display: none; }
@media (max-width: 768px) { .nav-links, .desktop { display: none; } .mobile-menu { display: block; } }
"#;

/// Full HTML document around `body`.
pub fn document(
    config: &Config,
    page: PageLocale<'_>,
    meta: &PageMeta,
    nav: &NavigationController,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(page.locale.html_lang()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                @if let Some(description) = &meta.description {
                    meta name="description" content=(description);
                }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (header(config, page, nav))
                main { (body) }
                footer class="bar" {
                    span { "© " (chrono::Utc::now().format("%Y")) " " (config.server.name) }
                }
            }
        }
    }
}

fn header(config: &Config, page: PageLocale<'_>, nav: &NavigationController) -> Markup {
    let entries = nav.entries(page.messages);
    html! {
        header {
            div class="bar" {
                a class="brand" href=(page.path("/")) { (config.server.name) }
                nav class="nav-links" {
                    @for entry in &entries {
                        a class=[entry.active.then_some("active")] href=(page.path(entry.item.href)) {
                            (entry.item.label)
                        }
                    }
                }
                div class="actions" {
                    a class="desktop" href=(page.path(SUBMIT_TOOL_PATH)) { (page.messages.nav_submit_tool) }
                    (locale_switcher(page, nav.pathname()))
                    (auth_fragment(nav.auth(), page.messages))
                    a class="desktop" href=(config.navigation.github_url) target="_blank" rel="noreferrer" {
                        "GitHub"
                    }
                }
            }
            details class="mobile-menu" open[nav.menu() == MenuState::Open] {
                summary { (page.messages.toggle_menu) }
                div class="mobile-links" {
                    a class="brand" href=(page.path("/")) { (config.server.name) }
                    @for entry in &entries {
                        a class=[entry.active.then_some("active")] href=(page.path(entry.item.href)) {
                            (entry.item.label)
                        }
                    }
                    a href=(page.path(SUBMIT_TOOL_PATH)) { (page.messages.nav_submit_tool) }
                    a href=(config.navigation.github_url) target="_blank" rel="noreferrer" { "GitHub" }
                }
            }
        }
    }
}

fn locale_switcher(page: PageLocale<'_>, pathname: &str) -> Markup {
    html! {
        span class="locales" {
            @for locale in Locale::ALL {
                @if locale == page.locale {
                    strong { (locale.code()) }
                } @else {
                    a href=(locale.localize_path(page.default_locale, pathname)) hreflang=(locale.code()) {
                        (locale.code())
                    }
                }
                " "
            }
        }
    }
}

/// The only part of the header that depends on the auth check.
pub fn auth_fragment(auth: AuthState, messages: &Messages) -> Markup {
    html! {
        @match auth {
            AuthState::Checking => {
                span class="auth loading" data-auth="checking" { (messages.auth_loading) }
            }
            AuthState::Authenticated => {
                span class="auth" data-auth="authenticated" { (messages.auth_account) }
            }
            AuthState::Anonymous => {
                span class="auth" data-auth="anonymous" { (messages.auth_sign_in) }
            }
        }
    }
}

/// Heading block with the search box shown on catalog pages.
pub fn hero(page: PageLocale<'_>, h1: &str, h2: &str, description: &str, query: &str) -> Markup {
    html! {
        section class="hero" {
            h1 { (h1) }
            h2 { (h2) }
            p { (description) }
            (search_box(page, query))
        }
    }
}

pub fn search_box(page: PageLocale<'_>, query: &str) -> Markup {
    html! {
        form class="search" method="get" action=(page.path(SEARCH_PATH)) role="search" {
            input type="search" name="q" value=(query) placeholder=(page.messages.search_placeholder);
            button type="submit" { (page.messages.search_button) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageLocale<'static> {
        PageLocale {
            locale: Locale::En,
            default_locale: Locale::En,
            messages: Messages::for_locale(Locale::En),
        }
    }

    #[test]
    fn test_header_marks_only_active_route() {
        let config = Config::default();
        let nav = NavigationController::new("/digi-tools");
        let html = document(&config, page(), &PageMeta::new("t"), &nav, html! {}).into_string();

        assert_eq!(html.matches(r#"class="active""#).count(), 2); // desktop + mobile
        assert!(html.contains(r#"<a class="active" href="/digi-tools">"#));
    }

    #[test]
    fn test_mobile_menu_reflects_state() {
        let config = Config::default();
        let mut nav = NavigationController::new("/");
        let closed = document(&config, page(), &PageMeta::new("t"), &nav, html! {}).into_string();
        assert!(!closed.contains("<details class=\"mobile-menu\" open"));

        nav.toggle_menu();
        let open = document(&config, page(), &PageMeta::new("t"), &nav, html! {}).into_string();
        assert!(open.contains("<details class=\"mobile-menu\" open"));
    }

    #[test]
    fn test_auth_fragment_states() {
        let messages = Messages::for_locale(Locale::En);
        assert!(
            auth_fragment(AuthState::Checking, messages)
                .into_string()
                .contains("checking")
        );
        assert!(
            auth_fragment(AuthState::Anonymous, messages)
                .into_string()
                .contains(messages.auth_sign_in)
        );
    }

    #[test]
    fn test_locale_switcher_links_current_page() {
        let config = Config::default();
        let nav = NavigationController::new("/digi-tools");
        let html = document(&config, page(), &PageMeta::new("t"), &nav, html! {}).into_string();
        assert!(html.contains(r#"href="/zh/digi-tools""#));
    }
}
