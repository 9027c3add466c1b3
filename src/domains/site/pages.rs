//! Page composition.
//!
//! [`Site`] turns a request path into a full HTML document: it mounts a
//! navigation controller for the page, loads content, and applies the
//! missing-content policy. It knows nothing about the HTTP server.

use maud::{Markup, html};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::copy::{Messages, PageCopy};
use super::error::SiteError;
use super::layout::{PageLocale, PageMeta, document, hero, search_box};
use super::routes::SiteRoute;
use super::submit::{FieldError, Submission, SubmissionCategory};
use crate::core::config::{Config, MissingContentPolicy};
use crate::domains::catalog::{Category, CatalogError, ContentStore, Locale, search_tools};
use crate::domains::listing::{
    RenderContext, category_list, empty_state, search_results, tools_list, tools_page,
};
use crate::domains::navigation::{
    AuthChecker, HttpAuthChecker, NavigationController, StaticAuthChecker,
};

/// Outcome class of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    Error,
}

impl PageStatus {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Unprocessable => 422,
            Self::Error => 500,
        }
    }
}

/// A rendered page.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: PageStatus,
    pub html: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// The website.
#[derive(Clone)]
pub struct Site {
    config: Arc<Config>,
    store: ContentStore,
    client: reqwest::Client,
}

impl Site {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            store: ContentStore::new(&config.content),
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the page at `path` for a GET request.
    #[instrument(skip(self, query, cookie))]
    pub async fn get(
        &self,
        path: &str,
        query: Option<&str>,
        cookie: Option<String>,
    ) -> PageResponse {
        let default_locale = self.config.content.default_locale;
        let Some((locale, route)) = SiteRoute::parse(path, default_locale) else {
            return self.unrouted(path, cookie).await;
        };
        let page = self.page_locale(locale);
        let nav = self.mount_navigation(&route, cookie);
        let messages = page.messages;

        let (meta, body) = match &route {
            SiteRoute::AiTools => (
                meta_for(&messages.ai_tools),
                self.catalog_body(page, &messages.ai_tools, &self.config.content.ai_index),
            ),
            SiteRoute::DigiTools => (
                meta_for(&messages.digi_tools),
                self.catalog_body(page, &messages.digi_tools, &self.config.content.digi_index),
            ),
            SiteRoute::Category(link) => self.category_body(page, link),
            SiteRoute::Search => {
                let query: SearchQuery =
                    serde_urlencoded::from_str(query.unwrap_or_default()).unwrap_or_default();
                let title = format!("{} - {}", messages.search_title, self.config.server.name);
                (PageMeta::new(title), self.search_body(page, &query.q))
            }
            SiteRoute::SubmitTool => (
                PageMeta::new(messages.submit_title).description(messages.submit_description),
                Ok(submit_body(page, &Submission::default(), &[], false)),
            ),
            SiteRoute::Article => (
                PageMeta::new(messages.nav_article),
                Ok(placeholder_body(page, messages.nav_article)),
            ),
            SiteRoute::Changelog => (
                PageMeta::new(messages.nav_changelog),
                Ok(placeholder_body(page, messages.nav_changelog)),
            ),
        };

        self.finish(page, &meta, nav, body, PageStatus::Ok).await
    }

    /// Handle a POST to `path`. Only the submit-tool form accepts posts.
    #[instrument(skip(self, body, cookie))]
    pub async fn post(&self, path: &str, body: &[u8], cookie: Option<String>) -> PageResponse {
        let default_locale = self.config.content.default_locale;
        let (locale, route) = match SiteRoute::parse(path, default_locale) {
            Some((locale, SiteRoute::SubmitTool)) => (locale, SiteRoute::SubmitTool),
            Some((locale, route)) => {
                let page = self.page_locale(locale);
                let nav = self.mount_navigation(&route, cookie);
                let failure = SiteError::MethodNotAllowed;
                return self
                    .finish(page, &PageMeta::new("405"), nav, Err(failure), PageStatus::Ok)
                    .await;
            }
            None => return self.unrouted(path, cookie).await,
        };

        let page = self.page_locale(locale);
        let nav = self.mount_navigation(&route, cookie);
        let messages = page.messages;
        let meta = PageMeta::new(messages.submit_title).description(messages.submit_description);

        let form = match Submission::from_form(body) {
            Ok(form) => form,
            Err(e) => {
                warn!("Unreadable submission body: {}", e);
                Submission::default()
            }
        };

        let errors = form.validate();
        if errors.is_empty() {
            info!(
                tool = %form.tool_name.trim(),
                url = %form.tool_url.trim(),
                category = %form.tool_category,
                "Tool submission received"
            );
            let body = submit_body(page, &Submission::default(), &[], true);
            self.finish(page, &meta, nav, Ok(body), PageStatus::Ok).await
        } else {
            let body = submit_body(page, &form, &errors, false);
            self.finish(page, &meta, nav, Ok(body), PageStatus::Unprocessable)
                .await
        }
    }

    fn page_locale(&self, locale: Locale) -> PageLocale<'static> {
        PageLocale {
            locale,
            default_locale: self.config.content.default_locale,
            messages: Messages::for_locale(locale),
        }
    }

    fn auth_checker(&self, cookie: Option<String>) -> Arc<dyn AuthChecker> {
        match &self.config.navigation.auth_endpoint {
            Some(endpoint) => Arc::new(
                HttpAuthChecker::new(self.client.clone(), endpoint.clone()).with_cookie(cookie),
            ),
            None => Arc::new(StaticAuthChecker(false)),
        }
    }

    fn mount_navigation(&self, route: &SiteRoute, cookie: Option<String>) -> NavigationController {
        let mut nav = NavigationController::new(route.pathname());
        nav.mount(self.auth_checker(cookie));
        nav
    }

    async fn unrouted(&self, path: &str, cookie: Option<String>) -> PageResponse {
        let default_locale = self.config.content.default_locale;
        // keep the locale of a prefixed unknown path for the error page
        let locale = path
            .split('/')
            .find(|s| !s.is_empty())
            .and_then(Locale::from_code)
            .unwrap_or(default_locale);
        let page = self.page_locale(locale);
        let mut nav = NavigationController::new(path);
        nav.mount(self.auth_checker(cookie));
        let failure = SiteError::not_found(page.messages.not_found);
        self.finish(page, &PageMeta::new("404"), nav, Err(failure), PageStatus::Ok)
            .await
    }

    /// Wait for the auth check (bounded), then wrap the body in the
    /// document. The controller is unmounted when dropped here.
    async fn finish(
        &self,
        page: PageLocale<'_>,
        meta: &PageMeta,
        nav: NavigationController,
        body: Result<Markup, SiteError>,
        ok_status: PageStatus,
    ) -> PageResponse {
        nav.wait_for_auth(self.config.navigation.auth_wait).await;

        let (status, meta, body) = match body {
            Ok(body) => (ok_status, meta.clone(), body),
            Err(failure) => {
                let status = failure.status();
                let title = format!("{} - {}", status.code(), self.config.server.name);
                (status, PageMeta::new(title), error_body(page, &failure))
            }
        };

        PageResponse {
            status,
            html: document(&self.config, page, &meta, &nav, body).into_string(),
        }
    }

    fn render_context<'a>(&'a self, page: PageLocale<'a>) -> RenderContext<'a> {
        RenderContext {
            listing: &self.config.listing,
            messages: page.messages,
            locale: page.locale,
            default_locale: page.default_locale,
        }
    }

    /// Apply the missing-content policy. `Ok(None)` means "render empty".
    fn settle<T>(&self, result: Result<T, CatalogError>) -> Result<Option<T>, SiteError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => match self.config.content.missing_content {
                MissingContentPolicy::Empty => {
                    warn!("Rendering empty state: {}", e);
                    Ok(None)
                }
                MissingContentPolicy::Error => Err(e.into()),
            },
            Err(e) => {
                error!("Failed to load content: {}", e);
                Err(e.into())
            }
        }
    }

    fn catalog_body(
        &self,
        page: PageLocale<'_>,
        copy: &PageCopy,
        index: &str,
    ) -> Result<Markup, SiteError> {
        let ctx = self.render_context(page);
        // "more" links resolve across every index
        self.all_categories(page.locale)?;
        let categories = self.settle(self.store.load_categories(page.locale, index))?;

        let mut sections = Vec::new();
        for category in categories.iter().flatten() {
            let tools = self.settle(self.store.load_tools(&category.src, page.locale))?;
            let section = match tools {
                Some(tools) => tools_list(category, &tools, true, &ctx),
                None => html! {
                    section class="tools-list" id=(category.link) {
                        h2 { (category.name) }
                        (empty_state(page.messages.empty))
                    }
                },
            };
            sections.push(section);
        }

        Ok(html! {
            (hero(page, copy.h1, copy.h2, copy.description, ""))
            @if categories.is_none() {
                (empty_state(page.messages.empty))
            }
            @for section in &sections {
                (section)
            }
        })
    }

    fn category_body(
        &self,
        page: PageLocale<'_>,
        link: &str,
    ) -> (PageMeta, Result<Markup, SiteError>) {
        let ctx = self.render_context(page);
        let indexes = self.config.content.indexes();
        let category = match self.store.find_category(page.locale, &indexes, link) {
            Ok(category) => category,
            Err(e) if e.is_not_found() => {
                let failure = SiteError::not_found(page.messages.not_found);
                return (PageMeta::new("404"), Err(failure));
            }
            Err(e) => {
                error!("Failed to load category '{}': {}", link, e);
                return (PageMeta::new("500"), Err(e.into()));
            }
        };

        let meta = PageMeta::new(format!("{} - {}", category.name, self.config.server.name))
            .description(category.description.clone());

        let body = self
            .settle(self.store.load_tools(&category.src, page.locale))
            .map(|tools| {
                html! {
                    section class="hero" {
                        h1 { (category.name) }
                        p { (category.description) }
                    }
                    @match tools {
                        Some(tools) => { (tools_page(&tools, &ctx)) }
                        None => { (empty_state(page.messages.empty)) }
                    }
                }
            });

        (meta, body)
    }

    fn search_body(&self, page: PageLocale<'_>, query: &str) -> Result<Markup, SiteError> {
        let ctx = self.render_context(page);
        let indexes = self.config.content.indexes();
        let hits = search_tools(&self.store, page.locale, &indexes, query, None).map_err(|e| {
            error!("Search failed: {}", e);
            SiteError::from(e)
        })?;

        // a blank search browses categories instead
        let categories = if query.trim().is_empty() {
            self.all_categories(page.locale)?
        } else {
            Vec::new()
        };

        Ok(html! {
            section class="hero" {
                h1 { (page.messages.search_title) }
                (search_box(page, query))
            }
            @if !categories.is_empty() {
                (category_list(&categories, &ctx))
            } @else if hits.is_empty() {
                (empty_state(page.messages.search_no_results))
            } @else {
                (search_results(&hits, &ctx))
            }
        })
    }

    /// Categories of every index for `locale`; missing indexes are skipped.
    fn all_categories(&self, locale: Locale) -> Result<Vec<Category>, SiteError> {
        let indexes = self.config.content.indexes();
        self.store
            .load_all_categories(locale, &indexes)
            .map_err(|e| {
                error!("Failed to load categories: {}", e);
                SiteError::from(e)
            })
    }
}

fn meta_for(copy: &PageCopy) -> PageMeta {
    PageMeta::new(copy.meta_title).description(copy.meta_description)
}

fn error_body(page: PageLocale<'_>, failure: &SiteError) -> Markup {
    html! {
        section class="hero" {
            h1 { "Error " (failure.status().code()) }
            p { (failure.public_message()) }
            a href=(page.path("/")) { "← " (page.messages.nav_ai_tools) }
        }
    }
}

fn placeholder_body(page: PageLocale<'_>, title: &str) -> Markup {
    html! {
        section class="hero" {
            h1 { (title) }
        }
        (empty_state(page.messages.empty))
    }
}

fn submit_body(
    page: PageLocale<'_>,
    form: &Submission,
    errors: &[FieldError],
    accepted: bool,
) -> Markup {
    let m = page.messages;
    html! {
        section class="hero" {
            h1 { (m.submit_title) }
            p { (m.submit_description) }
        }
        @if accepted {
            p class="notice" role="status" { (m.submit_thanks) }
        }
        @if !errors.is_empty() {
            ul class="errors" role="alert" {
                @for error in errors {
                    li { (error.message(m)) }
                }
            }
        }
        form class="submit-tool" method="post" action=(page.path("/submit-tool")) {
            div {
                label for="toolName" { (m.tool_name) }
                input id="toolName" name="toolName" value=(form.tool_name) placeholder=(m.tool_name_placeholder);
            }
            div {
                label for="toolUrl" { (m.tool_url) }
                input id="toolUrl" name="toolUrl" type="url" value=(form.tool_url) placeholder=(m.tool_url_placeholder);
            }
            div {
                label for="toolDescription" { (m.tool_description) }
                textarea id="toolDescription" name="toolDescription" placeholder=(m.tool_description_placeholder) {
                    (form.tool_description)
                }
            }
            div {
                label for="toolCategory" { (m.tool_category) }
                select id="toolCategory" name="toolCategory" {
                    option value="" { (m.select_category) }
                    @for category in SubmissionCategory::ALL {
                        option value=(category.value()) selected[form.tool_category == category.value()] {
                            (category.label())
                        }
                    }
                }
            }
            button type="submit" { (m.submit) }
        }
    }
}
