//! Browser glue: the HTTP guide source, the body class list and navigation.

use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use guidedir_core::transition::{self, BodyClasses};
use guidedir_core::{GuideError, GuideResult, GuideSource, PageOrigin, SourceResponse};
use web_sys::DomTokenList;

/// GET of the guide list, relative to the current page.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl GuideSource for HttpSource {
    async fn fetch(&self) -> GuideResult<SourceResponse> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| GuideError::Request(e.to_string()))?;

        if !response.ok() {
            return Ok(SourceResponse::status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GuideError::Request(e.to_string()))?;
        Ok(SourceResponse {
            status: response.status(),
            body,
        })
    }
}

/// `document.body.classList`.
pub struct BodyClassList(DomTokenList);

impl BodyClassList {
    pub fn current() -> Option<Self> {
        gloo::utils::document()
            .body()
            .map(|body| Self(body.class_list()))
    }
}

impl BodyClasses for BodyClassList {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn add(&mut self, class: &str) {
        if let Err(err) = self.0.add_1(class) {
            tracing::warn!(class, ?err, "Failed to add body class");
        }
    }

    fn remove(&mut self, class: &str) {
        if let Err(err) = self.0.remove_1(class) {
            tracing::warn!(class, ?err, "Failed to remove body class");
        }
    }
}

/// Whether the page is served or was opened from disk.
pub fn page_origin() -> PageOrigin {
    gloo::utils::window()
        .location()
        .protocol()
        .map(|protocol| PageOrigin::from_protocol(&protocol))
        .unwrap_or_default()
}

/// Fade the page out, then navigate to `href`.
pub fn navigate_with_exit(href: String) {
    let Some(mut body) = BodyClassList::current() else {
        navigate(&href);
        return;
    };
    let delay = transition::begin_exit(&mut body);
    Timeout::new(delay.as_millis() as u32, move || navigate(&href)).forget();
}

/// `pageshow` handler: replay the entering state after a back/forward restore.
pub fn handle_page_show() {
    let Some(mut body) = BodyClassList::current() else {
        return;
    };
    if let Some(duration) = transition::on_page_show(&mut body) {
        Timeout::new(duration.as_millis() as u32, move || {
            if let Some(mut body) = BodyClassList::current() {
                transition::finish_enter(&mut body);
            }
        })
        .forget();
    }
}

fn navigate(href: &str) {
    if let Err(err) = gloo::utils::window().location().set_href(href) {
        tracing::error!(href, ?err, "Navigation failed");
    }
}
