//! Launcher page: brand bar, market ticker, target cards and footer.

use askama::Template;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;

use launchpad_domain::card::Card;
use launchpad_domain::page::Page;
use launchpad_domain::theme::Theme;

use crate::state::AppState;

/// Launcher page template.
#[derive(Template)]
#[template(path = "launcher.html")]
pub struct LauncherTemplate<'a> {
    theme: &'a Theme,
    cards: &'a [Card],
    ticker_srcdoc: String,
}

impl<'a> LauncherTemplate<'a> {
    #[must_use]
    pub fn new(page: &'a Page) -> Self {
        Self {
            theme: &page.theme,
            cards: &page.cards,
            ticker_srcdoc: page.theme.ticker.srcdoc(),
        }
    }
}

/// Render the full launcher document.
///
/// # Errors
///
/// Returns the template engine error if rendering fails.
pub fn render(page: &Page) -> Result<String, askama::Error> {
    LauncherTemplate::new(page).render()
}

/// `GET /`: the launcher, served from the copy rendered at startup.
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_domain::status::Availability;
    use launchpad_domain::target::Target;

    fn target(key: &str, url: &str) -> Target {
        Target::builder()
            .key(key)
            .title(format!("{key} title"))
            .subtitle(format!("{key} subtitle"))
            .icon("bi-globe2")
            .url(url)
            .build()
            .unwrap()
    }

    // Older template engines escape '/' inside text and attributes.
    fn render_text(page: &Page) -> String {
        render(page)
            .unwrap()
            .replace("&#x2f;", "/")
            .replace("&#47;", "/")
    }

    #[test]
    fn should_render_enabled_card_as_new_tab_link() {
        let page = Page::new(
            Theme::default(),
            vec![Card::new(
                &target("sigma", "https://sigma.sci-techlab.com"),
                Availability::Available,
            )],
        );
        let html = render_text(&page);
        assert!(html.contains(
            "<a href=\"https://sigma.sci-techlab.com\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
        assert!(html.contains("PROD"));
        assert!(html.contains("badge prod"));
        assert!(html.contains("sigma title"));
        assert!(html.contains("sigma subtitle"));
    }

    #[test]
    fn should_render_disabled_card_without_link() {
        let page = Page::new(
            Theme::default(),
            vec![Card::new(
                &target("atlas", "https://atlas.sci-techlab.com"),
                Availability::Unavailable,
            )],
        );
        let html = render_text(&page);
        assert!(!html.contains("href=\"https://atlas.sci-techlab.com\""));
        assert!(html.contains("COMING SOON"));
        assert!(html.contains("badge soon"));
        assert!(html.contains("sc-card disabled"));
        assert!(html.contains("bi-hourglass-split"));
    }

    #[test]
    fn should_render_brand_and_footer_from_theme() {
        let theme = Theme {
            brand: "GROWISE".to_string(),
            environment: Some("STAGING".to_string()),
            footer_left: "GroWise Portal".to_string(),
            ..Theme::default()
        };
        let html = render_text(&Page::new(theme, vec![]));
        assert!(html.contains("GROWISE"));
        assert!(html.contains("<span class=\"envpill\">STAGING</span>"));
        assert!(html.contains("GroWise Portal"));
    }

    #[test]
    fn should_embed_ticker_as_escaped_srcdoc() {
        let html = render_text(&Page::new(Theme::default(), vec![]));
        assert!(html.contains("class=\"ticker\""));
        assert!(html.contains("srcdoc=\"&lt;!DOCTYPE html&gt;"));
        assert!(html.contains("https://www.tradingview.com/markets/indices/"));
    }

    #[test]
    fn should_omit_ticker_when_disabled() {
        let mut theme = Theme::default();
        theme.ticker.enabled = false;
        let html = render_text(&Page::new(theme, vec![]));
        assert!(!html.contains("class=\"ticker\""));
        assert!(!html.contains("class=\"markets-pill\""));
    }

    #[test]
    fn should_escape_card_text() {
        let mut sigma = target("sigma", "https://sigma.sci-techlab.com");
        sigma.title = "<script>alert(1)</script>".to_string();
        let page = Page::new(
            Theme::default(),
            vec![Card::new(&sigma, Availability::Available)],
        );
        let html = render_text(&page);
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
