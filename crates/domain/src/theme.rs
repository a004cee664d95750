//! Branding for one portal deployment: texts, background, stylesheets and
//! the market ticker embed.

use serde::Deserialize;

/// Script that turns the ticker JSON config into the ticker tape widget.
pub const TICKER_SCRIPT_URL: &str =
    "https://s3.tradingview.com/external-embedding/embed-widget-ticker-tape.js";

/// Portal branding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Document title.
    pub title: String,
    /// Large logo text in the top bar.
    pub brand: String,
    /// Small spaced-out text under the logo.
    pub brand_tagline: String,
    /// Optional environment pill next to the logo (e.g. `STAGING`).
    pub environment: Option<String>,
    pub footer_left: String,
    pub footer_right: String,
    /// Page background image URL.
    pub background_image: String,
    /// External stylesheets linked from the page head.
    pub stylesheets: Vec<String>,
    pub ticker: Ticker,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "SciTech Lab".to_string(),
            brand: "SCITECH".to_string(),
            brand_tagline: "INVESTMENTS".to_string(),
            environment: None,
            footer_left: "SciTech Lab".to_string(),
            footer_right: "Docs / Runbooks · Changelog · System Status".to_string(),
            background_image: "/assets/bg_scitech_map.png".to_string(),
            stylesheets: vec![
                "https://cdn.jsdelivr.net/npm/bootswatch@5.3.3/dist/slate/bootstrap.min.css"
                    .to_string(),
                "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css"
                    .to_string(),
            ],
            ticker: Ticker::default(),
        }
    }
}

/// Third-party market ticker shown in the top bar.
///
/// On narrow screens the ticker is hidden and a "Markets" pill linking to
/// [`markets_url`](Self::markets_url) is shown instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Ticker {
    pub enabled: bool,
    pub symbols: Vec<TickerSymbol>,
    /// `dark` or `light`.
    pub color_theme: String,
    pub locale: String,
    pub markets_url: String,
}

impl Default for Ticker {
    fn default() -> Self {
        Self {
            enabled: true,
            symbols: vec![
                TickerSymbol::new("SP:SPX", "SPX"),
                TickerSymbol::new("NASDAQ:NDX", "NDX"),
                TickerSymbol::new("TVC:DXY", "DXY"),
                TickerSymbol::new("CBOE:VIX", "VIX"),
            ],
            color_theme: "dark".to_string(),
            locale: "en".to_string(),
            markets_url: "https://www.tradingview.com/markets/indices/".to_string(),
        }
    }
}

/// One instrument on the ticker tape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TickerSymbol {
    /// Exchange-qualified symbol (e.g. `SP:SPX`).
    pub pro_name: String,
    /// Short label.
    pub title: String,
}

impl TickerSymbol {
    #[must_use]
    pub fn new(pro_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            pro_name: pro_name.into(),
            title: title.into(),
        }
    }
}

impl Ticker {
    /// Widget configuration consumed by the embed script.
    #[must_use]
    pub fn widget_config_json(&self) -> String {
        let symbols: Vec<_> = self
            .symbols
            .iter()
            .map(|symbol| {
                serde_json::json!({
                    "proName": symbol.pro_name,
                    "title": symbol.title,
                })
            })
            .collect();

        serde_json::json!({
            "symbols": symbols,
            "colorTheme": self.color_theme,
            "isTransparent": true,
            "displayMode": "adaptive",
            "locale": self.locale,
        })
        .to_string()
    }

    /// Standalone HTML document for the ticker iframe's `srcdoc`.
    ///
    /// The result is raw HTML; the caller escapes it for the attribute.
    #[must_use]
    pub fn srcdoc(&self) -> String {
        // Keep the JSON from closing the inline script early.
        let config = self.widget_config_json().replace("</", "<\\/");
        format!(
            "<!DOCTYPE html><html><body style=\"margin:0;background:transparent;\">\
             <script src=\"{TICKER_SCRIPT_URL}\">{config}</script></body></html>"
        )
    }
}
