//! # Rendering Module
//!
//! Turns library results into terminal text through the embedded templates.
//!
//! Layout calculations (column padding) stay in Rust because they need
//! Unicode-aware widths: star bars and city names are not one byte per column.
//! Templates handle style selection and structure.
//!
//! Color is applied only when stdout supports it; piped output is plain.

use super::styles::{names, Theme, WALLFLOWER_THEME};
use super::templates::{AMENITIES_TEMPLATE, CONFIG_TEMPLATE, MESSAGES_TEMPLATE, RESULTS_TEMPLATE};
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use wallflowerapp::api::{CmdMessage, CmdResult, MessageLevel};
use wallflowerapp::model::{FilterState, DEFAULT_PRICE_MAX};
use wallflowerapp::view::ListingCard;

pub const CLEAR_HINT: &str = "Run `wallflower clear` to reset all filters.";

#[derive(Serialize)]
struct CardLine {
    badge: String,
    name: String,
    /// Spaces that line the city column up across cards.
    name_pad: String,
    city: String,
    stars: String,
    price: String,
    rating: String,
    amenities: String,
}

#[derive(Serialize)]
struct ResultsData {
    summary: String,
    location: String,
    active_filters: Vec<String>,
    empty_message: Option<String>,
    cards: Vec<CardLine>,
    clear_hint: Option<String>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct AmenitiesData {
    amenities: Vec<String>,
}

#[derive(Serialize)]
pub struct ConfigData {
    pub data_dir: String,
    pub config_dir: String,
    pub config_file: String,
    pub config_note: String,
    pub storage_key: String,
    pub catalogue: String,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, Error> {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_color(use_color)
    }

    pub fn with_color(use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_style_filter(&mut env, WALLFLOWER_THEME.clone(), use_color);
        env.add_template("results", RESULTS_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;
        env.add_template("amenities", AMENITIES_TEMPLATE)?;
        env.add_template("config", CONFIG_TEMPLATE)?;
        Ok(Self { env })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let mut output = self.env.get_template(name)?.render(data)?;
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }

    pub fn results(&self, result: &CmdResult) -> Result<String, Error> {
        let data = ResultsData {
            summary: result.summary.clone(),
            location: result.location.clone(),
            active_filters: describe_filters(&result.filters),
            empty_message: result.empty_message.clone(),
            cards: card_lines(&result.listings),
            clear_hint: (!result.clear_disabled).then(|| CLEAR_HINT.to_string()),
        };
        self.render("results", &data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String, Error> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|m| MessageData {
                    content: m.content.clone(),
                    style: level_style(&m.level).to_string(),
                })
                .collect(),
        };
        self.render("messages", &data)
    }

    pub fn amenities(&self, amenities: &[&str]) -> Result<String, Error> {
        let data = AmenitiesData {
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        };
        self.render("amenities", &data)
    }

    pub fn config(&self, data: &ConfigData) -> Result<String, Error> {
        self.render("config", data)
    }
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}

fn level_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn card_lines(cards: &[ListingCard]) -> Vec<CardLine> {
    let widest = cards.iter().map(|c| c.name.width()).max().unwrap_or(0);
    cards
        .iter()
        .map(|c| CardLine {
            badge: format!(" {} ", c.badge),
            name: c.name.clone(),
            name_pad: " ".repeat(widest - c.name.width()),
            city: c.city.clone(),
            stars: c.stars.clone(),
            price: c.price.clone(),
            rating: format!("{} / 5", c.rating),
            amenities: c.amenities.join(" · "),
        })
        .collect()
}

/// One short phrase per non-default field.
fn describe_filters(f: &FilterState) -> Vec<String> {
    let mut parts = Vec::new();
    if f.star_min > 0 {
        parts.push(format!("{}+ stars", f.star_min));
    }
    if f.price_min > 0.0 || f.price_max != DEFAULT_PRICE_MAX {
        parts.push(format!("${}-${} per night", f.price_min, f.price_max));
    }
    if !f.amenities.is_empty() {
        let names: Vec<String> = f.amenities.iter().map(|a| a.to_string()).collect();
        parts.push(names.join(", "));
    }
    if f.customer_min > 0.0 {
        parts.push(format!("rated {:.1}+", f.customer_min));
    }
    parts
}
