//! # Rendering Module
//!
//! Renders command results to styled terminal output. Templates handle
//! presentation; the Unicode-aware layout work (width, truncation, padding)
//! stays here because it needs real width calculations.

use super::styles::ROLO_THEME;
use super::templates::{CARD_TEMPLATE, EDIT_TEMPLATE, KINDS_TEMPLATE, LIST_TEMPLATE};
use chrono::{DateTime, Utc};
use colored::Colorize;
use minijinja::Environment;
use rolo::api::{CmdMessage, MessageLevel};
use rolo::directory::{Filter, ALL};
use rolo::index::DisplayContact;
use rolo::model::Contact;
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const KIND_WIDTH: usize = 12;
const TIME_WIDTH: usize = 16;

#[derive(Serialize)]
struct LineData {
    index: String,
    name: String,
    padding: String,
    kind: String,
    time_ago: String,
}

#[derive(Serialize)]
struct FilterOption {
    value: String,
    current: bool,
}

#[derive(Serialize)]
struct ListData {
    contacts: Vec<LineData>,
    filters: Vec<FilterOption>,
    empty: bool,
}

#[derive(Serialize)]
struct CardData {
    name: String,
    kind: String,
    address: String,
    tel: String,
    email: String,
    photo: String,
}

#[derive(Serialize)]
struct FieldData {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct EditData {
    name: String,
    selector: String,
    fields: Vec<FieldData>,
}

#[derive(Serialize)]
struct KindsData {
    filters: Vec<FilterOption>,
}

/// Renders a template against the theme. When color is off the `style`
/// filter degrades to a pass-through.
fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    let mut env = Environment::new();
    env.add_filter("style", move |value: String, name: String| -> String {
        if !use_color {
            return value;
        }
        match ROLO_THEME.get(name.as_str()) {
            Some(style) => style.apply_to(&value).to_string(),
            None => value,
        }
    });
    env.render_str(template, data)
        .unwrap_or_else(|e| format!("(template error: {})", e))
}

/// The filter line: `all` first, then every available kind, current marked.
fn filter_options(kinds: &[String], current: &Filter) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        value: ALL.to_string(),
        current: matches!(current, Filter::All),
    }];
    options.extend(kinds.iter().map(|k| FilterOption {
        value: k.clone(),
        current: matches!(current, Filter::Kind(f) if f.eq_ignore_ascii_case(k)),
    }));
    options
}

pub fn render_list(
    listed: &[DisplayContact],
    kinds: &[String],
    filter: &Filter,
    line_width: usize,
    use_color: bool,
) -> String {
    let contacts = listed
        .iter()
        .map(|dc| {
            let index = format!("{}. ", dc.index);
            let fixed = 2 + index.width() + KIND_WIDTH + TIME_WIDTH;
            let available = line_width.saturating_sub(fixed);

            let name = truncate_to_width(&dc.contact.name, available);
            let padding = " ".repeat(available.saturating_sub(name.width()));
            let kind = format!("{:<width$}", dc.contact.kind, width = KIND_WIDTH);
            let time_ago = format_time_ago(dc.contact.created_at);

            LineData {
                index,
                name,
                padding,
                kind,
                time_ago,
            }
        })
        .collect::<Vec<_>>();

    let data = ListData {
        empty: contacts.is_empty(),
        contacts,
        filters: filter_options(kinds, filter),
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

pub fn render_card(contact: &Contact, use_color: bool) -> String {
    let data = CardData {
        name: contact.name.clone(),
        kind: contact.kind.clone(),
        address: contact.address.clone(),
        tel: contact.tel.clone(),
        email: contact.email.clone(),
        photo: contact.photo_ref().to_string(),
    };
    render_template(CARD_TEMPLATE, &data, use_color)
}

pub fn render_edit_form(contact: &Contact, selector: &str, use_color: bool) -> String {
    let fields = [
        ("name", contact.name.as_str()),
        ("address", contact.address.as_str()),
        ("tel", contact.tel.as_str()),
        ("email", contact.email.as_str()),
        ("type", contact.kind.as_str()),
        // An unset photo shows blank, not the placeholder: saving it back
        // blank keeps the attribute absent.
        ("photo", contact.photo.as_deref().unwrap_or("")),
    ]
    .into_iter()
    .map(|(key, value)| FieldData {
        key: key.to_string(),
        value: value.to_string(),
    })
    .collect();

    let data = EditData {
        name: contact.name.clone(),
        selector: selector.to_string(),
        fields,
    };
    render_template(EDIT_TEMPLATE, &data, use_color)
}

pub fn render_kinds(kinds: &[String], filter: &Filter, use_color: bool) -> String {
    let data = KindsData {
        filters: filter_options(kinds, filter),
    };
    render_template(KINDS_TEMPLATE, &data, use_color)
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolo::index::index_contacts;

    fn contact(name: &str, kind: &str) -> Contact {
        Contact::new(
            name.to_string(),
            "1 Loop Rd".to_string(),
            "555".to_string(),
            "a@b.c".to_string(),
            kind.to_string(),
            None,
        )
    }

    #[test]
    fn list_marks_the_current_filter() {
        let listed = index_contacts(vec![contact("Ada", "family")]);
        let out = render_list(
            &listed,
            &["family".to_string()],
            &Filter::kind("family"),
            80,
            false,
        );
        assert!(out.contains("Ada"));
        assert!(out.contains("[family]"));
        assert!(out.contains("all"));
    }

    #[test]
    fn empty_list_renders_placeholder_line() {
        let out = render_list(&[], &[], &Filter::All, 80, false);
        assert!(out.contains("No contacts to show."));
        assert!(out.contains("[all]"));
    }

    #[test]
    fn card_shows_placeholder_photo() {
        let out = render_card(&contact("Ada", "friend"), false);
        assert!(out.contains("Ada"));
        assert!(out.contains(rolo::model::PLACEHOLDER_PHOTO));
    }

    #[test]
    fn edit_form_leaves_default_photo_blank() {
        let out = render_edit_form(&contact("Ada", "friend"), "1", false);
        assert!(out.contains("photo="));
        assert!(!out.contains(rolo::model::PLACEHOLDER_PHOTO));
        assert!(out.contains("edit 1"));
    }

    #[test]
    fn long_names_are_truncated_to_width() {
        let long = "A".repeat(200);
        let listed = index_contacts(vec![contact(&long, "family")]);
        let out = render_list(&listed, &[], &Filter::All, 60, false);
        let first = out.lines().next().unwrap();
        assert!(first.width() <= 60);
        assert!(first.contains('…'));
    }
}
