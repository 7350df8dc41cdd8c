//! minijinja templates for the session views. Layout math (widths, padding,
//! truncation) happens in Rust before the data reaches a template; templates
//! only pick styles and arrange lines.

/// The contact list: one line per visible contact, plus the filter line.
pub const LIST_TEMPLATE: &str = r#"{% if empty %}{{ "No contacts to show." | style("dim") }}
{% else %}{% for c in contacts %}  {{ c.index | style("index") }}{{ c.name }}{{ c.padding }}{{ c.kind | style("kind") }}{{ c.time_ago | style("time") }}
{% endfor %}{% endif %}{{ "filter:" | style("label") }} {% for k in filters %}{% if k.current %}{{ ("[" ~ k.value ~ "]") | style("filter_current") }}{% else %}{{ k.value | style("filter") }}{% endif %} {% endfor %}"#;

/// The read-only contact card.
pub const CARD_TEMPLATE: &str = r#"{{ name | style("card_name") }} {{ ("(" ~ kind ~ ")") | style("kind") }}
  {{ "address" | style("label") }}  {{ address }}
  {{ "tel" | style("label") }}      {{ tel }}
  {{ "email" | style("label") }}    {{ email }}
  {{ "photo" | style("label") }}    {{ photo }}"#;

/// The editable-field view: current values in the form the `edit` command
/// takes them back.
pub const EDIT_TEMPLATE: &str = r#"{{ "Editing" | style("dim") }} {{ name | style("card_name") }}
{% for f in fields %}  {{ f.key | style("label") }}={{ f.value }}
{% endfor %}{{ ("Save with: edit " ~ selector ~ " field=value ... (blank value clears the field)") | style("dim") }}"#;

/// The available filter values, the current one marked.
pub const KINDS_TEMPLATE: &str = r#"{% for k in filters %}{% if k.current %}{{ ("[" ~ k.value ~ "]") | style("filter_current") }}{% else %}{{ k.value | style("filter") }}{% endif %} {% endfor %}"#;
