use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static ROLO_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("index", Style::new().yellow()),
        ("card_name", Style::new().bold()),
        ("kind", Style::new().cyan()),
        ("time", Style::new().color256(245).italic()),
        ("label", Style::new().dim()),
        ("dim", Style::new().dim()),
        ("filter", Style::new()),
        ("filter_current", Style::new().bold().green()),
    ])
});
