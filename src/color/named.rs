const NAMED_COLORS: &[(&str, &str)] = &[
    ("aqua", "#00ffff"),
    ("black", "#000000"),
    ("blue", "#0000ff"),
    ("brown", "#a52a2a"),
    ("cyan", "#00ffff"),
    ("fuchsia", "#ff00ff"),
    ("gold", "#ffd700"),
    ("gray", "#808080"),
    ("green", "#00ff00"),
    ("grey", "#808080"),
    ("lime", "#00ff00"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("olive", "#808000"),
    ("orange", "#ffa500"),
    ("pink", "#ffc0cb"),
    ("purple", "#800080"),
    ("red", "#ff0000"),
    ("silver", "#c0c0c0"),
    ("teal", "#008080"),
    ("white", "#ffffff"),
    ("yellow", "#ffff00"),
];

/// Returns the hex notation of a lowercase color name.
pub(super) fn lookup(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .binary_search_by_key(&name, |&(key, _)| key)
        .ok()
        .map(|index| NAMED_COLORS[index].1)
}

/// Returns the recognized color names in alphabetical order.
pub fn named_color_names() -> Vec<&'static str> {
    NAMED_COLORS.iter().map(|(name, _)| *name).collect()
}
