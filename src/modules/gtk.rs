//! Helpers shared by the theme and font modules.

/// Combine the GTK2/3/4 values into one string, merging equal neighbours.
///
/// `("Adwaita", "Adwaita", "Adwaita")` becomes `"Adwaita [GTK2/3/4]"`,
/// `("Raleigh", "Adwaita", "Adwaita")` becomes `"Raleigh [GTK2], Adwaita [GTK3/4]"`.
/// Empty values are left out.
#[must_use]
pub fn pretty(gtk2: &str, gtk3: &str, gtk4: &str) -> String {
    let mut groups: Vec<(&str, Vec<u8>)> = Vec::with_capacity(3);

    for (value, version) in [(gtk2, 2u8), (gtk3, 3), (gtk4, 4)] {
        if value.is_empty() {
            continue;
        }
        match groups.last_mut() {
            Some((last, versions)) if *last == value => versions.push(version),
            _ => groups.push((value, vec![version])),
        }
    }

    groups
        .iter()
        .map(|(value, versions)| {
            let versions: Vec<String> = versions.iter().map(ToString::to_string).collect();
            format!("{value} [GTK{}]", versions.join("/"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Turn a font setting into `"Name (Npt)"`.
///
/// Accepts the Qt form `"Noto Sans,10,-1,5,50,0,0,0,0,0"` and the GTK form
/// `"Cantarell 11"`. Without a recognisable size the name is returned as is.
#[must_use]
pub fn parse_font(raw: &str) -> String {
    let raw = raw.trim();

    let (name, size) = if let Some((name, rest)) = raw.split_once(',') {
        (name.trim(), rest.split(',').next().map(str::trim))
    } else if let Some((name, size)) = raw.rsplit_once(' ') {
        if size.parse::<f32>().is_ok() {
            (name.trim(), Some(size))
        } else {
            (raw, None)
        }
    } else {
        (raw, None)
    };

    match size.filter(|s| !s.is_empty()) {
        Some(size) => format!("{name} ({size}pt)"),
        None => name.to_string(),
    }
}
