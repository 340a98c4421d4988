//! Desktop theme and font, from Plasma and GTK settings files.
//!
//! Both modules read the same four places (`kdeglobals`, `.gtkrc-2.0`,
//! GTK3 and GTK4 `settings.ini`) and pass the same five arguments: Plasma,
//! GTK2, GTK3, GTK4 and the combined GTK string.

use super::{CollectContext, Collected, Collector, gtk};
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::read_property;

const KDEGLOBALS: &str = ".config/kdeglobals";
const GTK2_RC: &str = ".gtkrc-2.0";
const GTK3_SETTINGS: &str = ".config/gtk-3.0/settings.ini";
const GTK4_SETTINGS: &str = ".config/gtk-4.0/settings.ini";

fn home_property(ctx: &CollectContext, file: &str, key: &str) -> Option<String> {
    read_property(&ctx.home_path(file)?, key)
}

fn collected(plasma: String, gtk2: String, gtk3: String, gtk4: String) -> Collected {
    let gtk = gtk::pretty(&gtk2, &gtk3, &gtk4);

    let value = match (plasma.is_empty(), gtk.is_empty()) {
        (false, false) => format!("{plasma} [Plasma], {gtk}"),
        (false, true) => format!("{plasma} [Plasma]"),
        (true, _) => gtk.clone(),
    };

    Collected::new(
        value,
        vec![
            FormatArg::from(plasma),
            FormatArg::from(gtk2),
            FormatArg::from(gtk3),
            FormatArg::from(gtk4),
            FormatArg::from(gtk),
        ],
    )
}

/// Widget theme. Unset GTK themes report the toolkit defaults.
pub struct ThemeCollector;

impl Collector for ThemeCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let plasma = home_property(ctx, KDEGLOBALS, "Name").unwrap_or_default();
        let gtk2 = home_property(ctx, GTK2_RC, "gtk-theme-name").unwrap_or_else(|| "Raleigh".into());
        let gtk3 =
            home_property(ctx, GTK3_SETTINGS, "gtk-theme-name").unwrap_or_else(|| "Adwaita".into());
        let gtk4 =
            home_property(ctx, GTK4_SETTINGS, "gtk-theme-name").unwrap_or_else(|| "Adwaita".into());

        Ok(vec![collected(plasma, gtk2, gtk3, gtk4)])
    }
}

/// UI font. Plasma defaults to Noto Sans 10pt when unset.
pub struct FontCollector;

impl Collector for FontCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let font = |file: &str, key: &str| {
            home_property(ctx, file, key).map(|raw| gtk::parse_font(&raw)).unwrap_or_default()
        };

        let plasma = home_property(ctx, KDEGLOBALS, "font")
            .map_or_else(|| "Noto Sans (10pt)".to_string(), |raw| gtk::parse_font(&raw));
        let gtk2 = font(GTK2_RC, "gtk-font-name");
        let gtk3 = font(GTK3_SETTINGS, "gtk-font-name");
        let gtk4 = font(GTK4_SETTINGS, "gtk-font-name");

        Ok(vec![collected(plasma, gtk2, gtk3, gtk4)])
    }
}
