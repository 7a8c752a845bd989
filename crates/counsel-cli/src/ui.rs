use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table_color = table_color(flags, is_tty, std::env::var_os("NO_COLOR").is_some());

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
    });
}

fn table_color(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty && flags.format == OutputFormat::Table && !flags.quiet && !no_color
        }
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            empty: false,
            color,
        }
    }

    #[test]
    fn auto_colors_only_tables_on_a_terminal() {
        assert!(table_color(&flags(OutputFormat::Table, ColorMode::Auto), true, false));
        assert!(!table_color(&flags(OutputFormat::Table, ColorMode::Auto), false, false));
        assert!(!table_color(&flags(OutputFormat::Json, ColorMode::Auto), true, false));
    }

    #[test]
    fn no_color_env_disables_auto() {
        assert!(!table_color(&flags(OutputFormat::Table, ColorMode::Auto), true, true));
        assert!(table_color(&flags(OutputFormat::Table, ColorMode::Always), false, true));
    }

    #[test]
    fn never_wins() {
        assert!(!table_color(&flags(OutputFormat::Table, ColorMode::Never), true, false));
    }
}
