use owo_colors::OwoColorize;
use tabled::{settings::Style, Table, Tabled};

use crate::entry::RenderDescriptor;
use crate::ui::theme::{SwatchMode, Theme};

const SWATCH: &str = "      ";

#[derive(Tabled)]
pub struct SwatchRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Swatch")]
    pub swatch: String,
    #[tabled(rename = "Text")]
    pub text: String,
    #[tabled(rename = "RGBA")]
    pub rgba: String,
}

impl SwatchRow {
    pub fn new(index: usize, descriptor: &RenderDescriptor, theme: &Theme) -> Self {
        Self {
            index,
            swatch: swatch_cell(descriptor, theme),
            text: descriptor.text.clone(),
            rgba: descriptor.channels.join(", "),
        }
    }
}

fn swatch_cell(descriptor: &RenderDescriptor, theme: &Theme) -> String {
    match (descriptor.rgb8(), theme.swatch) {
        (Some((r, g, b)), SwatchMode::Block) => SWATCH.on_truecolor(r, g, b).to_string(),
        (Some((r, g, b)), SwatchMode::Hex) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        (None, _) => theme.unknown_swatch.to_string(),
    }
}

pub fn swatch_table(descriptors: &[RenderDescriptor], theme: &Theme) -> String {
    if descriptors.is_empty() {
        return String::new();
    }

    let rows: Vec<SwatchRow> = descriptors
        .iter()
        .enumerate()
        .map(|(i, d)| SwatchRow::new(i + 1, d, theme))
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{project, Entry};

    #[test]
    fn test_plain_table_lists_every_descriptor() {
        let descriptors = vec![
            project(&Entry::new("Lorem Ipsum", "1_0.0_0.0")),
            project(&Entry::new("broken", "red")),
        ];

        let table = swatch_table(&descriptors, &Theme::plain());
        assert!(table.contains("Lorem Ipsum"));
        assert!(table.contains("#ff0000"));
        assert!(table.contains("1, 0.0, 0.0, 1"));
        assert!(table.contains("broken"));
        assert!(table.contains('?'));
    }

    #[test]
    fn test_empty_table() {
        assert!(swatch_table(&[], &Theme::plain()).is_empty());
    }

    #[test]
    fn test_block_mode_paints_and_marks_unknown() {
        let theme = Theme::colored();
        let red = project(&Entry::new("red", "1_0.0_0.0"));
        let broken = project(&Entry::new("broken", "red"));

        assert!(swatch_cell(&red, &theme).contains("\x1b["));
        assert_eq!(swatch_cell(&broken, &theme), theme.unknown_swatch);
    }
}
