//! Entry types and display projection
//!
//! An [`Entry`] is a stored `(text, color)` record. The color is an
//! underscore-separated channel triple such as `"1_0.0_0.0"`. [`project`]
//! turns an entry into a [`RenderDescriptor`] for whatever draws the list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alpha channel appended to every projected color
pub const FULL_OPACITY: &str = "1";

/// Separator between channels in a color encoding
pub const CHANNEL_SEPARATOR: char = '_';

/// A single stored record.
///
/// Entries carry no identity: two entries with equal text and color are
/// indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    pub color: String,
}

impl Entry {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.text, self.color)
    }
}

/// Text plus `(r, g, b, a)` channel strings, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDescriptor {
    pub text: String,
    pub channels: [String; 4],
}

impl RenderDescriptor {
    /// Parse the channels as floats.
    ///
    /// Returns `None` if any channel is not numeric. Projection itself never
    /// validates, so renderers that need numbers call this and decide.
    pub fn rgba(&self) -> Option<[f32; 4]> {
        let mut out = [0.0f32; 4];
        for (slot, channel) in out.iter_mut().zip(self.channels.iter()) {
            *slot = channel.trim().parse().ok()?;
        }
        Some(out)
    }

    /// Channels scaled to 8-bit RGB, clamped to `[0, 255]`
    pub fn rgb8(&self) -> Option<(u8, u8, u8)> {
        let [r, g, b, _] = self.rgba()?;
        let scale = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Some((scale(r), scale(g), scale(b)))
    }
}

/// Convert a stored entry into a render descriptor.
///
/// The color is split on `_` into at most three channels and an opaque alpha
/// is appended. Malformed encodings pass through: missing channels become
/// empty strings and any extra separators stay in the blue channel.
pub fn project(entry: &Entry) -> RenderDescriptor {
    let mut parts = entry.color.splitn(3, CHANNEL_SEPARATOR);
    let mut next = || parts.next().unwrap_or_default().to_string();
    let (r, g, b) = (next(), next(), next());

    RenderDescriptor {
        text: entry.text.clone(),
        channels: [r, g, b, FULL_OPACITY.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_red_entry() {
        let entry = Entry::new("Lorem Ipsum", "1_0.0_0.0");
        let descriptor = project(&entry);

        assert_eq!(descriptor.text, "Lorem Ipsum");
        assert_eq!(descriptor.channels, ["1", "0.0", "0.0", "1"].map(String::from));
    }

    #[test]
    fn test_project_passes_malformed_through() {
        let short = project(&Entry::new("x", "0.5"));
        assert_eq!(short.channels, ["0.5", "", "", "1"].map(String::from));

        let long = project(&Entry::new("x", "a_b_c_d"));
        assert_eq!(long.channels, ["a", "b", "c_d", "1"].map(String::from));
        assert!(long.rgba().is_none());
    }

    #[test]
    fn test_rgb8_scaling() {
        let grey = project(&Entry::new("g", "0.5_0.5_0.5"));
        assert_eq!(grey.rgb8(), Some((128, 128, 128)));

        let white = project(&Entry::new("w", "1_1_1"));
        assert_eq!(white.rgba(), Some([1.0, 1.0, 1.0, 1.0]));
        assert_eq!(white.rgb8(), Some((255, 255, 255)));
    }
}
