use serde::{Deserialize, Serialize};

/// Access modifier printed in front of generated model properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PropertyVisibility {
    #[default]
    None,
    Public,
    Protected,
    Private,
}

impl PropertyVisibility {
    /// Prefix including the trailing space, or empty when no modifier is wanted.
    pub fn prefix(self) -> &'static str {
        match self {
            PropertyVisibility::None => "",
            PropertyVisibility::Public => "public ",
            PropertyVisibility::Protected => "protected ",
            PropertyVisibility::Private => "private ",
        }
    }
}

/// Marker appended to non-nullable model properties under TS strict property
/// initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum StrictMode {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "?")]
    Optional,
    #[serde(rename = "!")]
    Definite,
}

impl StrictMode {
    pub fn marker(self) -> &'static str {
        match self {
            StrictMode::None => "",
            StrictMode::Optional => "?",
            StrictMode::Definite => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    /// Keep whatever the renderer produced (`\n`).
    #[default]
    Auto,
    Lf,
    Crlf,
}

impl EndOfLine {
    pub fn as_str(self) -> &'static str {
        match self {
            EndOfLine::Auto | EndOfLine::Lf => "\n",
            EndOfLine::Crlf => "\r\n",
        }
    }
}

fn default_tab_width() -> usize {
    4
}

/// Formatting preferences applied to rendered sources before they are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(default)]
    pub end_of_line: EndOfLine,
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            end_of_line: EndOfLine::default(),
            tab_width: default_tab_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PropertyVisibility::None, "")]
    #[case(PropertyVisibility::Public, "public ")]
    #[case(PropertyVisibility::Protected, "protected ")]
    #[case(PropertyVisibility::Private, "private ")]
    fn visibility_prefix(#[case] visibility: PropertyVisibility, #[case] expected: &str) {
        assert_eq!(visibility.prefix(), expected);
    }

    #[test]
    fn strict_mode_uses_marker_spelling() {
        assert_eq!(
            serde_json::from_str::<StrictMode>("\"!\"").unwrap(),
            StrictMode::Definite
        );
        assert_eq!(
            serde_json::from_str::<StrictMode>("\"?\"").unwrap(),
            StrictMode::Optional
        );
        assert_eq!(StrictMode::None.marker(), "");
    }

    #[test]
    fn format_options_fill_defaults() {
        let opts: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, FormatOptions::default());
        assert_eq!(opts.tab_width, 4);
        assert_eq!(opts.end_of_line.as_str(), "\n");
        assert_eq!(EndOfLine::Crlf.as_str(), "\r\n");
    }
}
