// src/theme.rs

pub mod color;

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

pub use color::Rgb;

pub const LIGHTER_TEXT: &str = "#ffffff";
pub const DARKER_TEXT: &str = "#18181b";

/// Quanto a variante de hover escurece a cor base (pontos de luminosidade).
pub const HOVER_DARKEN: f64 = 10.0;

/// Os dois eixos de cor de uma loja.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAxis {
    Primary,
    Secondary,
}

impl ThemeAxis {
    pub const ALL: [ThemeAxis; 2] = [ThemeAxis::Primary, ThemeAxis::Secondary];

    /// Nomes das três variáveis CSS do eixo: padrão, hover e texto.
    pub fn properties(self) -> [&'static str; 3] {
        match self {
            ThemeAxis::Primary => ["--color-primary", "--color-primary-hover", "--color-primary-text"],
            ThemeAxis::Secondary => ["--color-secondary", "--color-secondary-hover", "--color-secondary-text"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ThemeVariant {
    pub default: Rgb,
    pub hover: Rgb,
    pub text: Rgb,
}

impl ThemeVariant {
    pub fn derive(base: &str) -> Option<Self> {
        let default = Rgb::parse(base)?;
        let text = if default.is_dark() { LIGHTER_TEXT } else { DARKER_TEXT };

        Some(Self {
            default,
            hover: default.darken(HOVER_DARKEN),
            text: Rgb::parse(text)?,
        })
    }

    fn channels(&self) -> [String; 3] {
        [self.default.to_channels(), self.hover.to_channels(), self.text.to_channels()]
    }
}

/// Alteração a aplicar sobre o escopo de estilo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleChange {
    Set { name: &'static str, value: String },
    Remove { name: &'static str },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: Option<ThemeVariant>,
    pub secondary: Option<ThemeVariant>,
}

impl ThemeColors {
    /// Só há tema quando as duas cores existem e são válidas.
    pub fn derive(primary: Option<&str>, secondary: Option<&str>) -> Self {
        let (Some(primary), Some(secondary)) = (primary, secondary) else {
            return Self::default();
        };

        match (ThemeVariant::derive(primary), ThemeVariant::derive(secondary)) {
            (Some(primary), Some(secondary)) => Self {
                primary: Some(primary),
                secondary: Some(secondary),
            },
            _ => {
                tracing::warn!(primary, secondary, "Cores da loja inválidas, tema desativado.");
                Self::default()
            }
        }
    }

    pub fn themed(&self) -> bool {
        self.primary.is_some()
    }

    pub fn variant(&self, axis: ThemeAxis) -> Option<&ThemeVariant> {
        match axis {
            ThemeAxis::Primary => self.primary.as_ref(),
            ThemeAxis::Secondary => self.secondary.as_ref(),
        }
    }

    /// As seis variáveis: definidas quando o eixo existe, removidas quando não.
    pub fn style_changes(&self) -> Vec<StyleChange> {
        ThemeAxis::ALL
            .into_iter()
            .flat_map(|axis| {
                let names = axis.properties();
                match self.variant(axis) {
                    Some(variant) => names
                        .into_iter()
                        .zip(variant.channels())
                        .map(|(name, value)| StyleChange::Set { name, value })
                        .collect::<Vec<_>>(),
                    None => names.into_iter().map(|name| StyleChange::Remove { name }).collect(),
                }
            })
            .collect()
    }

    pub fn css_variables(&self) -> BTreeMap<String, String> {
        self.style_changes()
            .into_iter()
            .filter_map(|change| match change {
                StyleChange::Set { name, value } => Some((name.to_string(), value)),
                StyleChange::Remove { .. } => None,
            })
            .collect()
    }
}

/// Tema derivado de uma loja, como a API devolve.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreTheme {
    pub themed: bool,
    pub primary: Option<ThemeVariant>,
    pub secondary: Option<ThemeVariant>,
    pub css_variables: BTreeMap<String, String>,
}

impl From<ThemeColors> for StoreTheme {
    fn from(colors: ThemeColors) -> Self {
        Self {
            themed: colors.themed(),
            primary: colors.primary,
            secondary: colors.secondary,
            css_variables: colors.css_variables(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_primary_gets_dark_text_and_dark_secondary_gets_light_text() {
        let colors = ThemeColors::derive(Some("#3366ff"), Some("#111111"));

        let primary = colors.primary.expect("primary");
        let secondary = colors.secondary.expect("secondary");
        assert_eq!(primary.text, Rgb::parse(DARKER_TEXT).unwrap());
        assert_eq!(secondary.text, Rgb::parse(LIGHTER_TEXT).unwrap());
        assert_eq!(primary.default, Rgb::new(51, 102, 255));
        assert_eq!(primary.hover, Rgb::new(0, 64, 255));
    }

    #[test]
    fn needs_both_colors_to_be_themed() {
        assert!(!ThemeColors::derive(Some("#3366ff"), None).themed());
        assert!(!ThemeColors::derive(None, Some("#111111")).themed());
        assert!(!ThemeColors::derive(Some("#3366ff"), Some("bogus")).themed());
        assert!(ThemeColors::derive(Some("#3366ff"), Some("#111111")).themed());
    }

    #[test]
    fn writes_six_properties_when_themed() {
        let vars = ThemeColors::derive(Some("#3366ff"), Some("#111111")).css_variables();

        assert_eq!(vars.len(), 6);
        assert_eq!(vars["--color-primary"], "51 102 255");
        assert_eq!(vars["--color-primary-hover"], "0 64 255");
        assert_eq!(vars["--color-primary-text"], "24 24 27");
        assert_eq!(vars["--color-secondary"], "17 17 17");
        assert_eq!(vars["--color-secondary-hover"], "0 0 0");
        assert_eq!(vars["--color-secondary-text"], "255 255 255");
    }

    #[test]
    fn unthemed_removes_every_property() {
        let changes = ThemeColors::default().style_changes();

        assert_eq!(changes.len(), 6);
        assert!(changes.iter().all(|c| matches!(c, StyleChange::Remove { .. })));
    }

    #[test]
    fn store_theme_serializes_css_variables_in_camel_case() {
        let theme = StoreTheme::from(ThemeColors::derive(Some("#3366ff"), Some("#111111")));
        let json = serde_json::to_value(&theme).unwrap();

        assert_eq!(json["themed"], true);
        assert_eq!(json["cssVariables"]["--color-secondary-text"], "255 255 255");
        assert_eq!(json["primary"]["hover"]["g"], 64);
    }
}
