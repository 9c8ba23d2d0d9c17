use serde::{Deserialize, Serialize};

/// One stage of the guided brand-guideline creation flow.
///
/// The declaration order is the wizard order; it is fixed at compile time and
/// never reordered at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationStep {
    BrandPositioning,
    LogoGuidelines,
    ColorPalette,
    Typography,
    Iconography,
    Photography,
    Applications,
}

impl GenerationStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 7] = [
        Self::BrandPositioning,
        Self::LogoGuidelines,
        Self::ColorPalette,
        Self::Typography,
        Self::Iconography,
        Self::Photography,
        Self::Applications,
    ];

    /// The step a new wizard session starts from.
    pub fn first() -> Self {
        Self::ALL[0]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrandPositioning => "brand-positioning",
            Self::LogoGuidelines => "logo-guidelines",
            Self::ColorPalette => "color-palette",
            Self::Typography => "typography",
            Self::Iconography => "iconography",
            Self::Photography => "photography",
            Self::Applications => "applications",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "brand-positioning" => Some(Self::BrandPositioning),
            "logo-guidelines" => Some(Self::LogoGuidelines),
            "color-palette" => Some(Self::ColorPalette),
            "typography" => Some(Self::Typography),
            "iconography" => Some(Self::Iconography),
            "photography" => Some(Self::Photography),
            "applications" => Some(Self::Applications),
            _ => None,
        }
    }

    /// Human-readable label, used for slide captions and progress UI.
    pub fn title(&self) -> &'static str {
        match self {
            Self::BrandPositioning => "Brand Positioning",
            Self::LogoGuidelines => "Logo Guidelines",
            Self::ColorPalette => "Color Palette",
            Self::Typography => "Typography",
            Self::Iconography => "Iconography",
            Self::Photography => "Photography",
            Self::Applications => "Applications",
        }
    }
}
