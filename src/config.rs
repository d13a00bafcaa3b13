use log::Level;
use serde::Deserialize;

use crate::error::PageError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Observer and effect tuning, all optional in the content file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub reveal_threshold: f64,
    pub lazy_threshold: f64,
    pub lazy_root_margin: String,
    pub hover_fade_opacity: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.15,
            lazy_threshold: 0.0,
            lazy_root_margin: "200px".to_string(),
            hover_fade_opacity: 0.5,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub opens_modal: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub tagline: String,
    pub learn_more: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: String,
    pub text: String,
    pub icon: String,
    pub placeholder: String,
    pub image: String,
    pub alt: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct OperationTab {
    pub label: String,
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub heading: String,
    pub quote: String,
    pub author: String,
    pub location: String,
    pub photo: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SectionCopy {
    pub description: String,
    pub header: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Signup {
    pub header: String,
    pub button: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FormField {
    pub label: String,
    /// HTML input type, e.g. `text` or `email`.
    pub kind: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ModalCopy {
    pub header: String,
    pub lead: String,
    pub highlight: String,
    pub fields: Vec<FormField>,
    pub submit: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Footer {
    pub logo: String,
    pub links: Vec<NavLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub logo: String,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub features_section: SectionCopy,
    pub features: Vec<Feature>,
    pub operations_section: SectionCopy,
    pub operations: Vec<OperationTab>,
    pub testimonials_section: SectionCopy,
    pub testimonials: Vec<Testimonial>,
    pub signup: Signup,
    pub modal: ModalCopy,
    pub footer: Footer,
    #[serde(default)]
    pub settings: Settings,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, PageError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), PageError> {
        if self.testimonials.is_empty() {
            return Err(PageError::EmptySlider);
        }
        if self.operations.is_empty() {
            return Err(PageError::EmptyTabs);
        }
        Ok(())
    }
}

/// The content bundled into the binary.
pub fn site_content() -> Result<SiteContent, PageError> {
    SiteContent::parse(SITE_JSON)
}
