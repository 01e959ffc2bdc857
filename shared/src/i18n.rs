//! Locale catalogs and the translator registry.
//!
//! The registry is built once at startup and is read-only afterwards.
//! Lookups hand out [`Translator`] handles, which are cheap to clone and can
//! be attached to individual requests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::validator::Violation;

/// Placeholder replaced by the field's display name.
const FIELD_PLACEHOLDER: &str = "{0}";

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    PtBr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::PtBr, Locale::En];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt_BR",
            Locale::En => "en",
        }
    }

    /// Exact, case-sensitive tag match. `en-US` or `pt-BR` do not match.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|locale| locale.tag() == tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Message templates for one locale, keyed by constraint tag.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    templates: HashMap<&'static str, String>,
}

impl Catalog {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            templates: HashMap::new(),
        }
    }

    /// Catalog pre-loaded with the bundled templates for `locale`.
    pub fn with_defaults(locale: Locale) -> Self {
        let mut catalog = Self::empty(locale);
        for (tag, template) in default_templates(locale) {
            catalog.register(*tag, *template);
        }
        catalog
    }

    /// Adds or replaces the template for a constraint tag.
    pub fn register(&mut self, tag: &'static str, template: impl Into<String>) -> &mut Self {
        self.templates.insert(tag, template.into());
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn template(&self, tag: &str) -> Option<&str> {
        self.templates.get(tag).map(String::as_str)
    }
}

fn default_templates(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::PtBr => &[("required", "{0} é um campo requerido")],
        Locale::En => &[("required", "{0} is a required field")],
    }
}

/// Renders violations in one locale.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<Catalog>,
}

impl Translator {
    fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    /// Renders one violation. Falls back to the violation's untranslated
    /// default message when the catalog has no template for its constraint.
    pub fn translate(&self, violation: &Violation) -> String {
        match self.catalog.template(violation.constraint.tag()) {
            Some(template) => template.replace(FIELD_PLACEHOLDER, &violation.field),
            None => violation.default_message(),
        }
    }

    /// Renders every violation, preserving order.
    pub fn translate_all(&self, violations: &[Violation]) -> Vec<String> {
        violations.iter().map(|v| self.translate(v)).collect()
    }
}

/// Process-wide, read-only mapping from locale tag to translator.
#[derive(Debug, Clone)]
pub struct TranslatorRegistry {
    default: Locale,
    translators: HashMap<&'static str, Translator>,
}

impl TranslatorRegistry {
    /// Builds a registry holding the bundled catalogs for `supported`.
    /// `default` is always registered, even if absent from `supported`.
    pub fn new(default: Locale, supported: &[Locale]) -> Self {
        let catalogs = supported.iter().map(|l| Catalog::with_defaults(*l)).collect();
        Self::with_catalogs(default, catalogs)
    }

    /// Builds a registry from prepared catalogs. A later catalog for the same
    /// locale replaces an earlier one.
    pub fn with_catalogs(default: Locale, catalogs: Vec<Catalog>) -> Self {
        let mut translators: HashMap<&'static str, Translator> = catalogs
            .into_iter()
            .map(|catalog| (catalog.locale().tag(), Translator::new(catalog)))
            .collect();

        translators
            .entry(default.tag())
            .or_insert_with(|| Translator::new(Catalog::with_defaults(default)));

        tracing::debug!(
            default = default.tag(),
            locales = translators.len(),
            "Translator registry initialized"
        );

        Self {
            default,
            translators,
        }
    }

    /// Exact match against registered tags.
    pub fn get(&self, tag: &str) -> Option<Translator> {
        self.translators.get(tag).cloned()
    }

    pub fn default_translator(&self) -> Translator {
        // `with_catalogs` always registers the default locale.
        self.translators
            .get(self.default.tag())
            .cloned()
            .unwrap_or_else(|| Translator::new(Catalog::with_defaults(self.default)))
    }

    /// Translator for `tag`, or the default translator when the tag is
    /// absent or unregistered.
    pub fn resolve(&self, tag: Option<&str>) -> Translator {
        tag.and_then(|t| self.get(t))
            .unwrap_or_else(|| self.default_translator())
    }

    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<_> = self.translators.values().map(Translator::locale).collect();
        locales.sort_by_key(|l| l.tag());
        locales
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new(Locale::PtBr, &Locale::ALL)
    }
}
