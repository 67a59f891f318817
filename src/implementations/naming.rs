//! Identifier and case conventions for generated property names.

use crate::implementations::config::NamingConfig;

/// Upper-cases the first character, leaving the rest untouched.
fn upper_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `-webkit-box-flex` → `WebkitBoxFlex`
pub fn upper_camel_name(css_name: &str) -> String {
    css_name.split('-').map(upper_first_letter).collect()
}

/// Derives identifiers from property names under one naming configuration
#[derive(Debug, Clone)]
pub struct Namer<'a> {
    config: &'a NamingConfig,
}

impl<'a> Namer<'a> {
    pub fn new(config: &'a NamingConfig) -> Self {
        Self { config }
    }

    /// `WebkitBoxFlex` → `webkitBoxFlex`, `CSSOMValue` → `cssomValue`
    pub fn lower_camel_name(&self, upper_camel: &str) -> String {
        for initialism in &self.config.initialisms {
            if let Some(rest) = upper_camel.strip_prefix(initialism.as_str()) {
                return format!("{}{}", initialism.to_lowercase(), rest);
            }
        }
        lower_first_letter(upper_camel)
    }

    pub fn property_id(&self, css_name: &str) -> String {
        format!("{}{}", self.config.property_prefix, upper_camel_name(css_name))
    }

    pub fn alias_id(&self, css_name: &str) -> String {
        format!("{}{}", self.config.alias_prefix, upper_camel_name(css_name))
    }

    pub fn is_internal(&self, css_name: &str) -> bool {
        css_name.starts_with(self.config.internal_prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_camel_conversion() {
        assert_eq!(upper_camel_name("color"), "Color");
        assert_eq!(upper_camel_name("background-color"), "BackgroundColor");
        assert_eq!(upper_camel_name("-webkit-box-flex"), "WebkitBoxFlex");
        assert_eq!(upper_camel_name("-internal-visited-color"), "InternalVisitedColor");
        assert_eq!(upper_camel_name("foo--bar"), "FooBar");
    }

    #[test]
    fn lower_camel_conversion() {
        let config = NamingConfig::default();
        let namer = Namer::new(&config);
        assert_eq!(namer.lower_camel_name("BackgroundColor"), "backgroundColor");
        assert_eq!(namer.lower_camel_name("WebkitBoxFlex"), "webkitBoxFlex");
        assert_eq!(namer.lower_camel_name("CSSOMThing"), "cssomThing");
        assert_eq!(namer.lower_camel_name("CSSThing"), "cssThing");
        assert_eq!(namer.lower_camel_name(""), "");
    }

    #[test]
    fn identifiers() {
        let config = NamingConfig::default();
        let namer = Namer::new(&config);
        assert_eq!(namer.property_id("font-size"), "CSSPropertyFontSize");
        assert_eq!(namer.alias_id("-webkit-opacity"), "CSSPropertyAliasWebkitOpacity");
        assert!(namer.is_internal("-internal-visited-color"));
        assert!(!namer.is_internal("-webkit-internal-thing"));
    }
}
