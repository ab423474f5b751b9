//! HTTP security headers applied by Flask-Talisman.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// One CSP directive, e.g. `img-src 'self' data:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub sources: Vec<String>,
}

impl Directive {
    pub fn new(name: &str, sources: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            sources: sources.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Content security policy as an ordered list of directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSecurityPolicy {
    pub directives: Vec<Directive>,
}

impl ContentSecurityPolicy {
    /// Render as a `Content-Security-Policy` header value.
    pub fn header_value(&self) -> String {
        self.directives
            .iter()
            .map(|d| {
                if d.sources.is_empty() {
                    d.name.clone()
                } else {
                    format!("{} {}", d.name, d.sources.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        Self {
            directives: vec![
                Directive::new("default-src", &["'self'"]),
                Directive::new("img-src", &["'self'", "data:", "https:"]),
                Directive::new("worker-src", &["'self'", "blob:"]),
                Directive::new(
                    "connect-src",
                    &[
                        "'self'",
                        "https://api.mapbox.com",
                        "https://events.mapbox.com",
                    ],
                ),
                Directive::new("object-src", &["'none'"]),
            ],
        }
    }
}

impl Serialize for ContentSecurityPolicy {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.directives.len()))?;
        for d in &self.directives {
            map.serialize_entry(&d.name, &d.sources)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TalismanPolicy {
    pub content_security_policy: ContentSecurityPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Talisman {
    #[serde(rename = "TALISMAN_ENABLED")]
    pub enabled: bool,
    #[serde(rename = "TALISMAN_CONFIG")]
    pub config: TalismanPolicy,
}

impl Default for Talisman {
    fn default() -> Self {
        Self {
            enabled: true,
            config: TalismanPolicy::default(),
        }
    }
}
