use serde::ser::{Serialize, SerializeMap, Serializer};

/// Flags enabled for the deployment, in the order the application documents them.
const DEFAULT_FLAGS: &[(&str, bool)] = &[
    ("ALERT_REPORTS", true),
    ("DASHBOARD_NATIVE_FILTERS", true),
    ("DASHBOARD_CROSS_FILTERS", true),
    ("DASHBOARD_RBAC", true),
    ("ENABLE_TEMPLATE_PROCESSING", true),
    ("EMBEDDED_SUPERSET", true),
    ("ESCAPE_MARKDOWN_HTML", true),
    ("ESTIMATE_QUERY_COST", false),
    ("GENERIC_CHART_AXES", true),
    ("LISTVIEWS_DEFAULT_CARD_VIEW", true),
    ("SQLLAB_BACKEND_PERSISTENCE", true),
    ("SSH_TUNNELING", true),
    ("THUMBNAILS", true),
    ("DRILL_TO_DETAIL", true),
    ("DRILL_BY", true),
];

/// Named feature toggles. Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlags {
    flags: Vec<(String, bool)>,
}

impl FeatureFlags {
    pub fn get(&self, name: &str) -> Option<bool> {
        self.flags
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, enabled)| *enabled)
    }

    /// Set `name`, keeping its position if already present.
    pub fn set(&mut self, name: &str, enabled: bool) {
        match self.flags.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = enabled,
            None => self.flags.push((name.to_owned(), enabled)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(n, e)| (n.as_str(), *e))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            flags: DEFAULT_FLAGS
                .iter()
                .map(|(n, e)| ((*n).to_owned(), *e))
                .collect(),
        }
    }
}

impl Serialize for FeatureFlags {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.flags.len()))?;
        for (name, enabled) in &self.flags {
            map.serialize_entry(name, enabled)?;
        }
        map.end()
    }
}
