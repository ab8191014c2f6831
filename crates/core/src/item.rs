use serde::{Deserialize, Serialize};

/// One drawable card. Tags are already normalised: trimmed, non-empty, no duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub count: Option<u32>,
}

impl Item {
    pub fn new<T, M>(name: impl Into<String>, types: T, modifiers: M) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        Self {
            name: name.into(),
            types: normalize_tags(types),
            modifiers: normalize_tags(modifiers),
            cost: None,
            count: None,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Draw weight; a missing count weighs 1.
    pub fn weight(&self) -> u64 {
        u64::from(self.count.unwrap_or(1))
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    pub fn has_modifier(&self, tag: &str) -> bool {
        self.modifiers.iter().any(|m| m == tag)
    }
}

/// Trims each tag, drops empty ones and duplicates, keeps first-seen order.
pub fn normalize_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|seen| seen == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Splits a comma-separated type field such as `"Talent, Gift"`.
pub fn split_type_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_string_matches_array() {
        let from_string = split_type_tags("X, Y");
        let from_array = normalize_tags(["X", "Y"]);
        assert_eq!(from_string, from_array);
    }

    #[test]
    fn normalize_drops_blanks_and_duplicates() {
        let tags = normalize_tags([" A ", "", "B", "A", "  "]);
        assert_eq!(tags, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn weight_defaults_to_one() {
        let item = Item::new("Rope", ["Gear"], Vec::<String>::new());
        assert_eq!(item.weight(), 1);
        assert_eq!(item.clone().with_count(0).weight(), 0);
        assert_eq!(item.with_count(4).weight(), 4);
    }

    #[test]
    fn serde_uses_type_key() {
        let item = Item::new("Torch", ["Gear", "Light"], ["Fire"]).with_cost(2.0);
        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(value["type"], serde_json::json!(["Gear", "Light"]));
        assert_eq!(value["cost"], serde_json::json!(2.0));
    }
}
