use crate::schema::{Dataset, DatasetEntry, Item, RawItem, StopWordsConfig};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const MANIFEST_FILE: &str = "datasets.json";
const STOP_WORDS_FILE: &str = "stop_words.json";

/// Loads every dataset listed in `<dir>/datasets.json`, in manifest order, with the
/// stop words from `<dir>/stop_words.json` applied when that file exists.
pub fn load_datasets(dir: &Path) -> anyhow::Result<Vec<Dataset>> {
    let entries = load_manifest(&dir.join(MANIFEST_FILE))?;
    let stop_words = load_stop_words(&dir.join(STOP_WORDS_FILE))?;

    let mut seen = HashSet::new();
    let mut datasets = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.name.clone()) {
            bail!("duplicate dataset name {:?} in {}", entry.name, MANIFEST_FILE);
        }
        let items = load_items(&dir.join(&entry.file))
            .with_context(|| format!("load dataset {}", entry.name))?;
        let unnamed = items.iter().filter(|item| item.name.is_empty()).count();
        if unnamed > 0 {
            tracing::warn!(dataset = %entry.name, unnamed, "items without a name");
        }
        let mut dataset = Dataset::new(entry.name, items);
        if let Some(stop) = stop_words.get(&dataset.name) {
            dataset = dataset.with_stop_words(stop);
        }
        tracing::info!(
            dataset = %dataset.name,
            items = dataset.items.len(),
            "loaded dataset"
        );
        datasets.push(dataset);
    }

    for name in stop_words.keys() {
        if !seen.contains(name) {
            tracing::warn!(dataset = %name, "stop words for unknown dataset");
        }
    }
    Ok(datasets)
}

pub fn load_manifest(path: &Path) -> anyhow::Result<Vec<DatasetEntry>> {
    load_json(path)
}

/// A missing stop-word file means no tag is hidden.
pub fn load_stop_words(path: &Path) -> anyhow::Result<StopWordsConfig> {
    if !path.exists() {
        return Ok(StopWordsConfig::new());
    }
    load_json(path)
}

pub fn load_items(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_items(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Parses a JSON array of cards and normalises their tags.
pub fn parse_items(raw: &str) -> anyhow::Result<Vec<Item>> {
    let items: Vec<RawItem> = serde_json::from_str(raw)?;
    Ok(items.into_iter().map(Item::from).collect())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn type_string_and_array_normalise_alike() {
        let items = parse_items(
            r#"[
  {"name":"a","type":"Talent, Gift","modifiers":[]},
  {"name":"b","type":["Talent"," Gift "],"modifiers":[]}
]"#,
        )
        .expect("parse");
        assert_eq!(items[0].types, items[1].types);
        assert_eq!(items[0].types, vec!["Talent", "Gift"]);
    }

    #[test]
    fn malformed_items_load_as_is() {
        let items = parse_items(r#"[{"type":"Curse"},{"name":"x","modifiers":null,"count":0}]"#)
            .expect("parse");
        assert_eq!(items[0].name, "");
        assert!(items[0].modifiers.is_empty());
        assert_eq!(items[0].count, None);
        assert!(items[1].types.is_empty());
        assert_eq!(items[1].count, Some(0));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(parse_items(r#"[{"name":"x","type":"A","count":-1}]"#).is_err());
    }

    #[test]
    fn missing_stop_words_file_is_empty() {
        let dir = unique_temp_dir();
        let stop = load_stop_words(&dir.join(STOP_WORDS_FILE)).expect("load");
        assert!(stop.is_empty());
    }

    #[test]
    fn duplicate_dataset_names_fail() {
        let dir = unique_temp_dir();
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(
            dir.join(MANIFEST_FILE),
            r#"[{"name":"A","file":"a.json"},{"name":"A","file":"a.json"}]"#,
        )
        .expect("write manifest");
        fs::write(dir.join("a.json"), "[]").expect("write items");
        let err = load_datasets(&dir).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate dataset name"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn bad_json_names_the_file() {
        let dir = unique_temp_dir();
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(dir.join(MANIFEST_FILE), r#"[{"name":"A","file":"a.json"}]"#)
            .expect("write manifest");
        fs::write(dir.join("a.json"), "{ not json").expect("write items");
        let err = load_datasets(&dir).expect_err("bad json");
        let chain = format!("{err:#}");
        assert!(chain.contains("load dataset A"), "{chain}");
        assert!(chain.contains("a.json"), "{chain}");
        let _ = fs::remove_dir_all(dir);
    }

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "tagdraw_data_test_{}_{}",
            std::process::id(),
            nanos
        ))
    }
}
