//! Configuration file upgrades.
//!
//! Older config files lack fields added later. `missing_fields` reports
//! them and `add_missing_fields` writes the defaults in place, keeping
//! every value the user already set.

use super::Config;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

fn read_mapping(path: &Path) -> io::Result<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{:?} is not a YAML mapping", path),
        )),
        Err(e) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse {:?}: {}", path, e),
        )),
    }
}

/// Default config as a YAML mapping, in declaration order.
fn default_mapping() -> io::Result<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(_) => Err(io::Error::other("default config is not a mapping")),
        Err(e) => Err(io::Error::other(format!("serialize error: {}", e))),
    }
}

/// Names of config keys absent from the file at `path`.
pub fn missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Returns the keys added;
/// the file is only rewritten when the list is non-empty.
pub fn add_missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("togather_{}_{}.conf", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reports_and_adds_missing_fields() {
        let path = temp_conf("migrate", "database: /tmp/x.sqlite\nrole: member\n");

        let missing = missing_fields(&path).unwrap();
        assert!(missing.contains(&"group_name".to_string()));
        assert!(missing.contains(&"birthday_window_days".to_string()));
        assert!(!missing.contains(&"database".to_string()));

        let added = add_missing_fields(&path).unwrap();
        assert_eq!(added, missing);
        assert!(missing_fields(&path).unwrap().is_empty());

        // user values survive
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("database: /tmp/x.sqlite"));
        assert!(content.contains("role: member"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_non_mapping_files() {
        let path = temp_conf("scalar", "- just\n- a list\n");
        assert!(missing_fields(&path).is_err());
        fs::remove_file(&path).ok();
    }
}
