use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::store::TagStore;

pub const TAGS_FILE: &str = "tagged_players.txt";

/// Conventional save location: `<os config dir>/tag-overlay/tagged_players.txt`.
/// Hosts embedding the plugin may pass any other path instead.
pub fn default_tags_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .context("unable to locate OS config directory for the tag file")?
        .join("tag-overlay");
    fs::create_dir_all(&base)
        .with_context(|| format!("failed creating tag dir at {}", base.display()))?;
    Ok(base.join(TAGS_FILE))
}

/// Full rewrite, one `<name>:<nickname>` line per entry in unspecified
/// order. Every ASCII space in the name is written as U+00A0 so the first
/// `:` always ends the name half even when nicknames contain `:`.
pub fn save_tags(path: &Path, store: &TagStore) -> Result<()> {
    let mut payload = String::new();
    for (name, nickname) in store.iter() {
        payload.push_str(&name.replace(' ', "\u{00a0}"));
        payload.push(':');
        payload.push_str(nickname);
        payload.push('\n');
    }
    fs::write(path, payload)
        .with_context(|| format!("failed writing tags at {}", path.display()))?;
    Ok(())
}

/// A missing file is an empty store. Lines without a delimiter are skipped;
/// later duplicate keys overwrite earlier ones.
pub fn load_tags(path: &Path) -> Result<TagStore> {
    if !path.exists() {
        return Ok(TagStore::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed reading tags at {}", path.display()))?;
    let mut store = TagStore::default();
    for line in text.lines() {
        let Some((name, nickname)) = line.split_once(':') else {
            debug!(line, "skipping tag line without delimiter");
            continue;
        };
        store.insert_raw(name.replace('\u{00a0}', " "), nickname.to_owned());
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, time::SystemTime};

    use super::{load_tags, save_tags};
    use crate::store::TagStore;

    fn temp_tags_path(tag: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .expect("clock should be valid")
            .as_nanos();
        std::env::temp_dir().join(format!("tag_overlay_{tag}_{unique}.txt"))
    }

    #[test]
    fn round_trips_spaced_names_and_colon_nicknames() {
        let mut store = TagStore::new();
        store.set_tag("Foo Bar (level-10)", "pal");
        store.set_tag("Solo", "alt: main");

        let path = temp_tags_path("roundtrip");
        save_tags(&path, &store).expect("should save tags");
        let loaded = load_tags(&path).expect("should load tags");
        fs::remove_file(&path).ok();

        assert_eq!(loaded, store);
    }

    #[test]
    fn spaces_in_names_are_escaped_on_disk() {
        let mut store = TagStore::new();
        store.set_tag("Foo Bar", "pal");

        let path = temp_tags_path("escape");
        save_tags(&path, &store).expect("should save tags");
        let text = fs::read_to_string(&path).expect("should read tag file");
        fs::remove_file(&path).ok();

        assert_eq!(text, "Foo\u{00a0}Bar:pal\n");
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let path = temp_tags_path("missing");
        let loaded = load_tags(&path).expect("missing file should not be an error");
        assert!(loaded.is_empty());
    }

    #[test]
    fn lines_without_a_delimiter_are_skipped() {
        let path = temp_tags_path("junk");
        fs::write(&path, "no delimiter here\nZezima:legend\n\n").expect("should write tag file");
        let loaded = load_tags(&path).expect("should load tags");
        fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.nickname("Zezima"), Some("legend"));
    }

    #[test]
    fn later_duplicate_keys_win() {
        let path = temp_tags_path("dupes");
        fs::write(&path, "Zezima:first\nZezima:second\n").expect("should write tag file");
        let loaded = load_tags(&path).expect("should load tags");
        fs::remove_file(&path).ok();

        assert_eq!(loaded.nickname("Zezima"), Some("second"));
    }
}
