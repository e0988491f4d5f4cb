use navorder_core::api::{self, NeighborChoice, Outcome, parent_folder};
use navorder_core::config::OrdererConfig;
use navorder_core::config::constants::CONFIG_FILE;
use navorder_core::context::ResourceRepository;
use navorder_core::core::{CandidateList, NavigationOrderer, PositionChange, format_position};
use navorder_core::error::Result;
use navorder_store::{FolderLocks, FsRepository, MessageBundle};
use std::fmt::Write;
use std::path::Path;
use tracing::debug;

/// Repository, labels and config for one invocation
pub struct Workspace {
    repo: FsRepository,
    bundle: MessageBundle,
    config: OrdererConfig,
    locks: FolderLocks,
}

impl Workspace {
    pub fn open(root: &Path, config_path: Option<&Path>, locale: Option<String>) -> Result<Self> {
        let default_config = root.join(CONFIG_FILE);
        let mut config = match config_path {
            Some(path) => OrdererConfig::load(path)?,
            None if default_config.is_file() => OrdererConfig::load(&default_config)?,
            None => OrdererConfig::default(),
        };
        if let Some(locale) = locale {
            config = config.locale(locale);
        }
        config.validate()?;
        debug!("Using config {:?}", config);

        let mut bundle = MessageBundle::new(config.locale.clone());
        if let Some(messages) = &config.messages {
            bundle = bundle.load_overrides(messages)?;
        }

        Ok(Self {
            repo: FsRepository::new(root)?,
            bundle,
            config,
            locks: FolderLocks::new(),
        })
    }

    fn orderer(&self) -> NavigationOrderer<'_> {
        NavigationOrderer::from_config(&self.bundle, &self.config)
    }

    pub fn list(&self, folder: &str, exclude: Option<&str>, json: bool) -> Result<String> {
        let list = api::candidates(&self.repo, &self.orderer(), folder, exclude)?;
        if json {
            return Ok(serde_json::to_string_pretty(&list)?);
        }
        Ok(render_list(&list))
    }

    pub fn move_after(&self, target: &str, after: &str) -> Result<String> {
        let target = self.repo.canonical_key(target)?;
        let folder = parent_folder(&target);
        let choice = NeighborChoice::parse(after);
        let outcome = self.locks.with_folder(folder, || {
            api::reposition(&self.repo, &self.orderer(), folder, &target, &choice)
        })?;

        Ok(match outcome {
            Outcome::Unchanged => format!("{target}: position unchanged"),
            Outcome::Moved { position } => {
                format!("{target}: NavPos = {}", format_position(position))
            }
        })
    }

    pub fn place(
        &self,
        folder: &str,
        key: &str,
        after: Option<&str>,
        title: Option<&str>,
    ) -> Result<String> {
        let folder = self.repo.canonical_key(folder)?;
        let choice = after.map_or(NeighborChoice::Unchanged, NeighborChoice::parse);
        let position = self.locks.with_folder(&folder, || {
            api::place_new(&self.repo, &self.orderer(), &folder, key, title, &choice)
        })?;
        Ok(format!("{key}: NavPos = {}", format_position(position)))
    }

    pub fn renumber(&self, folder: &str, dry_run: bool) -> Result<String> {
        let folder = self.repo.canonical_key(folder)?;
        let changes = self.locks.with_folder(&folder, || {
            api::renumber_folder(&self.repo, &self.orderer(), &folder, dry_run)
        })?;
        Ok(render_changes(&changes, dry_run))
    }
}

fn render_list(list: &CandidateList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>3}  {:<12} {:<32} label", "#", "position", "key");
    for (index, entry) in list.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<12} {:<32} {}",
            index,
            format_position(entry.position),
            entry.key,
            entry.display_name
        );
    }
    let _ = write!(out, "{} entries", list.count());
    out
}

fn render_changes(changes: &[PositionChange], dry_run: bool) -> String {
    if changes.is_empty() {
        return "Positions already dense".to_string();
    }
    let verb = if dry_run { "would change" } else { "changed" };
    let mut out = String::new();
    for change in changes {
        let _ = writeln!(
            out,
            "{}: {} -> {}",
            change.key,
            format_position(change.old),
            format_position(change.new)
        );
    }
    let _ = write!(out, "{} positions {}", changes.len(), verb);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use navorder_core::error::NavError;
    use std::fs;
    use tempfile::TempDir;

    fn workspace(config: Option<&str>) -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        for name in ["a.html", "b.html", "c.html"] {
            fs::write(docs.join(name), "").unwrap();
        }
        fs::write(
            docs.join(".navprops.json"),
            r#"{
                "a.html": { "properties": { "NavPos": "1", "NavText": "Alpha" } },
                "b.html": { "properties": { "NavPos": "2" } }
            }"#,
        )
        .unwrap();
        if let Some(config) = config {
            fs::write(dir.path().join(CONFIG_FILE), config).unwrap();
        }
        let workspace = Workspace::open(dir.path(), None, None).unwrap();
        (dir, workspace)
    }

    #[test]
    fn list_renders_table() {
        let (_dir, workspace) = workspace(None);

        let output = workspace.list("/docs", None, false).unwrap();

        assert!(output.contains("(first element)"));
        assert!(output.contains("Alpha"));
        assert!(output.contains("/docs/b.html"));
        assert!(!output.contains("/docs/c.html"));
        assert!(output.ends_with("4 entries"));
    }

    #[test]
    fn list_renders_json() {
        let (_dir, workspace) = workspace(None);

        let output = workspace.list("/docs", Some("/docs/a.html"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 3);
        assert_eq!(value["entries"][0]["key"], "FIRST");
        assert_eq!(value["entries"][1]["key"], "/docs/b.html");
        assert_eq!(value["entries"][2]["position"], 3.0);
    }

    #[test]
    fn move_and_place() {
        let (_dir, workspace) = workspace(None);

        let moved = workspace.move_after("/docs/b.html", "FIRST").unwrap();
        assert_eq!(moved, "/docs/b.html: NavPos = 0.5");

        let unchanged = workspace.move_after("/docs/b.html", "NOCHANGE").unwrap();
        assert_eq!(unchanged, "/docs/b.html: position unchanged");

        let placed = workspace
            .place("/docs", "/docs/c.html", Some("/docs/b.html"), Some("Gamma"))
            .unwrap();
        assert_eq!(placed, "/docs/c.html: NavPos = 0.75");

        let output = workspace.list("/docs", None, false).unwrap();
        let gamma = output.find("Gamma").unwrap();
        let alpha = output.find("Alpha").unwrap();
        assert!(gamma < alpha);
    }

    #[test]
    fn config_file_selects_locale_and_policy() {
        let (_dir, workspace) = workspace(Some(
            r#"{ "locale": "de", "missing_neighbor": "insert_at_front" }"#,
        ));

        let output = workspace.list("/docs", None, false).unwrap();
        assert!(output.contains("(erstes Element)"));

        let moved = workspace.move_after("/docs/b.html", "/docs/gone.html").unwrap();
        assert_eq!(moved, "/docs/b.html: NavPos = 0.5");
    }

    #[test]
    fn unknown_neighbor_is_rejected() {
        let (_dir, workspace) = workspace(None);

        let result = workspace.move_after("/docs/b.html", "/docs/gone.html");

        assert!(matches!(result, Err(NavError::InvalidNeighbor(_))));
    }

    #[test]
    fn relative_target_cannot_follow_itself() {
        let (_dir, workspace) = workspace(None);

        let result = workspace.move_after("docs/a.html", "/docs/a.html");
        assert!(matches!(result, Err(NavError::InvalidNeighbor(_))));

        let moved = workspace.move_after("docs/a.html", "/docs/b.html").unwrap();
        assert_eq!(moved, "/docs/a.html: NavPos = 2.5");
    }

    #[test]
    fn place_rejects_resource_from_other_folder() {
        let (dir, workspace) = workspace(None);
        let other = dir.path().join("other");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("x.html"), "").unwrap();

        let result = workspace.place("/docs", "/other/x.html", None, None);

        assert!(matches!(result, Err(NavError::NotInFolder { .. })));
        assert!(!other.join(".navprops.json").exists());
    }

    #[test]
    fn renumber_dry_run_then_apply() {
        let (_dir, workspace) = workspace(None);
        workspace.move_after("/docs/b.html", "FIRST").unwrap();

        let dry = workspace.renumber("/docs", true).unwrap();
        assert!(dry.ends_with("2 positions would change"));

        let applied = workspace.renumber("/docs", false).unwrap();
        assert!(applied.contains("/docs/b.html: 0.5 -> 1.0"));

        assert_eq!(workspace.renumber("/docs", false).unwrap(), "Positions already dense");
    }
}
