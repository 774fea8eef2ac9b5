//! Integration tests for the local preset library

use biome_presets::{BrushDocument, Error, PresetLibrary, PresetSource, RemoteEntry, Result};
use biome_test_utils::{TestWorkspace, slot_header};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory source; `fail_on` makes fetching that entry fail.
#[derive(Default)]
struct FakeSource {
    entries: Vec<RemoteEntry>,
    documents: HashMap<String, BrushDocument>,
    fail_on: Option<String>,
    fetched: RefCell<Vec<String>>,
}

impl FakeSource {
    fn with_brush(mut self, name: &str, doc: serde_json::Value) -> Self {
        self.entries.push(RemoteEntry {
            name: name.to_string(),
            path: format!("biomebrushes/{name}"),
            kind: "file".to_string(),
            download_url: Some(format!("https://raw.example/{name}")),
        });
        self.documents
            .insert(name.to_string(), serde_json::from_value(doc).unwrap());
        self
    }

    fn with_entry(mut self, name: &str, kind: &str) -> Self {
        self.entries.push(RemoteEntry {
            name: name.to_string(),
            path: format!("biomebrushes/{name}"),
            kind: kind.to_string(),
            download_url: None,
        });
        self
    }
}

impl PresetSource for FakeSource {
    fn list(&self) -> Result<Vec<RemoteEntry>> {
        Ok(self.entries.clone())
    }

    fn fetch(&self, entry: &RemoteEntry) -> Result<BrushDocument> {
        self.fetched.borrow_mut().push(entry.name.clone());
        if self.fail_on.as_deref() == Some(entry.name.as_str()) {
            return Err(Error::HttpStatus {
                url: entry.download_url.clone().unwrap_or_default(),
                status: 500,
            });
        }
        Ok(self.documents[&entry.name].clone())
    }
}

#[test]
fn test_list_missing_folder() {
    let ws = TestWorkspace::new();
    let library = PresetLibrary::new(ws.presets_dir());
    assert!(matches!(library.list(), Err(Error::LibraryMissing { .. })));
}

#[test]
fn test_list_sorted_txt_stems() {
    let ws = TestWorkspace::new();
    ws.write_preset("swamp", "");
    ws.write_preset("forest", "");
    ws.write_file("presets/notes.md", b"");
    std::fs::create_dir_all(ws.presets_dir().join("nested.txt")).unwrap();

    let library = PresetLibrary::new(ws.presets_dir());
    assert_eq!(library.list().unwrap(), vec!["forest", "swamp"]);
    assert!(library.contains("forest"));
    assert!(!library.contains("nested"));
    assert!(!library.contains("desert"));
}

#[test]
fn test_load_named_preset() {
    let ws = TestWorkspace::new();
    let header = slot_header("pafA", 1);
    ws.write_preset("forest", &format!("{header}\nProbability=7\nHeightHighLimit=5\n"));

    let parsed = PresetLibrary::new(ws.presets_dir()).load("forest").unwrap();
    assert_eq!(parsed.value.len(), 1);
    assert_eq!(parsed.value.get(&header).unwrap().get("Probability"), Some("7"));
}

#[test]
fn test_sync_writes_brushes_and_ignores_others() {
    let ws = TestWorkspace::new();
    let source = FakeSource::default()
        .with_entry("README.md", "file")
        .with_brush("forest.json", json!({"1": {"path": "[S/1]", "Probability": 7}}))
        .with_entry("drafts", "dir")
        .with_brush("swamp.json", json!({"1": {"path": "[S/2]", "HeightHighLimit": 3}}));

    let library = PresetLibrary::new(ws.presets_dir());
    let report = library.sync_from(&source).unwrap();

    assert_eq!(report.written, vec!["forest", "swamp"]);
    assert_eq!(report.ignored, 2);
    assert_eq!(library.list().unwrap(), vec!["forest", "swamp"]);
    ws.assert_file_contains("presets/forest.txt", "[S/1]\nProbability=7\n");
    ws.assert_file_contains("presets/swamp.txt", "HeightHighLimit=3");
}

#[test]
fn test_sync_stops_at_first_failure() {
    let ws = TestWorkspace::new();
    let mut source = FakeSource::default()
        .with_brush("a.json", json!({"1": {"path": "[A]"}}))
        .with_brush("b.json", json!({"1": {"path": "[B]"}}))
        .with_brush("c.json", json!({"1": {"path": "[C]"}}));
    source.fail_on = Some("b.json".to_string());

    let library = PresetLibrary::new(ws.presets_dir());
    let err = library.sync_from(&source).unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert_eq!(*source.fetched.borrow(), vec!["a.json", "b.json"]);
    assert!(library.contains("a"));
    assert!(!library.contains("b"));
    assert!(!library.contains("c"));
}

#[test]
fn test_sync_creates_folder() {
    let ws = TestWorkspace::new();
    let library = PresetLibrary::new(ws.root().join("deep/presets"));

    let report = library.sync_from(&FakeSource::default()).unwrap();
    assert!(report.written.is_empty());
    assert!(library.dir().is_dir());
    assert!(library.list().unwrap().is_empty());
}
