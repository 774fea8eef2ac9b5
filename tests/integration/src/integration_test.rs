//! End-to-end integration test for the apply flow
//!
//! This test exercises the complete flow: brush download -> preset library ->
//! settings discovery -> session rewrite.

use biome_blocks::{RewriteOptions, rewrite_file};
use biome_fs::encoding;
use biome_meta::{Chooser, Result as MetaResult, SettingsStore, ensure_paths};
use biome_presets::{BrushDocument, PresetLibrary, PresetSource, RemoteEntry, Result};
use biome_test_utils::{SessionBuilder, TestWorkspace, slot_header};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Serves one brush document for `pafRiver` slots 1 and 2.
struct OneBrush;

impl PresetSource for OneBrush {
    fn list(&self) -> Result<Vec<RemoteEntry>> {
        Ok(vec![RemoteEntry {
            name: "river.json".into(),
            path: "biomebrushes/river.json".into(),
            kind: "file".into(),
            download_url: Some("https://raw.example/river.json".into()),
        }])
    }

    fn fetch(&self, _entry: &RemoteEntry) -> Result<BrushDocument> {
        let doc = json!({
            "1": {
                "path": format!("[{}]", slot_header("pafRiver", 1)),
                "HeightHighLimit": 40,
                "SelectedVerticalTexture": 12,
                "VerticalMask": 1
            },
            "2": {
                "path": format!("[{}]", slot_header("pafRiver", 2)),
                "Probability": 0.75,
                "HeightHighLimit": 80
            }
        });
        Ok(serde_json::from_value(doc).unwrap())
    }
}

/// Answers folder prompts from a queue and always picks the first project.
struct Scripted(VecDeque<PathBuf>);

impl Chooser for Scripted {
    fn choose_directory(&mut self, _title: &str) -> MetaResult<PathBuf> {
        Ok(self.0.pop_front().unwrap())
    }

    fn choose_from_list(&mut self, _prompt: &str, _options: &[String]) -> MetaResult<usize> {
        Ok(0)
    }
}

fn session_document() -> Vec<u8> {
    let text = SessionBuilder::new()
        .section("[Session/Общие]", &[("Язык", "ru")])
        .slot(
            "pafRiver",
            1,
            &[("Probability", "3"), ("HeightHighLimit", "10")],
        )
        .slot(
            "pafRiver",
            2,
            &[("Probability", "1"), ("HeightHighLimit", "20")],
        )
        .slot("pafRiver", 5, &[("VerticalMask", "0"), ("HeightHighLimit", "5")])
        .section("[Session/Tail]", &[("Last", "1")])
        .build_crlf();
    encoding::encode(&text)
}

#[test]
fn test_full_apply_flow() {
    let ws = TestWorkspace::new();
    let sessions_file = ws.install_redkit(&session_document());
    ws.create_workspace(&["pafRiver", "pafOther"]);

    // Download presets
    let library = PresetLibrary::new(ws.presets_dir());
    let sync = library.sync_from(&OneBrush).unwrap();
    assert_eq!(sync.written, vec!["river"]);

    // First-run discovery, then persist
    let store = SettingsStore::new(ws.root().join("config.json"));
    let mut chooser = Scripted(VecDeque::from([ws.redkit_dir(), ws.root().to_path_buf()]));
    let settings = ensure_paths(&store.load(), &mut chooser).unwrap();
    store.save(&settings).unwrap();
    assert_eq!(settings.project_name, "pafOther");

    // Apply against the river project explicitly
    let reloaded = store.load();
    assert_eq!(reloaded, settings);
    let report = rewrite_file(
        &reloaded.file_path,
        &library.path_for("river"),
        "pafRiver",
        RewriteOptions::default(),
    )
    .unwrap();

    assert_eq!(
        report.replaced,
        vec![slot_header("pafRiver", 1), slot_header("pafRiver", 2)]
    );
    assert_eq!(report.echoed, 1);

    let expected = SessionBuilder::new()
        .section("[Session/Общие]", &[("Язык", "ru")])
        .slot(
            "pafRiver",
            1,
            &[
                ("VerticalMask", "1"),
                ("SelectedVerticalTexture", "12"),
                ("HeightHighLimit", "40"),
            ],
        )
        .slot(
            "pafRiver",
            2,
            &[("Probability", "0.75"), ("HeightHighLimit", "80")],
        )
        .slot("pafRiver", 5, &[("VerticalMask", "0"), ("HeightHighLimit", "5")])
        .section("[Session/Tail]", &[("Last", "1")])
        .build_crlf();
    let actual = std::fs::read(&sessions_file).unwrap();
    assert_eq!(encoding::decode(&actual), expected);
    assert_eq!(actual, encoding::encode(&expected));
}

#[test]
fn test_reapply_is_stable() {
    let ws = TestWorkspace::new();
    let sessions_file = ws.install_redkit(&session_document());
    let library = PresetLibrary::new(ws.presets_dir());
    library.sync_from(&OneBrush).unwrap();
    let preset = library.path_for("river");

    rewrite_file(&sessions_file, &preset, "pafRiver", RewriteOptions::default()).unwrap();
    let first = std::fs::read(&sessions_file).unwrap();
    rewrite_file(&sessions_file, &preset, "pafRiver", RewriteOptions::default()).unwrap();
    let second = std::fs::read(&sessions_file).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_other_project_with_kept_slot_lines_is_unchanged() {
    let ws = TestWorkspace::new();
    let sessions_file = ws.install_redkit(&session_document());
    let library = PresetLibrary::new(ws.presets_dir());
    library.sync_from(&OneBrush).unwrap();

    let report = rewrite_file(
        &sessions_file,
        &library.path_for("river"),
        "pafOther",
        RewriteOptions {
            keep_foreign_slot_lines: true,
        },
    )
    .unwrap();

    assert!(report.replaced.is_empty());
    assert_eq!(report.echoed, 0);
    assert_eq!(std::fs::read(&sessions_file).unwrap(), session_document());
}
