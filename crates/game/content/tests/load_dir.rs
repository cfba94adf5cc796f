use std::fs;
use std::path::Path;

use bridgeworld_content::{ContentBundle, ContentFactory};
use bridgeworld_core::{Bestiary, GameConfig, LootTable};

#[test]
fn shipped_data_directory_loads() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let bundle = ContentFactory::load_dir(&data_dir).expect("shipped content is valid");

    assert_eq!(bundle.config, GameConfig::default());
    assert_eq!(bundle.bestiary, Bestiary::standard());
    assert_eq!(bundle.loot, LootTable::standard());
}

#[test]
fn partial_directory_mixes_files_and_builtins() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("config.toml"), "loot_drop_percent = 100\n").expect("write config");
    fs::write(
        dir.path().join("bestiary.ron"),
        r#"(monsters: [(name: "Slime", health: 5, attack: 1, experience: 3)])"#,
    )
    .expect("write bestiary");

    let bundle = ContentFactory::load_dir(dir.path()).expect("content loads");

    assert_eq!(bundle.config.loot_drop_percent, 100);
    assert_eq!(bundle.bestiary.monsters.len(), 1);
    assert_eq!(bundle.bestiary.monsters[0].name, "Slime");
    assert_eq!(bundle.loot, ContentBundle::builtin().loot);
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("loot.ron"), "(items: [(kind: Weapon)])").expect("write loot");

    let error = ContentFactory::load_dir(dir.path()).expect_err("malformed loot fails");

    assert!(format!("{error:#}").contains("loot.ron"));
}
