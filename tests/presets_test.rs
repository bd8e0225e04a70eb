use demo::app::presets::{generate, PresetsOptions};
use demo::{DemoError, LocalStorage, TomlConfig};
use tempfile::TempDir;

const TEMPLATE: &str = r#"{
  "version": 6,
  "configurePresets": [
    {
      "name": "rp2040-debug",
      "binaryDir": "${sourceDir}/build/rp2040-debug",
      "cacheVariables": { "PICO_BOARD": "pico", "CMAKE_BUILD_TYPE": "Debug" }
    },
    {
      "name": "rp2350-release",
      "binaryDir": "${sourceDir}/build/rp2350-release",
      "cacheVariables": { "PICO_BOARD": "pico2", "CMAKE_BUILD_TYPE": "Release" }
    }
  ],
  "buildPresets": [
    { "name": "rp2040-debug", "configurePreset": "rp2040-debug" }
  ]
}"#;

fn storage_in(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_generate_presets_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("CMakePresets.json.def"), TEMPLATE).unwrap();

    let resolved = PresetsOptions {
        generator: Some("Ninja".to_string()),
        ..PresetsOptions::default()
    }
    .resolve(&TomlConfig::default());

    let updated = generate(storage_in(&temp_dir), &resolved).await.unwrap();
    assert_eq!(updated, 2);

    let written = std::fs::read_to_string(temp_dir.path().join("CMakePresets.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&written).unwrap();
    for preset in doc["configurePresets"].as_array().unwrap() {
        assert_eq!(preset["generator"], "Ninja");
    }
    assert_eq!(
        doc["configurePresets"][0]["binaryDir"],
        "${sourceDir}/build/rp2040-debug"
    );
    assert!(doc["buildPresets"][0].get("generator").is_none());

    // key order of the template is kept
    let version_at = written.find("\"version\"").unwrap();
    let configure_at = written.find("\"configurePresets\"").unwrap();
    let build_at = written.find("\"buildPresets\"").unwrap();
    assert!(version_at < configure_at && configure_at < build_at);
}

#[tokio::test]
async fn test_output_into_new_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("tpl.def"), TEMPLATE).unwrap();

    let resolved = PresetsOptions {
        template: Some("tpl.def".to_string()),
        output: Some("generated/CMakePresets.json".to_string()),
        generator: Some("Unix Makefiles".to_string()),
    }
    .resolve(&TomlConfig::default());

    generate(storage_in(&temp_dir), &resolved).await.unwrap();
    assert!(temp_dir.path().join("generated/CMakePresets.json").exists());
}

#[tokio::test]
async fn test_missing_template_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let resolved = PresetsOptions::default().resolve(&TomlConfig::default());

    let result = generate(storage_in(&temp_dir), &resolved).await;
    assert!(matches!(result, Err(DemoError::IoError(_))));
    assert!(!temp_dir.path().join("CMakePresets.json").exists());
}

#[tokio::test]
async fn test_invalid_template_json() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("CMakePresets.json.def"), "{ \"version\": ").unwrap();
    let resolved = PresetsOptions::default().resolve(&TomlConfig::default());

    let result = generate(storage_in(&temp_dir), &resolved).await;
    assert!(matches!(result, Err(DemoError::SerializationError(_))));
}
