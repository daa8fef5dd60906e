//! Integration tests for the scaffolding flow

use std::fs;

use meshmod_cli::scaffold::{load_templates, scaffold_module, ScaffoldParams};
use tempfile::TempDir;

fn params() -> ScaffoldParams {
    ScaffoldParams {
        name: Some("Ping".to_string()),
        vendor_id: Some("0xABCD".to_string()),
        module_id: Some("3".to_string()),
        description: Some("Round-trip latency measurement".to_string()),
    }
}

#[test]
fn test_full_module_scaffold() {
    let out = TempDir::new().unwrap();
    let mapping = params().into_parameter_map().unwrap();
    let templates = load_templates(None).unwrap();

    let written = scaffold_module(&templates, &mapping, out.path(), false).unwrap();
    assert_eq!(written.len(), 3);

    let header = fs::read_to_string(out.path().join("Ping.h")).unwrap();
    assert!(header.contains("GET_VENDOR_MODULE_ID(0xABCD, 3)"));
    assert!(header.contains("constexpr u8 PING_MODULE_CONFIG_VERSION = 1;"));

    let source = fs::read_to_string(out.path().join("Ping.cpp")).unwrap();
    assert!(source.contains("Ping::Ping()"));
    assert!(source.contains("Module(PING_MODULE_ID, \"Ping\")"));

    let global = fs::read_to_string(out.path().join("GlobalPingModule.h")).unwrap();
    assert!(global.contains("class PingModule: public Module"));
    assert!(global.contains("Round-trip latency measurement"));

    // Nothing unresolved may remain in any generated file
    for path in &written {
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("{{"), "unresolved placeholder in {:?}", path);
    }
}

#[test]
fn test_scaffold_from_custom_templates_dir() {
    let templates_dir = TempDir::new().unwrap();
    fs::write(
        templates_dir.path().join("{{module_name}}.conf.tmpl"),
        "module={{module_name}}\nvendor={{vendor_id}}\ntag={{upper module_name}}\n",
    )
    .unwrap();

    let out = TempDir::new().unwrap();
    let mapping = params().into_parameter_map().unwrap();
    let templates = load_templates(Some(templates_dir.path())).unwrap();

    let written = scaffold_module(&templates, &mapping, out.path(), false).unwrap();
    assert_eq!(written.len(), 1);

    let content = fs::read_to_string(out.path().join("Ping.conf")).unwrap();
    assert_eq!(content, "module=Ping\nvendor=0xABCD\ntag=PING\n");
}

#[test]
fn test_scaffold_twice_without_force_fails() {
    let out = TempDir::new().unwrap();
    let mapping = params().into_parameter_map().unwrap();
    let templates = load_templates(None).unwrap();

    scaffold_module(&templates, &mapping, out.path(), false).unwrap();
    assert!(scaffold_module(&templates, &mapping, out.path(), false).is_err());
    // With --force the second run succeeds
    assert!(scaffold_module(&templates, &mapping, out.path(), true).is_ok());
}
