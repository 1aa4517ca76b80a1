use std::{fs, path::PathBuf};

use tempfile::tempdir;

use arrange::{
    ArrangeError,
    geometry::Point3,
    item::{Named, Placeable},
};
use arrange_cli::{Args, run, scene::Scene};

fn demos_path() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .toml scene files from a directory
fn collect_scene_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: impl Into<String>, output: impl Into<String>, config: Option<String>) -> Args {
    Args {
        input: input.into(),
        output: output.into(),
        config,
        active: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_scenes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = demos_path();
    let scenes = collect_scene_files(demos.join("scenes"));

    assert!(!scenes.is_empty(), "No demo scenes found in demos/scenes");

    let configs = [None, Some(demos.join("grouped.toml"))];
    let mut failed = Vec::new();

    for scene_path in &scenes {
        for config in &configs {
            let output_path = temp_dir.path().join(format!(
                "{}.toml",
                scene_path.file_stem().unwrap().to_string_lossy()
            ));

            let args = args(
                scene_path.to_string_lossy(),
                output_path.to_string_lossy(),
                config.as_ref().map(|p| p.to_string_lossy().to_string()),
            );

            match run(&args) {
                Ok(_) => {
                    let written = fs::read_to_string(&output_path).unwrap();
                    assert!(Scene::from_toml(&written).is_ok());
                }
                Err(e) => failed.push((scene_path.clone(), e)),
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo scenes that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo scene run(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_grouped_furniture_positions() {
    let temp_dir = tempdir().unwrap();
    let demos = demos_path();
    let output_path = temp_dir.path().join("furniture.toml");

    let result = run(&args(
        demos.join("scenes/furniture.toml").to_string_lossy(),
        output_path.to_string_lossy(),
        Some(demos.join("grouped.toml").to_string_lossy().to_string()),
    ))
    .expect("Failed to arrange furniture");

    assert_eq!(
        result.summary(),
        "Group: Chair, Objects: 3, Z count: 1\n\
         Group: Lamp, Objects: 1, Z count: 1\n\
         Group: Table, Objects: 2, Z count: 1"
    );

    let scene = Scene::from_toml(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let position_of = |name: &str| {
        scene
            .items()
            .iter()
            .find(|item| item.name() == name)
            .map(|item| item.position())
            .unwrap()
    };

    // Chairs fill a 2x2 layer growing towards -Y from the active chair
    assert_eq!(position_of("Chair.001"), Point3::new(4.0, -2.0, 0.0));
    assert_eq!(position_of("Chair.002"), Point3::new(5.5, -2.0, 0.0));
    assert_eq!(position_of("Chair.003"), Point3::new(4.0, -3.5, 0.0));
    // Chair spans two rows, so Lamp starts 3.0 further along -Y
    assert_eq!(position_of("Lamp"), Point3::new(4.0, -5.0, 0.0));
    assert_eq!(position_of("Table.001"), Point3::new(4.0, -6.5, 0.0));
    assert_eq!(position_of("Table.002"), Point3::new(5.5, -6.5, 0.0));
}

#[test]
fn e2e_active_override() {
    let temp_dir = tempdir().unwrap();
    let demos = demos_path();

    let mut args = args(
        demos.join("scenes/crates.toml").to_string_lossy(),
        temp_dir.path().join("out.toml").to_string_lossy(),
        None,
    );
    args.active = Some("crate_10".to_string());

    let result = run(&args).unwrap();
    assert_eq!(result.placements().len(), 11);
    assert_eq!(result.groups()[0].z_count(), 2);
}

#[test]
fn e2e_active_outside_scene_items() {
    let temp_dir = tempdir().unwrap();
    let demos = demos_path();
    let output_path = temp_dir.path().join("camera_anchor.toml");

    let result = run(&args(
        demos.join("scenes/camera_anchor.toml").to_string_lossy(),
        output_path.to_string_lossy(),
        Some(demos.join("grouped.toml").to_string_lossy().to_string()),
    ))
    .expect("Failed to arrange around the camera");

    // The camera is not an item, so only the listed objects are placed
    assert_eq!(result.placements().len(), 3);
    assert_eq!(
        result.summary(),
        "Group: Box, Objects: 2, Z count: 1
Group: Sphere, Objects: 1, Z count: 1"
    );

    let scene = Scene::from_toml(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(scene.items().len(), 3);
    assert_eq!(scene.active_position(), Some(Point3::new(0.0, 0.0, 10.0)));

    let box_001 = result.placement_of("Box.001").unwrap();
    assert_eq!(box_001.position(), Point3::new(0.0, 0.0, 10.0));
    // Box spans one row, so Sphere starts 1.5 further along -Y
    let sphere = result.placement_of("Sphere.001").unwrap();
    assert_eq!(sphere.position(), Point3::new(0.0, -1.5, 10.0));
}

#[test]
fn e2e_unknown_active_without_position_is_invalid_selection() {
    let temp_dir = tempdir().unwrap();
    let demos = demos_path();
    let output = temp_dir.path().join("out.toml");

    let mut args = args(
        demos.join("scenes/furniture.toml").to_string_lossy(),
        output.to_string_lossy(),
        None,
    );
    args.active = Some("Camera".to_string());

    let err = run(&args).unwrap_err();

    assert!(matches!(err, ArrangeError::InvalidSelection(_)));
    assert!(!output.exists(), "No output should be written on failure");
}

#[test]
fn e2e_empty_scene_is_invalid_selection() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("empty.toml");
    let output = temp_dir.path().join("out.toml");
    fs::write(&input, "active = \"nothing\"\n").unwrap();

    let err = run(&args(
        input.to_string_lossy(),
        output.to_string_lossy(),
        None,
    ))
    .unwrap_err();

    assert!(matches!(err, ArrangeError::InvalidSelection(_)));
    assert!(!output.exists(), "No output should be written on failure");
}
