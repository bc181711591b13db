use std::path::PathBuf;

use mapgrid::{CellState, ExportError, GridModel, MarkerKind, SnapshotExporter};

/// Fresh per-test output directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .subsec_nanos();
    let dir = std::env::temp_dir().join(format!(
        "mapgrid_test_{tag}_{}_{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn export_without_markers_is_blocked() {
    let dir = scratch_dir("blocked");
    let exporter = SnapshotExporter::with_output_dir(&dir);

    let mut grid = GridModel::new(3, 2).expect("valid dims");
    assert!(matches!(
        exporter.export(&grid, None),
        Err(ExportError::MarkersMissing)
    ));

    // one marker is not enough
    grid.assign_marker(0, -1, MarkerKind::Player).expect("player");
    assert!(matches!(
        exporter.export(&grid, None),
        Err(ExportError::MarkersMissing)
    ));

    // nothing was written
    let entries = std::fs::read_dir(&dir).expect("read scratch dir").count();
    assert_eq!(entries, 0);
}

#[test]
fn export_writes_a_raster_of_the_bordered_grid() {
    let dir = scratch_dir("raster");
    let exporter = SnapshotExporter::with_output_dir(&dir);

    let mut grid = GridModel::new(3, 2).expect("valid dims");
    grid.assign_marker(0, -1, MarkerKind::Player).expect("player");
    grid.assign_marker(2, 2, MarkerKind::Drone).expect("drone");
    grid.set_cell(1, 0, CellState::Blocked).expect("paint");

    let path = exporter
        .export(&grid, Some("snapshot_under_test.jpg"))
        .expect("export succeeds");
    assert_eq!(path, dir.join("snapshot_under_test.jpg"));

    let image = image::open(&path).expect("decodable JPEG").to_rgb8();
    // 3*20 + 2*(10+20) by 2*20 + 2*(10+20)
    assert_eq!((image.width(), image.height()), (120, 100));

    // JPEG is lossy; check shading rather than exact bytes
    let margin = image.get_pixel(2, 2).0;
    assert!(margin.iter().all(|&c| c > 200), "margin should stay light");

    let border = image.get_pixel(20, 40).0; // center of slot (-1, 0)
    assert!(border.iter().all(|&c| c < 60), "border should stay dark");

    let blocked = image.get_pixel(60, 40).0; // center of cell (1, 0)
    assert!(
        blocked.iter().all(|&c| (60..200).contains(&c)),
        "blocked cell should be mid-grey, got {blocked:?}"
    );

    let marker = image.get_pixel(40, 20).0; // center of the player slot (0, -1)
    assert!(
        marker[2] > 150 && marker[2] > marker[0],
        "player slot should be blue, got {marker:?}"
    );
}

#[test]
fn default_filename_is_timestamped() {
    let dir = scratch_dir("named");
    let exporter = SnapshotExporter::with_output_dir(&dir);

    let mut grid = GridModel::new(2, 2).expect("valid dims");
    grid.assign_marker(0, -1, MarkerKind::Player).expect("player");
    grid.assign_marker(2, 1, MarkerKind::Drone).expect("drone");

    let path = exporter.export(&grid, None).expect("export succeeds");
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("utf8 filename");

    assert!(name.starts_with("map_snapshot_"), "got {name}");
    assert!(name.ends_with(".jpg"), "got {name}");
    // map_snapshot_YYYYMMDD_HHMMSS.jpg
    assert_eq!(name.len(), "map_snapshot_".len() + 15 + ".jpg".len());
    assert!(path.exists());
}
