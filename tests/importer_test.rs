// ==========================================
// 导入层集成测试
// ==========================================
// 测试目标: 价格表（JSON/CSV）、分区规则表、户型目录
// ==========================================


use floorplan_feedback::domain::Zone;
use floorplan_feedback::importer::{
    list_plan_files, load_cost_table, load_plan_file, load_zone_rules, ImportError,
};
use tempfile::TempDir;
use test_helpers::{valid_plan_json, write_file};

// ==========================================
// 价格表
// ==========================================

#[test]
fn test_cost_table_from_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "cost_table.json",
        r#"{"cement": 5200.0, "tile": 3500, "wood": 7800.5, "updated_at": "2025-06-03"}"#,
    );

    let table = load_cost_table(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.price("tile"), Some(3500.0));
    assert_eq!(table.price("updated_at"), None);
}

#[test]
fn test_cost_table_from_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "cost_table.CSV",
        "material,price\ncement, 5200\ntile,\n wood ,7800.5\n",
    );

    let table = load_cost_table(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.price("cement"), Some(5200.0));
    assert_eq!(table.price("wood"), Some(7800.5));
    assert_eq!(table.price("tile"), None);
}

#[test]
fn test_csv_bad_price_reports_row() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "cost_table.csv",
        "material,price\ncement,5200\ntile,cheap\n",
    );

    match load_cost_table(&path) {
        Err(ImportError::CsvParseError { row, .. }) => assert_eq!(row, 3),
        other => panic!("预期 CSV 解析错误, 实际: {:?}", other),
    }
}

#[test]
fn test_cost_table_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "cost_table.xlsx", "");
    assert!(matches!(
        load_cost_table(&path),
        Err(ImportError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_cost_table_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        load_cost_table(&temp_dir.path().join("none.json")),
        Err(ImportError::FileNotFound(_))
    ));
}

// ==========================================
// 分区规则表
// ==========================================

#[test]
fn test_zone_rules_from_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "room_rules.json",
        r#"{
            "bedroom": {"zone": "private"},
            "living": {"zone": "public"},
            "kitchen": {"zone": "service"}
        }"#,
    );

    let rules = load_zone_rules(&path).unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules.zone_of("kitchen"), Some(Zone::Service));
    assert_eq!(rules.zone_of("garage"), None);
}

#[test]
fn test_zone_rules_unknown_zone_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "room_rules.json",
        r#"{"bedroom": {"zone": "attic"}}"#,
    );
    assert!(matches!(
        load_zone_rules(&path),
        Err(ImportError::JsonParseError { .. })
    ));
}

// ==========================================
// 户型目录
// ==========================================

#[test]
fn test_list_plan_files_sorted_json_only() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "b.json", "{}");
    write_file(temp_dir.path(), "a.JSON", "{}");
    write_file(temp_dir.path(), "readme.md", "");
    std::fs::create_dir(temp_dir.path().join("nested.json")).unwrap();

    let names: Vec<String> = list_plan_files(temp_dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.JSON", "b.json"]);
}

#[test]
fn test_load_plan_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "plan.json", &valid_plan_json());

    let graph = load_plan_file(&path).unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.degree("Living").unwrap(), 2);
}

#[test]
fn test_plan_with_negative_area_is_graph_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "plan.json",
        r#"{"rooms": [{"name": "A", "type": "bedroom", "area": -3}]}"#,
    );
    assert!(matches!(load_plan_file(&path), Err(ImportError::Graph(_))));
}
