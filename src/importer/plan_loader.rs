// ==========================================
// 户型评分系统 - 户型记录加载
// ==========================================
// 输入: {rooms: [{name, type, area, wall_length?}], edges: [{a, b}]}
// 输出: RoomGraph（先按文件顺序加房间，再加连接）
// ==========================================

use crate::domain::{GraphResult, Room, RoomGraph};
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ==========================================
// PlanRecord - 外部户型记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub a: String,
    pub b: String,
}

impl PlanRecord {
    /// 构建房间图，返回遇到的第一个结构错误
    pub fn into_graph(self) -> GraphResult<RoomGraph> {
        let mut graph = RoomGraph::new();
        for room in self.rooms {
            graph.add_room(room)?;
        }
        for edge in &self.edges {
            graph.add_edge(&edge.a, &edge.b)?;
        }
        Ok(graph)
    }

    /// 由房间图导出记录（用于输出改进后的户型）
    pub fn from_graph(graph: &RoomGraph) -> Self {
        Self {
            rooms: graph.rooms().cloned().collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(a, b)| EdgeRecord {
                    a: a.to_string(),
                    b: b.to_string(),
                })
                .collect(),
        }
    }
}

/// 读取并解析户型文件
pub fn load_plan_file(path: &Path) -> ImportResult<RoomGraph> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(ImportError::FileNotFound(display));
    }

    let raw = fs::read_to_string(path).map_err(|e| ImportError::FileReadError {
        path: display.clone(),
        message: e.to_string(),
    })?;
    let record: PlanRecord =
        serde_json::from_str(&raw).map_err(|e| ImportError::JsonParseError {
            path: display,
            message: e.to_string(),
        })?;

    Ok(record.into_graph()?)
}

/// 列出目录下所有 .json 户型文件（按文件名排序）
pub fn list_plan_files(dir: &Path) -> ImportResult<Vec<PathBuf>> {
    let read_err = |e: std::io::Error| ImportError::FileReadError {
        path: dir.display().to_string(),
        message: e.to_string(),
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if path.is_file() && is_json {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GraphError;

    #[test]
    fn test_plan_record_builds_graph() {
        let raw = r#"{
            "rooms": [
                {"name": "Living", "type": "living", "area": 24.0},
                {"name": "Kitchen", "type": "kitchen", "area": 9.5, "wall_length": 12.0}
            ],
            "edges": [{"a": "Living", "b": "Kitchen"}]
        }"#;
        let record: PlanRecord = serde_json::from_str(raw).unwrap();
        let graph = record.into_graph().unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.degree("Kitchen").unwrap(), 1);
        assert_eq!(graph.room("Kitchen").unwrap().wall_length, Some(12.0));
    }

    #[test]
    fn test_edge_to_unknown_room_fails() {
        let raw = r#"{"rooms": [{"name": "A", "type": "bedroom", "area": 10}],
                      "edges": [{"a": "A", "b": "Ghost"}]}"#;
        let record: PlanRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(
            record.into_graph().unwrap_err(),
            GraphError::UnknownRoom("Ghost".to_string())
        );
    }

    #[test]
    fn test_from_graph_keeps_rooms_and_edges() {
        let raw = r#"{"rooms": [{"name": "A", "type": "bedroom", "area": 10},
                                {"name": "B", "type": "toilet", "area": 4}],
                      "edges": [{"a": "B", "b": "A"}]}"#;
        let record: PlanRecord = serde_json::from_str(raw).unwrap();
        let graph = record.into_graph().unwrap();

        let exported = PlanRecord::from_graph(&graph);
        assert_eq!(exported.rooms.len(), 2);
        assert_eq!(
            exported.edges,
            vec![EdgeRecord {
                a: "A".to_string(),
                b: "B".to_string()
            }]
        );
    }
}
