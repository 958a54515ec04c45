use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 啤酒 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerId(pub i64);

impl fmt::Display for BeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BeerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// 目录条目
///
/// 只读取 `id` 和 `name`，其余字段原样保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: BeerId,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Beer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: BeerId(id),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// 名称是否包含给定文本（区分大小写）
    pub fn name_contains(&self, text: &str) -> bool {
        self.name.contains(text)
    }
}

/// 名称为 null 或非字符串时按空串处理
fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        _ => String::new(),
    })
}

/// 按 ID 升序排列
pub fn sort_by_id(beers: &mut [Beer]) {
    beers.sort_by_key(|beer| beer.id);
}
