//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod movies;
pub mod reviews;
pub mod users;

use chrono::{DateTime, Utc};

/// 时间戳以微秒存储，编辑窗口的判定需要亚秒精度
pub(crate) fn from_micros(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_micros(ts).unwrap_or_default()
}
