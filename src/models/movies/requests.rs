use serde::Deserialize;

use crate::models::common::deserialize_present;

// 电影创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieRequest {
    pub name: String,
    pub year: i32,
    pub description: String,
    pub genre: String,
    #[serde(default)]
    pub writers: Option<String>,
    #[serde(default)]
    pub actors: Option<String>,
}

// 电影部分更新请求
//
// 缺省字段保持原值；writers/actors 显式传 null 时清空。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovieRequest {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub writers: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub actors: Option<Option<String>>,
}

impl UpdateMovieRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.year.is_none()
            && self.description.is_none()
            && self.genre.is_none()
            && self.writers.is_none()
            && self.actors.is_none()
    }
}

// 按名称搜索
#[derive(Debug, Deserialize)]
pub struct MovieSearchQuery {
    pub name: String,
}
