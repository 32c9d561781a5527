//! Data Transfer Objects

use serde::Serialize;

use crate::application::DailyWordsResponse;
use crate::domain::dictionary::SelectedWord;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Daily Words DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SelectedWordDto {
    pub id: String,
    pub word: String,
    pub definition: String,
}

impl From<SelectedWord> for SelectedWordDto {
    fn from(word: SelectedWord) -> Self {
        Self {
            id: word.id,
            word: word.word,
            definition: word.definition,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DailyWordsDto {
    pub id: String,
    pub date: String,
    pub words: Vec<SelectedWordDto>,
}

impl From<DailyWordsResponse> for DailyWordsDto {
    fn from(response: DailyWordsResponse) -> Self {
        Self {
            id: response.id,
            date: response.selection.date,
            words: response
                .selection
                .words
                .into_iter()
                .map(SelectedWordDto::from)
                .collect(),
        }
    }
}
