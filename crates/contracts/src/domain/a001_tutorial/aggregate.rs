use anyhow::Context;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::enums::skill_level::SkillLevel;

// ============================================================================
// Value Objects
// ============================================================================

/// Ссылка на первоисточник: подпись и адрес всегда вместе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub label: String,
    pub url: String,
}

impl SourceRef {
    /// Собрать ссылку из пары полей frontmatter.
    /// Если хотя бы одно поле отсутствует или пустое, ссылки нет.
    pub fn from_pair(label: Option<String>, url: Option<String>) -> Option<Self> {
        match (non_empty(label), non_empty(url)) {
            (Some(label), Some(url)) => Some(Self { label, url }),
            _ => None,
        }
    }
}

/// Оценка времени чтения
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadingTime {
    pub minutes: f64,
}

impl ReadingTime {
    /// Минуты, округлённые до ближайшего целого.
    /// Отрицательные значения и NaN дают 0.
    pub fn rounded_minutes(&self) -> u32 {
        // `as` saturates: NaN -> 0, negatives -> 0
        self.minutes.round() as u32
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Метаданные статьи (frontmatter) после нормализации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FrontmatterDto", into = "FrontmatterDto")]
pub struct Frontmatter {
    pub tags: Vec<String>,
    pub skill: SkillLevel,
    pub author: Option<String>,
    pub source: Option<SourceRef>,
    pub published: Option<String>,
    pub address: Option<String>,
}

/// Поля, вычисленные контент-пайплайном
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TutorialFields {
    #[serde(rename = "readingTime")]
    pub reading_time: ReadingTime,
}

/// Туториал: всё, что нужно полосе метаданных под статьёй
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialRecord {
    pub frontmatter: Frontmatter,
    pub fields: TutorialFields,
}

impl TutorialRecord {
    /// Разобрать запись из JSON контент-пайплайна
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to decode tutorial record")
    }
}

// ============================================================================
// DTO (wire format)
// ============================================================================

/// Frontmatter в том виде, в каком его отдаёт контент-пайплайн
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontmatterDto {
    #[serde(default)]
    pub tags: Vec<String>,
    pub skill: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<FrontmatterDto> for Frontmatter {
    fn from(dto: FrontmatterDto) -> Self {
        Self {
            tags: dto.tags,
            skill: dto.skill,
            author: non_empty(dto.author),
            source: SourceRef::from_pair(dto.source, dto.source_url),
            published: non_empty(dto.published),
            address: non_empty(dto.address),
        }
    }
}

impl From<Frontmatter> for FrontmatterDto {
    fn from(fm: Frontmatter) -> Self {
        let (source, source_url) = match fm.source {
            Some(s) => (Some(s.label), Some(s.url)),
            None => (None, None),
        };
        Self {
            tags: fm.tags,
            skill: fm.skill,
            author: fm.author,
            source,
            source_url,
            published: fm.published,
            address: fm.address,
        }
    }
}

/// Пустая строка = поле отсутствует; пробелы считаются значением
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Разобрать дату публикации: "YYYY-MM-DD" или RFC 3339
pub fn parse_published(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "frontmatter": {
            "tags": ["solidity", "smart contracts", "security"],
            "skill": "intermediate",
            "author": "Jane Doe",
            "source": "Example Blog",
            "sourceUrl": "https://example.com/post",
            "published": "2020-04-13",
            "address": "0x1234567890abcdef1234567890abcdef12345678"
        },
        "fields": { "readingTime": { "minutes": 7.6 } }
    }"#;

    #[test]
    fn test_decode_full_record() {
        let record = TutorialRecord::from_json(FULL).unwrap();
        let fm = &record.frontmatter;
        assert_eq!(fm.tags, vec!["solidity", "smart contracts", "security"]);
        assert_eq!(fm.skill, SkillLevel::Intermediate);
        assert_eq!(fm.author.as_deref(), Some("Jane Doe"));
        assert_eq!(
            fm.source,
            Some(SourceRef {
                label: "Example Blog".to_string(),
                url: "https://example.com/post".to_string(),
            })
        );
        assert_eq!(fm.published.as_deref(), Some("2020-04-13"));
        assert_eq!(record.fields.reading_time.rounded_minutes(), 8);
    }

    #[test]
    fn test_source_requires_both_fields() {
        assert!(SourceRef::from_pair(Some("Blog".into()), None).is_none());
        assert!(SourceRef::from_pair(None, Some("https://x.io".into())).is_none());
        assert!(SourceRef::from_pair(Some("".into()), Some("https://x.io".into())).is_none());
        assert!(SourceRef::from_pair(Some("Blog".into()), Some("https://x.io".into())).is_some());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let json = r#"{
            "frontmatter": { "skill": "beginner", "author": "", "address": "", "published": "" },
            "fields": { "readingTime": { "minutes": 1 } }
        }"#;
        let fm = TutorialRecord::from_json(json).unwrap().frontmatter;
        assert!(fm.author.is_none());
        assert!(fm.address.is_none());
        assert!(fm.published.is_none());
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_whitespace_values_are_kept() {
        let json = r#"{
            "frontmatter": {
                "skill": "beginner",
                "author": " ",
                "address": "  ",
                "source": " ",
                "sourceUrl": " "
            },
            "fields": { "readingTime": { "minutes": 1 } }
        }"#;
        let fm = TutorialRecord::from_json(json).unwrap().frontmatter;
        assert_eq!(fm.author.as_deref(), Some(" "));
        assert_eq!(fm.address.as_deref(), Some("  "));
        assert_eq!(
            fm.source,
            Some(SourceRef {
                label: " ".to_string(),
                url: " ".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_skill_is_rejected() {
        let json = r#"{
            "frontmatter": { "skill": "expert" },
            "fields": { "readingTime": { "minutes": 1 } }
        }"#;
        let err = TutorialRecord::from_json(json).unwrap_err();
        assert!(err.to_string().contains("tutorial record"));
    }

    #[test]
    fn test_missing_skill_is_rejected() {
        let json = r#"{
            "frontmatter": { "tags": ["evm"] },
            "fields": { "readingTime": { "minutes": 1 } }
        }"#;
        assert!(TutorialRecord::from_json(json).is_err());
    }

    #[test]
    fn test_rounded_minutes() {
        assert_eq!(ReadingTime { minutes: 4.4 }.rounded_minutes(), 4);
        assert_eq!(ReadingTime { minutes: 4.6 }.rounded_minutes(), 5);
        assert_eq!(ReadingTime { minutes: 4.5 }.rounded_minutes(), 5);
        assert_eq!(ReadingTime { minutes: 0.0 }.rounded_minutes(), 0);
        assert_eq!(ReadingTime { minutes: f64::NAN }.rounded_minutes(), 0);
    }

    #[test]
    fn test_parse_published() {
        assert_eq!(parse_published("2020-04-13"), NaiveDate::from_ymd_opt(2020, 4, 13));
        assert_eq!(
            parse_published("2021-11-02T10:15:00Z"),
            NaiveDate::from_ymd_opt(2021, 11, 2)
        );
        assert_eq!(parse_published("13/04/2020"), None);
    }

    #[test]
    fn test_serialize_keeps_wire_shape() {
        let record = TutorialRecord::from_json(FULL).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["frontmatter"]["sourceUrl"], "https://example.com/post");
        assert_eq!(value["frontmatter"]["skill"], "intermediate");
        assert_eq!(value["fields"]["readingTime"]["minutes"], 7.6);
    }
}
