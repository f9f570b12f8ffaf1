use serde::{Deserialize, Serialize};

/// Уровень сложности туториала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Код уровня во frontmatter
    pub fn code(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }

    /// Получить все уровни
    pub fn all() -> [SkillLevel; 3] {
        [
            SkillLevel::Beginner,
            SkillLevel::Intermediate,
            SkillLevel::Advanced,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde() {
        for level in SkillLevel::all() {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.code()));
        }
    }

    #[test]
    fn test_unknown_or_uppercase_rejected() {
        assert!(serde_json::from_str::<SkillLevel>("\"expert\"").is_err());
        assert!(serde_json::from_str::<SkillLevel>("\"BEGINNER\"").is_err());
        assert_eq!(
            serde_json::from_str::<SkillLevel>("\"advanced\"").unwrap(),
            SkillLevel::Advanced
        );
    }
}
