pub mod ui;

/// Tutorial shown by the demo page
pub const SAMPLE_TUTORIAL_JSON: &str = include_str!("sample_tutorial.json");

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_tutorial::aggregate::TutorialRecord;
    use contracts::enums::skill_level::SkillLevel;

    #[test]
    fn test_sample_tutorial_decodes() {
        let record = TutorialRecord::from_json(SAMPLE_TUTORIAL_JSON).unwrap();
        assert_eq!(record.frontmatter.skill, SkillLevel::Intermediate);
        assert_eq!(record.frontmatter.tags.len(), 4);
        assert!(record.frontmatter.source.is_some());
        assert_eq!(record.fields.reading_time.rounded_minutes(), 7);
    }
}
