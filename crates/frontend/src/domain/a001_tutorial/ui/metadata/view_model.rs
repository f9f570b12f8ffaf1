use crate::shared::clipboard::CopyState;
use crate::shared::date_utils::get_locale_timestamp;
use crate::shared::i18n::{translate, TranslationKey};
use contracts::domain::a001_tutorial::aggregate::{SourceRef, TutorialRecord};
use contracts::enums::language::Lang;
use contracts::enums::skill_level::SkillLevel;

/// What the metadata strip shows for one tutorial
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialMetadataViewModel {
    pub tags: Vec<String>,
    pub skill: SkillLevel,
    pub author: Option<String>,
    pub source: Option<SourceRef>,
    pub published: Option<String>,
    pub reading_minutes: u32,
    pub address: Option<String>,
}

/// Text of the tip-address block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressLabel {
    pub instruction: &'static str,
    pub address: String,
    /// Present while the copy acknowledgment is showing
    pub copied: Option<&'static str>,
}

impl AddressLabel {
    /// Plain-text form; the instruction is shown uppercased
    pub fn text(&self) -> String {
        let mut text = format!("{} {}", self.instruction.to_uppercase(), self.address);
        if let Some(copied) = self.copied {
            text.push(' ');
            text.push_str(copied);
        }
        text
    }
}

impl TutorialMetadataViewModel {
    pub fn from_record(record: &TutorialRecord) -> Self {
        let fm = &record.frontmatter;
        Self {
            tags: fm.tags.clone(),
            skill: fm.skill,
            author: fm.author.clone(),
            source: fm.source.clone(),
            published: fm.published.clone(),
            reading_minutes: record.fields.reading_time.rounded_minutes(),
            address: fm.address.clone(),
        }
    }

    pub fn skill_key(&self) -> TranslationKey {
        TranslationKey::from(self.skill)
    }

    pub fn skill_label(&self, lang: Lang) -> &'static str {
        translate(lang, self.skill_key())
    }

    /// CSS classes of the skill pill, with a per-level modifier
    pub fn skill_class(&self) -> String {
        format!(
            "tutorial-metadata__skill tutorial-metadata__skill--{}",
            self.skill.code()
        )
    }

    /// Publish date in the active language
    pub fn published_label(&self, lang: Lang) -> Option<String> {
        self.published
            .as_deref()
            .map(|raw| get_locale_timestamp(lang, raw))
    }

    /// e.g. "5 minute read"
    pub fn reading_time_label(&self, lang: Lang) -> String {
        format!(
            "{} {}",
            self.reading_minutes,
            translate(lang, TranslationKey::TutorialMetadataMinuteRead)
        )
    }

    pub fn address_label(&self, lang: Lang, state: CopyState) -> Option<AddressLabel> {
        self.address.as_ref().map(|address| AddressLabel {
            instruction: translate(lang, TranslationKey::TutorialMetadataTipAuthor),
            address: address.clone(),
            copied: state
                .is_copied()
                .then(|| translate(lang, TranslationKey::Copied)),
        })
    }
}
