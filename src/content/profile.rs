use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{
    null_default,
    text::{BilingualText, Localized},
};

/// Category keys with a fixed display order. Any other key found in the
/// document is shown after these.
pub const SKILL_CATEGORY_ORDER: [&str; 7] = [
    "ai_ml",
    "webDevelopment",
    "programmingLanguages",
    "databases",
    "libraries",
    "tools",
    "frameworks",
];

/// The `personal-data.json` document. Every collection defaults to empty
/// when the document leaves it out or writes `null` for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalProfile {
    #[serde(deserialize_with = "null_default")]
    pub personal: Personal,
    #[serde(deserialize_with = "null_default")]
    pub social: Social,
    #[serde(deserialize_with = "one_or_many")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_default")]
    pub languages: Vec<LanguageSkill>,
    #[serde(alias = "certifications", deserialize_with = "null_default")]
    pub certificates: Vec<Certificate>,
    #[serde(deserialize_with = "null_default")]
    pub skills: SkillGroups,
    #[serde(deserialize_with = "null_default")]
    pub experience: Vec<Experience>,
    pub ai_expertise: Option<Expertise>,
    pub network_expertise: Option<Expertise>,
    #[serde(deserialize_with = "null_default")]
    pub achievements: Vec<BilingualText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    pub name: BilingualText,
    pub title: BilingualText,
    pub location: BilingualText,
    pub bio: BilingualText,
    pub about_me: BilingualText,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_default")]
    pub whatsapp: String,
    #[serde(deserialize_with = "null_default")]
    pub profile_image: String,
}

impl Personal {
    /// Up to two initials taken from the English name, used as the nav brand.
    pub fn initials(&self) -> String {
        self.name
            .en
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub github: Option<SocialLink>,
    pub linkedin: Option<SocialLink>,
    pub instagram: Option<SocialLink>,
    pub facebook: Option<SocialLink>,
}

impl Social {
    /// Linked profiles in display order, skipping any without a URL.
    pub fn links(&self) -> Vec<(&'static str, &SocialLink)> {
        [
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
            ("Instagram", &self.instagram),
            ("Facebook", &self.facebook),
        ]
        .into_iter()
        .filter_map(|(label, link)| link.as_ref().map(|l| (label, l)))
        .filter(|(_, link)| !link.url.trim().is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degree: BilingualText,
    pub university: BilingualText,
    pub college: BilingualText,
    /// Display string, never parsed.
    #[serde(alias = "expectedGraduation")]
    #[serde(deserialize_with = "null_default")]
    pub graduation_date: String,
    #[serde(deserialize_with = "null_default")]
    pub relevant_coursework: Vec<BilingualText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub name: BilingualText,
    #[serde(deserialize_with = "null_default")]
    pub level: i64,
    pub note: BilingualText,
}

impl LanguageSkill {
    pub fn percent(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub title: BilingualText,
    pub issuer: Localized,
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub level: BilingualText,
    pub color: Option<String>,
}

impl Skill {
    /// Bar fill for the skill, read from the English level label and falling
    /// back to the Arabic one.
    pub fn progress(&self) -> u8 {
        match level_progress(self.level.en.as_deref().unwrap_or_default()) {
            0 => level_progress(self.level.ar.as_deref().unwrap_or_default()),
            p => p,
        }
    }
}

pub fn level_progress(label: &str) -> u8 {
    match label.trim() {
        "Expert" | "خبير" => 95,
        "Advanced" | "متقدم" => 90,
        "Intermediate" | "متوسط" => 70,
        "Beginner" | "مبتدئ" => 45,
        _ => 0,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillGroups(pub BTreeMap<String, Vec<Skill>>);

impl SkillGroups {
    /// Non-empty categories, known keys first in their fixed order, then the
    /// remaining keys alphabetically.
    pub fn categories(&self) -> Vec<(&str, &[Skill])> {
        let known = SKILL_CATEGORY_ORDER
            .iter()
            .filter_map(|key| self.0.get_key_value(*key));
        let extra = self
            .0
            .iter()
            .filter(|(key, _)| !SKILL_CATEGORY_ORDER.contains(&key.as_str()));
        known
            .chain(extra)
            .filter(|(_, skills)| !skills.is_empty())
            .map(|(key, skills)| (key.as_str(), skills.as_slice()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    pub title: BilingualText,
    pub company: BilingualText,
    pub duration: Localized,
    pub description: BilingualText,
    #[serde(deserialize_with = "null_default")]
    pub highlights: Vec<BilingualText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expertise {
    pub title: BilingualText,
    pub description: BilingualText,
    #[serde(deserialize_with = "null_default")]
    pub libraries: Vec<String>,
}

/// Accepts a list, a single object, or null.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    const PROFILE: &str = r##"{
        "personal": {
            "name": {"en": "Sara Nasser", "ar": "سارة ناصر"},
            "title": {"en": "Software Engineer", "ar": "مهندسة برمجيات"},
            "email": "sara@example.com",
            "phone": "+967 777 123 456",
            "whatsapp": "+967 777 123 456",
            "aboutMe": {"en": "I build things."},
            "profileImage": "profile.jpg"
        },
        "social": {"github": {"url": "https://github.com/sara", "username": "sara"}},
        "education": [{
            "degree": {"en": "B.Sc. Computer Science", "ar": "بكالوريوس علوم الحاسوب"},
            "university": {"en": "Sana'a University"},
            "graduationDate": "2025"
        }],
        "languages": [{"name": {"en": "Arabic"}, "level": 100, "note": {"en": "Native"}}],
        "certificates": [{"title": {"en": "CCNA"}, "issuer": "Cisco", "date": "2023", "link": "https://example.com/ccna"}],
        "skills": {
            "tools": [{"name": "Git", "level": {"en": "Advanced", "ar": "متقدم"}, "color": "#f05032"}],
            "ai_ml": [{"name": "PyTorch", "level": {"en": "Intermediate"}}],
            "cloud": [{"name": "AWS", "level": {"en": "Beginner"}}],
            "databases": []
        },
        "experience": [{
            "id": 1,
            "title": {"en": "Intern"},
            "company": {"en": "Acme"},
            "duration": {"en": "Summer 2023", "ar": "صيف 2023"},
            "description": {"en": "Built tools."},
            "highlights": [{"en": "Shipped a dashboard"}]
        }, {
            "id": 2,
            "title": {"en": "Freelancer"},
            "duration": "2024 - Present"
        }]
    }"##;

    #[test]
    fn test_full_profile_decodes() {
        let profile: PersonalProfile = serde_json::from_str(PROFILE).unwrap();
        assert_eq!(profile.personal.email, "sara@example.com");
        assert_eq!(profile.personal.about_me.resolve(Locale::Ar), "");
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].graduation_date, "2025");
        assert_eq!(profile.languages[0].percent(), 100);
        assert_eq!(profile.certificates[0].issuer.resolve(Locale::Ar), "Cisco");
        assert_eq!(
            profile.social.github.as_ref().map(|g| g.username.as_str()),
            Some("sara")
        );
        assert!(profile.social.linkedin.is_none());
    }

    #[test]
    fn test_polymorphic_duration() {
        let profile: PersonalProfile = serde_json::from_str(PROFILE).unwrap();
        let durations = profile
            .experience
            .iter()
            .map(|e| e.duration.resolve(Locale::Ar))
            .collect::<Vec<_>>();
        assert_eq!(durations, vec!["صيف 2023", "2024 - Present"]);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let profile: PersonalProfile =
            serde_json::from_str(r#"{"personal": {"email": "a@b.c"}}"#).unwrap();
        assert!(profile.education.is_empty());
        assert!(profile.languages.is_empty());
        assert!(profile.certificates.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.skills.categories().is_empty());
        assert!(profile.ai_expertise.is_none());

        let empty: PersonalProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PersonalProfile::default());
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let profile: PersonalProfile = serde_json::from_str(
            r#"{
                "personal": {"name": {"en": "Sara"}, "bio": null, "email": null},
                "social": {"github": {"url": null, "username": "sara"}},
                "languages": null,
                "certificates": [{"title": null, "issuer": null, "date": null}],
                "experience": [{"id": null, "title": {"en": "Intern"}, "description": null,
                                "duration": null, "highlights": [null, {"en": "Shipped"}]}],
                "achievements": null
            }"#,
        )
        .unwrap();
        assert_eq!(profile.personal.name.resolve(Locale::En), "Sara");
        assert_eq!(profile.personal.bio.resolve(Locale::En), "");
        assert_eq!(profile.personal.email, "");
        assert!(profile.social.links().is_empty());
        assert!(profile.languages.is_empty());
        assert_eq!(profile.certificates[0].issuer.resolve(Locale::Ar), "");
        assert_eq!(profile.experience[0].id, 0);
        assert_eq!(profile.experience[0].duration.resolve(Locale::En), "");
        assert_eq!(profile.experience[0].highlights.len(), 2);
        assert!(profile.achievements.is_empty());

        let language: LanguageSkill =
            serde_json::from_str(r#"{"name": {"en": "English"}, "level": null}"#).unwrap();
        assert_eq!(language.percent(), 0);
    }

    #[test]
    fn test_single_education_object() {
        let profile: PersonalProfile = serde_json::from_str(
            r#"{"education": {"degree": {"en": "B.Sc."}, "expectedGraduation": "June 2025",
                "relevantCoursework": [{"en": "Networks", "ar": "الشبكات"}]}}"#,
        )
        .unwrap();
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].graduation_date, "June 2025");
        assert_eq!(
            profile.education[0].relevant_coursework[0].resolve(Locale::Ar),
            "الشبكات"
        );

        let null_education: PersonalProfile =
            serde_json::from_str(r#"{"education": null}"#).unwrap();
        assert!(null_education.education.is_empty());
    }

    #[test]
    fn test_certifications_alias_with_localized_issuer() {
        let profile: PersonalProfile = serde_json::from_str(
            r#"{"certifications": [{"title": {"en": "AI"}, "issuer": {"en": "Coursera", "ar": "كورسيرا"}, "date": "2024"}]}"#,
        )
        .unwrap();
        assert_eq!(profile.certificates.len(), 1);
        assert_eq!(profile.certificates[0].issuer.resolve(Locale::Ar), "كورسيرا");
        assert!(profile.certificates[0].link.is_none());
    }

    #[test]
    fn test_skill_categories_order() {
        let profile: PersonalProfile = serde_json::from_str(PROFILE).unwrap();
        let keys = profile
            .skills
            .categories()
            .into_iter()
            .map(|(key, _)| key)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["ai_ml", "tools", "cloud"]);
    }

    #[test]
    fn test_skill_progress() {
        let profile: PersonalProfile = serde_json::from_str(PROFILE).unwrap();
        let progress = profile
            .skills
            .categories()
            .into_iter()
            .flat_map(|(_, skills)| skills.iter().map(Skill::progress))
            .collect::<Vec<_>>();
        assert_eq!(progress, vec![70, 90, 45]);

        let arabic_only = Skill {
            level: BilingualText {
                en: None,
                ar: Some("خبير".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(arabic_only.progress(), 95);
        assert_eq!(level_progress("Wizard"), 0);
    }

    #[test]
    fn test_language_level_clamped() {
        let over = LanguageSkill {
            level: 140,
            ..Default::default()
        };
        let under = LanguageSkill {
            level: -5,
            ..Default::default()
        };
        assert_eq!(over.percent(), 100);
        assert_eq!(under.percent(), 0);
    }

    #[test]
    fn test_initials() {
        let profile: PersonalProfile = serde_json::from_str(PROFILE).unwrap();
        assert_eq!(profile.personal.initials(), "SN");
        assert_eq!(Personal::default().initials(), "");
    }

    #[test]
    fn test_social_links_skip_missing_urls() {
        let social = Social {
            github: Some(SocialLink {
                url: "https://github.com/sara".to_string(),
                username: "sara".to_string(),
            }),
            linkedin: Some(SocialLink::default()),
            facebook: Some(SocialLink {
                url: "https://facebook.com/sara".to_string(),
                username: String::new(),
            }),
            instagram: None,
        };
        let labels = social
            .links()
            .into_iter()
            .map(|(label, _)| label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["GitHub", "Facebook"]);
    }

    #[test]
    fn test_bundled_document_decodes() {
        let profile: PersonalProfile =
            serde_json::from_str(include_str!("../../public/personal-data.json")).unwrap();
        assert!(!profile.personal.initials().is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.skills.categories().is_empty());
        for (key, _) in profile.skills.categories() {
            assert!(crate::i18n::Msg::skill_category(key).is_some(), "untitled category {key}");
        }
    }
}
