use std::{cmp::Ordering, collections::BTreeSet};

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{null_default, text::BilingualText};
use crate::locale::Locale;

/// Tag a project carries when it lists no languages at all.
pub const UNTAGGED: &str = "None";

/// One entry of the `projects.json` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub description: BilingualText,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    pub homepage: Option<String>,
    pub languages: Option<Vec<String>>,
    #[serde(deserialize_with = "null_default")]
    pub stars: u32,
    #[serde(deserialize_with = "null_default")]
    pub forks: u32,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: String,
    pub topics: Option<Vec<String>>,
}

impl Project {
    /// Trimmed, non-blank language tags in document order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .flatten()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let mut tags = self.tags().peekable();
        if tags.peek().is_none() {
            return tag == UNTAGGED;
        }
        tags.any(|t| t == tag)
    }

    /// `needle` must already be lowercased.
    fn matches_search(&self, needle: &str, locale: Locale) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self
                .description
                .resolve(locale)
                .to_lowercase()
                .contains(needle)
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }
}

/// Projects passing both the search and the tag predicate, in their
/// original order.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    search: &str,
    tag: Option<&str>,
    locale: Locale,
) -> Vec<&'a Project> {
    let needle = search.to_lowercase();
    projects
        .iter()
        .filter(|p| p.matches_search(&needle, locale))
        .filter(|p| tag.map_or(true, |t| p.has_tag(t)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Every distinct tag across the full project set with the number of
/// projects that selecting it would show. Search never affects the counts.
pub fn tag_buttons(projects: &[Project]) -> Vec<TagCount> {
    let tags = projects
        .iter()
        .flat_map(Project::tags)
        .collect::<BTreeSet<_>>();
    let mut buttons = tags
        .into_iter()
        .map(|tag| TagCount {
            tag: tag.to_string(),
            count: projects.iter().filter(|p| p.has_tag(tag)).count(),
        })
        .collect::<Vec<_>>();
    buttons.sort_by(|a, b| collate(&a.tag, &b.tag));
    buttons
}

/// Case-insensitive ordering with the raw text as tie breaker. Tag names
/// are Latin technology names, which both locales collate the same way.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Short date as a visitor of that locale expects it: `1/15/2024` in
/// English, `١٥/١/٢٠٢٤` in Arabic. Unparseable input is shown verbatim.
pub fn format_display_date(iso: &str, locale: Locale) -> String {
    let date = DateTime::parse_from_rfc3339(iso)
        .map(|t| t.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(iso.get(..10).unwrap_or(iso), "%Y-%m-%d"));
    let Ok(date) = date else {
        return iso.to_string();
    };
    match locale {
        Locale::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Locale::Ar => format!("{}/{}/{}", date.day(), date.month(), date.year())
            .chars()
            .map(arabic_indic_digit)
            .collect(),
    }
}

fn arabic_indic_digit(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
        None => c,
    }
}

pub fn tag_badge_class(tag: &str) -> &'static str {
    match tag {
        "Python" => "bg-blue-500/20 text-blue-300",
        "Java" => "bg-orange-500/20 text-orange-300",
        "JavaScript" => "bg-yellow-500/20 text-yellow-300",
        "PHP" => "bg-purple-500/20 text-purple-300",
        "HTML" => "bg-red-500/20 text-red-300",
        "CSS" => "bg-pink-500/20 text-pink-300",
        "Ruby" => "bg-red-600/20 text-red-300",
        "Prolog" => "bg-indigo-500/20 text-indigo-300",
        "C" => "bg-slate-500/20 text-slate-300",
        "C++" => "bg-slate-600/20 text-slate-300",
        "C#" => "bg-green-500/20 text-green-300",
        "ASP.NET" => "bg-purple-600/20 text-purple-300",
        ".NET Core" => "bg-indigo-500/20 text-indigo-300",
        "SQL Server" => "bg-red-500/20 text-red-300",
        "MySQL" => "bg-orange-500/20 text-orange-300",
        "Firebase" => "bg-amber-500/20 text-amber-300",
        "Flutter" => "bg-sky-500/20 text-sky-300",
        "TypeScript" => "bg-blue-600/20 text-blue-300",
        "React" => "bg-cyan-500/20 text-cyan-300",
        "Node.js" => "bg-green-600/20 text-green-300",
        "Tailwind" => "bg-sky-400/20 text-sky-300",
        "Go" => "bg-cyan-600/20 text-cyan-300",
        "Rust" => "bg-orange-600/20 text-orange-300",
        _ => "bg-gray-500/20 text-gray-300",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, name: &str, description: &str, tags: &[&str]) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: BilingualText::new(description, format!("وصف {name}")),
            languages: Some(tags.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(
                1,
                "Smart Traffic System",
                "Adaptive signal control",
                &["Python"],
            ),
            project(2, "Portfolio Site", "Personal website", &["TypeScript"]),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<u64> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_search_scenario() {
        let projects = sample();
        let found = filter_projects(&projects, "traffic", None, Locale::En);
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn test_tag_scenario() {
        let projects = sample();
        let found = filter_projects(&projects, "", Some("Python"), Locale::En);
        assert_eq!(ids(&found), vec![1]);

        let python = tag_buttons(&projects)
            .into_iter()
            .find(|b| b.tag == "Python")
            .expect("Python button should exist");
        assert_eq!(python.count, 1);
    }

    #[test]
    fn test_search_matches_localized_description() {
        let projects = sample();
        let found = filter_projects(&projects, "وصف PORTFOLIO", None, Locale::Ar);
        assert_eq!(ids(&found), vec![2]);
        let found = filter_projects(&projects, "وصف", None, Locale::Ar);
        assert_eq!(ids(&found), vec![1, 2]);
        let found = filter_projects(&projects, "PERSONAL", None, Locale::En);
        assert_eq!(ids(&found), vec![2]);
        let found = filter_projects(&projects, "PERSONAL", None, Locale::Ar);
        assert!(found.is_empty());
    }

    #[test]
    fn test_search_and_tag_combine() {
        let projects = sample();
        assert!(filter_projects(&projects, "traffic", Some("TypeScript"), Locale::En).is_empty());
        assert_eq!(
            ids(&filter_projects(&projects, "", None, Locale::En)),
            vec![1, 2]
        );
        assert!(filter_projects(&projects, "", Some("Rust"), Locale::En).is_empty());
    }

    #[test]
    fn test_untagged_projects() {
        let mut projects = sample();
        projects.push(Project {
            id: 3,
            name: "Notes".to_string(),
            languages: None,
            ..Default::default()
        });
        projects.push(project(4, "Scratch", "", &["", "  "]));

        let found = filter_projects(&projects, "", Some(UNTAGGED), Locale::En);
        assert_eq!(ids(&found), vec![3, 4]);

        // blank tags never become buttons
        let tags = tag_buttons(&projects)
            .into_iter()
            .map(|b| b.tag)
            .collect::<Vec<_>>();
        assert_eq!(tags, vec!["Python", "TypeScript"]);
    }

    #[test]
    fn test_filter_idempotent_and_ordered() {
        let mut projects = sample();
        projects.push(project(3, "Traffic Dashboard", "Charts", &["TypeScript", "React"]));
        projects.push(project(4, "Compiler", "Toy traffic language", &["Rust"]));

        for (search, tag) in [
            ("traffic", None),
            ("", Some("TypeScript")),
            ("a", Some("Rust")),
            ("zzz", None),
        ] {
            let once = filter_projects(&projects, search, tag, Locale::En);
            let owned = once.iter().map(|p| (*p).clone()).collect::<Vec<_>>();
            let twice = filter_projects(&owned, search, tag, Locale::En);
            assert_eq!(ids(&once), ids(&twice));

            // subsequence of the input in original order
            let positions = once
                .iter()
                .map(|p| projects.iter().position(|q| q.id == p.id).unwrap())
                .collect::<Vec<_>>();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_tag_buttons_sorted_and_counted() {
        let projects = vec![
            project(1, "a", "", &["rust", "Python"]),
            project(2, "b", "", &[" Python ", "C"]),
            project(3, "c", "", &["C", "Rust"]),
        ];
        let buttons = tag_buttons(&projects);
        let pairs = buttons
            .iter()
            .map(|b| (b.tag.as_str(), b.count))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![("C", 2), ("Python", 2), ("Rust", 1), ("rust", 1)]
        );
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(
            format_display_date("2024-01-15T10:30:00Z", Locale::En),
            "1/15/2024"
        );
        assert_eq!(
            format_display_date("2024-01-15T10:30:00Z", Locale::Ar),
            "١٥/١/٢٠٢٤"
        );
        assert_eq!(format_display_date("2023-11-02", Locale::En), "11/2/2023");
        assert_eq!(format_display_date("soon", Locale::Ar), "soon");
        assert_eq!(format_display_date("", Locale::En), "");
    }

    #[test]
    fn test_homepage_blank_is_absent() {
        let mut p = project(1, "x", "", &[]);
        p.homepage = Some("  ".to_string());
        assert_eq!(p.homepage(), None);
        p.homepage = Some("https://example.com".to_string());
        assert_eq!(p.homepage(), Some("https://example.com"));
    }

    #[test]
    fn test_projects_document_decodes() {
        let projects: Vec<Project> = serde_json::from_str(
            r#"[{"id": 7, "name": "Site", "description": {"en": "Mine"}, "url": "https://github.com/x/site",
                 "languages": ["Rust"], "stars": 3, "forks": 1, "created_at": "2024-01-01T00:00:00Z",
                 "updated_at": "2024-02-01T00:00:00Z", "topics": [], "homepage": null}]"#,
        )
        .unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].stars, 3);
        assert!(projects[0].has_tag("Rust"));
        assert_eq!(projects[0].homepage(), None);
    }

    #[test]
    fn test_null_fields_keep_the_project() {
        let projects: Vec<Project> = crate::content::loader::decode_document(
            200,
            r#"[{"id": 1, "name": "Router lab", "description": null, "languages": null,
                 "stars": null, "forks": null, "updated_at": null},
                {"id": 2, "name": "Site", "description": {"en": "Mine"}, "languages": ["Rust"]}]"#,
        )
        .unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].description.resolve(Locale::Ar), "");
        assert_eq!(projects[0].stars, 0);
        assert!(projects[0].has_tag(UNTAGGED));
        let found = filter_projects(&projects, "router", None, Locale::En)
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn test_bundled_document_decodes() {
        let projects: Vec<Project> =
            serde_json::from_str(include_str!("../../public/projects.json")).unwrap();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[1].homepage(), Some("https://example.github.io/portfolio/"));
        assert_eq!(projects[2].homepage(), None);
        assert!(projects[3].has_tag(UNTAGGED));

        let untagged = tag_buttons(&projects)
            .into_iter()
            .find(|b| b.tag == UNTAGGED);
        assert_eq!(untagged, None);
        let mysql = filter_projects(&projects, "", Some("MySQL"), Locale::Ar);
        assert_eq!(ids(&mysql), vec![103]);
    }
}
