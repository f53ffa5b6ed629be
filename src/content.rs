use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{prefs::Language, tracker::Section};

pub const TRANSLATIONS_FILE: &str = "translations.json";
pub const PERSONAL_FILE: &str = "personal.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const PROJECTS_FILE: &str = "projects.json";

const VISIBLE_FEATURES: usize = 3;
const VISIBLE_TECH: usize = 4;

pub static GLOBAL_TRANSLATION_CACHE: LazyLock<DashMap<Language, Arc<Translations>>> =
    LazyLock::new(DashMap::new);
static GLOBAL_PROFILE: LazyLock<Result<Arc<Profile>, ContentError>> =
    LazyLock::new(|| Profile::load().map(Arc::new));

#[derive(Embed)]
#[folder = "data"]
pub struct Data;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("invalid content: {0}")]
    Invalid(String),
}

pub(crate) fn read_embedded(file: &str) -> Result<String, ContentError> {
    let content = Data::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    String::from_utf8(content.data.into()).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn parse_json<T: DeserializeOwned>(file: &str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    parse_json(file, &read_embedded(file)?)
}

fn require(value: &str, what: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::Invalid(format!("{what} must not be empty")))
    } else {
        Ok(())
    }
}

/// A value given once per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub vi: T,
}

impl<T> Localized<T> {
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Vi => &self.vi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavText {
    pub home: String,
    pub about: String,
    pub experience: String,
    pub projects: String,
    pub contact: String,
}

impl NavText {
    pub fn label(&self, section: Section) -> &str {
        match section {
            Section::Home => &self.home,
            Section::About => &self.about,
            Section::Experience => &self.experience,
            Section::Projects => &self.projects,
            Section::Contact => &self.contact,
        }
    }

    /// `(section, label)` pairs in document order.
    pub fn items(&self) -> Vec<(Section, String)> {
        Section::ALL
            .into_iter()
            .map(|s| (s, self.label(s).to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonText {
    pub get_in_touch: String,
    #[serde(rename = "downloadCV")]
    pub download_cv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionText {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutText {
    pub title: String,
    pub subtitle: String,
    pub education: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillsText {
    pub languages: String,
    pub frameworks: String,
    pub frameworks_label: String,
    pub tools_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectButtons {
    pub code: String,
    pub demo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsText {
    pub title: String,
    pub subtitle: String,
    pub key_features: String,
    pub more: String,
    pub buttons: ProjectButtons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactFormText {
    pub title: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub send: String,
    pub sent: String,
    pub placeholders: FormFields,
    pub errors: FormFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactText {
    pub title: String,
    pub subtitle: String,
    pub info: String,
    pub phone: String,
    pub portfolio: String,
    pub form: ContactFormText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterText {
    pub description: String,
    pub rights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SplashText {
    pub title: String,
    pub loading: String,
}

/// Every piece of UI text for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Translations {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub splash: SplashText,
    pub nav: NavText,
    pub buttons: ButtonText,
    pub about: AboutText,
    pub skills: SkillsText,
    pub experience: SectionText,
    pub projects: ProjectsText,
    pub contact: ContactText,
    pub footer: FooterText,
}

impl Translations {
    pub fn validate(&self) -> Result<(), ContentError> {
        require(&self.name, "name")?;
        require(&self.title, "title")?;
        for (section, label) in self.nav.items() {
            require(&label, &format!("nav.{section}"))?;
        }
        require(&self.about.title, "about.title")?;
        require(&self.experience.title, "experience.title")?;
        require(&self.projects.title, "projects.title")?;
        require(&self.contact.title, "contact.title")?;
        let errors = &self.contact.form.errors;
        require(&errors.name, "contact.form.errors.name")?;
        require(&errors.email, "contact.form.errors.email")?;
        require(&errors.message, "contact.form.errors.message")?;
        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Localized<Translations>, ContentError> {
        let all: Localized<Translations> = parse_json(TRANSLATIONS_FILE, raw)?;
        all.en.validate()?;
        all.vi.validate()?;
        Ok(all)
    }
}

/// Translations for `language`, parsed and validated on first use.
pub fn translations(language: Language) -> Result<Arc<Translations>, ContentError> {
    let cache = &*GLOBAL_TRANSLATION_CACHE;
    if let Some(t) = cache.get(&language) {
        return Ok(t.clone());
    }
    let all = Translations::from_json(&read_embedded(TRANSLATIONS_FILE)?)?;
    let en = Arc::new(all.en);
    let vi = Arc::new(all.vi);
    cache.insert(Language::En, en.clone());
    cache.insert(Language::Vi, vi.clone());
    Ok(match language {
        Language::En => en,
        Language::Vi => vi,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub university: String,
    pub degree: Localized<String>,
    pub graduation_date: Localized<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personal {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub portfolio: String,
    pub location: Localized<String>,
    pub education: Education,
    pub skills: Skills,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: Localized<String>,
    pub period: String,
    #[serde(default)]
    pub location: Option<Localized<String>>,
    pub description: Localized<String>,
    pub achievements: Localized<Vec<String>>,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub image: String,
    pub description: Localized<String>,
    pub features: Localized<Vec<String>>,
    pub tech_stack: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
}

impl Project {
    /// Features shown on the card.
    pub fn highlights(&self, language: Language) -> &[String] {
        let features = self.features.get(language);
        &features[..features.len().min(VISIBLE_FEATURES)]
    }

    /// Tech tags shown on the card and how many were left out.
    pub fn tech_summary(&self) -> (&[String], usize) {
        let shown = self.tech_stack.len().min(VISIBLE_TECH);
        (&self.tech_stack[..shown], self.tech_stack.len() - shown)
    }
}

/// Language-independent page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub personal: Personal,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

impl Profile {
    fn load() -> Result<Self, ContentError> {
        let profile = Self {
            personal: load(PERSONAL_FILE)?,
            experience: load(EXPERIENCE_FILE)?,
            projects: load(PROJECTS_FILE)?,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if !self.personal.email.contains('@') {
            return Err(ContentError::Invalid(format!(
                "personal.email is not an address: {}",
                self.personal.email
            )));
        }
        for (i, exp) in self.experience.iter().enumerate() {
            require(&exp.company, &format!("experience[{i}].company"))?;
        }
        for (i, project) in self.projects.iter().enumerate() {
            require(&project.title, &format!("projects[{i}].title"))?;
        }
        Ok(())
    }
}

pub fn profile() -> Result<Arc<Profile>, ContentError> {
    GLOBAL_PROFILE.clone()
}

/// Everything the page renders, with both languages loaded up front so a
/// language toggle can't fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub translations: Localized<Arc<Translations>>,
    pub profile: Arc<Profile>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            translations: Localized {
                en: translations(Language::En)?,
                vi: translations(Language::Vi)?,
            },
            profile: profile()?,
        })
    }

    pub fn text(&self, language: Language) -> Arc<Translations> {
        self.translations.get(language).clone()
    }
}
