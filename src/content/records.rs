use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Emerald,
    Blue,
    Purple,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Owner {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub stack: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub metrics: Vec<ProjectMetric>,
}

// One axis of the radar chart. `level` is a percentage but is not
// validated here; the chart clamps it before scaling.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: i32,
    pub category: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreativeTool {
    pub name: String,
    pub level: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Certification {
    pub name: String,
    pub detail: String,
    pub year: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SkillsTable {
    #[serde(default)]
    pub technical: Vec<Skill>,
    #[serde(default, rename = "aiStack")]
    pub ai_stack: Vec<String>,
    #[serde(default)]
    pub creative: Vec<CreativeTool>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PortfolioContent {
    pub owner: Owner,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: SkillsTable,
    pub contact: Contact,
}

impl PortfolioContent {
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|project| project.featured)
    }

    pub fn other_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|project| !project.featured)
    }
}
