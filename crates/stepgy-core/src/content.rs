//! Page content model
//!
//! The whole page text lives in one [`ContentTree`]. It is built once at
//! startup, shared read-only, and never mutated afterwards.

use crate::contact::FormField;
use crate::icon::Icon;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    Invalid(String),
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Closed set of page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Problem,
    Solution,
    Technology,
    Prototype,
    Team,
    Gallery,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Problem,
        SectionId::Solution,
        SectionId::Technology,
        SectionId::Prototype,
        SectionId::Team,
        SectionId::Gallery,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Sections wrapped in an entrance frame, in page order
    pub const FRAMED: [SectionId; 8] = [
        SectionId::About,
        SectionId::Problem,
        SectionId::Solution,
        SectionId::Technology,
        SectionId::Prototype,
        SectionId::Team,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Document fragment id
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Problem => "problem",
            SectionId::Solution => "solution",
            SectionId::Technology => "technology",
            SectionId::Prototype => "prototype",
            SectionId::Team => "team",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    pub fn is_framed(&self) -> bool {
        Self::FRAMED.contains(self)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

/// Title plus a single paragraph (about, problem)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<SolutionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub title: String,
    pub subtitle: String,
    pub components: Vec<TechComponent>,
    pub performance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechComponent {
    pub name: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prototype {
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub title: String,
    pub subtitle: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<GalleryCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCategory {
    pub name: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub info: ContactInfo,
    pub form: ContactFormContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub instagram: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormContent {
    pub fields: Vec<FormField>,
    #[serde(alias = "submitText")]
    pub submit_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    pub year: String,
}

/// Complete page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTree {
    pub hero: Hero,
    pub about: TextBlock,
    pub problem: TextBlock,
    pub solution: Solution,
    pub technology: Technology,
    pub prototype: Prototype,
    pub team: Team,
    pub gallery: Gallery,
    pub contact: Contact,
    pub footer: Footer,
}

/// Borrowed view of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionContent<'a> {
    Hero(&'a Hero),
    About(&'a TextBlock),
    Problem(&'a TextBlock),
    Solution(&'a Solution),
    Technology(&'a Technology),
    Prototype(&'a Prototype),
    Team(&'a Team),
    Gallery(&'a Gallery),
    Contact(&'a Contact),
    Footer(&'a Footer),
}

impl SectionContent<'_> {
    /// Section heading, if the section has one
    pub fn title(&self) -> Option<&str> {
        match self {
            SectionContent::Hero(hero) => Some(hero.title.as_str()),
            SectionContent::About(block) | SectionContent::Problem(block) => {
                Some(block.title.as_str())
            }
            SectionContent::Solution(solution) => Some(solution.title.as_str()),
            SectionContent::Technology(technology) => Some(technology.title.as_str()),
            SectionContent::Prototype(prototype) => Some(prototype.title.as_str()),
            SectionContent::Team(team) => Some(team.title.as_str()),
            SectionContent::Gallery(gallery) => Some(gallery.title.as_str()),
            SectionContent::Contact(contact) => Some(contact.title.as_str()),
            SectionContent::Footer(_) => None,
        }
    }
}

impl ContentTree {
    /// Load a content document from JSON text
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        let tree: ContentTree = serde_json::from_str(json)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Load a content document from a JSON file
    pub fn from_json_file(path: &Path) -> ContentResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn section(&self, id: SectionId) -> SectionContent<'_> {
        match id {
            SectionId::Hero => SectionContent::Hero(&self.hero),
            SectionId::About => SectionContent::About(&self.about),
            SectionId::Problem => SectionContent::Problem(&self.problem),
            SectionId::Solution => SectionContent::Solution(&self.solution),
            SectionId::Technology => SectionContent::Technology(&self.technology),
            SectionId::Prototype => SectionContent::Prototype(&self.prototype),
            SectionId::Team => SectionContent::Team(&self.team),
            SectionId::Gallery => SectionContent::Gallery(&self.gallery),
            SectionId::Contact => SectionContent::Contact(&self.contact),
            SectionId::Footer => SectionContent::Footer(&self.footer),
        }
    }

    /// Every icon referenced by the content, in document order
    pub fn icon_keys(&self) -> Vec<Icon> {
        self.solution
            .steps
            .iter()
            .map(|step| step.icon)
            .chain(self.technology.components.iter().map(|c| c.icon))
            .collect()
    }

    /// Structural checks serde cannot express
    pub fn validate(&self) -> ContentResult<()> {
        let mut step_ids: Vec<u32> = self.solution.steps.iter().map(|s| s.id).collect();
        step_ids.sort_unstable();
        if step_ids.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ContentError::Invalid(
                "solution steps must have unique ids".to_string(),
            ));
        }

        for field in FormField::ALL {
            if !self.contact.form.fields.contains(&field) {
                return Err(ContentError::Invalid(format!(
                    "contact form is missing the {} field",
                    field
                )));
            }
        }

        Ok(())
    }

    /// Built-in Stepgy page content
    pub fn stepgy() -> Self {
        Self {
            hero: Hero {
                title: "Stepgy – Energía con tus pasos".into(),
                subtitle: "Una baldosa que transforma el movimiento humano en electricidad".into(),
                cta: "Conocé el proyecto".into(),
            },
            about: TextBlock {
                title: "¿Qué es Stepgy?".into(),
                content: "Stepgy es una baldosa inteligente que convierte las pisadas humanas en \
                    energía eléctrica mediante sensores piezoeléctricos. Está pensada para \
                    espacios públicos, plazas y sectores con alto tránsito, y su objetivo es \
                    fomentar el uso de energías limpias a través de una solución innovadora y \
                    educativa."
                    .into(),
            },
            problem: TextBlock {
                title: "Problemática".into(),
                content: "En zonas urbanas se desperdicia energía cinética constantemente. Al \
                    mismo tiempo, el consumo de electricidad en espacios públicos sigue \
                    aumentando y proviene en gran parte de fuentes no renovables. Stepgy propone \
                    aprovechar esa energía de forma sustentable."
                    .into(),
            },
            solution: Solution {
                title: "Cómo lo resolvemos".into(),
                subtitle: "Nuestra solución innovadora".into(),
                steps: vec![
                    step(1, "Captación de Energía", "Captamos energía de las pisadas con sensores piezoeléctricos.", Icon::Zap),
                    step(2, "Conversión AC/DC", "Convertimos la energía alterna en continua con diodos Schottky.", Icon::RefreshCw),
                    step(3, "Elevación de Voltaje", "Elevamos el voltaje con un módulo Step-Up.", Icon::TrendingUp),
                    step(4, "Almacenamiento", "Almacenamos la energía en supercapacitores y alimentamos luces de emergencia.", Icon::Battery),
                ],
            },
            technology: Technology {
                title: "Tecnología".into(),
                subtitle: "Componentes técnicos del proyecto".into(),
                components: vec![
                    component("Sensores Piezoeléctricos", "10 sensores de 50 mm para captación de energía", Icon::Cpu),
                    component("Diodos Schottky", "Para conversión de corriente alterna a continua", Icon::Zap),
                    component("Módulo Step-Up", "Elevación del voltaje para mejor rendimiento", Icon::ArrowUp),
                    component("Supercapacitor", "Almacenamiento eficiente de la energía generada", Icon::Battery),
                ],
                performance: "Cinco baldosas pueden generar hasta 250 V y 1.5 A en horas pico".into(),
            },
            prototype: Prototype {
                title: "Prototipo y avances".into(),
                content: "Tras varias pruebas, se incorporó un módulo Step-Up para mejorar el \
                    rendimiento. El diseño físico se adaptó para alojar los cables, el circuito \
                    y una salida tipo tomacorriente."
                    .into(),
                images: vec![
                    unsplash("photo-1518709268805-4e9042af2176", 500, 300),
                    unsplash("photo-1559827260-dc66d52bef19", 500, 300),
                    unsplash("photo-1581092918056-0c4c3acd3789", 500, 300),
                ],
            },
            team: Team {
                title: "Equipo".into(),
                subtitle: "Los estudiantes detrás del proyecto".into(),
                members: vec![
                    member("Alejo Chaile", "Coordinación y programación", "Líder del proyecto y desarrollo de software"),
                    member("Santino Biato", "Diseño físico y prototipo", "Diseño mecánico y construcción del prototipo"),
                    member("Uriel Arellano", "Electrónica y pruebas técnicas", "Circuitos eléctricos y validación técnica"),
                    member("Joaquín Ortega", "Investigación, redacción y redes", "Investigación científica y comunicación"),
                ],
            },
            gallery: Gallery {
                title: "Galería".into(),
                subtitle: "Imágenes del proyecto y desarrollo".into(),
                categories: vec![
                    GalleryCategory {
                        name: "Prototipo".into(),
                        images: vec![
                            unsplash("photo-1518709268805-4e9042af2176", 400, 300),
                            unsplash("photo-1559827260-dc66d52bef19", 400, 300),
                        ],
                    },
                    GalleryCategory {
                        name: "Ferias escolares".into(),
                        images: vec![
                            unsplash("photo-1560472354-b33ff0c44a43", 400, 300),
                            unsplash("photo-1522202176988-66273c2fd55f", 400, 300),
                        ],
                    },
                    GalleryCategory {
                        name: "Esquemas técnicos".into(),
                        images: vec![
                            unsplash("photo-1581092918056-0c4c3acd3789", 400, 300),
                            unsplash("photo-1614741118887-7a4ee193a5fa", 400, 300),
                        ],
                    },
                ],
            },
            contact: Contact {
                title: "Contacto".into(),
                subtitle: "Conectate con nosotros".into(),
                info: ContactInfo {
                    instagram: "@stepgy.proyecto".into(),
                    email: "stepgycontacto@gmail.com".into(),
                    location: "Merlo, Buenos Aires, Argentina".into(),
                },
                form: ContactFormContent {
                    fields: FormField::ALL.to_vec(),
                    submit_text: "Enviar mensaje".into(),
                },
            },
            footer: Footer {
                text: "Stepgy – Proyecto escolar sustentable desde Merlo, Buenos Aires.".into(),
                year: "© 2025".into(),
            },
        }
    }
}

fn step(id: u32, title: &str, description: &str, icon: Icon) -> SolutionStep {
    SolutionStep {
        id,
        title: title.into(),
        description: description.into(),
        icon,
    }
}

fn component(name: &str, description: &str, icon: Icon) -> TechComponent {
    TechComponent {
        name: name.into(),
        description: description.into(),
        icon,
    }
}

fn member(name: &str, role: &str, description: &str) -> TeamMember {
    TeamMember {
        name: name.into(),
        role: role.into(),
        description: description.into(),
    }
}

fn unsplash(photo: &str, width: u32, height: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={width}&h={height}&fit=crop")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon;

    #[test]
    fn test_builtin_content_is_valid() {
        let tree = ContentTree::stepgy();
        tree.validate().unwrap();
        assert_eq!(tree.solution.steps.len(), 4);
        assert_eq!(tree.technology.components.len(), 4);
        assert_eq!(tree.gallery.categories.len(), 3);
    }

    #[test]
    fn test_every_referenced_icon_resolves() {
        let tree = ContentTree::stepgy();
        let keys = tree.icon_keys();
        assert_eq!(
            keys,
            vec![
                Icon::Zap,
                Icon::RefreshCw,
                Icon::TrendingUp,
                Icon::Battery,
                Icon::Cpu,
                Icon::Zap,
                Icon::ArrowUp,
                Icon::Battery,
            ]
        );
        for key in keys {
            assert_eq!(icon::resolve(key).icon, key);
        }
    }

    #[test]
    fn test_section_lookup() {
        let tree = ContentTree::stepgy();
        for id in SectionId::ALL {
            let section = tree.section(id);
            match id {
                SectionId::Footer => assert!(section.title().is_none()),
                _ => assert!(section.title().is_some()),
            }
        }
        assert_eq!(tree.section(SectionId::Team).title(), Some("Equipo"));
    }

    #[test]
    fn test_framed_sections_exclude_hero_and_footer() {
        assert!(!SectionId::Hero.is_framed());
        assert!(!SectionId::Footer.is_framed());
        assert!(SectionId::Contact.is_framed());
        assert_eq!(SectionId::Hero.anchor(), "home");
    }

    #[test]
    fn test_json_document_loads() {
        let json = serde_json::to_string(&ContentTree::stepgy()).unwrap();
        let tree = ContentTree::from_json_str(&json).unwrap();
        assert_eq!(tree.hero.cta, "Conocé el proyecto");
        assert_eq!(tree.contact.form.submit_text, "Enviar mensaje");
    }

    #[test]
    fn test_camel_case_submit_text_accepted() {
        let json = serde_json::to_string(&ContentTree::stepgy())
            .unwrap()
            .replace("\"submit_text\":\"Enviar mensaje\"", "\"submitText\":\"Mandar\"");
        let tree = ContentTree::from_json_str(&json).unwrap();
        assert_eq!(tree.contact.form.submit_text, "Mandar");
    }

    #[test]
    fn test_unknown_icon_key_rejected_at_load() {
        let json = serde_json::to_string(&ContentTree::stepgy())
            .unwrap()
            .replace("\"RefreshCw\"", "\"Sparkles\"");
        assert!(matches!(
            ContentTree::from_json_str(&json),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn test_missing_form_field_rejected() {
        let mut tree = ContentTree::stepgy();
        tree.contact.form.fields.retain(|f| *f != FormField::Email);
        let json = serde_json::to_string(&tree).unwrap();
        match ContentTree::from_json_str(&json) {
            Err(ContentError::Invalid(msg)) => assert!(msg.contains("email")),
            other => panic!("expected invalid content, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_step_ids_rejected() {
        let mut tree = ContentTree::stepgy();
        tree.solution.steps[1].id = 1;
        assert!(matches!(tree.validate(), Err(ContentError::Invalid(_))));
    }
}
