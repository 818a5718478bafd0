//! Page composition
//!
//! A [`Page`] is the ordered outline of the document: navigation header,
//! hero, the framed content sections, and the footer. It is a pure function
//! of the content and the entrance phases, so composing twice from the same
//! inputs yields equal pages.

use crate::content::{ContentTree, SectionId};
use crate::section::{SectionPhase, VisibilityMap};

/// Header navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.target.anchor())
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Inicio", target: SectionId::Hero },
    NavItem { label: "Proyecto", target: SectionId::About },
    NavItem { label: "Tecnología", target: SectionId::Technology },
    NavItem { label: "Equipo", target: SectionId::Team },
    NavItem { label: "Contacto", target: SectionId::Contact },
];

/// A framed section in the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlock {
    pub id: SectionId,
    pub heading: String,
    pub phase: SectionPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Nav { brand: &'static str, items: Vec<NavItem> },
    /// The hero call to action scrolls to `cta_target`
    Hero { cta_target: SectionId },
    Section(SectionBlock),
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    blocks: Vec<Block>,
}

impl Page {
    pub fn compose(content: &ContentTree, visibility: &VisibilityMap) -> Self {
        let mut blocks = Vec::with_capacity(SectionId::FRAMED.len() + 3);

        blocks.push(Block::Nav {
            brand: crate::BRAND,
            items: NAV_ITEMS.to_vec(),
        });
        blocks.push(Block::Hero {
            cta_target: SectionId::About,
        });
        blocks.extend(SectionId::FRAMED.iter().map(|&id| {
            Block::Section(SectionBlock {
                id,
                heading: content
                    .section(id)
                    .title()
                    .unwrap_or_default()
                    .to_string(),
                phase: visibility.phase(id),
            })
        }));
        blocks.push(Block::Footer);

        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn sections(&self) -> impl Iterator<Item = &SectionBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Section(section) => Some(section),
            _ => None,
        })
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionBlock> {
        self.sections().find(|section| section.id == id)
    }
}
