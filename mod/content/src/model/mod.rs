mod case_study;
mod entry;
mod language;
mod legal_document;
mod page_seo;
mod service;
mod team_member;
mod translation;

pub use case_study::*;
pub use entry::*;
pub use language::*;
pub use legal_document::*;
pub use page_seo::*;
pub use service::*;
pub use team_member::*;
pub use translation::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The four translatable entity kinds the admin backend manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Service,
    CaseStudy,
    TeamMember,
    LegalDocument,
}

impl EntityType {
    /// Stable tag stored in the translations table.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Service => "service",
            EntityType::CaseStudy => "case_study",
            EntityType::TeamMember => "team_member",
            EntityType::LegalDocument => "legal_document",
        }
    }

    /// Base-row table for this entity type.
    pub fn table(&self) -> &'static str {
        match self {
            EntityType::Service => "services",
            EntityType::CaseStudy => "case_studies",
            EntityType::TeamMember => "team_members",
            EntityType::LegalDocument => "legal_documents",
        }
    }

    pub fn parse(tag: &str) -> Option<EntityType> {
        match tag {
            "service" => Some(EntityType::Service),
            "case_study" => Some(EntityType::CaseStudy),
            "team_member" => Some(EntityType::TeamMember),
            "legal_document" => Some(EntityType::LegalDocument),
            _ => None,
        }
    }
}

/// A translatable entity: one base row in the primary language plus
/// zero-or-one translation row per secondary language.
///
/// `LOCALIZABLE_FIELDS` declares, in wire (camelCase) form, the only
/// fields a translation row may override. Everything else — slug,
/// ordering, images, flags, price — always comes from the base row.
pub trait Localized: Serialize + DeserializeOwned + Clone {
    const ENTITY_TYPE: EntityType;
    const LOCALIZABLE_FIELDS: &'static [&'static str];

    /// Primary identifier of the base row.
    fn id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_tag_roundtrip() {
        for et in [
            EntityType::Service,
            EntityType::CaseStudy,
            EntityType::TeamMember,
            EntityType::LegalDocument,
        ] {
            assert_eq!(EntityType::parse(et.as_str()), Some(et));
        }
        assert_eq!(EntityType::parse("unknown"), None);
    }
}
