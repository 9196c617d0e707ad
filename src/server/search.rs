//! In-process free-text mirror of the named portfolio records.
//!
//! Uploads push a document for every mirrored record they create or update once the row's
//! transaction has committed, and startup rebuilds the mirror from the database. Lookups are
//! case-insensitive substring matches on the record name.

use std::{collections::HashMap, sync::Arc};

use sea_orm::{ConnectionTrait, DbErr};
use tokio::sync::RwLock;

use crate::{
    model::search::{SearchHitDto, SearchKind},
    server::data::{
        organization::{
            business_function::BusinessFunctionRepository,
            line_of_business::LineOfBusinessRepository,
            organizational_unit::OrganizationalUnitRepository,
        },
        portfolio::{application::ApplicationRepository, technology_stack::TechnologyStackRepository},
    },
};

/// A mirrored record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchDocument {
    pub kind: SearchKind,
    pub id: i32,
    pub name: String,
}

impl SearchDocument {
    pub fn new(kind: SearchKind, id: i32, name: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            name: name.into(),
        }
    }
}

/// Shared handle to the mirror, cloning shares the underlying index
#[derive(Clone, Default)]
pub struct SearchMirror {
    documents: Arc<RwLock<HashMap<(SearchKind, i32), SearchDocument>>>,
}

impl SearchMirror {
    /// Insert or replace documents keyed by kind and id
    pub async fn index(&self, documents: impl IntoIterator<Item = SearchDocument>) {
        let mut index = self.documents.write().await;

        for document in documents {
            index.insert((document.kind, document.id), document);
        }
    }

    /// Documents of `kind` whose name contains `query`, ignoring case, ordered by id
    ///
    /// An empty or blank query matches every document of that kind.
    pub async fn search(&self, kind: SearchKind, query: &str) -> Vec<SearchHitDto> {
        let needle = query.trim().to_lowercase();
        let index = self.documents.read().await;

        let mut hits: Vec<SearchHitDto> = index
            .values()
            .filter(|doc| doc.kind == kind && doc.name.to_lowercase().contains(&needle))
            .map(|doc| SearchHitDto {
                kind: doc.kind,
                id: doc.id,
                name: doc.name.clone(),
            })
            .collect();

        hits.sort_by_key(|hit| hit.id);
        hits
    }

    /// Replace the mirror with every mirrored record currently stored
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of documents indexed
    /// - `Err(DbErr)` - Failed to read one of the mirrored tables
    pub async fn rebuild<C: ConnectionTrait>(&self, db: &C) -> Result<usize, DbErr> {
        let mut documents = Vec::new();

        documents.extend(
            OrganizationalUnitRepository::new(db)
                .get_all()
                .await?
                .into_iter()
                .map(|m| SearchDocument::new(SearchKind::OrganizationalUnit, m.id, m.name)),
        );
        documents.extend(
            LineOfBusinessRepository::new(db)
                .get_all()
                .await?
                .into_iter()
                .map(|m| SearchDocument::new(SearchKind::LineOfBusiness, m.id, m.name)),
        );
        documents.extend(
            BusinessFunctionRepository::new(db)
                .get_all()
                .await?
                .into_iter()
                .map(|m| SearchDocument::new(SearchKind::BusinessFunction, m.id, m.name)),
        );
        documents.extend(
            ApplicationRepository::new(db)
                .get_all()
                .await?
                .into_iter()
                .map(|m| SearchDocument::new(SearchKind::Application, m.id, m.name)),
        );
        documents.extend(
            TechnologyStackRepository::new(db)
                .get_all()
                .await?
                .into_iter()
                .map(|m| SearchDocument::new(SearchKind::TechnologyStack, m.id, m.name)),
        );

        let count = documents.len();
        let mut index = self.documents.write().await;
        index.clear();
        for document in documents {
            index.insert((document.kind, document.id), document);
        }

        Ok(count)
    }
}
