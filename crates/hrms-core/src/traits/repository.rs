//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic keyed repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Creation, listing, and
/// other entity-specific operations are defined on the per-entity traits
/// that extend this one.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
