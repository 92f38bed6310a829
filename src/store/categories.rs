//! Categories screen store.

use std::sync::Arc;

use async_trait::async_trait;

use super::fetch_store::{FetchOperation, FetchStore, Intent};
use crate::models::Category;
use crate::traits::RecipeApi;

/// Fetch operation behind the categories screen: no request parameter,
/// the full category listing as payload.
pub struct CategoriesOp {
    api: Arc<dyn RecipeApi>,
}

#[async_trait]
impl FetchOperation for CategoriesOp {
    type Param = ();
    type Output = Vec<Category>;

    fn name(&self) -> &'static str {
        "categories"
    }

    async fn fetch(&self, _param: &()) -> Result<Vec<Category>, String> {
        self.api
            .fetch_categories()
            .await
            .map_err(|err| err.to_string())
    }
}

/// Store for the categories screen.
pub type CategoriesStore = FetchStore<CategoriesOp>;

impl CategoriesStore {
    /// Build the categories store. The unit parameter is seeded so `Retry`
    /// replays without a prior `Load`.
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        FetchStore::with_operation(CategoriesOp { api }, Some(()))
    }

    /// Load all categories.
    pub fn load(&self) {
        self.send(Intent::Load(()));
    }

    /// Reload after a failure.
    pub fn retry(&self) {
        self.send(Intent::Retry);
    }
}
