use ludex_rawg::{GameDetail, GameSummary, Page, RawgClient, Screenshot};

use super::{BoxFuture, CatalogSource, SourceError};

impl CatalogSource for RawgClient {
    fn list_page(&self, page: u32) -> BoxFuture<'_, Result<Page, SourceError>> {
        Box::pin(async move { self.list_page(page).await.map_err(Into::into) })
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<GameSummary>, SourceError>> {
        Box::pin(async move { self.search(query).await.map_err(Into::into) })
    }

    fn detail(&self, id: u64) -> BoxFuture<'_, Result<GameDetail, SourceError>> {
        Box::pin(async move { self.detail(id).await.map_err(Into::into) })
    }

    fn screenshots(&self, id: u64) -> BoxFuture<'_, Result<Vec<Screenshot>, SourceError>> {
        Box::pin(async move { self.screenshots(id).await.map_err(Into::into) })
    }

    fn trailer(&self, id: u64) -> BoxFuture<'_, Result<Option<String>, SourceError>> {
        Box::pin(async move { self.trailer(id).await.map_err(Into::into) })
    }
}
