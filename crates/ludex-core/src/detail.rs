//! Detail-view loader.

use ludex_rawg::{GameDetail, Screenshot};

use crate::source::CatalogSource;

/// Everything the detail view shows for one item, with whichever subset of
/// the three fetches succeeded. A missing trailer or empty screenshot list
/// is a normal result, not an error; a missing `detail` record renders as
/// "not found".
#[derive(Debug, Clone, Default)]
pub struct DetailBundle {
    pub detail: Option<GameDetail>,
    pub screenshots: Vec<Screenshot>,
    pub trailer: Option<String>,
}

impl DetailBundle {
    pub fn is_found(&self) -> bool {
        self.detail.is_some()
    }
}

/// Fetch one item's full record plus its media collections.
///
/// The three requests run concurrently and a failure in one never prevents
/// the others from completing; the bundle is reported once all attempts have
/// resolved.
pub async fn load_detail(source: &dyn CatalogSource, id: u64) -> DetailBundle {
    let (detail, screenshots, trailer) =
        tokio::join!(source.detail(id), source.screenshots(id), source.trailer(id));

    let detail = match detail {
        Ok(d) => Some(d),
        Err(err) => {
            tracing::warn!(id, error = %err, "detail fetch failed");
            None
        }
    };
    let screenshots = match screenshots {
        Ok(shots) => shots,
        Err(err) => {
            tracing::warn!(id, error = %err, "screenshot fetch failed");
            Vec::new()
        }
    };
    let trailer = match trailer {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(id, error = %err, "trailer fetch failed");
            None
        }
    };

    DetailBundle {
        detail,
        screenshots,
        trailer,
    }
}
