//! Concurrent bulk delete shared by every admin client

use futures_util::future::join_all;
use reqwest::Client;

use verdora_rust_core::{Error, Fetch, SessionStore};

/// Issue one DELETE per URL concurrently, exactly as the admin tables fan
/// out one call per selected row.
///
/// Returns the number of deletions iff every call succeeded; otherwise the
/// first error. Callers clear their selection and reload the list only on
/// `Ok`.
pub(crate) async fn delete_all(
    client: &Client,
    session: &SessionStore,
    urls: Vec<String>,
) -> Result<usize, Error> {
    let requests = urls
        .iter()
        .map(|url| Fetch::delete(client, session, url).execute_unit());
    let results = join_all(requests).await;

    let total = results.len();
    for result in results {
        result?;
    }
    Ok(total)
}
