//! Search command - find dogs by breed, location and age

use crate::{
    DogfinderError,
    api::DogApi,
    cli::SearchArgs,
    config::DogfinderConfig,
    format,
    models::Dog,
    search::{Pager, SearchPage, fetch_search_page},
    ui::Notifier,
};

type Result<T> = std::result::Result<T, DogfinderError>;

/// Execute the search command
///
/// Fetches one page of identifiers from the service, then their records.
/// With `--page` the records are paged locally and only that page is printed.
///
/// # Errors
/// Returns an error if the search or the record fetch fails
pub async fn execute(
    api: &dyn DogApi,
    args: &SearchArgs,
    config: &DogfinderConfig,
    out: &dyn Notifier,
    quiet: bool,
) -> Result<()> {
    let mut query = args.to_query(config.sort_directive());
    if query.size.is_none() {
        query.size = config.search_size;
    }

    let SearchPage {
        dogs,
        total,
        next,
        prev,
    } = fetch_search_page(api, &query).await?;

    if dogs.is_empty() {
        out.info("No dogs found.");
        return Ok(());
    }

    let shown: &[Dog] = match args.page {
        Some(page) => {
            let mut pager = Pager::new(args.page_size.unwrap_or(config.page_size));
            pager.go_to(page, dogs.len());
            let shown = pager.slice(&dogs);
            out.info(&format::page_summary(
                pager.page(),
                pager.total_pages(dogs.len()),
                shown.len(),
                total,
            ));
            shown
        }
        None => {
            out.info(&format!("Showing {} of {} dogs", dogs.len(), total));
            &dogs
        }
    };

    for dog in shown {
        out.write(&format::dog_line(dog, quiet));
    }

    if let Some(next) = &next {
        out.info(&format!("Next: --from '{next}'"));
    }
    if let Some(prev) = &prev {
        out.info(&format!("Previous: --from '{prev}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, dog, dogs, result_lines};
    use crate::ui::StatusBarWriter;

    #[tokio::test]
    async fn test_prints_records_in_result_order() {
        let api = FakeApi::new()
            .with_search_ids(&["c", "a", "b"])
            .with_catalogue(vec![dog("a", "Akita"), dog("b", "Beagle"), dog("c", "Corgi")]);
        let out = StatusBarWriter::new();

        execute(&api, &SearchArgs::default(), &DogfinderConfig::default(), &out, true)
            .await
            .unwrap();

        assert_eq!(result_lines(&out), vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_applies_config_defaults() {
        let api = FakeApi::new();
        let config = DogfinderConfig {
            sort: "age:desc".into(),
            search_size: Some(100),
            ..DogfinderConfig::default()
        };
        let args = SearchArgs {
            breeds: vec!["Pug".into()],
            ..SearchArgs::default()
        };

        execute(&api, &args, &config, &StatusBarWriter::new(), true)
            .await
            .unwrap();

        let query = &api.searches()[0];
        assert_eq!(query.sort.as_deref(), Some("age:desc"));
        assert_eq!(query.size, Some(100));
        assert_eq!(query.breeds, Some(vec!["Pug".to_string()]));
    }

    #[tokio::test]
    async fn test_no_results_skips_fetch() {
        let api = FakeApi::new();
        let out = StatusBarWriter::new();

        execute(&api, &SearchArgs::default(), &DogfinderConfig::default(), &out, false)
            .await
            .unwrap();

        assert_eq!(api.calls("dogs_by_ids"), 0);
        assert!(result_lines(&out).is_empty());
    }

    #[tokio::test]
    async fn test_page_is_clamped() {
        let api = FakeApi::new().with_results(dogs(25));
        let out = StatusBarWriter::new();
        let args = SearchArgs {
            page: Some(9),
            page_size: Some(10),
            ..SearchArgs::default()
        };

        execute(&api, &args, &DogfinderConfig::default(), &out, true)
            .await
            .unwrap();

        assert_eq!(result_lines(&out), vec!["d20", "d21", "d22", "d23", "d24"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_propagates() {
        let api = FakeApi::new().with_results(dogs(3)).failing("dogs_by_ids");

        let result = execute(
            &api,
            &SearchArgs::default(),
            &DogfinderConfig::default(),
            &StatusBarWriter::new(),
            true,
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_prints_next_cursor_hint() {
        let api = FakeApi::new()
            .with_results(dogs(2))
            .with_cursors(Some("/dogs/search?size=2&from=2"), None);
        let out = StatusBarWriter::new();

        execute(&api, &SearchArgs::default(), &DogfinderConfig::default(), &out, false)
            .await
            .unwrap();

        let messages: Vec<String> = out.recent_messages().into_iter().map(|(_, m)| m).collect();
        assert!(messages.contains(&"Next: --from '/dogs/search?size=2&from=2'".to_string()));
        assert!(!messages.iter().any(|m| m.starts_with("Previous:")));
    }
}
