//! Dogs command - print records by id

use crate::{DogfinderError, api::DogApi, format, ui::Notifier};

type Result<T> = std::result::Result<T, DogfinderError>;

/// Execute the dogs command
///
/// Ids the service returns no record for are reported as warnings.
///
/// # Errors
/// Returns an error if the records cannot be fetched
pub async fn execute(
    api: &dyn DogApi,
    ids: &[String],
    out: &dyn Notifier,
    quiet: bool,
) -> Result<()> {
    let dogs = api.dogs_by_ids(ids).await?;

    for dog in &dogs {
        if quiet {
            out.write(&format::dog_line(dog, true));
        } else {
            out.write(&format::dog_card(dog));
        }
    }

    for id in ids.iter().filter(|id| !dogs.iter().any(|d| d.id == **id)) {
        out.warning(&format!("No dog found with id {id}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, dog, result_lines};
    use crate::ui::{Severity, StatusBarWriter};

    #[tokio::test]
    async fn test_reports_missing_ids() {
        let api = FakeApi::new().with_catalogue(vec![dog("a", "Akita")]);
        let out = StatusBarWriter::new();

        execute(&api, &["a".to_string(), "zz".to_string()], &out, true)
            .await
            .unwrap();

        assert_eq!(result_lines(&out), vec!["a"]);
        assert_eq!(
            out.latest_message(),
            Some((Severity::Warning, "No dog found with id zz".to_string()))
        );
    }
}
