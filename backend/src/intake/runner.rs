//! The intake loop.

use std::io::Write;

use tracing::{info, warn};

use crate::domain::messages::{full_messages, score_text};
use crate::domain::ports::{EnqueteRepository, MessageCatalog};
use crate::domain::{CommonDisplay, EnqueteService, EnqueteServiceError, FoodEnquete, menu};

use super::{IntakeError, IntakeSummary, SubmissionReport};

/// Save every submission and write one JSON report line for each.
///
/// Submissions are handled in order, so a later duplicate of an earlier
/// mail in the same batch is rejected as taken.
///
/// # Errors
///
/// Returns [`IntakeError::Repository`] as soon as the store fails, and
/// [`IntakeError::Output`] when a report line cannot be written. Reports
/// already written stay written.
pub async fn run_intake<R, C, W>(
    service: &EnqueteService<R>,
    catalog: &C,
    submissions: &[FoodEnquete],
    out: &mut W,
) -> Result<IntakeSummary, IntakeError>
where
    R: EnqueteRepository,
    C: MessageCatalog + ?Sized,
    W: Write,
{
    let mut summary = IntakeSummary::default();
    for (index, enquete) in submissions.iter().enumerate() {
        let report = submit(service, catalog, index, enquete).await?;
        summary.record(&report);
        write_report(out, &report)?;
    }
    info!(
        saved = summary.saved,
        rejected = summary.rejected,
        locale = catalog.locale(),
        "intake run finished"
    );
    Ok(summary)
}

async fn submit<R, C>(
    service: &EnqueteService<R>,
    catalog: &C,
    index: usize,
    enquete: &FoodEnquete,
) -> Result<SubmissionReport, IntakeError>
where
    R: EnqueteRepository,
    C: MessageCatalog + ?Sized,
{
    match service.save(enquete).await {
        Ok(stored) => {
            let dish = enquete.food_id.and_then(menu::dish);
            info!(
                index,
                id = %stored.id(),
                dish = dish.map(|entry| entry.name),
                price_with_tax = dish.map(|entry| stored.tax_included_price(entry.base_price)),
                score = %score_text(catalog, stored.view_score()),
                gift = enquete.present_id.and_then(menu::gift).map(|entry| entry.name),
                "submission saved"
            );
            Ok(SubmissionReport::Saved {
                index,
                id: stored.id(),
            })
        }
        Err(EnqueteServiceError::Invalid(violations)) => {
            let messages = full_messages(catalog, &violations);
            warn!(index, %violations, "submission rejected");
            Ok(SubmissionReport::Rejected {
                index,
                violations,
                messages,
            })
        }
        Err(EnqueteServiceError::Repository(source)) => {
            Err(IntakeError::Repository { index, source })
        }
    }
}

fn write_report<W: Write>(out: &mut W, report: &SubmissionReport) -> Result<(), IntakeError> {
    serde_json::to_writer(&mut *out, report).map_err(|err| IntakeError::Output(err.into()))?;
    writeln!(out).map_err(IntakeError::Output)
}

#[cfg(test)]
mod tests {
    //! Unit tests for the intake loop.

    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{EnqueteRepositoryError, MockEnqueteRepository};
    use crate::domain::{Field, GIFT_ALCOHOL_ID, ViolationKind};
    use crate::outbound::locale::BundledMessageCatalog;
    use crate::outbound::persistence::InMemoryEnqueteRepository;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn catalog() -> BundledMessageCatalog {
        BundledMessageCatalog::for_locale("ja").expect("bundled catalogue")
    }

    fn enquete(name: &str, mail: &str, age: i32) -> FoodEnquete {
        FoodEnquete {
            name: Some(name.to_owned()),
            mail: Some(mail.to_owned()),
            age: Some(age),
            food_id: Some(2),
            score: Some(3),
            ..FoodEnquete::new()
        }
    }

    fn report_lines(out: &[u8]) -> Vec<Value> {
        String::from_utf8(out.to_vec())
            .expect("utf-8 output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect()
    }

    #[rstest]
    #[tokio::test]
    async fn writes_one_line_per_submission(catalog: BundledMessageCatalog) {
        let service = EnqueteService::new(Arc::new(InMemoryEnqueteRepository::new()));
        let submissions = vec![
            enquete("田中 太郎", "taro.tanaka@example.com", 25),
            enquete("田中 花子", "taro.tanaka@example.com", 30),
            FoodEnquete {
                present_id: Some(GIFT_ALCOHOL_ID),
                ..enquete("佐藤 仁", "hitoshi.sato@example.com", 19)
            },
        ];
        let mut out = Vec::new();

        let summary = run_intake(&service, &catalog, &submissions, &mut out)
            .await
            .expect("intake completes");

        assert_eq!(summary, IntakeSummary { saved: 1, rejected: 2 });
        let lines = report_lines(&out);
        assert_eq!(
            lines,
            vec![
                json!({"status": "saved", "index": 0, "id": 1}),
                json!({
                    "status": "rejected",
                    "index": 1,
                    "violations": {"mail": ["taken"]},
                    "messages": ["メールアドレスはすでに存在します"],
                }),
                json!({
                    "status": "rejected",
                    "index": 2,
                    "violations": {"present_id": ["cannot_present_to_minor"]},
                    "messages": ["ご希望のプレゼントは成人の方のみお選びいただけます"],
                }),
            ]
        );
        assert_eq!(service.count().await.expect("count"), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_batch_writes_nothing(catalog: BundledMessageCatalog) {
        let service = EnqueteService::new(Arc::new(InMemoryEnqueteRepository::new()));
        let mut out = Vec::new();

        let summary = run_intake(&service, &catalog, &[], &mut out)
            .await
            .expect("intake completes");

        assert_eq!(summary, IntakeSummary::default());
        assert!(out.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn store_failure_aborts_the_run(catalog: BundledMessageCatalog) {
        let mut repo = MockEnqueteRepository::new();
        repo.expect_exists_by_mail()
            .returning(|_| Err(EnqueteRepositoryError::connection("refused")));
        repo.expect_insert().never();
        let service = EnqueteService::new(Arc::new(repo));
        let submissions = vec![
            FoodEnquete::new(),
            enquete("田中 太郎", "taro.tanaka@example.com", 25),
        ];
        let mut out = Vec::new();

        let err = run_intake(&service, &catalog, &submissions, &mut out)
            .await
            .expect_err("store failure");

        match err {
            IntakeError::Repository { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, EnqueteRepositoryError::connection("refused"));
            }
            other => panic!("expected Repository, got {other:?}"),
        }
        let lines = report_lines(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["status"], "rejected");
        assert_eq!(
            lines[0]["violations"]["name"],
            json!([ViolationKind::Blank.as_str()])
        );
        assert!(lines[0]["violations"].get(Field::Mail.as_str()).is_some());
    }
}
