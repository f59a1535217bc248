use super::*;

fn titles(records: &[crate::server::query::features::Record]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|record| record.get("title").and_then(JsonValue::as_str))
        .collect()
}

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-01T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Tests filtering, newest-first sorting and paging together.
///
/// Twelve pending complaints are filed one minute apart, interleaved with
/// resolved ones. Page 2 of size 5 sorted by `-createdAt` must hold the pending
/// complaints ranked 6 to 10 by recency.
///
/// Expected: Ok with complaints 7, 6, 5, 4 and 3 in that order
#[tokio::test]
async fn returns_second_page_of_filtered_sorted_complaints() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, zone) = factory::helpers::create_zone_with_dependencies(db).await?;
    for i in 1..=12 {
        factory::complaint::ComplaintFactory::new(db, zone.id)
            .title(format!("Complaint {}", i))
            .created_at(base_time() + Duration::minutes(i))
            .build()
            .await?;

        if i % 4 == 0 {
            factory::complaint::ComplaintFactory::new(db, zone.id)
                .title(format!("Resolved {}", i))
                .status(ComplaintStatus::Resolved)
                .created_at(base_time() + Duration::minutes(i) + Duration::seconds(30))
                .build()
                .await?;
        }
    }

    let params = FeatureParams::from_query_str("status=Pending&sort=-createdAt&page=2&limit=5");
    let records = ComplaintRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    assert_eq!(
        titles(&records),
        vec![
            "Complaint 7",
            "Complaint 6",
            "Complaint 5",
            "Complaint 4",
            "Complaint 3"
        ]
    );

    Ok(())
}

/// Tests that consecutive pages never overlap when sort keys tie.
///
/// Expected: Ok with every complaint appearing exactly once across pages
#[tokio::test]
async fn pages_are_disjoint_on_tied_sort_keys() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, zone) = factory::helpers::create_zone_with_dependencies(db).await?;
    for i in 0..7 {
        factory::complaint::ComplaintFactory::new(db, zone.id)
            .title(format!("Tied {}", i))
            .upvotes(5)
            .build()
            .await?;
    }

    let repo = ComplaintRepository::new(db);
    let mut seen = Vec::new();
    for page in 1..=3 {
        let params = FeatureParams::from_query_str(&format!("sort=-upvotes&limit=3&page={page}"));
        for record in repo.list(&params, QueryOptions::default()).await? {
            seen.push(record["id"].as_i64().unwrap());
        }
    }

    let mut unique = seen.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(seen.len(), 7);
    assert_eq!(unique.len(), 7);

    Ok(())
}

/// Tests a range filter on upvotes with the zone expanded.
///
/// Expected: Ok with only complaints at or above the threshold, each with its zone
#[tokio::test]
async fn filters_by_upvote_range() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, zone) = factory::helpers::create_zone_with_dependencies(db).await?;
    for (title, upvotes) in [("Quiet", 2), ("Popular", 120), ("Viral", 600)] {
        factory::complaint::ComplaintFactory::new(db, zone.id)
            .title(title)
            .upvotes(upvotes)
            .build()
            .await?;
    }

    let params = FeatureParams::from_query_str("upvotes[gte]=100&upvotes[lt]=500");
    let records = ComplaintRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    assert_eq!(titles(&records), vec!["Popular"]);
    assert_eq!(records[0]["zone"]["id"], JsonValue::from(zone.id));
    assert!(!records[0].contains_key("zone_id"));

    Ok(())
}
