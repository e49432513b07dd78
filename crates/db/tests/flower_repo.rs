//! Integration tests for `FlowerRepo` against an in-memory database.
//!
//! Covers each listing filter with and without a cursor.

mod common;

use common::{test_pool, ts};
use hapipath_core::flower::{Flower, FlowerFilter, FlowerTexture, FlowerType};
use hapipath_core::geo::BBox;
use hapipath_db::models::flower::into_flowers;
use hapipath_db::repositories::FlowerRepo;
use hapipath_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_flower(id: &str, lat: f64, lon: f64, owner: &str, created_at: &str) -> Flower {
    Flower {
        id: id.to_string(),
        lat,
        lon,
        texture: FlowerTexture::Flower1,
        name: format!("Flower {id}"),
        created_at: created_at.to_string(),
        wither_at: None,
        owner_id: owner.to_string(),
        flower_type: if owner == "me-user" {
            FlowerType::Mine
        } else {
            FlowerType::Others
        },
    }
}

/// Tokyo (t*), Osaka (o*), owned by a mix of users, one minute apart.
async fn seed(pool: &DbPool) {
    let flowers = [
        new_flower("t1", 35.68, 139.76, "me-user", &ts(1)),
        new_flower("o1", 34.69, 135.50, "other-user", &ts(2)),
        new_flower("t2", 35.66, 139.70, "other-user", &ts(3)),
        new_flower("o2", 34.70, 135.49, "me-user", &ts(4)),
        new_flower("t3", 35.00, 139.00, "me-user", &ts(5)),
    ];
    for flower in &flowers {
        FlowerRepo::create(pool, flower).await.unwrap();
    }
}

async fn list_ids(pool: &DbPool, filter: FlowerFilter, cursor: Option<&str>, limit: i64) -> Vec<String> {
    FlowerRepo::list(pool, &filter, cursor, limit)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.id)
        .collect()
}

const TOKYO: BBox = BBox {
    west: 139.0,
    south: 35.0,
    east: 140.0,
    north: 36.0,
};

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_round_trips_enums() {
    let pool = test_pool().await;
    let flower = new_flower("f1", 35.6762, 139.6503, "me-user", &ts(0));

    let row = FlowerRepo::create(&pool, &flower).await.unwrap();
    assert_eq!(row.texture, "flower1");
    assert_eq!(row.flower_type, "mine");

    let found = FlowerRepo::find_by_id(&pool, "f1").await.unwrap().unwrap();
    assert_eq!(Flower::try_from(found).unwrap(), flower);
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let pool = test_pool().await;
    FlowerRepo::create(&pool, &new_flower("f1", 0.0, 0.0, "me-user", &ts(0)))
        .await
        .unwrap();

    assert!(FlowerRepo::delete(&pool, "f1").await.unwrap());
    assert!(!FlowerRepo::delete(&pool, "f1").await.unwrap());
    assert!(FlowerRepo::find_by_id(&pool, "f1").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unfiltered_list_is_newest_first() {
    let pool = test_pool().await;
    seed(&pool).await;

    let ids = list_ids(&pool, FlowerFilter::All, None, 50).await;
    assert_eq!(ids, vec!["t3", "o2", "t2", "o1", "t1"]);
}

#[tokio::test]
async fn unfiltered_list_with_cursor() {
    let pool = test_pool().await;
    seed(&pool).await;

    let ids = list_ids(&pool, FlowerFilter::All, Some(&ts(3)), 50).await;
    assert_eq!(ids, vec!["o1", "t1"]);
}

#[tokio::test]
async fn bbox_includes_edges() {
    let pool = test_pool().await;
    seed(&pool).await;

    let ids = list_ids(&pool, FlowerFilter::BBox(TOKYO), None, 50).await;
    assert_eq!(ids, vec!["t3", "t2", "t1"]);
}

#[tokio::test]
async fn bbox_with_cursor_and_limit() {
    let pool = test_pool().await;
    seed(&pool).await;

    let ids = list_ids(&pool, FlowerFilter::BBox(TOKYO), Some(&ts(5)), 1).await;
    assert_eq!(ids, vec!["t2"]);
}

#[tokio::test]
async fn owner_filter_matches_owner_id() {
    let pool = test_pool().await;
    seed(&pool).await;

    let ids = list_ids(&pool, FlowerFilter::Owner("me-user".into()), None, 50).await;
    assert_eq!(ids, vec!["t3", "o2", "t1"]);

    let ids = list_ids(&pool, FlowerFilter::Owner("me-user".into()), Some(&ts(4)), 50).await;
    assert_eq!(ids, vec!["t1"]);
}

#[tokio::test]
async fn type_filter_uses_raw_value() {
    let pool = test_pool().await;
    seed(&pool).await;

    let ids = list_ids(&pool, FlowerFilter::Type("others".into()), None, 50).await;
    assert_eq!(ids, vec!["t2", "o1"]);

    let ids = list_ids(&pool, FlowerFilter::Type("others".into()), Some(&ts(3)), 50).await;
    assert_eq!(ids, vec!["o1"]);

    let ids = list_ids(&pool, FlowerFilter::Type("withered".into()), None, 50).await;
    assert!(ids.is_empty());
}

#[tokio::test]
async fn listed_rows_convert_to_flowers() {
    let pool = test_pool().await;
    seed(&pool).await;

    let rows = FlowerRepo::list(&pool, &FlowerFilter::All, None, 50)
        .await
        .unwrap();
    let flowers = into_flowers(rows).unwrap();
    assert_eq!(flowers.len(), 5);
    assert!(flowers.iter().all(|f| f.texture == FlowerTexture::Flower1));
}
