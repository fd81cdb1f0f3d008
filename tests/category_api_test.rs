// ==========================================
// Category API tests
// ==========================================
// Built-in seeding, custom category lifecycle, cascading delete.

use parts_inventory::api::error::ApiError;
use parts_inventory::api::import_api::ImportApi;
use parts_inventory::api::inventory_api::InventoryApi;

mod test_helpers;
use test_helpers::create_test_db;

/// A fresh database comes seeded with the five locked built-ins.
#[tokio::test]
async fn test_builtin_categories_seeded() {
    let (_temp_file, db_path) = create_test_db().expect("create test database");
    let categories = InventoryApi::new(db_path)
        .list_categories()
        .await
        .expect("list categories");

    let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "oil-filters",
            "air-filters",
            "cabin-filters",
            "fuel-filters",
            "wipers"
        ]
    );
    assert!(categories.iter().all(|c| c.is_locked && !c.is_custom));
}

/// Custom categories append after the built-ins and are deletable.
#[tokio::test]
async fn test_custom_category_lifecycle() {
    println!("\n=== test: custom category lifecycle ===\n");

    let (_temp_file, db_path) = create_test_db().expect("create test database");
    let inventory_api = InventoryApi::new(db_path);

    let created = inventory_api
        .add_custom_category("brake-pads", "Brake Pads")
        .await
        .expect("add custom category");
    assert!(created.is_custom);
    assert!(!created.is_locked);
    println!("✓ custom category created");

    let categories = inventory_api
        .list_categories()
        .await
        .expect("list categories");
    assert_eq!(categories.len(), 6);
    assert_eq!(categories.last().map(|c| c.id.as_str()), Some("brake-pads"));

    let removed = inventory_api
        .delete_category("brake-pads")
        .await
        .expect("delete custom category");
    assert_eq!(removed, 0, "no entries referenced the category yet");

    let categories = inventory_api
        .list_categories()
        .await
        .expect("list categories");
    assert_eq!(categories.len(), 5);
    println!("✓ custom category removed");
}

/// Blank ids and names are rejected before touching the store.
#[tokio::test]
async fn test_add_category_validates_input() {
    let (_temp_file, db_path) = create_test_db().expect("create test database");
    let inventory_api = InventoryApi::new(db_path);

    let err = inventory_api
        .add_custom_category("  ", "Brake Pads")
        .await
        .expect_err("blank id must be rejected");
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = inventory_api
        .add_custom_category("brake-pads", "")
        .await
        .expect_err("blank name must be rejected");
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

/// Built-ins are locked against deletion.
#[tokio::test]
async fn test_builtin_category_cannot_be_deleted() {
    let (_temp_file, db_path) = create_test_db().expect("create test database");
    let err = InventoryApi::new(db_path)
        .delete_category("oil-filters")
        .await
        .expect_err("built-in must be protected");
    assert!(matches!(err, ApiError::BusinessRuleViolation(_)));
}

/// Deleting a custom category takes its entries with it.
#[tokio::test]
async fn test_delete_category_cascades_to_entries() {
    println!("\n=== test: cascading category delete ===\n");

    let (_temp_file, db_path) = create_test_db().expect("create test database");
    let inventory_api = InventoryApi::new(db_path.clone());

    inventory_api
        .add_custom_category("brake-pads", "Brake Pads")
        .await
        .expect("add custom category");

    let sheet = "\
Item Number,Product Name,Floor Count,Storage Count,Category
BRK-900,Front Brake Pad Set,2,2,brake pads
BRK-901,Rear Brake Pad Set,1,0,Brake Pads
FLT-100,Premium Oil Filter,4,6,oil-filters
";
    let report = ImportApi::new(db_path)
        .import_counts_text(sheet)
        .await
        .expect("import");
    assert_eq!(report.new_count, 3, "custom category must match fuzzily");
    println!("✓ rows imported against the custom category");

    let removed = inventory_api
        .delete_category("brake-pads")
        .await
        .expect("delete category");
    assert_eq!(removed, 2);

    let entries = inventory_api.list_entries().await.expect("list entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item_number, "FLT-100");
    println!("✓ 2 entries removed with the category");
}

/// Deleting an unknown entry id surfaces NotFound.
#[tokio::test]
async fn test_delete_missing_entry() {
    let (_temp_file, db_path) = create_test_db().expect("create test database");
    let err = InventoryApi::new(db_path)
        .delete_entry("no-such-id")
        .await
        .expect_err("missing entry must error");
    assert!(matches!(err, ApiError::NotFound(_)));
}
