mod helpers;

use helpers::MockStore;
use taskboard::categories::CategoryStore;
use taskboard::model::Category;

#[test]
fn load_keeps_the_store_order() {
    let store = MockStore::with_categories(vec![
        Category {
            id: 2,
            name: "Home".to_string(),
        },
        Category {
            id: 1,
            name: "Work".to_string(),
        },
    ]);

    let categories = CategoryStore::load(&store);

    assert_eq!(categories.all().len(), 2);
    assert_eq!(categories.all()[0].name, "Home");
}

#[test]
fn load_failure_yields_empty_store() {
    let store = MockStore {
        fail_categories: true,
        ..MockStore::default()
    };

    let categories = CategoryStore::load(&store);

    // Indistinguishable from "none defined": callers degrade the same way
    assert!(categories.is_empty());
    assert_eq!(categories.name_of(1), None);
}

#[test]
fn name_of_resolves_known_ids_only() {
    let store = MockStore::with_categories(vec![Category {
        id: 3,
        name: "Work".to_string(),
    }]);
    let categories = CategoryStore::load(&store);

    assert_eq!(categories.name_of(3), Some("Work"));
    assert_eq!(categories.name_of(4), None);
}
