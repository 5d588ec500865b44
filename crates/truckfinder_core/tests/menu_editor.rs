use truckfinder_core::{
    filter_menu, menu_categories, popular_items, Catalog, DietaryTag, MenuCategory, MenuEditError,
    MenuEditor, MenuItemDraft,
};

fn editor_for_first_truck() -> (Catalog, MenuEditor) {
    let catalog = Catalog::sample().unwrap();
    let editor = MenuEditor::new(&catalog.trucks[0]);
    (catalog, editor)
}

#[test]
fn editor_starts_from_a_copy_of_the_menu() {
    let (catalog, editor) = editor_for_first_truck();
    assert_eq!(editor.truck_id(), "1");
    assert_eq!(editor.items(), catalog.trucks[0].menu.as_slice());
}

#[test]
fn add_item_appends_with_generated_id() {
    let (catalog, mut editor) = editor_for_first_truck();
    let before = editor.items().len();

    let mut draft = MenuItemDraft::new("Pavlova", "Meringue with passionfruit", 7.5);
    draft.dietary = Some(vec![DietaryTag::Vegetarian, DietaryTag::GlutenFree]);
    let added = editor.add_item(draft).unwrap().clone();

    assert!(!added.id.is_empty());
    assert_eq!(added.popular, Some(false));
    assert_eq!(editor.items().len(), before + 1);
    assert_eq!(editor.items().last(), Some(&added));
    assert_eq!(catalog.trucks[0].menu.len(), before);
}

#[test]
fn add_item_rejects_incomplete_drafts() {
    let (_, mut editor) = editor_for_first_truck();

    let err = editor
        .add_item(MenuItemDraft::new("  ", "desc", 5.0))
        .unwrap_err();
    assert_eq!(err, MenuEditError::MissingName);

    let err = editor
        .add_item(MenuItemDraft::new("Name", "", 5.0))
        .unwrap_err();
    assert_eq!(err, MenuEditError::MissingDescription);

    let err = editor
        .add_item(MenuItemDraft::new("Name", "desc", 0.0))
        .unwrap_err();
    assert_eq!(err, MenuEditError::InvalidPrice(0.0));

    let err = editor
        .add_item(MenuItemDraft::new("Name", "desc", -2.0))
        .unwrap_err();
    assert_eq!(err, MenuEditError::InvalidPrice(-2.0));
}

#[test]
fn update_item_replaces_in_place() {
    let (_, mut editor) = editor_for_first_truck();
    let mut item = editor.items()[1].clone();
    item.price = 9.0;
    item.name = "Cheesy Sausage Sizzle".to_string();

    editor.update_item(item.clone()).unwrap();
    assert_eq!(editor.items()[1], item);

    let mut unknown = item;
    unknown.id = "missing".to_string();
    assert_eq!(
        editor.update_item(unknown).unwrap_err(),
        MenuEditError::ItemNotFound("missing".to_string())
    );
}

#[test]
fn delete_item_removes_by_id() {
    let (_, mut editor) = editor_for_first_truck();
    let removed = editor.delete_item("1-2").unwrap();
    assert_eq!(removed.name, "Sausage Sizzle");
    assert!(editor.item("1-2").is_none());
    assert!(matches!(
        editor.delete_item("1-2"),
        Err(MenuEditError::ItemNotFound(_))
    ));
}

#[test]
fn toggle_popular_flips_flag() {
    let (_, mut editor) = editor_for_first_truck();
    assert!(!editor.toggle_popular("1-1").unwrap());
    assert!(editor.toggle_popular("1-1").unwrap());
    assert!(editor.toggle_popular("1-4").unwrap());
}

#[test]
fn apply_to_produces_edited_copy() {
    let (catalog, mut editor) = editor_for_first_truck();
    editor.delete_item("1-4").unwrap();
    let edited = editor.apply_to(&catalog.trucks[0]);
    assert_eq!(edited.menu.len(), catalog.trucks[0].menu.len() - 1);
    assert_eq!(edited.id, catalog.trucks[0].id);
}

#[test]
fn menu_categories_follow_first_seen_order() {
    let catalog = Catalog::sample().unwrap();
    assert_eq!(
        menu_categories(&catalog.trucks[0].menu),
        vec![MenuCategory::Regular, MenuCategory::Vegetarian]
    );
    assert_eq!(
        menu_categories(&catalog.trucks[3].menu),
        vec![MenuCategory::Vegan]
    );
}

#[test]
fn filter_menu_by_category() {
    let catalog = Catalog::sample().unwrap();
    let menu = &catalog.trucks[2].menu;

    let regular = filter_menu(menu, Some(MenuCategory::Regular));
    assert_eq!(
        regular.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
        vec!["3-1", "3-2"]
    );
    let vegetarian = filter_menu(menu, Some(MenuCategory::Vegetarian));
    assert_eq!(vegetarian.len(), 1);
    assert_eq!(vegetarian[0].name, "Thick Shake");
    assert_eq!(filter_menu(menu, None).len(), menu.len());
}

#[test]
fn popular_items_are_capped() {
    let catalog = Catalog::sample().unwrap();
    let popular = popular_items(&catalog.trucks[0].menu, 2);
    assert_eq!(
        popular.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
        vec!["1-1", "1-2"]
    );
    assert!(popular_items(&catalog.trucks[0].menu, 0).is_empty());
}
