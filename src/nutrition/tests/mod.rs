use std::collections::HashSet;
use std::fs;

use scraper::Html;

use crate::nutrition::{attributes, scrape_document, text};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/nutrition/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn names(records: &[crate::nutrition::NutritionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_single_tagged_entry() {
    let html = r#"<ul><li class="lightbox-nutrition">
        <a data-dish-name="Grilled Chicken" data-calories="320" data-protein="10g">Grilled Chicken</a>
    </li></ul>"#;

    let records = scrape_document(html, "berkshire");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Grilled Chicken");
    assert_eq!(records[0].calories, Some(320));
    assert_eq!(records[0].protein, Some(10.0));
    assert_eq!(records[0].location.as_deref(), Some("Berkshire"));
    assert_eq!(records[0].meal_category.as_deref(), Some("Lunch"));
}

#[test]
fn test_card_only_markup() {
    let html = r#"<div class="food-card">
        <h3 class="food-name">Veggie Wrap</h3>
        <p>Fresh vegetables in a spinach tortilla. 450 cal, 8g protein</p>
    </div>"#;

    let records = scrape_document(html, "franklin");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Veggie Wrap");
    assert_eq!(records[0].calories, Some(450));
    assert_eq!(records[0].protein, Some(8.0));
}

#[test]
fn test_one_character_name_is_discarded() {
    let html = r#"<ul><li class="lightbox-nutrition">
        <a data-dish-name="X" data-calories="500" data-protein="20g"
           data-total-fat="10g" data-total-carb="40g">X</a>
    </li></ul>"#;

    assert!(scrape_document(html, "berkshire").is_empty());
}

#[test]
fn test_malformed_calories_with_protein() {
    let html = r#"<ul><li class="lightbox-nutrition">
        <a data-dish-name="Lentil Soup" data-calories="abc" data-protein="9g">Lentil Soup</a>
    </li></ul>"#;

    let records = scrape_document(html, "berkshire");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].calories, None);
    assert_eq!(records[0].protein, Some(9.0));
}

#[test]
fn test_attribute_menu_fixture() {
    let html = fixture("attribute_menu.html");

    let tagged = attributes::extract(&Html::parse_document(&html));
    assert_eq!(
        names(&tagged),
        vec![
            "Grilled Chicken Breast",
            "Buttermilk Pancakes",
            "Lentil Soup",
            "Steamed Broccoli",
            "grilled chicken breast",
        ]
    );

    let records = scrape_document(&html, "berkshire");
    assert_eq!(
        names(&records),
        vec![
            "Grilled Chicken Breast",
            "Buttermilk Pancakes",
            "Lentil Soup",
            "Steamed Broccoli",
        ]
    );

    let chicken = &records[0];
    assert_eq!(chicken.calories, Some(320));
    assert_eq!(chicken.cholesterol_mg, Some(85.0));
    assert_eq!(chicken.sodium_mg, Some(440.0));
    assert_eq!(chicken.total_carbohydrates, Some(0.0));
    assert_eq!(chicken.serving_size.as_deref(), Some("4 oz"));

    assert_eq!(records[3].protein, Some(2.5));
}

#[test]
fn test_card_menu_fixture() {
    let html = fixture("card_menu.html");

    let records = scrape_document(&html, "franklin");
    assert_eq!(names(&records), vec!["Veggie Wrap", "Black Bean Burger"]);

    let wrap = &records[0];
    assert_eq!(wrap.calories, Some(450));
    assert_eq!(wrap.protein, Some(8.0));
    assert_eq!(wrap.total_fat, Some(14.0));
    assert_eq!(wrap.total_carbohydrates, Some(62.0));
    assert_eq!(wrap.serving_size.as_deref(), Some("9 oz"));

    let burger = &records[1];
    assert_eq!(burger.calories, Some(510));
    assert_eq!(burger.total_carbohydrates, Some(55.0));
    assert_eq!(burger.serving_size, None);

    assert!(attributes::extract(&Html::parse_document(&html)).is_empty());
}

#[test]
fn test_attribute_records_win_name_collisions() {
    let html = fixture("mixed_menu.html");

    let cards = text::extract(&Html::parse_document(&html));
    assert_eq!(
        names(&cards),
        vec!["grilled chicken", "Veggie Wrap", "Grilled Chicken"]
    );

    let records = scrape_document(&html, "worcester");
    assert_eq!(names(&records), vec!["Grilled Chicken", "Veggie Wrap"]);
    assert_eq!(records[0].calories, Some(320));
    assert_eq!(records[0].protein, Some(10.0));
    assert_eq!(records[1].location.as_deref(), Some("Worcester"));
}

#[test]
fn test_every_record_has_substantive_data() {
    for name in ["attribute_menu.html", "card_menu.html", "mixed_menu.html"] {
        for record in scrape_document(&fixture(name), "hampshire") {
            assert!(record.has_substantive_data(), "{name}: {record:?}");
        }
    }
}

#[test]
fn test_no_duplicate_names() {
    for name in ["attribute_menu.html", "card_menu.html", "mixed_menu.html"] {
        let records = scrape_document(&fixture(name), "hampshire");
        let unique: HashSet<_> = records.iter().map(|r| r.name.to_lowercase()).collect();
        assert_eq!(unique.len(), records.len(), "{name}");
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let html = fixture("mixed_menu.html");
    assert_eq!(
        scrape_document(&html, "worcester"),
        scrape_document(&html, "worcester")
    );
}

#[test]
fn test_unrelated_and_broken_markup() {
    assert!(scrape_document("", "berkshire").is_empty());
    assert!(scrape_document("<html><body><p>Closed today</p></body></html>", "berkshire").is_empty());

    let broken = r#"<ul><li class="lightbox-nutrition"><a data-dish-name="Bagel" data-calories="270"><div class="card"><h4 class="title">Muffin"#;
    let records = scrape_document(broken, "berkshire");
    assert_eq!(records[0].name, "Bagel");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_scrape_never_panics(html in ".*") {
            let _ = scrape_document(&html, "berkshire");
        }

        #[test]
        fn test_records_keep_invariants(
            name in "[A-Za-z ]{0,12}",
            calories in ".{0,6}",
            protein in ".{0,6}",
        ) {
            let html = format!(
                r#"<ul><li class="lightbox-nutrition"><a data-dish-name="{}" data-calories="{}" data-protein="{}">x</a></li></ul>"#,
                name,
                calories.replace('"', ""),
                protein.replace('"', ""),
            );

            for record in scrape_document(&html, "berkshire") {
                prop_assert!(record.has_substantive_data());
                prop_assert!(record.name.chars().count() >= 2);
                prop_assert!(record.protein.is_none_or(|p| p >= 0.0));
            }
        }
    }
}
