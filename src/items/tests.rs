use super::*;

// =========================================================
// Helpers
// =========================================================

fn lamp_record() -> ItemRecord {
    ItemRecord {
        name: "Desk Lamp".to_string(),
        price: 1499.0,
        images: vec!["lamp-front.png".to_string(), "lamp-side.png".to_string()],
    }
}

// =========================================================
// Record mapping
// =========================================================

#[test]
fn test_upload_url_format() {
    assert_eq!(
        upload_url("http://localhost:9090", "chair.jpg"),
        "http://localhost:9090/public/uploads/chair.jpg"
    );
}

#[test]
fn test_from_record_resolves_picture_urls() {
    let item = Item::from_record(lamp_record(), "http://localhost:9090");
    assert_eq!(item.name, "Desk Lamp");
    assert_eq!(item.price, 1499.0);
    assert_eq!(
        item.pictures,
        vec![
            "http://localhost:9090/public/uploads/lamp-front.png",
            "http://localhost:9090/public/uploads/lamp-side.png",
        ]
    );
}

#[test]
fn test_from_record_keeps_server_order() {
    let record = ItemRecord {
        name: "Chair".to_string(),
        price: 50.0,
        images: vec!["b.png".to_string(), "a.png".to_string()],
    };
    let item = Item::from_record(record, "https://auction.example.com");
    assert_eq!(
        item.pictures,
        vec![
            "https://auction.example.com/public/uploads/b.png",
            "https://auction.example.com/public/uploads/a.png",
        ]
    );
}

#[test]
fn test_record_deserializes_wire_shape() {
    let json = r#"{"name": "Vase", "price": 249.5, "images": ["vase.jpg"]}"#;
    let record: ItemRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.name, "Vase");
    assert_eq!(record.price, 249.5);
    assert_eq!(record.images, vec!["vase.jpg"]);
}

// =========================================================
// Hover cycling
// =========================================================

#[test]
fn test_enter_shows_first_picture() {
    let mut hover = HoverCycle::new();
    hover.enter(2);
    assert_eq!(hover.displayed(2), 0);
}

#[test]
fn test_unhovered_rows_show_first_picture() {
    let mut hover = HoverCycle::new();
    hover.enter(1);
    hover.pointer_over(1, 4);
    assert_eq!(hover.displayed(1), 1);
    assert_eq!(hover.displayed(0), 0);
    assert_eq!(hover.displayed(7), 0);
}

#[test]
fn test_pointer_over_advances_one_step_and_wraps() {
    let count = 3;
    let mut hover = HoverCycle::new();
    hover.enter(0);
    for step in 1..=10 {
        hover.pointer_over(0, count);
        assert_eq!(hover.displayed(0), step % count);
    }
}

#[test]
fn test_displayed_index_stays_in_bounds() {
    let count = 4;
    let mut hover = HoverCycle::new();
    hover.enter(3);
    for _ in 0..25 {
        hover.pointer_over(3, count);
        assert!(hover.displayed(3) < count);
    }
}

#[test]
fn test_leave_resets() {
    let mut hover = HoverCycle::new();
    hover.enter(0);
    hover.pointer_over(0, 5);
    hover.pointer_over(0, 5);
    hover.leave();
    assert_eq!(hover.displayed(0), 0);
}

#[test]
fn test_reentry_starts_over() {
    let mut hover = HoverCycle::new();
    hover.enter(0);
    hover.pointer_over(0, 3);
    hover.leave();
    hover.enter(0);
    assert_eq!(hover.displayed(0), 0);
}

#[test]
fn test_pointer_over_without_enter_acts_as_enter() {
    let mut hover = HoverCycle::new();
    hover.pointer_over(4, 3);
    assert_eq!(hover.displayed(4), 0);
    hover.pointer_over(4, 3);
    assert_eq!(hover.displayed(4), 1);
}

#[test]
fn test_switching_rows_resets_cycle() {
    let mut hover = HoverCycle::new();
    hover.enter(0);
    hover.pointer_over(0, 4);
    hover.pointer_over(0, 4);
    hover.pointer_over(1, 4);
    assert_eq!(hover.displayed(1), 0);
    assert_eq!(hover.displayed(0), 0);
}

#[test]
fn test_zero_picture_row_never_advances() {
    let mut hover = HoverCycle::new();
    hover.enter(0);
    hover.pointer_over(0, 0);
    hover.pointer_over(0, 0);
    assert_eq!(hover.displayed(0), 0);
}
