use car_inventory::app::{AssumeYes, PageController};
use car_inventory::core::render::NO_CARS_MESSAGE;
use car_inventory::HttpInventoryApi;
use httpmock::prelude::*;

fn civic_list() -> serde_json::Value {
    serde_json::json!({
        "total": 1,
        "records": [{"id": 1, "model": "Civic", "brand": "Honda", "year": 2020,
                     "price": 20000, "color": "red", "styleSelect": "Sedan"}]
    })
}

#[tokio::test]
async fn test_create_then_delete_against_server() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/car")
            .body_contains("model=Civic")
            .body_contains("styleSelect=Sedan");
        then.status(200).json_body(civic_list());
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/car").body("id=1");
        then.status(200)
            .json_body(serde_json::json!({"total": 0, "records": []}));
    });

    let api = HttpInventoryApi::new(server.base_url());
    let mut controller = PageController::new(api, AssumeYes);

    controller.car_form.model = "Civic".to_string();
    controller.car_form.brand = "Honda".to_string();
    controller.car_form.style_select = "Sedan".to_string();
    controller.submit_car().await;

    create_mock.assert();
    assert!(controller.car_form.model.is_empty());
    assert!(controller.table().contains("#1"));

    let car = controller.find_car("1").cloned().unwrap();
    assert!(controller.delete(&car).await);

    delete_mock.assert();
    assert!(controller.table().contains(NO_CARS_MESSAGE));
}

#[tokio::test]
async fn test_server_errors_are_not_fatal() {
    let server = MockServer::start();
    let cars_mock = server.mock(|when, then| {
        when.method(GET).path("/cars");
        then.status(500);
    });
    let styles_mock = server.mock(|when, then| {
        when.method(GET).path("/styleCar");
        then.status(200)
            .json_body(serde_json::json!({"records": [{"name": "SUV", "description": ""}]}));
    });
    let csv_mock = server.mock(|when, then| {
        when.method(POST).path("/csv");
        then.status(502);
    });

    let api = HttpInventoryApi::new(server.base_url());
    let mut controller = PageController::new(api, AssumeYes);

    controller.init().await;
    let notice = controller.export_csv().await;

    cars_mock.assert();
    styles_mock.assert();
    csv_mock.assert();
    assert!(controller.rows().is_empty());
    assert_eq!(controller.style_options(), ["SUV".to_string()]);
    assert_eq!(notice, "CSV Create");
}
