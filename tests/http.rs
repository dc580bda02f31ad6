use std::time::Duration;

use chrono::{TimeZone, Utc};
use fox::{
    Credentials, FORM_CONTENT_TYPE, FaxStatus, FoxClient, FoxError, ListOptions, Quality,
    SendOptions,
};
use wiremock::matchers::{basic_auth, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FAX_SID: &str = "FXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX";

fn fax_json(status: &str) -> String {
    format!(
        r#"{{
          "account_sid": "ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
          "api_version": "v1",
          "date_created": "2015-07-30T20:00:00Z",
          "date_updated": "2015-07-30T20:00:00Z",
          "direction": "outbound",
          "from": "+15017122661",
          "media_url": null,
          "num_pages": null,
          "price": null,
          "price_unit": null,
          "quality": "superfine",
          "sid": "{FAX_SID}",
          "status": "{status}",
          "to": "+15558675310",
          "duration": null,
          "links": {{ "media": "https://fax.twilio.com/v1/Faxes/{FAX_SID}/Media" }},
          "url": "https://fax.twilio.com/v1/Faxes/{FAX_SID}"
        }}"#
    )
}

fn client_for(server: &MockServer) -> FoxClient {
    FoxClient::builder(Credentials::new("SID", "TOKEN"))
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_posts_authenticated_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/Faxes"))
        .and(basic_auth("SID", "TOKEN"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string(
            "To=%2B15558675310&From=%2B15017122661&MediaUrl=https%3A%2F%2Fexample.com%2Ffax.pdf\
             &Quality=superfine&StoreMedia=false&Ttl=30",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_string(fax_json("queued")))
        .expect(1)
        .mount(&server)
        .await;

    let options = SendOptions {
        quality: Quality::Superfine,
        store_media: false,
        ttl_minutes: Some(30),
        ..Default::default()
    };
    let fax = client_for(&server)
        .send(
            "+15558675310",
            "+15017122661",
            "https://example.com/fax.pdf",
            Some(&options),
        )
        .await
        .unwrap();

    assert_eq!(fax.status, FaxStatus::Queued);
    assert_eq!(fax.quality, Quality::Superfine);
}

#[tokio::test]
async fn get_maps_error_body_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/Faxes/{FAX_SID}")))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"code":1228,"message":"Twilio error message","more_info":"https://url/to/more/info","status":404}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get(FAX_SID).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "fox: error 404 (Twilio error 1228): Twilio error message"
    );
    assert!(matches!(err, FoxError::Api(_)));
}

#[tokio::test]
async fn list_sends_filters_as_query_string() {
    let server = MockServer::start().await;
    let page = format!(
        r#"{{
          "faxes": [{}],
          "meta": {{
            "first_page_url": "https://fax.twilio.com/v1/Faxes?PageSize=50&Page=0",
            "key": "faxes",
            "next_page_url": null,
            "page": 0,
            "page_size": 50,
            "previous_page_url": null,
            "url": "https://fax.twilio.com/v1/Faxes?PageSize=50&Page=0"
          }}
        }}"#,
        fax_json("delivered")
    );
    Mock::given(method("GET"))
        .and(path("/v1/Faxes"))
        .and(basic_auth("SID", "TOKEN"))
        .and(query_param("DateCreatedAfter", "2024-03-01T12:30:00Z"))
        .and(query_param("To", "+15558675310"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions {
        date_created_after: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
        to: Some("+15558675310".to_owned()),
        ..Default::default()
    };
    let page = client_for(&server).list(Some(&options)).await.unwrap();

    assert_eq!(page.faxes.len(), 1);
    assert_eq!(page.faxes[0].status, FaxStatus::Delivered);
    assert_eq!(page.meta.key, "faxes");
}

#[tokio::test]
async fn cancel_posts_status_to_instance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/Faxes/{FAX_SID}")))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string("Status=canceled"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fax_json("canceled")))
        .expect(1)
        .mount(&server)
        .await;

    let fax = client_for(&server).cancel(FAX_SID).await.unwrap();
    assert_eq!(fax.status, FaxStatus::Canceled);
}

#[tokio::test]
async fn slow_response_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fax_json("queued"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = FoxClient::builder(Credentials::new("SID", "TOKEN"))
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.get(FAX_SID).await.unwrap_err();
    assert!(matches!(err, FoxError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn validation_failures_never_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_string(fax_json("queued")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send("", "+15017122661", "https://example.com/fax.pdf", None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "fox: to number not specified");
}
