use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use pvo::{ErrorKind, PvoError};

use crate::common::{client, mock_get, setup_server};

#[tokio::test]
async fn status_decodes_live_output() {
    let server = setup_server();
    let mock = mock_get(
        &server,
        "getstatus.jsp",
        200,
        "20211222,18:00,3636,0,NaN,NaN,NaN,21.2,220.1",
    );

    let pvoutput = client(&server);
    let status = pvoutput.status().await.unwrap();
    pvoutput.close().await;

    mock.assert();
    assert_eq!(status.reported_date, NaiveDate::from_ymd_opt(2021, 12, 22).unwrap());
    assert_eq!(status.reported_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    assert_eq!(
        status.reported_datetime(),
        Utc.with_ymd_and_hms(2021, 12, 22, 18, 0, 0).unwrap()
    );
    assert_eq!(status.energy_consumption, None);
    assert_eq!(status.energy_generation, Some(3636));
    assert_eq!(status.normalized_output, None);
    assert_eq!(status.power_consumption, None);
    assert_eq!(status.power_generation, Some(0));
    assert_eq!(status.temperature, Some(21.2));
    assert_eq!(status.voltage, Some(220.1));
}

#[tokio::test]
async fn status_400_means_no_data() {
    let server = setup_server();
    let mock = mock_get(&server, "getstatus.jsp", 400, "Bad Request!");

    let err = client(&server).status().await.unwrap_err();

    mock.assert();
    assert_eq!(err.kind(), ErrorKind::NoData);
    assert!(matches!(err, PvoError::NoData { .. }));
}

#[tokio::test]
async fn malformed_status_is_decode_error() {
    let server = setup_server();
    mock_get(&server, "getstatus.jsp", 200, "20211222,18:00,3636");

    let err = client(&server).status().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Generic);
    assert!(matches!(
        err,
        PvoError::Decode(pvo::DecodeError::FieldCount {
            expected: 9,
            found: 3,
            ..
        })
    ));
}

#[tokio::test]
async fn status_serializes_missing_readings_as_null() {
    let server = setup_server();
    mock_get(
        &server,
        "getstatus.jsp",
        200,
        "20211222,18:00,3636,0,NaN,NaN,NaN,21.2,220.1\n",
    );

    let status = client(&server).status().await.unwrap();
    let json = serde_json::to_value(&status).unwrap();

    assert_eq!(json["reported_date"], "2021-12-22");
    assert_eq!(json["energy_generation"], 3636);
    assert!(json["energy_consumption"].is_null());
}
