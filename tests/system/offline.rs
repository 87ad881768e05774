use chrono::NaiveDate;
use pvo::{ErrorKind, PvoError};

use crate::common::{client, mock_get, setup_server};

#[tokio::test]
async fn system_decodes_installation_metadata() {
    let server = setup_server();
    let mock = mock_get(
        &server,
        "getsystem.jsp",
        200,
        "Frenck,5015,CO1,17,295,JA solar JAM-300,1,5000,\
         SolarEdge SE5000H,S,20.0,Low,20180622,51.1234,6.1234,5;;0",
    );

    let pvoutput = client(&server);
    let system = pvoutput.system().await.unwrap();
    pvoutput.close().await;

    mock.assert();
    assert_eq!(system.array_tilt, Some(20.0));
    assert_eq!(system.install_date, NaiveDate::from_ymd_opt(2018, 6, 22));
    assert_eq!(system.inverter_brand, "SolarEdge SE5000H");
    assert_eq!(system.inverter_power, Some(5000));
    assert_eq!(system.inverters, Some(1));
    assert_eq!(system.latitude, Some(51.1234));
    assert_eq!(system.longitude, Some(6.1234));
    assert_eq!(system.orientation, "S");
    assert_eq!(system.panel_brand, "JA solar JAM-300");
    assert_eq!(system.panel_power, Some(295));
    assert_eq!(system.panels, Some(17));
    assert_eq!(system.shade, "Low");
    assert_eq!(system.status_interval, Some(5));
    assert_eq!(system.system_name, "Frenck");
    assert_eq!(system.system_size, Some(5015));
    assert_eq!(system.zipcode, "CO1");
}

#[tokio::test]
async fn system_empty_install_date_is_none() {
    let server = setup_server();
    mock_get(
        &server,
        "getsystem.jsp",
        200,
        "Frenck,5015,1234,17,295,JA solar JAM-300,1,5000,\
         SolarEdge SE5000H,S,20.0,Low,,51.1234,6.1234,5;;0",
    );

    let system = client(&server).system().await.unwrap();

    assert_eq!(system.install_date, None);
    assert_eq!(system.zipcode, "1234");
}

#[tokio::test]
async fn system_bad_date_is_decode_error() {
    let server = setup_server();
    mock_get(
        &server,
        "getsystem.jsp",
        200,
        "Frenck,5015,CO1,17,295,JA,1,5000,SE,S,20.0,Low,2018-06-22,51.1,6.1,5;;0",
    );

    let err = client(&server).system().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Generic);
    assert!(matches!(
        err,
        PvoError::Decode(pvo::DecodeError::Date {
            field: "install_date",
            ..
        })
    ));
}
