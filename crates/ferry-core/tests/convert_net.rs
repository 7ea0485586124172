use ferry_core::convert::catalog::{
    IpAddressToBytes, IpAddressToString, PhysicalAddressToBytes, PhysicalAddressToString,
};
use ferry_core::convert::MappingHints;
use ferry_core::stmt::{PhysicalAddress, Value};
use std::net::IpAddr;

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

fn ip(text: &str) -> Value {
    Value::IpAddr(text.parse::<IpAddr>().unwrap())
}

// ---------------------------------------------------------------------------
// IP addresses
// ---------------------------------------------------------------------------

#[test]
fn ip_to_string() {
    let converter = IpAddressToString::converter();

    assert_eq!(
        converter.convert_to_provider(&ip("192.168.0.1")).unwrap(),
        text("192.168.0.1")
    );
    assert_eq!(
        converter.convert_from_provider(&text(" ::1 ")).unwrap(),
        ip("::1")
    );
    assert!(converter.convert_from_provider(&text("300.0.0.1")).is_err());
    assert_eq!(converter.hints(), Some(&MappingHints::sized(45)));
}

#[test]
fn ip_to_bytes() {
    let converter = IpAddressToBytes::converter();

    assert_eq!(
        converter.convert_to_provider(&ip("10.0.0.255")).unwrap(),
        Value::Bytes(vec![10, 0, 0, 255])
    );

    let v6 = converter.convert_to_provider(&ip("2001:db8::1")).unwrap();
    assert_eq!(v6.as_bytes().unwrap().len(), 16);
    assert_eq!(converter.convert_from_provider(&v6).unwrap(), ip("2001:db8::1"));

    assert!(converter
        .convert_from_provider(&Value::Bytes(vec![1, 2, 3, 4, 5]))
        .unwrap_err()
        .is_conversion_failed());
    assert_eq!(converter.hints(), Some(&MappingHints::sized(16)));
}

// ---------------------------------------------------------------------------
// Physical addresses
// ---------------------------------------------------------------------------

#[test]
fn physical_address_to_string() {
    let converter = PhysicalAddressToString::converter();
    let address = Value::PhysicalAddress(PhysicalAddress::new([0x00, 0x15, 0x5D, 0x01, 0x02, 0xAB]));

    assert_eq!(
        converter.convert_to_provider(&address).unwrap(),
        text("00155D0102AB")
    );

    for input in ["00155D0102AB", "00-15-5D-01-02-AB", "00:15:5d:01:02:ab"] {
        assert_eq!(
            converter.convert_from_provider(&text(input)).unwrap(),
            address,
            "{input}"
        );
    }

    assert!(converter.convert_from_provider(&text("0-15")).is_err());
    assert!(converter.convert_from_provider(&text("XYZ")).is_err());
    assert_eq!(converter.hints(), Some(&MappingHints::sized(20)));
}

#[test]
fn physical_address_to_bytes() {
    let converter = PhysicalAddressToBytes::converter();
    let address = Value::PhysicalAddress(PhysicalAddress::new([1, 2, 3, 4, 5, 6]));

    assert_eq!(
        converter.convert_to_provider(&address).unwrap(),
        Value::Bytes(vec![1, 2, 3, 4, 5, 6])
    );
    assert_eq!(
        converter
            .convert_from_provider(&Value::Bytes(vec![1, 2, 3, 4, 5, 6]))
            .unwrap(),
        address
    );
    assert_eq!(converter.hints(), Some(&MappingHints::sized(8)));
}
