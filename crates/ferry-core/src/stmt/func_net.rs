use super::{PhysicalAddress, Value};
use crate::{Error, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Conversions for network addresses.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncNet {
    IpToString,
    IpParse,

    /// 4 octets for IPv4, 16 for IPv6
    IpToBytes,
    IpFromBytes,

    /// Uppercase hex digits without separators
    PhysicalAddressToString,

    /// Accepts `-` or `:` separated pairs as well as bare hex digits
    PhysicalAddressParse,

    PhysicalAddressToBytes,
    PhysicalAddressFromBytes,
}

impl FuncNet {
    pub(crate) fn eval(&self, value: Value) -> Result<Value> {
        Ok(match self {
            FuncNet::IpToString => Value::String(IpAddr::try_from(value)?.to_string()),
            FuncNet::IpParse => Value::IpAddr(String::try_from(value)?.trim().parse()?),
            FuncNet::IpToBytes => Value::Bytes(match IpAddr::try_from(value)? {
                IpAddr::V4(addr) => addr.octets().to_vec(),
                IpAddr::V6(addr) => addr.octets().to_vec(),
            }),
            FuncNet::IpFromBytes => {
                let bytes = Vec::<u8>::try_from(value)?;

                Value::IpAddr(if let Ok(octets) = <[u8; 4]>::try_from(bytes.as_slice()) {
                    IpAddr::V4(Ipv4Addr::from(octets))
                } else if let Ok(octets) = <[u8; 16]>::try_from(bytes.as_slice()) {
                    IpAddr::V6(Ipv6Addr::from(octets))
                } else {
                    return Err(Error::conversion_failed(format!(
                        "expected 4 or 16 bytes for an IP address; got {}",
                        bytes.len()
                    )));
                })
            }
            FuncNet::PhysicalAddressToString => {
                Value::String(PhysicalAddress::try_from(value)?.to_string())
            }
            FuncNet::PhysicalAddressParse => {
                Value::PhysicalAddress(String::try_from(value)?.trim().parse()?)
            }
            FuncNet::PhysicalAddressToBytes => {
                Value::Bytes(PhysicalAddress::try_from(value)?.into_bytes())
            }
            FuncNet::PhysicalAddressFromBytes => {
                Value::PhysicalAddress(PhysicalAddress::new(Vec::try_from(value)?))
            }
        })
    }
}
