use std::{fmt, str::FromStr};

/// A hardware address such as an Ethernet MAC address.
///
/// Displayed as uppercase hex digits with no separators (`00155D010203`).
/// Parsing also accepts `-` or `:` between octets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicalAddress(Vec<u8>);

impl PhysicalAddress {
    pub fn new(bytes: impl Into<Vec<u8>>) -> PhysicalAddress {
        PhysicalAddress(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl FromStr for PhysicalAddress {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = if s.contains('-') || s.contains(':') {
            let separator = if s.contains('-') { '-' } else { ':' };
            let mut digits = String::with_capacity(s.len());
            for group in s.split(separator) {
                if group.len() != 2 {
                    return Err(crate::Error::conversion_failed(format!(
                        "invalid physical address '{s}'"
                    )));
                }
                digits.push_str(group);
            }
            digits
        } else {
            s.to_string()
        };

        if digits.len() % 2 != 0 || !digits.is_ascii() {
            return Err(crate::Error::conversion_failed(format!(
                "invalid physical address '{s}'"
            )));
        }

        let bytes = (0..digits.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| {
                    crate::Error::conversion_failed(format!("invalid physical address '{s}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PhysicalAddress(bytes))
    }
}
