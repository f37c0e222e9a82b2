// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `NodeId`.

use std::{fmt, str::FromStr};

use crate::{byte_string::ByteString, guid::Guid, string::UAString};

/// The kind of identifier, numeric, string, guid or byte
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub enum Identifier {
    /// Numeric node ID identifier. i=123
    Numeric(u32),
    /// String node ID identifier, s=...
    String(UAString),
    /// GUID node ID identifier, g=...
    Guid(Guid),
    /// Opaque node ID identifier, o=...
    ByteString(ByteString),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={}", *v),
            Identifier::String(v) => write!(f, "s={}", v),
            Identifier::Guid(v) => write!(f, "g={:?}", v),
            Identifier::ByteString(v) => write!(f, "b={}", v.as_base64()),
        }
    }
}

impl From<u32> for Identifier {
    fn from(v: u32) -> Self {
        Identifier::Numeric(v)
    }
}

impl<'a> From<&'a str> for Identifier {
    fn from(v: &'a str) -> Self {
        Identifier::from(UAString::from(v))
    }
}

impl From<String> for Identifier {
    fn from(v: String) -> Self {
        Identifier::from(UAString::from(v))
    }
}

impl From<UAString> for Identifier {
    fn from(v: UAString) -> Self {
        Identifier::String(v)
    }
}

impl From<Guid> for Identifier {
    fn from(v: Guid) -> Self {
        Identifier::Guid(v)
    }
}

impl From<ByteString> for Identifier {
    fn from(v: ByteString) -> Self {
        Identifier::ByteString(v)
    }
}

/// An identifier for a node in the address space of an OPC UA Server.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct NodeId {
    /// The index for a namespace
    pub namespace: u16,
    /// The identifier for the node in the address space
    pub identifier: Identifier,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        } else {
            write!(f, "{}", self.identifier)
        }
    }
}

impl FromStr for NodeId {
    type Err = ();

    /// Accepts `i=123`, `ns=2;i=123`, `s=foo`, `ns=2;s=foo`, and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("ns=") {
            let (ns, rest) = rest.split_once(';').ok_or(())?;
            let namespace: u16 = ns.parse().map_err(|_| ())?;
            let identifier = parse_identifier(rest)?;
            Ok(NodeId {
                namespace,
                identifier,
            })
        } else {
            Ok(NodeId {
                namespace: 0,
                identifier: parse_identifier(s)?,
            })
        }
    }
}

fn parse_identifier(s: &str) -> Result<Identifier, ()> {
    if s.len() < 2 {
        return Err(());
    }
    let (k, v) = s.split_at(2);
    match k {
        "i=" => v.parse::<u32>().map(Identifier::Numeric).map_err(|_| ()),
        "s=" => Ok(Identifier::String(UAString::from(v))),
        "g=" => Guid::from_str(v).map(Identifier::Guid).map_err(|_| ()),
        "b=" => ByteString::from_base64(v)
            .map(Identifier::ByteString)
            .ok_or(()),
        _ => Err(()),
    }
}

impl NodeId {
    /// Constructs a new NodeId from anything that can be turned into an Identifier:
    /// u32, Guid, ByteString or String.
    pub fn new<T>(namespace: u16, value: T) -> NodeId
    where
        T: Into<Identifier>,
    {
        NodeId {
            namespace,
            identifier: value.into(),
        }
    }

    /// Test if the node id is null, i.e. 0 namespace and 0 identifier
    pub fn is_null(&self) -> bool {
        self.namespace == 0 && self.identifier == Identifier::Numeric(0)
    }

    /// Returns a null node id
    pub fn null() -> NodeId {
        NodeId::new(0, 0u32)
    }

    /// Test if the node id is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self.identifier, Identifier::Numeric(_))
    }

    /// Get the numeric value of this node ID if it is numeric.
    pub fn as_u32(&self) -> Option<u32> {
        match &self.identifier {
            Identifier::Numeric(i) => Some(*i),
            _ => None,
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::null()
    }
}
