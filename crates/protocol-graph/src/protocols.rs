//! Builtin specifications for well-known protocol headers.
//!
//! Names are matched case-sensitively. An exact match always wins; otherwise a
//! name that is the prefix of exactly one protocol selects it, and a prefix
//! shared by several protocols is reported as ambiguous.

use log::debug;

use crate::{
    config::{ConfigOverrides, parse_options, split_options},
    diagram::ProtocolDiagram,
    errors::{DiagramError, LookupError},
    spec::{WIDTH_SEPARATOR, WidthLookup, parse_with_lookup},
};

/// `(name, spec)` pairs, sorted by name.
static PROTOCOLS: &[(&str, &str)] = &[
    (
        "802.1q",
        "Destination Address:48,Source Address:48,TPID:16,PCP:3,DEI:1,VLAN ID:12,EtherType:16",
    ),
    (
        "arp",
        "Hardware Type:16,Protocol Type:16,HLEN:8,PLEN:8,Operation:16,\
         Sender Hardware Address:48,Sender Protocol Address:32,\
         Target Hardware Address:48,Target Protocol Address:32",
    ),
    (
        "dns",
        "ID:16,QR:1,Opcode:4,AA:1,TC:1,RD:1,RA:1,Z:3,RCODE:4,\
         QDCOUNT:16,ANCOUNT:16,NSCOUNT:16,ARCOUNT:16",
    ),
    (
        "ethernet",
        "Destination Address:48,Source Address:48,EtherType:16",
    ),
    (
        "gre",
        "C:1,Reserved0:12,Version:3,Protocol Type:16,Checksum:16,Reserved1:16",
    ),
    ("icmp", "Type:8,Code:8,Checksum:16,Rest of Header:32"),
    ("icmpv6", "Type:8,Code:8,Checksum:16,Message Body:32"),
    ("igmp", "Type:8,Max Resp Time:8,Checksum:16,Group Address:32"),
    (
        "ip",
        "Version:4,IHL:4,DSCP:6,ECN:2,Total Length:16,Identification:16,Flags:3,\
         Fragment Offset:13,Time to Live:8,Protocol:8,Header Checksum:16,\
         Source Address:32,Destination Address:32,Options:24,Padding:8",
    ),
    (
        "ipv4",
        "Version:4,IHL:4,DSCP:6,ECN:2,Total Length:16,Identification:16,Flags:3,\
         Fragment Offset:13,Time to Live:8,Protocol:8,Header Checksum:16,\
         Source Address:32,Destination Address:32,Options:24,Padding:8",
    ),
    (
        "ipv6",
        "Version:4,Traffic Class:8,Flow Label:20,Payload Length:16,Next Header:8,\
         Hop Limit:8,Source Address:128,Destination Address:128",
    ),
    (
        "rtp",
        "V:2,P:1,X:1,CC:4,M:1,PT:7,Sequence Number:16,Timestamp:32,SSRC:32",
    ),
    (
        "sctp",
        "Source Port:16,Destination Port:16,Verification Tag:32,Checksum:32",
    ),
    (
        "tcp",
        "Source Port:16,Destination Port:16,Sequence Number:32,Acknowledgment Number:32,\
         Offset:4,Res.:4,Flags:8,Window:16,Checksum:16,Urgent Pointer:16,Options:24,Padding:8",
    ),
    (
        "udp",
        "Source Port:16,Destination Port:16,Length:16,Checksum:16",
    ),
    ("vxlan", "Flags:8,Reserved:24,VNI:24,Reserved:8"),
];

/// Names of every builtin protocol, sorted.
pub fn names() -> impl Iterator<Item = &'static str> {
    PROTOCOLS.iter().map(|(name, _)| *name)
}

/// Resolves `name` (or an unambiguous prefix of it) to its spec string.
pub fn lookup(name: &str) -> Result<&'static str, LookupError> {
    if let Some((_, spec)) = PROTOCOLS.iter().find(|(n, _)| *n == name) {
        return Ok(*spec);
    }

    let candidates: Vec<&(&str, &str)> = PROTOCOLS
        .iter()
        .filter(|(n, _)| n.starts_with(name))
        .collect();

    match candidates.as_slice() {
        [] => Err(LookupError::Unknown {
            name: name.to_string(),
        }),
        [(full, spec)] => {
            debug!("protocol '{}' resolved by prefix to '{}'", name, full);
            Ok(*spec)
        }
        _ => Err(LookupError::Ambiguous {
            name: name.to_string(),
            candidates: candidates.iter().map(|(n, _)| n.to_string()).collect(),
        }),
    }
}

/// [WidthLookup] that resolves a bare field name to the total header width
/// of the builtin protocol it names, e.g. `"ipv4"` to 192 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtins;

impl WidthLookup for Builtins {
    fn width_of(&self, name: &str) -> Option<usize> {
        let spec = lookup(name).ok()?;
        crate::spec::parse(spec).ok().map(|s| s.total_bits())
    }
}

/// Builds a diagram from user input: either a spec containing `:` or the
/// name of a builtin protocol, optionally followed by a `?key=value,...`
/// suffix.
///
/// `base` is applied first and the suffix options last, so options written
/// next to a spec win over caller-wide settings.
pub fn resolve(input: &str, base: &ConfigOverrides) -> Result<ProtocolDiagram, DiagramError> {
    let (fields, options) = split_options(input.trim());

    let spec_str = if fields.contains(WIDTH_SEPARATOR) {
        fields
    } else {
        lookup(fields.trim())?
    };

    let mut diagram = ProtocolDiagram::with_defaults(parse_with_lookup(spec_str, &Builtins)?);
    diagram.apply(base);
    if let Some(options) = options {
        diagram.apply(&parse_options(options)?);
    }

    Ok(diagram)
}
