//! Health documents table (`#tbl-doumentos-saude`)

/// Issue date field and the validity field computed from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityPair {
    pub issue: &'static str,
    pub validity: &'static str,
}

pub const VALIDITY_PAIRS: [ValidityPair; 2] = [
    ValidityPair {
        issue: "emissaoTestePcr",
        validity: "validadeTestePcr",
    },
    ValidityPair {
        issue: "emissaoProtocoloCovid",
        validity: "validadeProtocoloCovid",
    },
];
